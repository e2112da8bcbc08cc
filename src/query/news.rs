use crate::model::{News, RelatedNews};
use crate::session::{Db, DbConnection};

/// Maximum number of recommendations returned by [`list_related_news`]
pub const RELATED_NEWS_LIMIT: i64 = 5;

/// News of one category, newest first, windowed by `skip`/`limit`
///
/// `id` breaks ties between equal publish times so pages never overlap.
pub async fn list_news_by_category(
    conn: &mut DbConnection,
    category_id: i64,
    skip: i64,
    limit: i64,
) -> Result<Vec<News>, sqlx::Error> {
    sqlx::query_as::<Db, News>(
        "SELECT id, title, description, content, image, author, category_id, views,
                publish_time, created_at, updated_at
         FROM news
         WHERE category_id = ?
         ORDER BY publish_time DESC, id DESC
         LIMIT ? OFFSET ?",
    )
    .bind(category_id)
    .bind(limit)
    .bind(skip)
    .fetch_all(&mut *conn)
    .await
}

/// Number of news in one category
///
/// Anything other than exactly one aggregate row counts as zero.
pub async fn count_news_by_category(
    conn: &mut DbConnection,
    category_id: i64,
) -> Result<i64, sqlx::Error> {
    let rows = sqlx::query_scalar::<Db, i64>("SELECT COUNT(*) FROM news WHERE category_id = ?")
        .bind(category_id)
        .fetch_all(&mut *conn)
        .await?;

    Ok(match rows.as_slice() {
        [count] => *count,
        _ => 0,
    })
}

/// One news by id; `None` when it does not exist
pub async fn get_news_detail(
    conn: &mut DbConnection,
    news_id: i64,
) -> Result<Option<News>, sqlx::Error> {
    sqlx::query_as::<Db, News>(
        "SELECT id, title, description, content, image, author, category_id, views,
                publish_time, created_at, updated_at
         FROM news
         WHERE id = ?",
    )
    .bind(news_id)
    .fetch_optional(&mut *conn)
    .await
}

/// Add one view to a news
///
/// The store does the read-modify-write in a single statement, so
/// concurrent increments are never lost. Returns whether exactly one row
/// changed.
pub async fn increment_news_views(
    conn: &mut DbConnection,
    news_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query::<Db>("UPDATE news SET views = views + 1 WHERE id = ?")
        .bind(news_id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() == 1)
}

/// Up to [`RELATED_NEWS_LIMIT`] other news of the same category
///
/// Ranked by views, then publish time, both descending.
pub async fn list_related_news(
    conn: &mut DbConnection,
    category_id: i64,
    exclude_news_id: i64,
) -> Result<Vec<RelatedNews>, sqlx::Error> {
    sqlx::query_as::<Db, RelatedNews>(
        "SELECT id, title, image, views, publish_time
         FROM news
         WHERE category_id = ? AND id <> ?
         ORDER BY views DESC, publish_time DESC, id DESC
         LIMIT ?",
    )
    .bind(category_id)
    .bind(exclude_news_id)
    .bind(RELATED_NEWS_LIMIT)
    .fetch_all(&mut *conn)
    .await
}
