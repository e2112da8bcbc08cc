use crate::model::Category;
use crate::session::{Db, DbConnection};

/// Categories in insertion order, windowed by `skip`/`limit`
pub async fn list_categories(
    conn: &mut DbConnection,
    skip: i64,
    limit: i64,
) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<Db, Category>(
        "SELECT id, name, sort_order, created_at, updated_at
         FROM news_category
         ORDER BY id
         LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(&mut *conn)
    .await
}
