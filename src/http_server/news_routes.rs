//! News HTTP Routes
//!
//! Endpoints under `/api/news`. Each handler parses its parameters, runs
//! its statements inside the request's session, commits, and wraps the
//! result in an [`Envelope`]. Any error return drops the session, which
//! rolls it back.


use axum::{routing::get, Json, Router};
use tracing::{error, info};

use super::errors::{ApiError, ApiResult};
use super::extract::Params;
use super::params::{CategoriesParams, DetailParams, ListParams, RelatedParams};
use super::response::Envelope;
use super::state::AppState;
use crate::model::{Category, NewsDetail, NewsPage, RelatedNews};
use crate::observability::Event;
use crate::query;
use crate::session::Session;

/// Create news routes
pub fn news_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories_handler))
        .route("/list", get(list_handler))
        .route("/detail", get(detail_handler))
        .route("/related", get(related_handler))
}

async fn categories_handler(
    Params(params): Params<CategoriesParams>,
    mut session: Session,
) -> ApiResult<Json<Envelope<Vec<Category>>>> {
    let categories = query::list_categories(session.conn(), params.skip, params.limit).await?;
    session.commit().await?;

    Ok(Json(Envelope::success("get categories success", categories)))
}

async fn list_handler(
    Params(params): Params<ListParams>,
    mut session: Session,
) -> ApiResult<Json<Envelope<NewsPage>>> {
    let page = params.page;
    let list = query::list_news_by_category(
        session.conn(),
        params.category_id,
        page.offset(),
        page.page_size,
    )
    .await?;
    let total = query::count_news_by_category(session.conn(), params.category_id).await?;
    session.commit().await?;

    Ok(Json(Envelope::success(
        "get news list success",
        NewsPage {
            list,
            total,
            has_more: page.has_more(total),
        },
    )))
}

async fn detail_handler(
    Params(params): Params<DetailParams>,
    mut session: Session,
) -> ApiResult<Json<Envelope<NewsDetail>>> {
    let news_id = params.news_id;

    // Write first: a read lock held before the UPDATE cannot be upgraded
    // while another session is writing the same table.
    let incremented = query::increment_news_views(session.conn(), news_id).await?;

    let Some(mut news) = query::get_news_detail(session.conn(), news_id).await? else {
        info!(event = %Event::NewsNotFound, news_id);
        return Err(ApiError::NotFound("News not found".to_string()));
    };

    if !incremented {
        error!(event = %Event::ViewIncrementFailed, news_id, session = %session.id());
        return Err(ApiError::Integrity(
            "Failed to increase news views".to_string(),
        ));
    }

    // Report the count as it was before this view.
    news.views = news.views.saturating_sub(1);

    let related = query::list_related_news(session.conn(), news.category_id, news_id).await?;
    session.commit().await?;

    Ok(Json(Envelope::success(
        "get news detail success",
        NewsDetail::new(news, related),
    )))
}

async fn related_handler(
    Params(params): Params<RelatedParams>,
    mut session: Session,
) -> ApiResult<Json<Envelope<Vec<RelatedNews>>>> {
    let related =
        query::list_related_news(session.conn(), params.category_id, params.news_id).await?;
    session.commit().await?;

    Ok(Json(Envelope::success("get related news success", related)))
}
