//! Store operations behind the news API
//!
//! Each operation is one parameterized statement run on the connection of
//! the caller's [`Session`](crate::session::Session):
//!
//! | Operation                  | Statement                               |
//! |----------------------------|-----------------------------------------|
//! | [`list_categories`]        | windowed `SELECT` ordered by `id`       |
//! | [`list_news_by_category`]  | windowed `SELECT` newest first          |
//! | [`count_news_by_category`] | `SELECT COUNT(*)`                       |
//! | [`get_news_detail`]        | `SELECT` by primary key                 |
//! | [`increment_news_views`]   | `UPDATE ... SET views = views + 1`      |
//! | [`list_related_news`]      | top 5 by views, then recency            |

mod categories;
mod news;
mod pagination;

pub use categories::list_categories;
pub use news::{
    count_news_by_category, get_news_detail, increment_news_views, list_news_by_category,
    list_related_news, RELATED_NEWS_LIMIT,
};
pub use pagination::{Page, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
