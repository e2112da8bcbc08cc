//! Entities served by newsd
//!
//! Two tables back the API:
//! - `news_category`: [`Category`]
//! - `news`: [`News`], plus the reduced [`RelatedNews`] projection
//!
//! Rows are created out-of-band. The only mutation this crate performs is
//! the view counter increment.

mod category;
mod news;
pub mod schema;

pub use category::Category;
pub use news::{News, NewsDetail, NewsPage, RelatedNews};
