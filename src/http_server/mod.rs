//! # newsd HTTP Server Module
//!
//! Axum server exposing the news API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/news/categories` - Category listing
//! - `/api/news/list` - Paginated news of a category
//! - `/api/news/detail` - News detail, counts a view
//! - `/api/news/related` - Recommendations for a news

pub mod errors;
pub mod extract;
pub mod news_routes;
pub mod observability_routes;
pub mod params;
pub mod response;
pub mod server;
pub mod state;

pub use errors::{ApiError, ApiResult};
pub use response::Envelope;
pub use server::{build_router, shutdown_signal, HttpServer, NEWS_API_PREFIX};
pub use state::AppState;
