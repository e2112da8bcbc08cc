//! newsd - A read-mostly news content delivery backend
//!
//! Serves category listings, paginated news listings, news detail with a
//! view counter, and related-news recommendations over JSON/HTTP, backed by
//! a relational store through a bounded connection pool.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod query;
pub mod session;
