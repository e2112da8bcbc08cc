//! Store access: the process-wide pool and per-request sessions
//!
//! The pool is built once in the composition root from [`DatabaseConfig`]
//! and closed at shutdown. Each request acquires its own [`Session`], a
//! transaction that is committed explicitly or rolled back when dropped.
//!
//! [`DatabaseConfig`]: crate::config::DatabaseConfig

mod pool;
mod scoped;

pub use pool::{connect, Db, DbConnection, DbPool};
pub use scoped::Session;
