//! Connection pool construction
//!
//! The backend is fixed at compile time: SQLite by default, MySQL with the
//! `mysql` feature. Queries are written in the dialect both accept.

use std::str::FromStr;
use std::time::Duration;

use sqlx::pool::PoolOptions;
use sqlx::{ConnectOptions, Connection, Database};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::observability::Event;

#[cfg(feature = "mysql")]
pub type Db = sqlx::MySql;

#[cfg(not(feature = "mysql"))]
pub type Db = sqlx::Sqlite;

/// Process-wide pool of store connections
pub type DbPool = sqlx::Pool<Db>;

/// A single connection, as borrowed from a [`Session`](super::Session)
pub type DbConnection = <Db as Database>::Connection;

type DbConnectOptions = <DbConnection as Connection>::Options;

/// Open the pool described by `config`
///
/// - `pool_size` connections are kept open
/// - up to `max_overflow` more are opened under load
/// - acquisition waits at most `pool_timeout_secs`
/// - connections older than `pool_recycle_secs` are closed and replaced
pub async fn connect(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let mut options = DbConnectOptions::from_str(&config.url)?;
    if !config.echo {
        options = options.disable_statement_logging();
    }

    let pool = PoolOptions::<Db>::new()
        .min_connections(config.pool_size)
        .max_connections(config.max_connections())
        .acquire_timeout(Duration::from_secs(config.pool_timeout_secs))
        .max_lifetime(Duration::from_secs(config.pool_recycle_secs))
        .connect_with(options)
        .await?;

    info!(
        event = %Event::PoolReady,
        min_connections = config.pool_size,
        max_connections = config.max_connections(),
        "connection pool ready"
    );

    Ok(pool)
}
