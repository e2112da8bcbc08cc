//! CLI command implementations
//!
//! `serve` follows a fixed boot sequence:
//! 1. Load and validate configuration
//! 2. Install the log subscriber
//! 3. Open the store pool (optionally bootstrap the schema)
//! 4. Serve until a shutdown signal
//! 5. Close the pool

use std::path::Path;

use tracing::info;

use crate::config::NewsdConfig;
use crate::http_server::{shutdown_signal, HttpServer};
use crate::model::schema;
use crate::observability::{init_logging, Event};
use crate::session;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub async fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command).await
}

/// Run the appropriate command based on CLI args
pub async fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            port,
            database_url,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(port) = port {
                config.http.port = port;
            }
            if let Some(url) = database_url {
                config.database.url = url;
            }
            config.validate()?;
            serve(config).await
        }
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Load configuration from `path`, or defaults when no path is given
pub fn load_config(path: Option<&Path>) -> CliResult<NewsdConfig> {
    match path {
        Some(path) => Ok(NewsdConfig::load(path)?),
        None => Ok(NewsdConfig::default()),
    }
}

/// Print the effective configuration
pub fn check_config(path: Option<&Path>) -> CliResult<()> {
    let config = load_config(path)?;
    config.validate()?;
    write_json(&config)
}

/// Boot the store and serve the API until shutdown
pub async fn serve(config: NewsdConfig) -> CliResult<()> {
    init_logging(&config.logging).map_err(CliError::logging_error)?;
    info!(event = %Event::BootStart, version = env!("CARGO_PKG_VERSION"));
    info!(
        event = %Event::ConfigLoaded,
        addr = %config.http.socket_addr(),
        pool_size = config.database.pool_size,
        max_overflow = config.database.max_overflow
    );

    let pool = session::connect(&config.database).await?;

    if config.database.create_schema {
        schema::create_schema(&pool).await?;
        info!(event = %Event::SchemaCreated);
    }

    let server = HttpServer::new(config.http.clone(), pool.clone());
    let served = server.start(shutdown_signal()).await;

    pool.close().await;
    info!(event = %Event::ShutdownComplete);

    served.map_err(CliError::from)
}
