//! CLI module for newsd
//!
//! Provides command-line interface for:
//! - serve: Boot the store pool and serve the HTTP API
//! - check-config: Validate and print the effective configuration

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check_config, load_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
