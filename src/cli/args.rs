//! CLI argument definitions using clap
//!
//! Commands:
//! - newsd serve [--config <path>] [--port <n>] [--database-url <url>]
//! - newsd check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// newsd - news content delivery backend
#[derive(Parser, Debug)]
#[command(name = "newsd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override http.port
        #[arg(long)]
        port: Option<u16>,

        /// Override database.url
        #[arg(long)]
        database_url: Option<String>,
    },

    /// Load and validate configuration, then print it
    CheckConfig {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
