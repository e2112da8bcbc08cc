//! newsd entry point
//!
//! Parses CLI arguments, dispatches to a command, prints errors to stderr
//! and exits non-zero on failure. All logic is delegated to the CLI module.

use newsd::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
