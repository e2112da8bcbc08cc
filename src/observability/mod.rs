//! Observability for newsd
//!
//! - Typed event names ([`Event`]) attached to every lifecycle log line
//! - A single `tracing` subscriber installed at startup ([`init_logging`])
//!
//! Request spans come from `tower_http::trace::TraceLayer` in the HTTP
//! server.
//!
//! # Usage
//!
//! ```ignore
//! use newsd::observability::Event;
//!
//! tracing::info!(event = %Event::Serving, addr = %addr, "listening");
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{init_logging, LogFormat, LoggingConfig};
