//! Observability events for newsd
//!
//! Every lifecycle and request-path event has a typed name so log lines
//! can be filtered on the `event` field.

use std::fmt;

/// Observable events in newsd
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Store pool connected
    PoolReady,
    /// Schema bootstrap ran
    SchemaCreated,
    /// HTTP listener bound, ready for requests
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Listener drained and pool closed
    ShutdownComplete,

    // Sessions
    /// Transaction opened for a request
    SessionBegin,
    /// Transaction committed
    SessionCommit,
    /// Transaction rolled back
    SessionRollback,

    // Request path
    /// Detail requested for a missing news id
    NewsNotFound,
    /// View increment touched no row after a successful read
    ViewIncrementFailed,
    /// Store returned an error
    StoreFault,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "NEWSD_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::PoolReady => "POOL_READY",
            Event::SchemaCreated => "SCHEMA_CREATED",
            Event::Serving => "SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::SessionBegin => "SESSION_BEGIN",
            Event::SessionCommit => "SESSION_COMMIT",
            Event::SessionRollback => "SESSION_ROLLBACK",

            Event::NewsNotFound => "NEWS_NOT_FOUND",
            Event::ViewIncrementFailed => "VIEW_INCREMENT_FAILED",
            Event::StoreFault => "STORE_FAULT",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
