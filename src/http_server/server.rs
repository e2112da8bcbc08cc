//! # HTTP Server
//!
//! Composition of the news API: routes, shared pool state, request tracing
//! and CORS, plus the serve loop with graceful shutdown.

use std::io;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::news_routes::news_routes;
use super::observability_routes::health_routes;
use super::state::AppState;
use crate::config::HttpServerConfig;
use crate::observability::Event;
use crate::session::DbPool;

/// Base path of the news endpoints
pub const NEWS_API_PREFIX: &str = "/api/news";

/// HTTP Server for the news API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over an open pool
    pub fn new(config: HttpServerConfig, pool: DbPool) -> Self {
        let router = build_router(AppState::new(pool));
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn start<F>(self, shutdown: F) -> Result<(), io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = self
            .config
            .listen_addr()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        let listener = TcpListener::bind(addr).await?;
        info!(
            event = %Event::Serving,
            addr = %addr,
            "news API available at http://{}{}",
            addr,
            NEWS_API_PREFIX
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}

/// Build the combined router with all endpoints
///
/// CORS is fully permissive: any origin, method and header, with
/// credentials allowed. Origins are mirrored since browsers reject a
/// wildcard together with credentials.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check at root level
        .merge(health_routes())
        // News API
        .nest(NEWS_API_PREFIX, news_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Resolves on Ctrl-C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(event = %Event::ShutdownStart, "shutdown signal received");
}
