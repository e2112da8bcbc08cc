//! # API Errors
//!
//! Failures surfaced by the news endpoints, each mapped to an HTTP status
//! and rendered in the response envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use super::response::Envelope;
use crate::observability::Event;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Missing, malformed or out-of-range query parameter
    #[error("{0}")]
    InvalidParam(String),

    /// Requested record does not exist
    #[error("{0}")]
    NotFound(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store state contradicts what this request just observed
    #[error("{0}")]
    Integrity(String),

    /// Store-level failure: connection, timeout, constraint
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidParam(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Integrity(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client
    ///
    /// Store errors are logged in full but never echoed back.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Store(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(ref e) = self {
            error!(event = %Event::StoreFault, error = %e, "store operation failed");
        }

        let status = self.status_code();
        let body = Envelope::error(status, self.public_message());
        (status, Json(body)).into_response()
    }
}
