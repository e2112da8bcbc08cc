//! # Response Envelope
//!
//! Every response body, success or failure, has the shape
//! `{"code": ..., "message": ..., "data": ...}`.

use axum::http::StatusCode;
use serde::Serialize;

/// Response envelope
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    pub code: u16,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// Successful response with code 200
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            message: message.into(),
            data,
        }
    }
}

impl Envelope<()> {
    /// Failure response; `data` is null
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            data: (),
        }
    }
}
