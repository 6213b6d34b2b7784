//! # Web API Error Types
//!
//! HTTP mappings for the one failure path the endpoint has: the queue
//! backend boundary. Classification itself cannot fail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::source::SourceError;

/// Web API specific errors with HTTP status code mappings.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("queue backend unreachable: {message}")]
    SourceUnavailable { message: String },

    #[error("queue backend returned a malformed snapshot: {message}")]
    MalformedSnapshot { message: String },
}

impl From<SourceError> for ApiError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Unavailable(message) => Self::SourceUnavailable { message },
            SourceError::Malformed(message) => Self::MalformedSnapshot { message },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_code, message) = match &self {
            ApiError::SourceUnavailable { message } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SOURCE_UNAVAILABLE",
                message.as_str(),
            ),
            ApiError::MalformedSnapshot { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MALFORMED_SNAPSHOT",
                message.as_str(),
            ),
        };

        let body = Json(json!({
            "error": error_code,
            "message": message,
        }));

        (status_code, body).into_response()
    }
}
