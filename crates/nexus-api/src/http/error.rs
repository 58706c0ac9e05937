//! Application error type mapping to HTTP status codes and the JSON error shape.

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use nexus_types::error::ChatError;
use nexus_types::llm::LlmError;

/// Error body returned by every failing API call.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub details: String,
}

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The request body was missing, malformed, or semantically invalid.
    Validation(String),
    /// The request body exceeded the configured limit.
    PayloadTooLarge(String),
    /// The inference provider failed.
    Inference(LlmError),
    /// The inference provider did not answer in time.
    Timeout(LlmError),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            err @ ChatError::EmptyMessage => AppError::Validation(err.to_string()),
            ChatError::Inference(err @ LlmError::Timeout { .. }) => AppError::Timeout(err),
            ChatError::Inference(err) => AppError::Inference(err),
        }
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::Validation(rejection.body_text())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "Invalid request", msg),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "Invalid request", msg)
            }
            AppError::Inference(err) => (
                StatusCode::BAD_GATEWAY,
                "Failed to process request",
                err.to_string(),
            ),
            AppError::Timeout(err) => (
                StatusCode::GATEWAY_TIMEOUT,
                "Failed to process request",
                err.to_string(),
            ),
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}
