//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::engine::ConvertError;

/// Failure envelope returned for every error, matching what the frontend
/// expects: `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Malformed input: unknown category/unit, bad body, non-finite value.
    BadRequest(String),
    /// Well-formed but physically invalid input (below absolute zero).
    Unprocessable(String),
    /// Unexpected internal failure.
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Internal(msg) => {
                // Internals are logged, never sent to the client.
                tracing::error!(error = %msg, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<ConvertError> for AppError {
    fn from(err: ConvertError) -> Self {
        if err.is_domain() {
            AppError::Unprocessable(err.to_string())
        } else {
            AppError::BadRequest(err.to_string())
        }
    }
}
