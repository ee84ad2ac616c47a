//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tailor::TailorError;

/// Message returned for any failure inside generation. Internal detail is
/// logged, never sent to the client.
pub const GENERATION_FAILED: &str = "Failed to generate resume. Please try again.";

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from client.
    BadRequest(String),
    /// Internal server error.
    Internal(String),
    /// Error from the tailor library.
    Tailor(TailorError),
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg),
            ApiError::Tailor(e) if e.is_client_error() => {
                (StatusCode::BAD_REQUEST, "bad_request", e.to_string())
            }
            ApiError::Tailor(e) => {
                tracing::error!("Unexpected library error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    GENERATION_FAILED.to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<TailorError> for ApiError {
    fn from(err: TailorError) -> Self {
        ApiError::Tailor(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::Tailor(e) => write!(f, "Tailor error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
