// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Error taxonomy for the HTTP surface.
///
/// Every fallible handler returns this. The `IntoResponse` impl maps each
/// variant to its status code and a `{"error": ...}` JSON body, so clients
/// always get a parseable error.
#[derive(Debug)]
pub enum AppError {
    /// Database or other backend failure. The client may retry; the
    /// detail is logged server-side, not leaked in the response.
    Internal(String),

    /// Malformed or missing fields in a request body.
    BadRequest(String),

    /// Missing, expired or forged bearer token.
    Unauthorized(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal(detail) => {
                tracing::error!("internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Lets handlers use `?` on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Lets handlers use `?` on `payload.validate()`.
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
