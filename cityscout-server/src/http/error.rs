//! API error types with IntoResponse
//!
//! Every failure becomes a JSON response. Server-side failures are logged in
//! full and answered with a generic 500 body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cityscout_core::NormalizeError;
use serde_json::json;

use crate::db::DbError;
use crate::upstream::UpstreamError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing or unparseable query parameters (400)
    BadRequest { message: String },

    /// Cache read or place insert failed (500, logged)
    Database(DbError),

    /// Provider call failed or returned an error status (500, logged)
    Upstream(UpstreamError),

    /// Provider payload could not be mapped (500, logged)
    Normalize(NormalizeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "bad_request",
                    "message": message
                }),
            ),
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                internal_error()
            }
            Self::Upstream(e) => {
                tracing::error!("Upstream error: {}", e);
                internal_error()
            }
            Self::Normalize(e) => {
                tracing::error!("Malformed upstream response: {}", e);
                internal_error()
            }
        };

        (status, Json(body)).into_response()
    }
}

fn internal_error() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "error": "internal_error",
            "message": "an internal error occurred"
        }),
    )
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

impl From<UpstreamError> for ApiError {
    fn from(e: UpstreamError) -> Self {
        Self::Upstream(e)
    }
}

impl From<NormalizeError> for ApiError {
    fn from(e: NormalizeError) -> Self {
        Self::Normalize(e)
    }
}
