//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Both the JSON API and the page routes answer failures with the same
//! `{"error": ...}` body shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// User not found (404)
    NotFound,

    /// Database error (500, logged); `message` is the client-facing text
    Database {
        message: &'static str,
        source: DbError,
    },
}

impl ApiError {
    /// Map a repository error, using `message` as the client-facing 500 body.
    ///
    /// `DbError::NotFound` keeps its 404 identity; everything else becomes
    /// an opaque 500 carrying the per-operation message.
    pub fn from_db(err: DbError, message: &'static str) -> Self {
        match err {
            DbError::NotFound => Self::NotFound,
            other => Self::Database {
                message,
                source: other,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "User not found" }),
            ),
            Self::Database { message, source } => {
                // Log the actual error, return the per-operation message
                tracing::error!("Database error: {}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": message }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
