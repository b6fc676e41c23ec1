use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::dispatch::templates::PROCESSING_ERROR;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed request: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error("Last message has no string content")]
    MissingContent,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MalformedRequest(e) => tracing::error!("Malformed chat request: {e}"),
            AppError::MissingContent => tracing::error!("Malformed chat request: {self}"),
        }

        // Clients only ever see the generic apology; the cause stays in the logs.
        let body = Json(json!({ "error": PROCESSING_ERROR }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
