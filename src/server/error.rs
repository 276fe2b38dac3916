use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::error;

use crate::error::ManifestError;

/// Message returned to clients when version information is unavailable
pub const VERSION_ERROR_MESSAGE: &str = "Failed to get version information";

/// Errors surfaced by request handlers
///
/// Details are logged; clients only receive a generic message.
#[derive(Debug)]
pub enum AppError {
    Manifest(ManifestError),
}

impl From<ManifestError> for AppError {
    fn from(e: ManifestError) -> Self {
        AppError::Manifest(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Manifest(e) => {
                error!("Error in /api/version: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, VERSION_ERROR_MESSAGE)
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
