//! Request handlers

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderValue};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Json, Response};
use serde_json::{Value, json};
use tracing::warn;

use crate::config::VITE_DEV_SERVER_PORT;
use crate::framework::serving::ServingStrategy;
use crate::manifest::{PackageManifest, VersionReport};
use crate::server::AppState;
use crate::server::error::AppError;

/// Body returned when the build output has no root document
pub const BUILD_MISSING_MESSAGE: &str = "Please run \"npm run build\" first";

/// `GET /api/version`
pub async fn version_info(
    State(state): State<Arc<AppState>>,
) -> Result<Json<VersionReport>, AppError> {
    let manifest = PackageManifest::load(state.probe.as_ref(), &state.framework.manifest_path)?;

    Ok(Json(VersionReport::build(
        &manifest,
        state.framework.mode,
        &state.runtime,
        &state.classifier,
    )))
}

/// `GET /api/hello`
pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello World!" }))
}

/// `GET /` when this process does not serve the frontend
pub async fn root_info(State(state): State<Arc<AppState>>) -> Json<Value> {
    let note = match state.framework.strategy {
        ServingStrategy::DelegateToFrameworkRuntime => {
            "Next.js handles frontend and API routes on port 3000".to_string()
        }
        _ => format!(
            "Frontend is served by Vite dev server on http://localhost:{}",
            VITE_DEV_SERVER_PORT
        ),
    };

    Json(json!({
        "message": "API server running",
        "note": note,
        "endpoints": {
            "hello": "/api/hello",
            "version": "/api/version"
        }
    }))
}

/// Fallback for paths not found in the build output
pub async fn spa_index(State(index_document): State<Arc<PathBuf>>) -> Response {
    match tokio::fs::read_to_string(index_document.as_ref()).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            warn!("Failed to read {:?}: {}", index_document, e);
            (StatusCode::INTERNAL_SERVER_ERROR, BUILD_MISSING_MESSAGE).into_response()
        }
    }
}

/// Allow cross-origin requests from any origin and answer preflights
pub async fn cors(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    apply_cors_headers(response.headers_mut());
    response
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Origin, X-Requested-With, Content-Type, Accept"),
    );
}
