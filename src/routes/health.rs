//! Health check endpoints.

use axum::{response::IntoResponse, Json};
use serde_json::json;

/// GET /api/health/ping — liveness check
pub async fn ping() -> impl IntoResponse {
    Json(json!({ "message": "pong" }))
}

/// GET /api/health/version — API version
pub async fn version() -> impl IntoResponse {
    Json(json!({ "version": env!("CARGO_PKG_VERSION") }))
}
