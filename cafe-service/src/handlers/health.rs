use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "cafe-service",
        "version": env!("CARGO_PKG_VERSION"),
        "cities": state.directory.city_count()
    }))
}

/// Readiness probe. The directory is loaded before the listener binds, so
/// answering at all means the service is ready.
pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}
