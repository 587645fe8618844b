use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Name of the demo serving the request.
    pub service: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: state.config.service,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount the health check route. Every demo serves it.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
