use axum::routing::post;
use axum::Router;

use crate::config::{CorsPolicy, ServerDefaults};
use crate::handlers::body;
use crate::state::AppState;

/// ```text
/// POST /raw-body   -> raw_body
/// POST /bind-body  -> bind_body
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/raw-body", post(body::raw_body))
        .route("/bind-body", post(body::bind_body))
}

/// Body binding demo: permissive CORS on port 8080.
pub fn defaults() -> ServerDefaults {
    ServerDefaults {
        service: "body-binding",
        port: 8080,
        cors: CorsPolicy::Permissive,
    }
}
