use axum::routing::post;
use axum::Router;

use crate::config::{CorsPolicy, ServerDefaults};
use crate::handlers::checkbox;
use crate::state::AppState;

/// ```text
/// POST /colors  -> select_colors
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/colors", post(checkbox::select_colors))
}

/// Checkbox binding demo: permissive CORS on port 8080.
pub fn defaults() -> ServerDefaults {
    ServerDefaults {
        service: "checkbox-binding",
        port: 8080,
        cors: CorsPolicy::Permissive,
    }
}
