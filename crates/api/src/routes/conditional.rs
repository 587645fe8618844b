use axum::routing::get;
use axum::Router;

use crate::config::{CorsPolicy, ServerDefaults};
use crate::handlers::conditional;
use crate::state::AppState;

/// ```text
/// GET /testing  -> bind_by_content_type
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/testing", get(conditional::bind_by_content_type))
}

pub fn defaults() -> ServerDefaults {
    ServerDefaults {
        service: "conditional-binding",
        port: 8085,
        cors: CorsPolicy::Disabled,
    }
}
