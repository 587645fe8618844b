use axum::routing::get;
use axum::Router;

use crate::config::{CorsPolicy, ServerDefaults};
use crate::handlers::person;
use crate::state::AppState;

/// ```text
/// GET /api/person  -> get_person
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/api/person", get(person::get_person))
}

pub fn defaults() -> ServerDefaults {
    ServerDefaults {
        service: "query-binding",
        port: 8085,
        cors: CorsPolicy::Disabled,
    }
}
