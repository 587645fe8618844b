use axum::routing::get;
use axum::Router;

use crate::config::{CorsPolicy, ServerDefaults};
use crate::handlers::nested_form;
use crate::state::AppState;

/// ```text
/// GET /getb  -> get_data_b
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/getb", get(nested_form::get_data_b))
}

/// Nested form demo: a page served from port 8000 may call it with credentials.
pub fn defaults() -> ServerDefaults {
    ServerDefaults {
        service: "nested-form-binding",
        port: 8080,
        cors: CorsPolicy::Origins(vec![
            "http://localhost:8000".to_string(),
            "http://127.0.0.1:8000".to_string(),
        ]),
    }
}
