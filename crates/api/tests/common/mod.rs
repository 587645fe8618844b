#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use bindkit_api::config::{ServerConfig, ServerDefaults};
use bindkit_api::server;
use bindkit_api::state::AppState;

/// Build a demo app exactly like its binary does, with the demo's defaults
/// and no environment overrides.
pub fn build_test_app(demo: Router<AppState>, defaults: ServerDefaults) -> Router {
    server::build_app(demo, ServerConfig::with_defaults(defaults))
}

/// Same as [`build_test_app`] with a tweaked configuration.
pub fn build_test_app_with(
    demo: Router<AppState>,
    defaults: ServerDefaults,
    tweak: impl FnOnce(&mut ServerConfig),
) -> Router {
    let mut config = ServerConfig::with_defaults(defaults);
    tweak(&mut config);
    server::build_app(demo, config)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn request_with_body(
    app: Router,
    method: Method,
    uri: &str,
    content_type: &str,
    body: impl Into<Body>,
) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, json: &serde_json::Value) -> Response {
    request_with_body(app, Method::POST, uri, "application/json", json.to_string()).await
}

pub async fn post_form(app: Router, uri: &str, form: &str) -> Response {
    request_with_body(
        app,
        Method::POST,
        uri,
        "application/x-www-form-urlencoded",
        form.to_string(),
    )
    .await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
