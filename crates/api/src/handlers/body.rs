//! Handlers for the body binding demo: echo the raw body, or bind the cached
//! body as JSON.

use axum::Json;
use bindkit_core::models::user::User;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::CachedBody;

#[derive(Debug, Serialize)]
pub struct RawBodyResponse {
    pub raw_body: String,
}

#[derive(Debug, Serialize)]
pub struct BoundUserResponse {
    pub name: String,
    pub email: String,
}

/// POST /raw-body
///
/// Return the request body verbatim as a string.
pub async fn raw_body(body: Result<CachedBody, AppError>) -> AppResult<Json<RawBodyResponse>> {
    let body = body.map_err(|e| {
        tracing::warn!(error = %e, "Failed to read request body");
        AppError::BadRequest("Failed to read body".into())
    })?;

    Ok(Json(RawBodyResponse {
        raw_body: body.as_text().into_owned(),
    }))
}

/// POST /bind-body
///
/// Read the body once, then bind it as JSON into a [`User`].
pub async fn bind_body(body: Result<CachedBody, AppError>) -> AppResult<Json<BoundUserResponse>> {
    let user: User = body
        .and_then(|body| body.bind_json().map_err(AppError::from))
        .map_err(|e| {
            tracing::warn!(error = %e, "Failed to bind JSON body");
            AppError::BadRequest("Failed to bind JSON".into())
        })?;

    tracing::debug!(name = %user.name, email = %user.email, "Bound user from body");

    Ok(Json(BoundUserResponse {
        name: user.name,
        email: user.email,
    }))
}
