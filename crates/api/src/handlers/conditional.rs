//! Handler that binds from the JSON body or the query string depending on
//! the request's content type.

use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use bindkit_core::binding::{media_type, MIME_JSON};
use bindkit_core::models::person::PersonAddress;

use crate::error::{AppError, AppResult};
use crate::extract::{BindQuery, CachedBody};

/// GET /testing
///
/// `Content-Type: application/json` binds the body as JSON; anything else
/// binds the query string. Responds with plain text `Success`.
pub async fn bind_by_content_type(
    headers: HeaderMap,
    query: Result<BindQuery<PersonAddress>, AppError>,
    body: Result<CachedBody, AppError>,
) -> AppResult<&'static str> {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| media_type(ct) == MIME_JSON);

    let person = if is_json {
        let person: PersonAddress = body
            .and_then(|body| body.bind_json().map_err(AppError::from))
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON: {e}")))?;
        tracing::info!(name = %person.name, address = %person.address, "Bound by JSON");
        person
    } else {
        let person: PersonAddress = query
            .map(|BindQuery(person)| person)
            .map_err(|e| AppError::BadRequest(format!("Invalid query string: {e}")))?;
        tracing::info!(name = %person.name, address = %person.address, "Bound by query string");
        person
    };

    tracing::debug!(?person, "Conditional bind complete");

    Ok("Success")
}
