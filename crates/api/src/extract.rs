//! Binding extractors.
//!
//! Each extractor reads the request sources a binding needs, hands them to
//! `bindkit_core::binding`, and rejects with [`AppError`] so failures render
//! as the standard JSON error envelope.

use std::borrow::Cow;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Multipart, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::Uri;
use axum::Form;
use bindkit_core::binding::{bind_form, bind_json, Binding, DeclaredFields};
use bindkit_core::error::BindError;
use bindkit_core::form::FormValues;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// Decoded query string of `uri`.
pub fn query_values(uri: &Uri) -> Result<FormValues, BindError> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map_err(|rejection| BindError::Decode(rejection.body_text()))?;
    Ok(FormValues::from_pairs(pairs))
}

/// Binds `T` from whichever source the request carries.
///
/// `GET` requests bind the query string. Other methods pick by media type:
/// JSON bodies, URL-encoded bodies (merged with the query), multipart text
/// fields (merged with the query), otherwise the query string alone.
///
/// ```ignore
/// async fn create(Bind(form): Bind<ColorForm>) -> Json<Selected> { ... }
/// ```
#[derive(Debug, Clone)]
pub struct Bind<T>(pub T);

impl<T, S> FromRequest<S> for Bind<T>
where
    T: DeserializeOwned + Validate + DeclaredFields,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let binding = Binding::select(req.method().as_str(), content_type.as_deref());
        let query = query_values(req.uri())?;

        tracing::debug!(?binding, content_type = ?content_type, "Binding request");

        let value = match binding {
            Binding::Query => bind_form(&query)?,
            Binding::Json => {
                let body = Bytes::from_request(req, state)
                    .await
                    .map_err(|rejection| BindError::Read(rejection.body_text()))?;
                bind_json(&body)?
            }
            Binding::Form => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|rejection| BindError::Decode(rejection.body_text()))?;
                let mut form = FormValues::from_pairs(pairs);
                form.extend(query);
                bind_form(&form)?
            }
            Binding::Multipart => {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|rejection| BindError::Decode(rejection.body_text()))?;
                let mut form = multipart_text_fields(multipart).await?;
                form.extend(query);
                bind_form(&form)?
            }
        };

        Ok(Bind(value))
    }
}

/// Collect the text fields of a multipart body. File parts are skipped.
async fn multipart_text_fields(mut multipart: Multipart) -> Result<FormValues, BindError> {
    let mut form = FormValues::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| BindError::Decode(e.body_text()))?
    {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let text = field
            .text()
            .await
            .map_err(|e| BindError::Decode(e.body_text()))?;
        form.push(name, text);
    }

    Ok(form)
}

/// Binds `T` from the URL query string only, whatever the method.
#[derive(Debug, Clone)]
pub struct BindQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for BindQuery<T>
where
    T: DeserializeOwned + Validate + DeclaredFields,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = query_values(&parts.uri)?;
        Ok(BindQuery(bind_form(&query)?))
    }
}

/// A request body read once and kept in memory.
///
/// The same bytes can be bound into several different types, or echoed back
/// verbatim, without re-reading the request stream.
#[derive(Debug, Clone)]
pub struct CachedBody {
    bytes: Bytes,
}

impl CachedBody {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Body as text; invalid UTF-8 sequences are replaced.
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Decode the cached body as JSON into `T` and validate it.
    pub fn bind_json<T>(&self) -> Result<T, BindError>
    where
        T: DeserializeOwned + Validate + DeclaredFields,
    {
        bind_json(&self.bytes)
    }
}

impl<S> FromRequest<S> for CachedBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| BindError::Read(rejection.body_text()))?;
        Ok(CachedBody::new(bytes))
    }
}
