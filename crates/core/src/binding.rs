//! Binding engine: decode request data onto a typed structure, then run its
//! field rules.
//!
//! Framework independent. The HTTP layer reads the raw sources (body bytes,
//! query pairs, form pairs) and hands them here.

use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::BindError;
use crate::form::FormValues;

pub const MIME_JSON: &str = "application/json";
pub const MIME_FORM: &str = "application/x-www-form-urlencoded";
pub const MIME_MULTIPART: &str = "multipart/form-data";

/// Where a request's data is bound from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// URL query string only.
    Query,
    /// JSON request body.
    Json,
    /// URL-encoded body merged with the URL query.
    Form,
    /// Multipart text fields merged with the URL query.
    Multipart,
}

impl Binding {
    /// Pick the binding for a request from its method and `Content-Type`.
    ///
    /// `GET` always binds the query string. Otherwise the media type decides;
    /// unknown or missing media types fall back to the query string.
    pub fn select(method: &str, content_type: Option<&str>) -> Self {
        if method.eq_ignore_ascii_case("GET") {
            return Binding::Query;
        }

        match content_type.map(media_type).as_deref() {
            Some(MIME_JSON) => Binding::Json,
            Some(MIME_FORM) => Binding::Form,
            Some(MIME_MULTIPART) => Binding::Multipart,
            _ => Binding::Query,
        }
    }
}

/// Lower-cased media type of a `Content-Type` value, parameters removed.
///
/// `"Application/JSON; charset=utf-8"` -> `"application/json"`.
pub fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Field names of a bound type, in declaration order.
///
/// Validation failures are reported in this order. Fields missing from the
/// list come last, ordered by name.
pub trait DeclaredFields {
    const FIELDS: &'static [&'static str];
}

/// Decode a JSON body into `T` and validate it.
pub fn bind_json<T>(body: &[u8]) -> Result<T, BindError>
where
    T: DeserializeOwned + Validate + DeclaredFields,
{
    let value: T = serde_json::from_slice(body).map_err(|e| BindError::Decode(e.to_string()))?;
    validate(&value)?;
    Ok(value)
}

/// Map form values onto `T` and validate it.
pub fn bind_form<T>(form: &FormValues) -> Result<T, BindError>
where
    T: DeserializeOwned + Validate + DeclaredFields,
{
    let value: T =
        serde_json::from_value(form.to_json()).map_err(|e| BindError::Decode(e.to_string()))?;
    validate(&value)?;
    Ok(value)
}

/// Run `value`'s field rules.
pub fn validate<T: Validate + DeclaredFields>(value: &T) -> Result<(), BindError> {
    value.validate().map_err(|errors| {
        let type_name = short_type_name::<T>();
        tracing::debug!(type_name, failures = errors.errors().len(), "Validation failed");
        BindError::Validation {
            type_name,
            fields: T::FIELDS,
            errors,
        }
    })
}

/// Render validation failures one per line, in field declaration order:
///
/// ```text
/// Key: 'Person.email' Error:Field validation for 'email' failed on the 'email' tag
/// ```
///
/// Only the first failing rule of each field is reported. Failures inside a
/// nested struct stay grouped under their outer field, ordered by path.
pub fn describe_validation_errors(
    type_name: &str,
    fields: &[&str],
    errors: &ValidationErrors,
) -> String {
    let mut failures = Vec::new();
    for (field, kind) in errors.errors() {
        let field = field.to_string();
        let rank = fields
            .iter()
            .position(|declared| *declared == field)
            .unwrap_or(fields.len());

        let mut group = Vec::new();
        collect_kind(&format!("{type_name}.{field}"), &field, kind, &mut group);
        failures.extend(
            group
                .into_iter()
                .map(|(path, leaf, rule)| ((rank, field.clone(), path), leaf, rule)),
        );
    }
    failures.sort();

    failures
        .into_iter()
        .map(|((_, _, path), field, rule)| {
            format!("Key: '{path}' Error:Field validation for '{field}' failed on the '{rule}' tag")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_kind(
    path: &str,
    field: &str,
    kind: &ValidationErrorsKind,
    out: &mut Vec<(String, String, String)>,
) {
    match kind {
        ValidationErrorsKind::Field(list) => {
            if let Some(first) = list.first() {
                out.push((path.to_string(), field.to_string(), first.code.to_string()));
            }
        }
        ValidationErrorsKind::Struct(inner) => collect_failures(path, inner, out),
        ValidationErrorsKind::List(items) => {
            for (index, inner) in items {
                collect_failures(&format!("{path}[{index}]"), inner, out);
            }
        }
    }
}

fn collect_failures(
    prefix: &str,
    errors: &ValidationErrors,
    out: &mut Vec<(String, String, String)>,
) {
    for (field, kind) in errors.errors() {
        let field = field.to_string();
        collect_kind(&format!("{prefix}.{field}"), &field, kind, out);
    }
}

/// `bindkit_core::models::person::Person` -> `Person`.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
