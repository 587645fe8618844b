use axum::Json;
use bindkit_core::date::format_date;
use bindkit_core::models::person::Person;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::Bind;

#[derive(Debug, Serialize)]
pub struct PersonResponse {
    pub message: &'static str,
    pub name: String,
    pub email: String,
    pub birthday: String,
}

/// GET /api/person
///
/// Bind `name`, `email` and `birthday` from the query string. All three are
/// required; `email` must be an address and `birthday` a `YYYY-MM-DD` date.
pub async fn get_person(Bind(person): Bind<Person>) -> AppResult<Json<PersonResponse>> {
    // `required` has already rejected a missing birthday.
    let birthday = person
        .birthday
        .map(format_date)
        .ok_or_else(|| AppError::InternalError("birthday missing after validation".into()))?;

    tracing::info!(name = %person.name, email = %person.email, %birthday, "Person received");

    Ok(Json(PersonResponse {
        message: "Data received successfully",
        name: person.name,
        email: person.email,
        birthday,
    }))
}
