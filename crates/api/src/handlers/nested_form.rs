use axum::Json;
use bindkit_core::models::nested::StructB;
use serde::Serialize;

use crate::extract::Bind;

/// Echo of the embedded struct, keyed by its field name.
#[derive(Debug, Serialize)]
pub struct StructAResponse {
    #[serde(rename = "FieldA")]
    pub field_a: String,
}

#[derive(Debug, Serialize)]
pub struct NestedFormResponse {
    pub a: StructAResponse,
    pub b: String,
}

/// GET /getb
///
/// Bind a struct embedding another struct from the query (or form body).
pub async fn get_data_b(Bind(b): Bind<StructB>) -> Json<NestedFormResponse> {
    Json(NestedFormResponse {
        a: StructAResponse {
            field_a: b.nested_struct.field_a,
        },
        b: b.field_b,
    })
}
