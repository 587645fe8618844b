use axum::Json;
use bindkit_core::models::checkbox::ColorForm;
use serde::Serialize;

use crate::extract::Bind;

#[derive(Debug, Serialize)]
pub struct SelectedColorsResponse {
    pub selected_colors: Vec<String>,
}

/// POST /colors
///
/// Bind the checked `colors[]` boxes of an HTML form. At least one box must
/// be checked.
pub async fn select_colors(Bind(form): Bind<ColorForm>) -> Json<SelectedColorsResponse> {
    tracing::debug!(count = form.colors.len(), "Colors selected");

    Json(SelectedColorsResponse {
        selected_colors: form.colors,
    })
}
