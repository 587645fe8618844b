use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::binding::DeclaredFields;

/// Checked boxes of an HTML form, submitted as `colors[]=red&colors[]=blue`.
///
/// JSON bodies carry the same list under a plain `colors` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ColorForm {
    #[serde(rename = "colors[]", alias = "colors", default)]
    #[validate(length(min = 1, code = "required"))]
    pub colors: Vec<String>,
}

impl DeclaredFields for ColorForm {
    const FIELDS: &'static [&'static str] = &["colors"];
}
