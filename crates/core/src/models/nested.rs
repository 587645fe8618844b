//! A form struct that embeds another struct.
//!
//! The embedded struct has no key of its own: its fields are read from the
//! same level of the form as the outer struct's fields.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::binding::DeclaredFields;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct StructA {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub field_a: String,
}

impl DeclaredFields for StructA {
    const FIELDS: &'static [&'static str] = &["field_a"];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct StructB {
    #[serde(flatten)]
    #[validate(nested)]
    pub nested_struct: StructA,
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub field_b: String,
}

impl DeclaredFields for StructB {
    const FIELDS: &'static [&'static str] = &["nested_struct", "field_b"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::bind_form;
    use crate::form::FormValues;

    #[test]
    fn binds_nested_fields_from_the_same_level() {
        let form = FormValues::from_pairs([("field_a", "hello"), ("field_b", "world")]);

        let b: StructB = bind_form(&form).unwrap();

        assert_eq!(b.nested_struct.field_a, "hello");
        assert_eq!(b.field_b, "world");
    }

    #[test]
    fn missing_nested_field_is_reported_with_its_path() {
        let form = FormValues::from_pairs([("field_b", "world")]);

        let err = bind_form::<StructB>(&form).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Key: 'StructB.nested_struct.field_a' Error:Field validation for 'field_a' failed on the 'required' tag"
        );
    }

    #[test]
    fn both_missing_reports_both() {
        let err = bind_form::<StructB>(&FormValues::new()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Key: 'StructB.nested_struct.field_a' Error:Field validation for 'field_a' failed on the 'required' tag\n\
             Key: 'StructB.field_b' Error:Field validation for 'field_b' failed on the 'required' tag"
        );
    }
}
