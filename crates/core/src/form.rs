//! Decoded form values.
//!
//! Query strings, URL-encoded bodies and multipart text fields all reduce to
//! a list of `(key, value)` pairs. [`FormValues`] groups those pairs by key so
//! they can be mapped onto a typed structure.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Suffix marking a key that always binds as a list (`colors[]=red`).
pub const LIST_KEY_SUFFIX: &str = "[]";

/// Multimap of form keys to their values, in submission order per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, Vec<String>>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from decoded pairs, keeping the order values were submitted in.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut form = Self::new();
        for (key, value) in pairs {
            form.push(key, value);
        }
        form
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// Append every value of `other` after the values already present.
    ///
    /// Used to merge a form body with the URL query: the body is loaded
    /// first, so its value wins when a scalar key appears in both.
    pub fn extend(&mut self, other: FormValues) {
        for (key, mut values) in other.values {
            self.values.entry(key).or_default().append(&mut values);
        }
    }

    /// First value submitted for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value submitted for `key`; empty when the key is absent.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Convert into a JSON object suitable for serde deserialization.
    ///
    /// Keys ending in `[]` become arrays of every value; any other key takes
    /// its first value as a string.
    pub fn to_json(&self) -> Value {
        let mut object = Map::with_capacity(self.values.len());
        for (key, values) in &self.values {
            let value = if key.ends_with(LIST_KEY_SUFFIX) {
                Value::Array(values.iter().cloned().map(Value::String).collect())
            } else {
                match values.first() {
                    Some(first) => Value::String(first.clone()),
                    None => continue,
                }
            };
            object.insert(key.clone(), value);
        }
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn groups_values_by_key_in_submission_order() {
        let form = FormValues::from_pairs([
            ("colors[]", "red"),
            ("name", "ada"),
            ("colors[]", "blue"),
        ]);

        assert_eq!(form.len(), 2);
        assert_eq!(form.get("name"), Some("ada"));
        assert_eq!(form.get_all("colors[]"), ["red", "blue"]);
        assert!(form.get_all("missing").is_empty());
    }

    #[test]
    fn list_keys_become_arrays_and_scalars_take_first_value() {
        let form = FormValues::from_pairs([
            ("colors[]", "green"),
            ("name", "first"),
            ("name", "second"),
        ]);

        assert_eq!(
            form.to_json(),
            json!({ "colors[]": ["green"], "name": "first" })
        );
    }

    #[test]
    fn extend_appends_after_existing_values() {
        let mut body = FormValues::from_pairs([("field_b", "from-body")]);
        let query = FormValues::from_pairs([("field_b", "from-query"), ("field_a", "q")]);

        body.extend(query);

        assert_eq!(body.get("field_b"), Some("from-body"));
        assert_eq!(body.get_all("field_b"), ["from-body", "from-query"]);
        assert_eq!(body.get("field_a"), Some("q"));
    }

    #[test]
    fn empty_form_converts_to_empty_object() {
        let form = FormValues::new();
        assert!(form.is_empty());
        assert_eq!(form.to_json(), json!({}));
    }
}
