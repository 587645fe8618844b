use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::binding::DeclaredFields;
use crate::date::optional_date;

/// A person looked up by query string; every field is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Person {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, code = "required"), email)]
    pub email: String,
    #[serde(default, with = "optional_date")]
    #[validate(required)]
    pub birthday: Option<NaiveDate>,
}

impl DeclaredFields for Person {
    const FIELDS: &'static [&'static str] = &["name", "email", "birthday"];
}

/// Name and address, bound from either a JSON body or the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PersonAddress {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

impl DeclaredFields for PersonAddress {
    const FIELDS: &'static [&'static str] = &["name", "address"];
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::binding::{bind_form, bind_json};
    use crate::error::BindError;
    use crate::form::FormValues;

    fn person_form(pairs: &[(&str, &str)]) -> FormValues {
        FormValues::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn binds_a_complete_person() {
        let form = person_form(&[
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("birthday", "1815-12-10"),
        ]);

        let person: Person = bind_form(&form).unwrap();

        assert_eq!(person.name, "Ada");
        assert_eq!(person.birthday, NaiveDate::from_ymd_opt(1815, 12, 10));
    }

    #[test]
    fn rejects_malformed_email() {
        let form = person_form(&[
            ("name", "Ada"),
            ("email", "ada-at-example"),
            ("birthday", "1815-12-10"),
        ]);

        let err = bind_form::<Person>(&form).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Key: 'Person.email' Error:Field validation for 'email' failed on the 'email' tag"
        );
    }

    #[test]
    fn empty_birthday_counts_as_missing() {
        let form = person_form(&[("name", "Ada"), ("email", "ada@example.com"), ("birthday", "")]);

        let err = bind_form::<Person>(&form).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Key: 'Person.birthday' Error:Field validation for 'birthday' failed on the 'required' tag"
        );
    }

    #[test]
    fn missing_fields_are_reported_in_declaration_order() {
        let err = bind_form::<Person>(&person_form(&[])).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Key: 'Person.name' Error:Field validation for 'name' failed on the 'required' tag\n\
             Key: 'Person.email' Error:Field validation for 'email' failed on the 'required' tag\n\
             Key: 'Person.birthday' Error:Field validation for 'birthday' failed on the 'required' tag"
        );
    }

    #[test]
    fn padded_birthday_is_a_decode_error() {
        let form = person_form(&[
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("birthday", " 1815-12-10"),
        ]);

        assert_matches!(bind_form::<Person>(&form), Err(BindError::Decode(_)));
    }

    #[test]
    fn malformed_birthday_is_a_decode_error() {
        let form = person_form(&[
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("birthday", "10-12-1815"),
        ]);

        let err = bind_form::<Person>(&form).unwrap_err();

        assert_matches!(&err, BindError::Decode(msg) if msg.contains("expected YYYY-MM-DD"));
    }

    #[test]
    fn person_address_binds_from_json_and_form_alike() {
        let from_json: PersonAddress = bind_json(br#"{"name":"Ada","address":"London"}"#).unwrap();
        let from_form: PersonAddress =
            bind_form(&person_form(&[("name", "Ada"), ("address", "London")])).unwrap();

        assert_eq!(from_json, from_form);
    }
}
