//! Calendar date fields bound from `YYYY-MM-DD` strings.

use chrono::NaiveDate;

/// Wire format of every date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a date in [`DATE_FORMAT`].
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapter for `Option<NaiveDate>`.
///
/// An absent or empty value binds as `None` so a `required` rule can report
/// it; anything else must parse as [`DATE_FORMAT`] exactly, with no
/// surrounding whitespace.
pub mod optional_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{format_date, DATE_FORMAT};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&format_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, DATE_FORMAT)
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid date `{text}`, expected YYYY-MM-DD"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    struct Holder {
        #[serde(default, with = "optional_date")]
        day: Option<NaiveDate>,
    }

    #[test]
    fn parses_iso_dates() {
        let holder: Holder = serde_json::from_str(r#"{"day":"1992-03-15"}"#).unwrap();
        assert_eq!(holder.day, NaiveDate::from_ymd_opt(1992, 3, 15));
    }

    #[test]
    fn empty_and_absent_values_are_none() {
        let empty: Holder = serde_json::from_str(r#"{"day":""}"#).unwrap();
        let absent: Holder = serde_json::from_str("{}").unwrap();
        assert!(empty.day.is_none());
        assert!(absent.day.is_none());
    }

    #[test]
    fn rejects_other_formats() {
        let err = serde_json::from_str::<Holder>(r#"{"day":"15/03/1992"}"#).unwrap_err();
        assert!(err
            .to_string()
            .contains("invalid date `15/03/1992`, expected YYYY-MM-DD"));
    }

    #[test]
    fn surrounding_whitespace_is_malformed() {
        for raw in [r#"{"day":" 1992-03-15"}"#, r#"{"day":"1992-03-15 "}"#, r#"{"day":" "}"#] {
            let err = serde_json::from_str::<Holder>(raw).unwrap_err();
            assert!(err.to_string().contains("expected YYYY-MM-DD"), "{raw}");
        }
    }

    #[test]
    fn serializes_back_to_wire_format() {
        let holder = Holder {
            day: NaiveDate::from_ymd_opt(2001, 1, 9),
        };
        assert_eq!(serde_json::to_string(&holder).unwrap(), r#"{"day":"2001-01-09"}"#);
    }
}
