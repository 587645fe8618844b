use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::binding::DeclaredFields;

/// A user submitted as a JSON body. Missing keys bind as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl DeclaredFields for User {
    const FIELDS: &'static [&'static str] = &["name", "email"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::bind_json;

    #[test]
    fn missing_keys_default_to_empty() {
        let user: User = bind_json(br#"{"name":"Ada"}"#).unwrap();
        assert_eq!(
            user,
            User {
                name: "Ada".into(),
                email: String::new(),
            }
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let user: User = bind_json(br#"{"name":"Ada","email":"a@b.io","age":36}"#).unwrap();
        assert_eq!(user.email, "a@b.io");
    }
}
