use validator::ValidationErrors;

use crate::binding::describe_validation_errors;

/// Errors raised while binding request data onto a typed structure.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The payload could not be decoded into the target type
    /// (malformed JSON, wrong value type, bad date, ...).
    #[error("{0}")]
    Decode(String),

    /// The payload decoded but one or more field rules failed.
    #[error("{}", describe_validation_errors(.type_name, .fields, .errors))]
    Validation {
        type_name: &'static str,
        /// Declared field order of the bound type.
        fields: &'static [&'static str],
        errors: ValidationErrors,
    },

    /// The request body could not be read.
    #[error("{0}")]
    Read(String),
}

impl BindError {
    /// `true` when the failure came from field rules rather than decoding.
    pub fn is_validation(&self) -> bool {
        matches!(self, BindError::Validation { .. })
    }
}
