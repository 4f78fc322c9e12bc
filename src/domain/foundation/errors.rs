//! Error types for the domain layer.

use thiserror::Error;

/// Errors that make a raw mission input unusable.
///
/// Out-of-range numbers are not errors: they are clamped and audited.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputValidationError {
    #[error("Required field '{field}' is missing and has no default")]
    MissingField { field: &'static str },

    #[error("Field '{field}' must be a finite number")]
    NonFinite { field: &'static str },

    #[error("Malformed mission input: {0}")]
    Malformed(String),
}

impl InputValidationError {
    /// Creates a missing field error.
    pub fn missing_field(field: &'static str) -> Self {
        InputValidationError::MissingField { field }
    }

    /// Creates a non-finite value error.
    pub fn non_finite(field: &'static str) -> Self {
        InputValidationError::NonFinite { field }
    }

    /// Creates a malformed input error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        InputValidationError::Malformed(reason.into())
    }
}

impl From<serde_json::Error> for InputValidationError {
    fn from(err: serde_json::Error) -> Self {
        InputValidationError::malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_displays_correctly() {
        let err = InputValidationError::missing_field("mission.radiation_level");
        assert_eq!(
            format!("{}", err),
            "Required field 'mission.radiation_level' is missing and has no default"
        );
    }

    #[test]
    fn non_finite_displays_correctly() {
        let err = InputValidationError::non_finite("mission.stress_index");
        assert_eq!(
            format!("{}", err),
            "Field 'mission.stress_index' must be a finite number"
        );
    }

    #[test]
    fn json_errors_become_malformed() {
        let err: InputValidationError = serde_json::from_str::<u8>("\"x\"").unwrap_err().into();
        assert!(matches!(err, InputValidationError::Malformed(_)));
    }
}
