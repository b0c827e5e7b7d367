//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_display() {
        let error = DomainError::UnknownField("bmi".into());
        assert_eq!(error.to_string(), "Unknown field: bmi");
    }

    #[test]
    fn test_invalid_value_display() {
        let error = DomainError::InvalidValue {
            field: "age".into(),
            value: "abc".into(),
        };
        assert_eq!(error.to_string(), "Invalid value for age: abc");
    }
}
