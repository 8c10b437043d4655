//! Error types for the Termstruct core crate.
//!
//! Validation errors are raised at the boundary (constructor argument
//! parsing) and are never retried.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A string did not map to any member of a closed enumeration.
    #[error("Invalid {field}: '{value}'. Choose from {choices}")]
    InvalidEnumValue {
        /// Which enumeration was being parsed.
        field: String,
        /// The rejected input.
        value: String,
        /// Comma-separated list of the valid display strings.
        choices: String,
    },

    /// Unparseable date, or a date that fails business-day validation.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// An interval whose start does not precede its end.
    #[error("Invalid range: start {start} must not exceed end {end}")]
    InvalidRange {
        /// Start of the offending interval.
        start: String,
        /// End of the offending interval.
        end: String,
    },
}

impl CoreError {
    /// Creates an invalid enum value error listing the valid choices.
    #[must_use]
    pub fn invalid_enum_value(
        field: impl Into<String>,
        value: impl Into<String>,
        choices: impl Into<String>,
    ) -> Self {
        Self::InvalidEnumValue {
            field: field.into(),
            value: value.into(),
            choices: choices.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid range error.
    #[must_use]
    pub fn invalid_range(start: impl ToString, end: impl ToString) -> Self {
        Self::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_error_lists_choices() {
        let err = CoreError::invalid_enum_value("region", "Mars", "United States, Japan");
        let msg = err.to_string();
        assert!(msg.contains("Mars"));
        assert!(msg.contains("United States, Japan"));
    }

    #[test]
    fn test_invalid_range_display() {
        let err = CoreError::invalid_range("2025-06-15", "2025-01-01");
        assert!(err.to_string().contains("must not exceed"));
    }
}
