//! Failure and error types for probity assertions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("max container size cannot be less than 0, got {value}")]
    NegativeContainerSize { value: i64 },

    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// A single assertion failure reported through a [`TestContext`].
///
/// Labels are rendered breadcrumb paths such as `.accounts.[2].['eur']`.
///
/// [`TestContext`]: crate::TestContext
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum Failure {
    #[error("{label}: not equal\n\texpected: {expected}\n\tactual:   {actual}")]
    NotEqual {
        label: String,
        expected: String,
        actual: String,
    },

    #[error("{label}: type mismatch\n\texpected: {expected_type} = {expected}\n\tactual:   {actual_type} = {actual}")]
    TypeMismatch {
        label: String,
        expected_type: String,
        actual_type: String,
        expected: String,
        actual: String,
    },

    #[error("Keys of map at {label}: not equal\n\texpected: {expected:?}\n\tactual:   {actual:?}")]
    KeysMismatch {
        label: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("Length of slice at {label}: expected {expected}, got {actual}")]
    LengthMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },

    #[error("Channel received nothing within {timeout_ms}ms, expected: {expected}")]
    NothingReceived { expected: String, timeout_ms: u64 },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{message}")]
    Message { message: String },
}

impl Failure {
    /// Build a free-form failure.
    pub fn message(message: impl Into<String>) -> Self {
        Failure::Message {
            message: message.into(),
        }
    }

    /// The label path the failure points at, if it has one.
    pub fn label(&self) -> Option<&str> {
        match self {
            Failure::NotEqual { label, .. }
            | Failure::TypeMismatch { label, .. }
            | Failure::KeysMismatch { label, .. }
            | Failure::LengthMismatch { label, .. } => Some(label),
            Failure::NothingReceived { .. } | Failure::Config(_) | Failure::Message { .. } => {
                None
            }
        }
    }
}

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_equal_display_names_both_sides() {
        let failure = Failure::NotEqual {
            label: ".balance".to_string(),
            expected: "10".to_string(),
            actual: "11".to_string(),
        };
        let msg = failure.to_string();
        assert!(msg.starts_with(".balance: not equal"));
        assert!(msg.contains("expected: 10"));
        assert!(msg.contains("actual:   11"));
    }

    #[test]
    fn test_keys_mismatch_display() {
        let failure = Failure::KeysMismatch {
            label: ".rates".to_string(),
            expected: vec!["eur".to_string()],
            actual: vec!["usd".to_string()],
        };
        let msg = failure.to_string();
        assert!(msg.starts_with("Keys of map at .rates"));
        assert!(msg.contains("\"usd\""));
    }

    #[test]
    fn test_length_mismatch_display() {
        let failure = Failure::LengthMismatch {
            label: "value".to_string(),
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            failure.to_string(),
            "Length of slice at value: expected 2, got 3"
        );
    }

    #[test]
    fn test_config_error_converts_into_failure() {
        let failure: Failure = ConfigError::NegativeContainerSize { value: -1 }.into();
        assert_eq!(
            failure.to_string(),
            "Config error: max container size cannot be less than 0, got -1"
        );
        assert_eq!(failure.label(), None);
    }

    #[test]
    fn test_label_accessor() {
        let failure = Failure::TypeMismatch {
            label: ".a".to_string(),
            expected_type: "i64".to_string(),
            actual_type: "String".to_string(),
            expected: "10".to_string(),
            actual: "\"hello\"".to_string(),
        };
        assert_eq!(failure.label(), Some(".a"));
        assert_eq!(Failure::message("boom").label(), None);
    }

    #[test]
    fn test_failure_serializes_to_json() {
        let failure = Failure::LengthMismatch {
            label: ".items".to_string(),
            expected: 1,
            actual: 2,
        };
        let json = serde_json::to_string(&failure).unwrap();
        let back: Failure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, failure);
    }
}
