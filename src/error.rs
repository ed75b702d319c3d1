//! Error handling for the bindkit library
//!
//! This module provides the two failure kinds of the binding-lookup
//! contract together with a crate-wide [`Result`] alias. Both errors are
//! reported synchronously to the caller; there is no I/O in this crate,
//! so no transient-failure class exists.

use thiserror::Error;

/// Main error type for the bindkit library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindkitError {
    /// A required argument was absent
    ///
    /// This is a programming-contract violation, not a runtime failure;
    /// callers should treat it as fatal to the calling operation.
    #[error("null argument: {argument}")]
    NullArgument {
        /// Name of the offending argument
        argument: &'static str,
    },

    /// No entry exists for the supplied service identifier
    #[error("key not found: {key}")]
    KeyNotFound {
        /// Display form of the identifier that missed
        key: String,
    },
}

impl BindkitError {
    /// Create a null-argument error
    pub fn null_argument(argument: &'static str) -> Self {
        Self::NullArgument { argument }
    }

    /// Create a key-not-found error
    pub fn key_not_found<S: Into<String>>(key: S) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Check if this error signals a contract violation rather than a
    /// normal, recoverable lookup outcome
    pub fn is_contract_violation(&self) -> bool {
        match self {
            Self::NullArgument { .. } => true,
            Self::KeyNotFound { .. } => false,
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::NullArgument { .. } => "null_argument",
            Self::KeyNotFound { .. } => "key_not_found",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BindkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BindkitError::null_argument("service_identifier");
        assert_eq!(err.to_string(), "null argument: service_identifier");

        let err = BindkitError::key_not_found("Warrior");
        assert_eq!(err.to_string(), "key not found: Warrior");
    }

    #[test]
    fn test_error_constructors() {
        let err = BindkitError::null_argument("value");
        assert!(matches!(err, BindkitError::NullArgument { argument: "value" }));

        let err = BindkitError::key_not_found(String::from("Weapon"));
        assert!(matches!(err, BindkitError::KeyNotFound { key } if key == "Weapon"));
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(BindkitError::null_argument("k").category(), "null_argument");
        assert_eq!(BindkitError::key_not_found("k").category(), "key_not_found");
    }

    #[test]
    fn test_contract_violation_classification() {
        assert!(BindkitError::null_argument("k").is_contract_violation());
        assert!(!BindkitError::key_not_found("k").is_contract_violation());
    }
}
