//! Custom error types for rolodex-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for rolodex operations
#[derive(Error, Debug)]
pub enum RolodexError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for contact fields (name, phone, birthday)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// A command was given too few arguments
    #[error("Please provide all required arguments")]
    MissingArguments,

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RolodexError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for phone numbers within a record
    pub fn duplicate_phone(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Phone number",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types
//
// serde_json errors are mapped at the storage and settings call sites, where
// the file path is known; they get no blanket conversion.

impl From<std::io::Error> for RolodexError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for rolodex operations
pub type RolodexResult<T> = Result<T, RolodexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RolodexError::Validation("bad phone".into());
        assert_eq!(err.to_string(), "Validation error: bad phone");
    }

    #[test]
    fn test_not_found_error() {
        let err = RolodexError::contact_not_found("Anna");
        assert_eq!(err.to_string(), "Contact not found: Anna");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicate_phone_error() {
        let err = RolodexError::duplicate_phone("0501234567");
        assert_eq!(err.to_string(), "Phone number already exists: 0501234567");
    }

    #[test]
    fn test_missing_arguments_message() {
        assert_eq!(
            RolodexError::MissingArguments.to_string(),
            "Please provide all required arguments"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let rolodex_err: RolodexError = io_err.into();
        assert!(matches!(rolodex_err, RolodexError::Io(_)));
    }
}
