//! Contact name field
//!
//! A name is the identity of a record: non-empty and limited to letters,
//! digits, and whitespace. Validation happens at construction, so every
//! `Name` in the system is known to be well-formed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RolodexError, RolodexResult};

/// A validated contact name
///
/// Deserialization routes through [`Name::new`], so persisted data is held
/// to the same rules as user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Name(String);

impl Name {
    /// Create a validated name
    ///
    /// # Errors
    ///
    /// Returns a validation error if the input is empty, whitespace-only, or
    /// contains a character that is not alphanumeric or whitespace.
    pub fn new(value: impl Into<String>) -> RolodexResult<Self> {
        let value = value.into();
        Self::validate(&value)?;
        Ok(Self(value))
    }

    /// Replace the value, re-running validation
    pub fn set(&mut self, value: impl Into<String>) -> RolodexResult<()> {
        let value = value.into();
        Self::validate(&value)?;
        self.0 = value;
        Ok(())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(value: &str) -> RolodexResult<()> {
        if value.trim().is_empty() {
            return Err(RolodexError::Validation("Name cannot be empty".into()));
        }
        if !value.chars().all(|c| c.is_alphanumeric() || c.is_whitespace()) {
            return Err(RolodexError::Validation(
                "Name can only contain letters, numbers, and spaces".into(),
            ));
        }
        Ok(())
    }
}

impl TryFrom<String> for Name {
    type Error = RolodexError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
