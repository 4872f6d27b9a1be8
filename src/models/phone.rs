//! Phone number field
//!
//! Phone numbers are stored in normalized form: the digit characters of the
//! input, which must number exactly 10. `(050) 123-45-67` and `0501234567`
//! are therefore the same phone.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RolodexError, RolodexResult};

/// A phone number, normalized to its 10-digit string
///
/// Deserialization routes through [`Phone::new`], so persisted data is held
/// to the same rules as user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Phone(String);

impl Phone {
    /// Create a validated phone number from raw user input
    ///
    /// # Errors
    ///
    /// Returns a validation error unless stripping non-digit characters
    /// leaves exactly 10 digits.
    pub fn new(raw: &str) -> RolodexResult<Self> {
        let digits = Self::normalize(raw);
        if digits.len() != 10 {
            return Err(RolodexError::Validation(
                "Phone number must contain exactly 10 digits".into(),
            ));
        }
        Ok(Self(digits))
    }

    /// Strip all non-digit characters from the input
    ///
    /// Never fails; length validation happens in [`Phone::new`].
    pub fn normalize(raw: &str) -> String {
        raw.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Get the normalized digit string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether this phone matches raw input after normalization
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == Self::normalize(raw)
    }
}

impl TryFrom<String> for Phone {
    type Error = RolodexError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_formatting() {
        assert_eq!(Phone::normalize("(050) 123-45-67"), "0501234567");
        assert_eq!(Phone::normalize("abc"), "");
    }

    #[test]
    fn test_ten_digits_accepted() {
        let phone = Phone::new("050-123-45-67").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn test_wrong_digit_count_rejected() {
        assert!(Phone::new("12345").is_err());
        assert!(Phone::new("123456789012").is_err());
        assert!(Phone::new("").is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let phone: Phone = serde_json::from_str("\"0501234567\"").unwrap();
        assert_eq!(phone.as_str(), "0501234567");

        assert!(serde_json::from_str::<Phone>("\"123\"").is_err());
        assert!(serde_json::from_str::<Phone>("\"123456789012\"").is_err());
    }

    #[test]
    fn test_matches_reformatted_input() {
        let phone = Phone::new("0501234567").unwrap();
        assert!(phone.matches("(050) 123-45-67"));
        assert!(!phone.matches("0509999999"));
    }
}
