//! Birthday field
//!
//! A birthday is a real calendar date entered as `DD.MM.YYYY` and never in
//! the future. Internally it is a `chrono::NaiveDate`; the textual form is
//! used at every boundary, including the persisted file.

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{RolodexError, RolodexResult};

/// Date format used for all birthday input and output
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse and validate a birthday from `DD.MM.YYYY` input
    ///
    /// `today` is the reference date for the not-in-future rule; callers
    /// outside tests pass the current local date.
    ///
    /// # Errors
    ///
    /// Returns a validation error on a format mismatch or a date after
    /// `today`.
    pub fn parse(raw: &str, today: NaiveDate) -> RolodexResult<Self> {
        let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
            RolodexError::Validation("Invalid date format. Use DD.MM.YYYY".into())
        })?;
        if date > today {
            return Err(RolodexError::Validation(
                "Birthday cannot be in the future".into(),
            ));
        }
        Ok(Self(date))
    }

    /// The underlying calendar date
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

// Persisted as the DD.MM.YYYY display string. Deserialization re-checks the
// format only; the not-in-future rule applies at entry time.

impl Serialize for Birthday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT)
            .map(Birthday)
            .map_err(|_| de::Error::custom(format!("invalid birthday date: {}", raw)))
    }
}
