//! Contact record
//!
//! A record aggregates one validated name, an ordered list of unique phone
//! numbers, and an optional birthday. All mutation goes through methods that
//! re-validate input, so the uniqueness invariant holds at all times.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RolodexError, RolodexResult};

use super::{Birthday, Name, Phone};

/// A single contact: name, phones, optional birthday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for the given name
    pub fn new(name: &str) -> RolodexResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones, in insertion order
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if set
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Add a phone number
    ///
    /// # Errors
    ///
    /// Fails on a malformed number, or with a duplicate error if an equal
    /// normalized number is already on the record.
    pub fn add_phone(&mut self, raw: &str) -> RolodexResult<()> {
        let phone = Phone::new(raw)?;
        if self.phones.contains(&phone) {
            return Err(RolodexError::duplicate_phone(phone.as_str()));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Remove a phone number
    ///
    /// # Errors
    ///
    /// Fails with a validation error if no phone matches the normalized
    /// input.
    pub fn remove_phone(&mut self, raw: &str) -> RolodexResult<()> {
        let original_len = self.phones.len();
        self.phones.retain(|p| !p.matches(raw));
        if self.phones.len() == original_len {
            return Err(RolodexError::Validation(format!(
                "Phone number {} not found",
                raw
            )));
        }
        Ok(())
    }

    /// Replace the first phone matching `old` with a validated `new` value
    ///
    /// # Errors
    ///
    /// Fails with a validation error if `old` is not on the record, or if
    /// `new` is malformed (the record is left unchanged in both cases).
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RolodexResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.matches(old))
            .ok_or_else(|| {
                RolodexError::Validation(format!("Phone number {} not found", old))
            })?;
        self.phones[index] = Phone::new(new)?;
        Ok(())
    }

    /// Look up a phone by raw input; never fails
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.matches(raw))
    }

    /// Check the phone-uniqueness invariant
    ///
    /// Mutation methods maintain it; this re-checks records rebuilt from
    /// persisted data, where the phone list arrives as-is.
    ///
    /// # Errors
    ///
    /// Fails with a duplicate error naming the first repeated number.
    pub fn validate(&self) -> RolodexResult<()> {
        for (i, phone) in self.phones.iter().enumerate() {
            if self.phones[..i].contains(phone) {
                return Err(RolodexError::duplicate_phone(phone.as_str()));
            }
        }
        Ok(())
    }

    /// Set the birthday, overwriting any existing one
    ///
    /// # Errors
    ///
    /// Fails with a validation error on a bad format or a future date.
    pub fn set_birthday(&mut self, raw: &str, today: NaiveDate) -> RolodexResult<()> {
        self.birthday = Some(Birthday::parse(raw, today)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
