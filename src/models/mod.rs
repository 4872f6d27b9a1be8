//! Core data models for rolodex-cli
//!
//! This module contains the data structures that represent the contact
//! domain: validated field types, contact records, and the address book.

pub mod birthday;
pub mod book;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::Birthday;
pub use book::{AddressBook, UpcomingBirthday};
pub use name::Name;
pub use phone::Phone;
pub use record::Record;
