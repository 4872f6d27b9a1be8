//! rolodex - Terminal-based contact book with birthday reminders
//!
//! This library provides the core functionality for the rolodex contact
//! manager: validated contact records, a persistent address book, and the
//! upcoming-birthday report with weekend-aware celebration dates.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (names, phones, birthdays, records, the book)
//! - `storage`: JSON file storage layer
//! - `display`: Terminal output formatting
//! - `cli`: The interactive command loop

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{RolodexError, RolodexResult};
