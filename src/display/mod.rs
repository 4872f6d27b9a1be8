//! Display formatting for rolodex-cli
//!
//! Formats records and reports for terminal output.

pub mod contact;

pub use contact::{format_book, format_record, format_upcoming};
