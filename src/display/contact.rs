//! Contact display formatting

use crate::models::{AddressBook, Record, UpcomingBirthday};

/// Format a single record as its one-line summary
pub fn format_record(record: &Record) -> String {
    record.to_string()
}

/// Format every record in the book, one per line
pub fn format_book(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }
    book.records()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the upcoming-birthdays report, one contact per line
pub fn format_upcoming(upcoming: &[UpcomingBirthday]) -> String {
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    upcoming
        .iter()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
