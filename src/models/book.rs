//! Address book
//!
//! The book maps contact names to records and answers the upcoming-birthday
//! query. Keys always equal the owned record's name string; a `BTreeMap`
//! keeps listing order deterministic.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{RolodexError, RolodexResult};

use super::birthday::DATE_FORMAT;
use super::Record;

/// An entry in the upcoming-birthdays report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,
    /// Birthday projected into the current (or next) year
    pub birthday: NaiveDate,
    /// Celebration date: the birthday, shifted off weekends to Monday
    pub congratulation_date: NaiveDate,
    /// Whole days from today to the projected birthday (0 = today)
    pub days_until: i64,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (celebrate on {})",
            self.name,
            self.birthday.format(DATE_FORMAT),
            self.congratulation_date.format(DATE_FORMAT)
        )
    }
}

/// Name-keyed contact store
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any existing record with the same name
    ///
    /// Overwrite is intentional last-write-wins; there is no merge.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().as_str().to_string(), record);
    }

    /// Look up a record by name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Delete a record
    ///
    /// # Errors
    ///
    /// Fails with a not-found error if no record has that name.
    pub fn delete(&mut self, name: &str) -> RolodexResult<()> {
        self.records
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RolodexError::contact_not_found(name))
    }

    /// Number of records in the book
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in name order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts whose birthday falls within `window_days` of `today`
    /// (inclusive on both ends; a birthday today counts).
    ///
    /// Birthdays are projected into the current year, or the next year when
    /// this year's date has already passed. A projected date landing on
    /// Saturday or Sunday gets its congratulation date shifted to the
    /// following Monday. Results are sorted by projected date, then name.
    pub fn upcoming_birthdays(&self, window_days: i64, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?.date();

                let mut projected = project_into_year(birthday, today.year());
                if projected < today {
                    projected = project_into_year(birthday, today.year() + 1);
                }

                let days_until = (projected - today).num_days();
                if !(0..=window_days).contains(&days_until) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    birthday: projected,
                    congratulation_date: shift_off_weekend(projected),
                    days_until,
                })
            })
            .collect();

        upcoming.sort_by(|a, b| (a.birthday, &a.name).cmp(&(b.birthday, &b.name)));
        upcoming
    }
}

/// Apply a birthday's month/day to `year`.
///
/// Feb 29 clamps to Feb 28 in years without a leap day.
fn project_into_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year")
    })
}

/// Shift Saturday and Sunday dates forward to the following Monday
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let weekday = i64::from(date.weekday().num_days_from_monday());
    if weekday >= 5 {
        date + Duration::days(7 - weekday)
    } else {
        date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_birthday(name: &str, birthday: &str, today: NaiveDate) -> Record {
        let mut record = Record::new(name).unwrap();
        record.set_birthday(birthday, today).unwrap();
        record
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Anna").unwrap());

        assert!(book.find("Anna").is_some());
        assert!(book.find("Ben").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_record_overwrites_same_name() {
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("Anna", "15.03.1990", today));
        book.add_record(Record::new("Anna").unwrap());

        assert_eq!(book.len(), 1);
        // Last write wins: the new record has no birthday
        assert!(book.find("Anna").unwrap().birthday().is_none());
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Anna").unwrap());

        book.delete("Anna").unwrap();
        assert!(book.is_empty());

        let err = book.delete("Anna").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_records_iterate_in_name_order() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Cleo").unwrap());
        book.add_record(Record::new("Anna").unwrap());
        book.add_record(Record::new("Ben").unwrap());

        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Anna", "Ben", "Cleo"]);
    }

    #[test]
    fn test_birthday_today_included() {
        // 2024-06-10 is a Monday
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("Anna", "10.06.1990", today));

        let upcoming = book.upcoming_birthdays(7, today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].days_until, 0);
        assert_eq!(upcoming[0].birthday, today);
        assert_eq!(upcoming[0].congratulation_date, today);
    }

    #[test]
    fn test_weekday_birthday_not_shifted() {
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        // 2024-06-12 is a Wednesday
        book.add_record(record_with_birthday("Anna", "12.06.1990", today));

        let upcoming = book.upcoming_birthdays(7, today);
        assert_eq!(upcoming[0].birthday, date(2024, 6, 12));
        assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 12));
    }

    #[test]
    fn test_sunday_birthday_shifts_to_monday() {
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        // 2024-06-16 is a Sunday
        book.add_record(record_with_birthday("Ben", "16.06.1985", today));

        let upcoming = book.upcoming_birthdays(7, today);
        assert_eq!(upcoming[0].birthday, date(2024, 6, 16));
        assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 17));
    }

    #[test]
    fn test_saturday_birthday_shifts_to_monday() {
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        // 2024-06-15 is a Saturday
        book.add_record(record_with_birthday("Cleo", "15.06.1985", today));

        let upcoming = book.upcoming_birthdays(7, today);
        assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 17));
    }

    #[test]
    fn test_passed_birthday_rolls_to_next_year() {
        let today = date(2024, 12, 31);
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("Cleo", "02.01.1990", today));

        let upcoming = book.upcoming_birthdays(7, today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].birthday, date(2025, 1, 2));
        assert_eq!(upcoming[0].days_until, 2);
    }

    #[test]
    fn test_outside_window_excluded() {
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        // 8 days out with a 7-day window
        book.add_record(record_with_birthday("Anna", "18.06.1990", today));

        assert!(book.upcoming_birthdays(7, today).is_empty());
        assert_eq!(book.upcoming_birthdays(8, today).len(), 1);
    }

    #[test]
    fn test_records_without_birthday_skipped() {
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        book.add_record(Record::new("Anna").unwrap());

        assert!(book.upcoming_birthdays(7, today).is_empty());
    }

    #[test]
    fn test_feb_29_clamps_to_feb_28() {
        // 2025 is not a leap year
        let today = date(2025, 2, 24);
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("Leap", "29.02.2000", today));

        let upcoming = book.upcoming_birthdays(7, today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].birthday, date(2025, 2, 28));
    }

    #[test]
    fn test_sorted_by_date_then_name() {
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("Zoe", "12.06.1990", today));
        book.add_record(record_with_birthday("Anna", "14.06.1990", today));
        book.add_record(record_with_birthday("Ben", "12.06.1985", today));

        let upcoming = book.upcoming_birthdays(7, today);
        let names: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Ben", "Zoe", "Anna"]);
    }

    #[test]
    fn test_upcoming_display() {
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("Ben", "16.06.1985", today));

        let upcoming = book.upcoming_birthdays(7, today);
        assert_eq!(
            upcoming[0].to_string(),
            "Ben: 16.06.2024 (celebrate on 17.06.2024)"
        );
    }
}
