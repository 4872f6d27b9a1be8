//! Address book persistence
//!
//! The whole book is saved as one versioned JSON document after every
//! mutating command. A missing file loads as an empty book; a version this
//! build doesn't know is a storage error rather than a silent misread.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::RolodexError;
use crate::models::{AddressBook, Record};

use super::file_io::{read_json, write_json_atomic};

/// Current on-disk schema version
const BOOK_FORMAT_VERSION: u32 = 1;

/// Serializable address book file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookData {
    version: u32,
    contacts: Vec<Record>,
}

impl Default for BookData {
    fn default() -> Self {
        Self {
            version: BOOK_FORMAT_VERSION,
            contacts: Vec::new(),
        }
    }
}

/// Repository for address book persistence
pub struct BookRepository {
    path: PathBuf,
}

impl BookRepository {
    /// Create a repository over the given book file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the address book from disk
    ///
    /// A missing file yields an empty book. The in-memory map is rebuilt
    /// keyed by each record's name.
    pub fn load(&self) -> Result<AddressBook, RolodexError> {
        let data: BookData = read_json(&self.path)?;

        if data.version != BOOK_FORMAT_VERSION {
            return Err(RolodexError::Storage(format!(
                "Unsupported address book version {} in {} (expected {})",
                data.version,
                self.path.display(),
                BOOK_FORMAT_VERSION
            )));
        }

        let mut book = AddressBook::new();
        for record in data.contacts {
            // Field types validate during deserialization; the cross-field
            // phone-uniqueness invariant needs an explicit check here
            record.validate().map_err(|e| {
                RolodexError::Storage(format!(
                    "Invalid record for {} in {}: {}",
                    record.name(),
                    self.path.display(),
                    e
                ))
            })?;
            book.add_record(record);
        }
        Ok(book)
    }

    /// Save the full address book state to disk atomically
    pub fn save(&self, book: &AddressBook) -> Result<(), RolodexError> {
        let data = BookData {
            version: BOOK_FORMAT_VERSION,
            contacts: book.records().cloned().collect(),
        };
        write_json_atomic(&self.path, &data)
    }
}
