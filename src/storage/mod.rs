//! Storage layer for rolodex-cli
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The whole address book persists as one versioned file.

pub mod book;
pub mod file_io;

pub use book::BookRepository;
pub use file_io::{read_json, write_json_atomic};
