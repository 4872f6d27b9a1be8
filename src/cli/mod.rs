//! Interactive command loop
//!
//! Bridges line-based user input with the models and storage layers.

pub mod repl;

pub use repl::{parse_input, Repl, Response};
