//! Catalog Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A catalog error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The catalog file couldn't be read.
    #[display("could not read catalog: {}", _0.display())]
    Io(#[error(not(source))] PathBuf),
    /// The document isn't a CMS entry export.
    #[display("invalid catalog JSON")]
    InvalidJson,
    /// An entry is missing something every phone needs.
    #[display("entry {index} is missing required field: {field}")]
    InvalidEntry {
        /// Position of the entry in the export.
        index: usize,
        /// The missing field.
        field: &'static str,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::Io(_))
    }
}
