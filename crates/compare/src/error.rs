//! Comparison Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A comparison error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for comparison operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The comparison path has no separator, or too few slugs. Show an
    /// "invalid comparison URL" message.
    #[display("invalid comparison path: {_0:?}")]
    InvalidFormat(#[error(not(source))] String),
    /// One or more slugs did not resolve to a phone. Show a "phone(s) not
    /// found" message.
    #[display("phone(s) not found: {}", _0.join(", "))]
    NotFound(#[error(not(source))] Vec<String>),
    /// A comparison needs at least two phones.
    #[display("at least 2 phones are needed for a comparison, got {_0}")]
    TooFewProducts(#[error(not(source))] usize),
    /// A comparison holds at most four phones.
    #[display("at most 4 phones can be compared, got {_0}")]
    TooManyProducts(#[error(not(source))] usize),
    /// Slot positions are zero-based and below the slot capacity.
    #[display("no comparison slot at position {_0}")]
    SlotOutOfRange(#[error(not(source))] usize),
    /// Every comparison slot is already occupied.
    #[display("all comparison slots are occupied")]
    SlotsFull,
    /// The phone is already in another slot.
    #[display("phone is already being compared: {_0}")]
    DuplicateProduct(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Paths and catalogs are either valid or they're not; retrying the
        // same input gives the same answer.
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_display() {
        assert_eq!(ErrorKind::InvalidFormat("nosep".to_string()).to_string(), "invalid comparison path: \"nosep\"");
        assert_eq!(
            ErrorKind::NotFound(vec!["pixel-9".to_string(), "galaxy-s24".to_string()]).to_string(),
            "phone(s) not found: pixel-9, galaxy-s24"
        );
        assert_eq!(ErrorKind::TooManyProducts(5).to_string(), "at most 4 phones can be compared, got 5");
    }

    #[test]
    fn error_kind_retryable() {
        assert!(!ErrorKind::SlotsFull.is_retryable());
        assert!(!ErrorKind::NotFound(vec![]).is_retryable());
    }
}
