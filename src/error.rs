//! CLI Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A CLI error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for CLI commands.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("configuration error")]
    Config,
    /// No catalog on the command-line or in the config file.
    #[display("no catalog given; pass --catalog or set `catalog` in the config file")]
    MissingCatalog,
    #[display("could not load catalog")]
    Catalog,
    /// The comparison path, slugs or selection were rejected.
    #[display("comparison failed")]
    Compare,
    #[display("no phone with slug: {_0}")]
    UnknownPhone(#[error(not(source))] String),
    #[display("could not write output")]
    Io,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::Io)
    }

    /// Process exit status: `EX_TEMPFAIL` (75) when retrying might help,
    /// otherwise 1.
    pub fn exit_code(&self) -> u8 {
        match self.is_retryable() {
            true => 75,
            false => 1,
        }
    }
}
