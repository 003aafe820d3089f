//! Error types for database opening, lookups, and field access.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while reading a database.
///
/// A *miss* (an address not covered by any row) and an *absent field* (a
/// field the open database variant does not carry) are not errors; both are
/// reported as `None` by [`Database::lookup`](crate::Database::lookup) and
/// the [`Record`](crate::Record) accessors.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A positional read failed or returned fewer bytes than required.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    /// The file starts with a `PK` zip signature. Databases ship zipped and
    /// must be extracted before use.
    #[error("database is zipped (extract the BIN file first)")]
    Zipped,

    /// The header is internally inconsistent, or file contents contradict
    /// the descriptor table for the detected database variant.
    #[error("database is corrupt: {0}")]
    Corrupt(String),

    /// The database predates 2021 and lacks the product code byte.
    #[error("database is too old (date: {0})")]
    TooOld(String),

    /// The product/type combination is not known to this crate.
    #[error("unsupported database {0}")]
    Unsupported(String),

    /// The queried address could not be parsed.
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),

    /// A string payload claims more bytes than the file holds.
    #[error("string payload truncated")]
    Short,

    /// A string field could not be converted to the requested type.
    #[error("parse error: {0}")]
    Parse(String),
}
