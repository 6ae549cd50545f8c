//! Error types for roster, target and lookup-table data.
//!
//! The simulation core never fails; only the data surfaces around it do.

use std::fmt;
use std::io;

/// Errors raised while reading or validating breeding data.
#[derive(Debug)]
pub enum DataError {
    /// Underlying file I/O failed.
    Io(io::Error),
    /// JSON document could not be parsed.
    Json(serde_json::Error),
    /// A CSV row was malformed.
    Csv {
        /// 1-based line number in the source file.
        line: usize,
        /// What was wrong with the row.
        reason: String,
    },
    /// An IV value was outside `[0, 31]`.
    StatOutOfRange {
        /// The offending value.
        value: u32,
    },
    /// A nature name did not match any of the 25 natures.
    UnknownNature(String),
    /// A stat name did not match any of the six stats.
    UnknownStat(String),
    /// An item name was not recognised.
    UnknownItem(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "invalid JSON: {e}"),
            Self::Csv { line, reason } => write!(f, "line {line}: {reason}"),
            Self::StatOutOfRange { value } => {
                write!(f, "IV value {value} out of range (expected 0-31)")
            }
            Self::UnknownNature(name) => write!(f, "unknown nature: {name:?}"),
            Self::UnknownStat(name) => write!(f, "unknown stat: {name:?}"),
            Self::UnknownItem(name) => write!(f, "unknown item: {name:?}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DataError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for data loading.
pub type DataResult<T> = Result<T, DataError>;
