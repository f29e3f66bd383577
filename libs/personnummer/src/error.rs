//! Error types for identity number parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating identity numbers.
///
/// [`validate`](crate::validate) only ever returns [`Null`](Self::Null),
/// [`Empty`](Self::Empty) and [`Parsing`](Self::Parsing); a well-formed number
/// with a bad checksum or date is `Ok(false)` there. The strict
/// [`parse`](crate::Validator::parse) reports those as [`Checksum`](Self::Checksum)
/// and [`Date`](Self::Date).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersonnummerError {
    /// No input was supplied.
    #[error("identity number is absent")]
    Null,

    /// The input string is empty.
    #[error("identity number cannot be empty")]
    Empty,

    /// The input does not match the `[CC]YYMMDD[-+]NNNC` grammar.
    #[error("failed to parse personal identity number: {message}")]
    Parsing { message: String },

    /// The check digit does not satisfy the Luhn checksum.
    #[error("checksum mismatch: expected check digit {expected}, got {actual}")]
    Checksum { expected: u8, actual: u8 },

    /// Neither the day nor the day minus 60 forms a real calendar date.
    ///
    /// `year` is the two-digit year when the century window could not
    /// resolve it.
    #[error("no such date: {year:04}-{month:02}-{day:02}")]
    Date { year: i32, month: u8, day: u8 },
}

impl PersonnummerError {
    pub(crate) fn parsing(message: impl Into<String>) -> Self {
        Self::Parsing {
            message: message.into(),
        }
    }

    /// Returns true if the input was absent.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if the input was an empty string.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns true if the input had the wrong shape.
    pub fn is_parsing(&self) -> bool {
        matches!(self, Self::Parsing { .. })
    }

    /// Returns true if the input was well-formed but is not a valid number.
    pub fn is_invalid_number(&self) -> bool {
        matches!(self, Self::Checksum { .. } | Self::Date { .. })
    }
}
