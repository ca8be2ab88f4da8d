use std::fmt;

use thiserror::Error;

/// Result type for survey code operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A fixed-width field of the survey code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Store,
    VisitType,
    Order,
    Minutes,
    CheckDigit,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Store => "store id",
            Field::VisitType => "visit type",
            Field::Order => "order",
            Field::Minutes => "minutes since epoch",
            Field::CheckDigit => "check digit",
        };
        f.write_str(name)
    }
}

/// Errors returned by survey code operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("empty input")]
    Empty,

    #[error("value does not fit in 64 bits")]
    ValueOverflow,

    #[error("{field} value {value} does not fit in {width} character(s)")]
    FieldOverflow { field: Field, value: u64, width: usize },

    #[error("{field} is negative: {value}")]
    NegativeInput { field: Field, value: i64 },

    #[error("invalid length: expected {expected} characters, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid group count: expected {expected}, got {got}")]
    InvalidGroups { expected: usize, got: usize },

    #[error("invalid price: {0}")]
    InvalidPrice(String),
}
