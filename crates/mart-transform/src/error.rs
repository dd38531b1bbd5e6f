use thiserror::Error;

use mart_model::ValidationError;

/// Why a reservation date string is not a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateFormatError {
    /// Surrounding whitespace or a leading sign; the value must start with
    /// the year digits.
    #[error("expected YYYY-MM-DD")]
    Layout,
    #[error(transparent)]
    Calendar(#[from] chrono::ParseError),
}

/// A reservation date that is not a `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("reservation {row}: invalid reservation_date {value:?}: {source}")]
pub struct DateParseError {
    pub row: usize,
    pub value: String,
    #[source]
    pub source: DateFormatError,
}

/// A source employee carries the key reserved for the unknown member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("employees record {row}: employee_id {key} is reserved for the unknown member")]
pub struct ReservedKeyError {
    pub row: usize,
    pub key: i64,
}

/// Why the transform stage produced no tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    DateParse(#[from] DateParseError),
    #[error(transparent)]
    ReservedKey(#[from] ReservedKeyError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
