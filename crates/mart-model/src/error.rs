use thiserror::Error;

use crate::raw::SourceKind;

/// A raw record lacks a field the transform stage requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{source_kind} record {row}: missing required field `{field}`")]
pub struct ValidationError {
    pub source_kind: SourceKind,
    /// Zero-based position of the record within its source.
    pub row: usize,
    pub field: &'static str,
}

impl ValidationError {
    pub fn new(source_kind: SourceKind, row: usize, field: &'static str) -> Self {
        Self {
            source_kind,
            row,
            field,
        }
    }
}

/// Unwrap an optional raw field or report it as missing.
pub fn require<T>(
    value: Option<T>,
    source_kind: SourceKind,
    row: usize,
    field: &'static str,
) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::new(source_kind, row, field))
}
