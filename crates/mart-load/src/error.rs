#![deny(unsafe_code)]

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

use mart_model::MartTableKind;

/// Failure while replacing a single destination table.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Sql(#[from] rusqlite::Error),
    #[error(transparent)]
    Frame(#[from] PolarsError),
    #[error("column {column} has unsupported type {dtype}")]
    UnsupportedColumn { column: String, dtype: String },
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("load aborted, tables not produced: {}", table_list(.missing))]
    Incomplete { missing: Vec<MartTableKind> },

    #[error("failed to materialize mart tables: {0}")]
    Frame(#[source] PolarsError),

    #[error("failed to open mart store {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// `committed` lists the tables already replaced before the failure;
    /// it is only non-empty for per-table loads.
    #[error("failed to write {table}: {source}")]
    Write {
        table: MartTableKind,
        committed: Vec<MartTableKind>,
        #[source]
        source: WriteError,
    },

    #[error("failed to commit {table}: {source}")]
    Commit {
        table: MartTableKind,
        committed: Vec<MartTableKind>,
        #[source]
        source: rusqlite::Error,
    },
}

impl LoadError {
    /// Tables that were replaced in the destination despite the failure.
    pub fn committed_tables(&self) -> &[MartTableKind] {
        match self {
            Self::Write { committed, .. } | Self::Commit { committed, .. } => committed,
            Self::Incomplete { .. } | Self::Frame(_) | Self::Open { .. } => &[],
        }
    }

    /// Whether the destination may now hold a mix of old and new tables.
    pub fn is_partial(&self) -> bool {
        !self.committed_tables().is_empty()
    }
}

fn table_list(kinds: &[MartTableKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.table_name())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, LoadError>;
