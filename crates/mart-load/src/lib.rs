//! Load stage for the restaurant reservation mart.
//!
//! A [`MartSink`] receives the five built tables and replaces their
//! destination counterparts. [`SqliteMart`] is the SQLite implementation.

pub mod config;
pub mod error;
pub mod sink;
pub mod sqlite;

pub use config::{DEFAULT_MART_DB, LoadMode, MartConfig};
pub use error::{LoadError, Result, WriteError};
pub use sink::{LoadReport, LoadedTable, MartSink};
pub use sqlite::SqliteMart;
