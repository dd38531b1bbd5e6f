//! SQLite destination.
//!
//! Every table is dropped and recreated from its frame on each load; there
//! is no append or merge. The DDL is derived from the frame dtypes:
//! `Int64` columns become `INTEGER`, `String` columns become `TEXT`.

use std::path::PathBuf;
use std::time::Instant;

use polars::prelude::{AnyValue, Column, DataType};
use rusqlite::types::Value;
use rusqlite::{Connection, params_from_iter};
use tracing::{debug, info, warn};

use mart_model::{MartTableKind, MartTables};
use mart_transform::{MartFrame, build_mart_frames};

use crate::config::{LoadMode, MartConfig};
use crate::error::{LoadError, Result, WriteError};
use crate::sink::{LoadReport, LoadedTable, MartSink};

/// Writes mart tables into a SQLite database file.
///
/// The connection is opened per [`load`](MartSink::load) call and closed
/// when the call returns, whatever the outcome.
#[derive(Debug, Clone)]
pub struct SqliteMart {
    config: MartConfig,
}

impl SqliteMart {
    pub fn new(config: MartConfig) -> Self {
        Self { config }
    }

    fn open(&self) -> Result<Connection> {
        Connection::open(&self.config.path).map_err(|source| LoadError::Open {
            path: PathBuf::from(&self.config.path),
            source,
        })
    }
}

impl MartSink for SqliteMart {
    fn load(&mut self, tables: &MartTables) -> Result<LoadReport> {
        let missing = tables.missing_tables();
        if !missing.is_empty() {
            warn!(missing = missing.len(), "refusing to load an incomplete mart");
            return Err(LoadError::Incomplete { missing });
        }

        let start = Instant::now();
        let frames = build_mart_frames(tables).map_err(LoadError::Frame)?;
        let mut conn = self.open()?;
        let loaded = match self.config.mode {
            LoadMode::Atomic => load_atomic(&mut conn, &frames)?,
            LoadMode::PerTable => load_per_table(&mut conn, &frames)?,
        };
        let report = LoadReport {
            mode: self.config.mode,
            tables: loaded,
        };
        info!(
            path = %self.config.path.display(),
            mode = ?self.config.mode,
            total_rows = report.total_rows(),
            duration_ms = start.elapsed().as_millis(),
            "load complete"
        );
        Ok(report)
    }
}

fn load_atomic(conn: &mut Connection, frames: &[MartFrame]) -> Result<Vec<LoadedTable>> {
    let tx = conn.transaction().map_err(|source| LoadError::Write {
        table: MartTableKind::DimTable,
        committed: Vec::new(),
        source: source.into(),
    })?;
    let mut loaded = Vec::with_capacity(frames.len());
    for frame in frames {
        let rows = replace_table(&tx, frame).map_err(|source| LoadError::Write {
            table: frame.kind,
            committed: Vec::new(),
            source,
        })?;
        loaded.push(LoadedTable {
            kind: frame.kind,
            rows,
        });
    }
    let last = frames
        .last()
        .map_or(MartTableKind::FactReservations, |frame| frame.kind);
    tx.commit().map_err(|source| LoadError::Commit {
        table: last,
        committed: Vec::new(),
        source,
    })?;
    Ok(loaded)
}

fn load_per_table(conn: &mut Connection, frames: &[MartFrame]) -> Result<Vec<LoadedTable>> {
    let mut loaded: Vec<LoadedTable> = Vec::with_capacity(frames.len());
    let committed = |loaded: &[LoadedTable]| -> Vec<MartTableKind> {
        loaded.iter().map(|table| table.kind).collect()
    };
    for frame in frames {
        let tx = conn.transaction().map_err(|source| LoadError::Write {
            table: frame.kind,
            committed: committed(&loaded),
            source: source.into(),
        })?;
        let rows = replace_table(&tx, frame).map_err(|source| LoadError::Write {
            table: frame.kind,
            committed: committed(&loaded),
            source,
        })?;
        tx.commit().map_err(|source| LoadError::Commit {
            table: frame.kind,
            committed: committed(&loaded),
            source,
        })?;
        loaded.push(LoadedTable {
            kind: frame.kind,
            rows,
        });
    }
    Ok(loaded)
}

/// Drop, recreate and fill one table. Returns the number of rows written.
fn replace_table(conn: &Connection, frame: &MartFrame) -> std::result::Result<usize, WriteError> {
    let name = frame.table_name();
    let columns = frame.data.get_columns();

    let mut definitions = Vec::with_capacity(columns.len());
    for column in columns {
        definitions.push(format!("\"{}\" {}", column.name(), sql_type(column)?));
    }
    conn.execute_batch(&format!(
        "DROP TABLE IF EXISTS \"{name}\";\nCREATE TABLE \"{name}\" ({});",
        definitions.join(", ")
    ))?;

    let placeholders: Vec<String> = (1..=columns.len()).map(|index| format!("?{index}")).collect();
    let mut insert = conn.prepare(&format!(
        "INSERT INTO \"{name}\" VALUES ({})",
        placeholders.join(", ")
    ))?;
    let height = frame.record_count();
    for row in 0..height {
        let mut values = Vec::with_capacity(columns.len());
        for column in columns {
            values.push(sql_value(column, column.get(row)?)?);
        }
        insert.execute(params_from_iter(values.iter()))?;
    }
    debug!(table = name, rows = height, "replaced table");
    Ok(height)
}

fn sql_type(column: &Column) -> std::result::Result<&'static str, WriteError> {
    match column.dtype() {
        DataType::Int64 | DataType::Int32 => Ok("INTEGER"),
        DataType::String => Ok("TEXT"),
        other => Err(WriteError::UnsupportedColumn {
            column: column.name().to_string(),
            dtype: other.to_string(),
        }),
    }
}

fn sql_value(column: &Column, value: AnyValue<'_>) -> std::result::Result<Value, WriteError> {
    match value {
        AnyValue::Null => Ok(Value::Null),
        AnyValue::Int64(number) => Ok(Value::Integer(number)),
        AnyValue::Int32(number) => Ok(Value::Integer(i64::from(number))),
        AnyValue::String(text) => Ok(Value::Text(text.to_string())),
        AnyValue::StringOwned(text) => Ok(Value::Text(text.to_string())),
        other => Err(WriteError::UnsupportedColumn {
            column: column.name().to_string(),
            dtype: other.dtype().to_string(),
        }),
    }
}
