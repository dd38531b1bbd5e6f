use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use mart_model::RawTable;

use crate::error::{ExtractionError, Result};

/// Read the restaurant floor plan.
///
/// Expected header: `table_id,table_number,section,max_capacity`. Cells are
/// trimmed and an empty cell becomes an absent field.
pub fn read_tables(path: &Path) -> Result<Vec<RawTable>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|source| ExtractionError::csv(path, source))?;
    let mut tables = Vec::new();
    for record in reader.deserialize::<RawTable>() {
        let table = record.map_err(|source| ExtractionError::csv(path, source))?;
        tables.push(table);
    }
    debug!(path = %path.display(), record_count = tables.len(), "read tables csv");
    Ok(tables)
}
