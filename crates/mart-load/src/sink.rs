use mart_model::{MartTableKind, MartTables};

use crate::config::LoadMode;
use crate::error::Result;

/// Row count written for one destination table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedTable {
    pub kind: MartTableKind,
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub mode: LoadMode,
    pub tables: Vec<LoadedTable>,
}

impl LoadReport {
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|table| table.rows).sum()
    }
}

/// Destination for a completed set of mart tables.
///
/// Implementations must re-check completeness themselves and refuse to
/// write anything when a table is missing.
pub trait MartSink {
    fn load(&mut self, tables: &MartTables) -> Result<LoadReport>;
}
