use std::path::PathBuf;

/// Default destination store.
pub const DEFAULT_MART_DB: &str = "restaurant_mart.db";

/// How the five table replacements are grouped into transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadMode {
    /// One transaction for all tables: either every table is replaced or
    /// none is.
    #[default]
    Atomic,
    /// One transaction per table. A failure leaves earlier tables replaced
    /// and later tables with their previous contents.
    PerTable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MartConfig {
    pub path: PathBuf,
    pub mode: LoadMode,
}

impl Default for MartConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MART_DB),
            mode: LoadMode::default(),
        }
    }
}
