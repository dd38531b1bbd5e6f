//! Locations of the four raw sources.

use std::path::PathBuf;
use std::time::Duration;

/// Default floor-plan CSV.
pub const DEFAULT_TABLES_CSV: &str = "tables.csv";

/// Default reservation log.
pub const DEFAULT_RESERVATIONS_JSON: &str = "reservations_log.json";

/// Default customer API endpoint (seeded so results are stable across runs).
pub const DEFAULT_CUSTOMER_API_URL: &str = "https://randomuser.me/api/?results=5&seed=midterm";

/// Default HR source store.
pub const DEFAULT_SOURCE_DB: &str = "source_hr.db";

/// HTTP request timeout for the customer API.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub tables_csv: PathBuf,
    pub reservations_json: PathBuf,
    pub customer_api_url: String,
    pub source_db: PathBuf,
    pub request_timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            tables_csv: PathBuf::from(DEFAULT_TABLES_CSV),
            reservations_json: PathBuf::from(DEFAULT_RESERVATIONS_JSON),
            customer_api_url: DEFAULT_CUSTOMER_API_URL.to_string(),
            source_db: PathBuf::from(DEFAULT_SOURCE_DB),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}
