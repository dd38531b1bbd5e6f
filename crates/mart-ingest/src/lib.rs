//! Extraction of the four raw reservation-mart sources.
//!
//! - **tables**: restaurant floor plan from CSV
//! - **reservations**: reservation log from JSON
//! - **customers**: diner list from the customer HTTP API
//! - **source_store**: staff roster from the HR SQLite database

pub mod config;
pub mod customers;
pub mod error;
pub mod extractor;
pub mod reservations;
pub mod source_store;
pub mod tables;

pub use config::{
    DEFAULT_CUSTOMER_API_URL, DEFAULT_REQUEST_TIMEOUT, DEFAULT_RESERVATIONS_JSON,
    DEFAULT_SOURCE_DB, DEFAULT_TABLES_CSV, SourceConfig,
};
pub use customers::{CustomerApiClient, parse_customer_response};
pub use error::{ExtractionError, Result};
pub use extractor::{ConfiguredSources, SourceExtractor};
pub use reservations::read_reservations;
pub use source_store::{DEMO_EMPLOYEES, read_employees, seed_source_store};
pub use tables::read_tables;
