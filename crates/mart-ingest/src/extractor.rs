use std::time::Instant;

use tracing::info;

use mart_model::RawSources;

use crate::config::SourceConfig;
use crate::customers::CustomerApiClient;
use crate::error::Result;
use crate::reservations::read_reservations;
use crate::source_store::read_employees;
use crate::tables::read_tables;

/// Produces the raw record sets for one pipeline run.
pub trait SourceExtractor {
    /// Read all four sources. A failure in any one of them fails the whole
    /// extraction.
    fn extract(&self) -> Result<RawSources>;
}

/// Extractor backed by the files, endpoint and store named in a [`SourceConfig`].
#[derive(Debug, Clone)]
pub struct ConfiguredSources {
    config: SourceConfig,
}

impl ConfiguredSources {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }
}

impl SourceExtractor for ConfiguredSources {
    fn extract(&self) -> Result<RawSources> {
        let start = Instant::now();
        let tables = read_tables(&self.config.tables_csv)?;
        let reservations = read_reservations(&self.config.reservations_json)?;
        let customers = CustomerApiClient::new(
            self.config.customer_api_url.as_str(),
            self.config.request_timeout,
        )?
        .fetch_customers()?;
        let employees = read_employees(&self.config.source_db)?;
        info!(
            tables = tables.len(),
            reservations = reservations.len(),
            customers = customers.len(),
            employees = employees.len(),
            duration_ms = start.elapsed().as_millis(),
            "extraction complete"
        );
        Ok(RawSources {
            tables,
            reservations,
            customers,
            employees,
        })
    }
}
