//! The transform stage: raw sources in, five mart tables out.

use std::time::Instant;

use tracing::{debug, info, warn};

use mart_model::{MartTables, RawSources};

use crate::dimension::{
    build_customer_dimension, build_date_dimension, build_employee_dimension,
    build_table_dimension,
};
use crate::error::Result;
use crate::fact::{FactResolutionEngine, ResolutionStats};

/// Tables built by one transform run plus the lookup statistics of the
/// fact resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    pub tables: MartTables,
    pub stats: ResolutionStats,
}

/// Build the four dimensions, then resolve the fact table against them.
///
/// Fails without producing any table when a required raw field is missing
/// or a reservation date cannot be parsed.
pub fn transform(sources: &RawSources) -> Result<TransformOutput> {
    let start = Instant::now();

    let tables = build_table_dimension(&sources.tables)?;
    debug!(row_count = tables.len(), "built DimTable");
    let customers = build_customer_dimension(&sources.customers)?;
    debug!(row_count = customers.len(), "built DimCustomer");
    let dates = build_date_dimension(&sources.reservations)?;
    debug!(row_count = dates.len(), "built DimDate");
    let employees = build_employee_dimension(&sources.employees)?;
    debug!(row_count = employees.len(), "built DimEmployee");

    let resolution = FactResolutionEngine::new(&tables, &customers, &dates, &employees)
        .resolve(&sources.reservations)?;
    let stats = resolution.stats;

    if stats.unresolved_dates > 0 {
        warn!(
            count = stats.unresolved_dates,
            "reservations without a matching DimDate row; DateKey left empty"
        );
    }
    if stats.unresolved_tables > 0 {
        warn!(
            count = stats.unresolved_tables,
            "reservations without a matching DimTable row; TableKey left empty"
        );
    }
    info!(
        reservations = stats.reservations,
        unknown_customers = stats.unknown_customers,
        unknown_employees = stats.unknown_employees,
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );

    Ok(TransformOutput {
        tables: MartTables {
            tables,
            customers,
            dates,
            employees,
            reservations: resolution.facts,
        },
        stats,
    })
}
