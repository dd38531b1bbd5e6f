//! Star-schema transform for the restaurant reservation mart.
//!
//! - **dimension**: table, customer, date, and employee dimension builders
//! - **fact**: hash-lookup resolution of reservations into fact rows
//! - **pipeline**: the whole transform stage over one set of raw sources
//! - **frame**: DataFrame materialization of the built tables

pub mod dimension;
pub mod error;
pub mod fact;
pub mod frame;
pub mod pipeline;

pub use dimension::{
    build_customer_dimension, build_date_dimension, build_date_dimension_from_dates,
    build_employee_dimension, build_table_dimension, date_key,
};
pub use error::{DateFormatError, DateParseError, ReservedKeyError, Result, TransformError};
pub use fact::{FactResolution, FactResolutionEngine, ResolutionStats};
pub use frame::{MartFrame, build_mart_frames};
pub use pipeline::{TransformOutput, transform};
