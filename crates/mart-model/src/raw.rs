//! Raw records as delivered by the extraction collaborator.
//!
//! Every field is optional: an absent value is carried through to the
//! transform stage, which decides whether the field is required and reports
//! a [`ValidationError`](crate::ValidationError) when it is.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// One row of the restaurant floor plan (tabular source).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub table_id: Option<i64>,
    pub table_number: Option<i64>,
    pub section: Option<String>,
    pub max_capacity: Option<i64>,
}

/// One entry of the reservation log (hierarchical source).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReservation {
    /// Reservation identifier; the log may carry it as a number or a string.
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub reservation_id: Option<String>,
    /// Calendar date in `YYYY-MM-DD` form.
    #[serde(default)]
    pub reservation_date: Option<String>,
    #[serde(default)]
    pub table_id: Option<i64>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub party_size: Option<i64>,
    #[serde(default)]
    pub reservation_time: Option<String>,
}

/// A diner returned by the customer API, in response order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCustomer {
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// A staff member from the HR source store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEmployee {
    pub employee_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
}

/// The four raw sources the pipeline consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
    Tables,
    Reservations,
    Customers,
    Employees,
}

impl SourceKind {
    pub const ALL: [SourceKind; 4] = [
        SourceKind::Tables,
        SourceKind::Reservations,
        SourceKind::Customers,
        SourceKind::Employees,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Tables => "tables",
            SourceKind::Reservations => "reservations",
            SourceKind::Customers => "customers",
            SourceKind::Employees => "employees",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the extraction stage produced for one run.
#[derive(Debug, Clone, Default)]
pub struct RawSources {
    pub tables: Vec<RawTable>,
    pub reservations: Vec<RawReservation>,
    pub customers: Vec<RawCustomer>,
    pub employees: Vec<RawEmployee>,
}

impl RawSources {
    pub fn record_count(&self, kind: SourceKind) -> usize {
        match kind {
            SourceKind::Tables => self.tables.len(),
            SourceKind::Reservations => self.reservations.len(),
            SourceKind::Customers => self.customers.len(),
            SourceKind::Employees => self.employees.len(),
        }
    }

    /// Sources that delivered no records, in canonical order.
    pub fn empty_sources(&self) -> Vec<SourceKind> {
        SourceKind::ALL
            .into_iter()
            .filter(|kind| self.record_count(*kind) == 0)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.empty_sources().is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        StringOrNumber::Text(text) => text,
        StringOrNumber::Integer(number) => number.to_string(),
        StringOrNumber::Float(number) => number.to_string(),
    }))
}
