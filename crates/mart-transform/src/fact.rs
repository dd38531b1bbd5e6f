//! Resolution of raw reservations into `FactReservations`.
//!
//! Four left-outer lookups are applied to every reservation in order: date,
//! table, customer, employee. Each lookup is a hash map built once from its
//! dimension, keyed by the join value. When a dimension holds the same join
//! value twice the first row wins, so a reservation can never fan out into
//! several fact rows and no reservation is ever dropped.
//!
//! Customer and employee misses fall back to the unknown members (`C-1`,
//! `-1`). Date and table misses have no unknown member and leave the key
//! unset.

use std::collections::HashMap;

use chrono::NaiveDate;

use mart_model::{
    CustomerDim, DateDim, EmployeeDim, FactReservation, RawReservation, SourceKind, TableDim,
    UNKNOWN_CUSTOMER_KEY, UNKNOWN_EMPLOYEE_KEY, ValidationError, require,
};

use crate::dimension::parse_reservation_date;

/// Lookup outcome counts for one resolution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionStats {
    pub reservations: usize,
    /// Reservations left without a `DateKey`.
    pub unresolved_dates: usize,
    /// Reservations left without a `TableKey`.
    pub unresolved_tables: usize,
    /// Reservations resolved to the unknown customer.
    pub unknown_customers: usize,
    /// Reservations resolved to the unknown employee.
    pub unknown_employees: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactResolution {
    pub facts: Vec<FactReservation>,
    pub stats: ResolutionStats,
}

/// Join-value lookups over the four completed dimensions.
pub struct FactResolutionEngine<'a> {
    dates: HashMap<NaiveDate, i64>,
    tables: HashMap<i64, i64>,
    customers: HashMap<&'a str, &'a str>,
    employees: HashMap<i64, i64>,
}

impl<'a> FactResolutionEngine<'a> {
    pub fn new(
        tables: &'a [TableDim],
        customers: &'a [CustomerDim],
        dates: &'a [DateDim],
        employees: &'a [EmployeeDim],
    ) -> Self {
        let mut date_lookup = HashMap::with_capacity(dates.len());
        for dim in dates {
            date_lookup.entry(dim.full_date).or_insert(dim.date_key);
        }
        let mut table_lookup = HashMap::with_capacity(tables.len());
        for dim in tables {
            table_lookup.entry(dim.table_key).or_insert(dim.table_key);
        }
        let mut customer_lookup = HashMap::with_capacity(customers.len());
        for dim in customers {
            customer_lookup
                .entry(dim.phone.as_str())
                .or_insert(dim.customer_key.as_str());
        }
        let mut employee_lookup = HashMap::with_capacity(employees.len());
        for dim in employees {
            employee_lookup
                .entry(dim.employee_key)
                .or_insert(dim.employee_key);
        }
        Self {
            dates: date_lookup,
            tables: table_lookup,
            customers: customer_lookup,
            employees: employee_lookup,
        }
    }

    fn date_key(&self, reservation_date: Option<&str>) -> Option<i64> {
        let date = parse_reservation_date(reservation_date?).ok()?;
        self.dates.get(&date).copied()
    }

    fn table_key(&self, table_id: Option<i64>) -> Option<i64> {
        self.tables.get(&table_id?).copied()
    }

    fn customer_key(&self, phone: Option<&str>) -> Option<&'a str> {
        phone.and_then(|phone| self.customers.get(phone).copied())
    }

    fn employee_key(&self, employee_id: Option<i64>) -> Option<i64> {
        employee_id.and_then(|id| self.employees.get(&id).copied())
    }

    /// Resolve every reservation. The output has exactly one fact row per
    /// input row, in input order.
    pub fn resolve(
        &self,
        reservations: &[RawReservation],
    ) -> Result<FactResolution, ValidationError> {
        let mut stats = ResolutionStats {
            reservations: reservations.len(),
            ..ResolutionStats::default()
        };
        let mut facts = Vec::with_capacity(reservations.len());
        for (row, reservation) in reservations.iter().enumerate() {
            let reservation_key = require(
                reservation.reservation_id.clone(),
                SourceKind::Reservations,
                row,
                "reservation_id",
            )?;

            let date_key = self.date_key(reservation.reservation_date.as_deref());
            if date_key.is_none() {
                stats.unresolved_dates += 1;
            }
            let table_key = self.table_key(reservation.table_id);
            if table_key.is_none() {
                stats.unresolved_tables += 1;
            }
            let customer_key = match self.customer_key(reservation.customer_phone.as_deref()) {
                Some(key) => key,
                None => {
                    stats.unknown_customers += 1;
                    UNKNOWN_CUSTOMER_KEY
                }
            };
            let employee_key = match self.employee_key(reservation.employee_id) {
                Some(key) => key,
                None => {
                    stats.unknown_employees += 1;
                    UNKNOWN_EMPLOYEE_KEY
                }
            };

            facts.push(FactReservation {
                reservation_key,
                date_key,
                customer_key: customer_key.to_string(),
                table_key,
                employee_key,
                party_size: reservation.party_size,
                reservation_time: reservation.reservation_time.clone(),
            });
        }
        Ok(FactResolution { facts, stats })
    }
}
