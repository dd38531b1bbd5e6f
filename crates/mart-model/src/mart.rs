//! The five destination tables produced by one transform run.

use std::fmt;

use crate::dimension::{CustomerDim, DateDim, EmployeeDim, TableDim};
use crate::fact::FactReservation;

/// Identity of a destination table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MartTableKind {
    DimTable,
    DimCustomer,
    DimDate,
    DimEmployee,
    FactReservations,
}

impl MartTableKind {
    /// Load order: dimensions first, then the fact table.
    pub const ALL: [MartTableKind; 5] = [
        MartTableKind::DimTable,
        MartTableKind::DimCustomer,
        MartTableKind::DimDate,
        MartTableKind::DimEmployee,
        MartTableKind::FactReservations,
    ];

    /// Table name in the destination store.
    pub fn table_name(self) -> &'static str {
        match self {
            MartTableKind::DimTable => "DimTable",
            MartTableKind::DimCustomer => "DimCustomer",
            MartTableKind::DimDate => "DimDate",
            MartTableKind::DimEmployee => "DimEmployee",
            MartTableKind::FactReservations => "FactReservations",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MartTableKind::DimTable => "Restaurant tables",
            MartTableKind::DimCustomer => "Diners (with unknown member)",
            MartTableKind::DimDate => "Reservation calendar",
            MartTableKind::DimEmployee => "Staff (with unknown member)",
            MartTableKind::FactReservations => "Reservations",
        }
    }

    pub fn is_fact(self) -> bool {
        matches!(self, MartTableKind::FactReservations)
    }
}

impl fmt::Display for MartTableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// Four dimensions plus the fact table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MartTables {
    pub tables: Vec<TableDim>,
    pub customers: Vec<CustomerDim>,
    pub dates: Vec<DateDim>,
    pub employees: Vec<EmployeeDim>,
    pub reservations: Vec<FactReservation>,
}

impl MartTables {
    pub fn row_count(&self, kind: MartTableKind) -> usize {
        match kind {
            MartTableKind::DimTable => self.tables.len(),
            MartTableKind::DimCustomer => self.customers.len(),
            MartTableKind::DimDate => self.dates.len(),
            MartTableKind::DimEmployee => self.employees.len(),
            MartTableKind::FactReservations => self.reservations.len(),
        }
    }

    /// Tables that hold no rows and therefore count as not produced.
    pub fn missing_tables(&self) -> Vec<MartTableKind> {
        MartTableKind::ALL
            .into_iter()
            .filter(|kind| self.row_count(*kind) == 0)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_tables().is_empty()
    }
}
