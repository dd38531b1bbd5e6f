//! Mart tables as Polars DataFrames.
//!
//! A [`MartFrame`] pairs a DataFrame with the destination table it will
//! replace. Column names and order match the destination schema; keys and
//! counts are `Int64`, everything else is `String` (`FullDate` is rendered as
//! `YYYY-MM-DD`). Unresolved fact keys are nulls.

use polars::prelude::{Column, DataFrame, NamedFrom, PolarsResult, Series};

use mart_model::{
    CustomerDim, DateDim, EmployeeDim, FactReservation, MartTableKind, MartTables, TableDim,
};

/// A destination table materialized as a DataFrame.
#[derive(Debug, Clone)]
pub struct MartFrame {
    pub kind: MartTableKind,
    pub data: DataFrame,
}

impl MartFrame {
    pub fn new(kind: MartTableKind, data: DataFrame) -> Self {
        Self { kind, data }
    }

    pub fn table_name(&self) -> &'static str {
        self.kind.table_name()
    }

    /// Returns the number of records in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}

/// Materialize all five tables in load order.
pub fn build_mart_frames(tables: &MartTables) -> PolarsResult<Vec<MartFrame>> {
    let mut frames = Vec::with_capacity(MartTableKind::ALL.len());
    for kind in MartTableKind::ALL {
        let data = match kind {
            MartTableKind::DimTable => table_frame(&tables.tables)?,
            MartTableKind::DimCustomer => customer_frame(&tables.customers)?,
            MartTableKind::DimDate => date_frame(&tables.dates)?,
            MartTableKind::DimEmployee => employee_frame(&tables.employees)?,
            MartTableKind::FactReservations => fact_frame(&tables.reservations)?,
        };
        frames.push(MartFrame::new(kind, data));
    }
    Ok(frames)
}

fn table_frame(rows: &[TableDim]) -> PolarsResult<DataFrame> {
    let table_key: Vec<i64> = rows.iter().map(|row| row.table_key).collect();
    let table_number: Vec<i64> = rows.iter().map(|row| row.table_number).collect();
    let section: Vec<String> = rows.iter().map(|row| row.section.clone()).collect();
    let capacity: Vec<i64> = rows.iter().map(|row| row.capacity).collect();
    let columns: Vec<Column> = vec![
        Series::new("TableKey".into(), table_key).into(),
        Series::new("TableNumber".into(), table_number).into(),
        Series::new("Section".into(), section).into(),
        Series::new("Capacity".into(), capacity).into(),
    ];
    DataFrame::new(columns)
}

fn customer_frame(rows: &[CustomerDim]) -> PolarsResult<DataFrame> {
    let customer_key: Vec<String> = rows.iter().map(|row| row.customer_key.clone()).collect();
    let customer_name: Vec<String> = rows.iter().map(|row| row.customer_name.clone()).collect();
    let phone: Vec<String> = rows.iter().map(|row| row.phone.clone()).collect();
    let columns: Vec<Column> = vec![
        Series::new("CustomerKey".into(), customer_key).into(),
        Series::new("CustomerName".into(), customer_name).into(),
        Series::new("Phone".into(), phone).into(),
    ];
    DataFrame::new(columns)
}

fn date_frame(rows: &[DateDim]) -> PolarsResult<DataFrame> {
    let date_key: Vec<i64> = rows.iter().map(|row| row.date_key).collect();
    let full_date: Vec<String> = rows.iter().map(|row| row.full_date.to_string()).collect();
    let month_name: Vec<String> = rows.iter().map(|row| row.month_name.clone()).collect();
    let year: Vec<i64> = rows.iter().map(|row| i64::from(row.year)).collect();
    let day_of_week: Vec<String> = rows.iter().map(|row| row.day_of_week.clone()).collect();
    let columns: Vec<Column> = vec![
        Series::new("DateKey".into(), date_key).into(),
        Series::new("FullDate".into(), full_date).into(),
        Series::new("MonthName".into(), month_name).into(),
        Series::new("Year".into(), year).into(),
        Series::new("DayOfWeek".into(), day_of_week).into(),
    ];
    DataFrame::new(columns)
}

fn employee_frame(rows: &[EmployeeDim]) -> PolarsResult<DataFrame> {
    let employee_key: Vec<i64> = rows.iter().map(|row| row.employee_key).collect();
    let full_name: Vec<String> = rows.iter().map(|row| row.full_name.clone()).collect();
    let position: Vec<String> = rows.iter().map(|row| row.position.clone()).collect();
    let columns: Vec<Column> = vec![
        Series::new("EmployeeKey".into(), employee_key).into(),
        Series::new("FullName".into(), full_name).into(),
        Series::new("Position".into(), position).into(),
    ];
    DataFrame::new(columns)
}

fn fact_frame(rows: &[FactReservation]) -> PolarsResult<DataFrame> {
    let reservation_key: Vec<String> = rows.iter().map(|row| row.reservation_key.clone()).collect();
    let date_key: Vec<Option<i64>> = rows.iter().map(|row| row.date_key).collect();
    let customer_key: Vec<String> = rows.iter().map(|row| row.customer_key.clone()).collect();
    let table_key: Vec<Option<i64>> = rows.iter().map(|row| row.table_key).collect();
    let employee_key: Vec<i64> = rows.iter().map(|row| row.employee_key).collect();
    let party_size: Vec<Option<i64>> = rows.iter().map(|row| row.party_size).collect();
    let reservation_time: Vec<Option<String>> =
        rows.iter().map(|row| row.reservation_time.clone()).collect();
    let columns: Vec<Column> = vec![
        Series::new("ReservationKey".into(), reservation_key).into(),
        Series::new("DateKey".into(), date_key).into(),
        Series::new("CustomerKey".into(), customer_key).into(),
        Series::new("TableKey".into(), table_key).into(),
        Series::new("EmployeeKey".into(), employee_key).into(),
        Series::new("PartySize".into(), party_size).into(),
        Series::new("ReservationTime".into(), reservation_time).into(),
    ];
    DataFrame::new(columns)
}
