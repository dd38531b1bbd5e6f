//! Calendar dimension derived from reservation dates.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use mart_model::{DateDim, RawReservation, SourceKind, require};

use crate::error::{DateFormatError, DateParseError, Result};

/// Format of `reservation_date` in the reservation log.
pub const RESERVATION_DATE_FORMAT: &str = "%Y-%m-%d";

/// `YYYYMMDD` as an integer.
pub fn date_key(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Parse a `YYYY-MM-DD` date.
///
/// chrono tolerates leading whitespace and a sign before `%Y`; both are
/// rejected here so the value has to start with the year digits.
pub fn parse_reservation_date(value: &str) -> std::result::Result<NaiveDate, DateFormatError> {
    let starts_with_digit = value.bytes().next().is_some_and(|byte| byte.is_ascii_digit());
    if !starts_with_digit || value.trim() != value {
        return Err(DateFormatError::Layout);
    }
    Ok(NaiveDate::parse_from_str(value, RESERVATION_DATE_FORMAT)?)
}

fn date_row(date: NaiveDate) -> DateDim {
    DateDim {
        date_key: date_key(date),
        full_date: date,
        month_name: date.format("%B").to_string(),
        year: date.year(),
        day_of_week: date.format("%A").to_string(),
    }
}

/// Build `DimDate` with one row per distinct calendar date, in order of
/// first appearance.
///
/// Any value that is not a calendar date fails the whole build.
pub fn build_date_dimension_from_dates<'a, I>(dates: I) -> Result<Vec<DateDim>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut dims = Vec::new();
    for (row, value) in dates.into_iter().enumerate() {
        let date = parse_reservation_date(value).map_err(|source| DateParseError {
            row,
            value: value.to_string(),
            source,
        })?;
        if seen.insert(date) {
            dims.push(date_row(date));
        }
    }
    Ok(dims)
}

/// Build `DimDate` from the reservation log. A reservation without a date is
/// a validation error.
pub fn build_date_dimension(reservations: &[RawReservation]) -> Result<Vec<DateDim>> {
    let mut dates = Vec::with_capacity(reservations.len());
    for (row, reservation) in reservations.iter().enumerate() {
        dates.push(require(
            reservation.reservation_date.as_deref(),
            SourceKind::Reservations,
            row,
            "reservation_date",
        )?);
    }
    build_date_dimension_from_dates(dates)
}
