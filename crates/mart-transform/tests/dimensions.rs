//! Tests for the dimension builders.

use chrono::NaiveDate;
use mart_model::{
    RawCustomer, RawEmployee, RawReservation, SourceKind, UNKNOWN_CUSTOMER_KEY,
    UNKNOWN_EMPLOYEE_KEY, ValidationError,
};
use mart_transform::{
    DateFormatError, ReservedKeyError, TransformError, build_customer_dimension,
    build_date_dimension, build_date_dimension_from_dates, build_employee_dimension,
};

fn customer(phone: &str, first: &str, last: &str) -> RawCustomer {
    RawCustomer {
        phone: Some(phone.to_string()),
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
    }
}

fn employee(id: i64, first: &str, last: &str, position: &str) -> RawEmployee {
    RawEmployee {
        employee_id: Some(id),
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        position: Some(position.to_string()),
    }
}

#[test]
fn customer_keys_follow_input_order() {
    let dims = build_customer_dimension(&[
        customer("555-0001", "Ana", "Lee"),
        customer("555-0002", "Bo", "Ng"),
        customer("555-0003", "Cy", "Park"),
    ])
    .expect("build customers");

    let keys: Vec<&str> = dims.iter().map(|dim| dim.customer_key.as_str()).collect();
    assert_eq!(keys, vec!["C1", "C2", "C3", "C-1"]);
    assert_eq!(dims[0].customer_name, "Ana Lee");
    assert_eq!(dims[0].phone, "555-0001");
}

#[test]
fn reordered_customers_receive_different_keys() {
    let ana = customer("555-0001", "Ana", "Lee");
    let bo = customer("555-0002", "Bo", "Ng");

    let first = build_customer_dimension(&[ana.clone(), bo.clone()]).expect("build");
    let second = build_customer_dimension(&[bo, ana]).expect("build");

    assert_eq!(first[0].phone, "555-0001");
    assert_eq!(first[0].customer_key, "C1");
    assert_eq!(second[1].phone, "555-0001");
    assert_eq!(second[1].customer_key, "C2");
}

#[test]
fn customer_dimension_always_ends_with_sentinel() {
    let dims = build_customer_dimension(&[]).expect("build");
    assert_eq!(dims.len(), 1);
    assert_eq!(dims[0].customer_key, UNKNOWN_CUSTOMER_KEY);
    assert_eq!(dims[0].customer_name, "Unknown Diner");
    assert_eq!(dims[0].phone, "Unknown");
}

#[test]
fn customer_without_phone_fails_validation() {
    let mut nameless = customer("555-0001", "Ana", "Lee");
    nameless.phone = None;
    let error = build_customer_dimension(&[nameless]).unwrap_err();
    assert_eq!(error, ValidationError::new(SourceKind::Customers, 0, "phone"));
}

#[test]
fn employee_dimension_keeps_ids_and_appends_sentinel() {
    let dims = build_employee_dimension(&[
        employee(101, "Sarah", "Chen", "Host"),
        employee(104, "Emily", "Brown", "Manager"),
    ])
    .expect("build employees");

    assert_eq!(dims.len(), 3);
    assert_eq!(dims[0].employee_key, 101);
    assert_eq!(dims[0].full_name, "Sarah Chen");
    assert_eq!(dims[1].position, "Manager");
    assert_eq!(dims[2].employee_key, UNKNOWN_EMPLOYEE_KEY);
    assert_eq!(dims[2].full_name, "Unknown Staff");
    assert_eq!(dims[2].position, "Unknown");
    assert_eq!(dims.iter().filter(|dim| dim.is_unknown()).count(), 1);
}

#[test]
fn source_employee_cannot_take_the_unknown_key() {
    let error = build_employee_dimension(&[
        employee(101, "Sarah", "Chen", "Host"),
        employee(UNKNOWN_EMPLOYEE_KEY, "Ghost", "Row", "Server"),
    ])
    .unwrap_err();

    assert_eq!(
        error,
        TransformError::ReservedKey(ReservedKeyError { row: 1, key: -1 })
    );
    insta::assert_snapshot!(
        error.to_string(),
        @"employees record 1: employee_id -1 is reserved for the unknown member"
    );
}

#[test]
fn employee_without_position_fails_validation() {
    let mut broken = employee(102, "Michael", "Smith", "Server");
    broken.position = None;
    let error = build_employee_dimension(&[broken]).unwrap_err();
    insta::assert_snapshot!(
        error.to_string(),
        @"employees record 0: missing required field `position`"
    );
}

#[test]
fn date_row_describes_the_calendar_day() {
    let dims = build_date_dimension_from_dates(["2024-03-01"]).expect("build dates");

    assert_eq!(dims.len(), 1);
    let row = &dims[0];
    assert_eq!(row.date_key, 20240301);
    assert_eq!(row.full_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(row.year, 2024);
    assert_eq!(row.month_name, "March");
    assert_eq!(row.day_of_week, "Friday");
}

#[test]
fn date_dimension_has_one_row_per_distinct_date() {
    let dims = build_date_dimension_from_dates([
        "2025-03-14",
        "2024-12-31",
        "2025-03-14",
        "2024-12-31",
        "2025-01-01",
    ])
    .expect("build dates");

    let keys: Vec<i64> = dims.iter().map(|dim| dim.date_key).collect();
    assert_eq!(keys, vec![20250314, 20241231, 20250101]);
}

#[test]
fn invalid_date_fails_the_whole_dimension() {
    let error = build_date_dimension_from_dates(["2024-03-01", "03/02/2024"]).unwrap_err();
    match error {
        TransformError::DateParse(parse) => {
            assert_eq!(parse.row, 1);
            assert_eq!(parse.value, "03/02/2024");
        }
        other => panic!("expected a date parse error, got {other:?}"),
    }
}

#[test]
fn padded_or_signed_dates_are_rejected() {
    for value in [" 2024-03-01", "+2024-03-01"] {
        let error = build_date_dimension_from_dates([value]).unwrap_err();
        match error {
            TransformError::DateParse(parse) => {
                assert_eq!(parse.value, value);
                assert_eq!(parse.source, DateFormatError::Layout);
            }
            other => panic!("expected a date parse error for {value:?}, got {other:?}"),
        }
    }
}

#[test]
fn impossible_calendar_date_is_rejected() {
    assert!(build_date_dimension_from_dates(["2023-02-29"]).is_err());
}

#[test]
fn reservation_without_date_fails_validation() {
    let reservations = vec![
        RawReservation {
            reservation_date: Some("2024-03-01".to_string()),
            ..RawReservation::default()
        },
        RawReservation::default(),
    ];
    let error = build_date_dimension(&reservations).unwrap_err();
    assert_eq!(
        error,
        TransformError::Validation(ValidationError::new(
            SourceKind::Reservations,
            1,
            "reservation_date"
        ))
    );
}
