use polars::prelude::{AnyValue, DataType};

use mart_model::{MartTableKind, RawCustomer, RawEmployee, RawReservation, RawSources, RawTable};
use mart_transform::{build_mart_frames, transform};

fn sample_sources() -> RawSources {
    RawSources {
        tables: vec![RawTable {
            table_id: Some(5),
            table_number: Some(15),
            section: Some("Bar".to_string()),
            max_capacity: Some(2),
        }],
        reservations: vec![
            RawReservation {
                reservation_id: Some("1".to_string()),
                reservation_date: Some("2024-03-01".to_string()),
                table_id: Some(5),
                customer_phone: Some("555-0001".to_string()),
                employee_id: Some(101),
                party_size: Some(2),
                reservation_time: Some("20:00".to_string()),
            },
            RawReservation {
                reservation_id: Some("2".to_string()),
                reservation_date: Some("2024-03-01".to_string()),
                table_id: Some(77),
                customer_phone: None,
                employee_id: None,
                party_size: None,
                reservation_time: None,
            },
        ],
        customers: vec![RawCustomer {
            phone: Some("555-0001".to_string()),
            first_name: Some("Ana".to_string()),
            last_name: Some("Lee".to_string()),
        }],
        employees: vec![RawEmployee {
            employee_id: Some(101),
            first_name: Some("Sarah".to_string()),
            last_name: Some("Chen".to_string()),
            position: Some("Host".to_string()),
        }],
    }
}

#[test]
fn frames_follow_load_order_and_row_counts() {
    let output = transform(&sample_sources()).expect("transform");
    let frames = build_mart_frames(&output.tables).expect("frames");

    let kinds: Vec<MartTableKind> = frames.iter().map(|frame| frame.kind).collect();
    assert_eq!(kinds, MartTableKind::ALL.to_vec());
    for frame in &frames {
        assert_eq!(frame.record_count(), output.tables.row_count(frame.kind));
    }
}

#[test]
fn fact_frame_uses_destination_columns_and_nulls() {
    let output = transform(&sample_sources()).expect("transform");
    let frames = build_mart_frames(&output.tables).expect("frames");
    let fact = frames
        .iter()
        .find(|frame| frame.kind == MartTableKind::FactReservations)
        .expect("fact frame");

    let names: Vec<String> = fact
        .data
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "ReservationKey",
            "DateKey",
            "CustomerKey",
            "TableKey",
            "EmployeeKey",
            "PartySize",
            "ReservationTime"
        ]
    );

    let table_key = fact.data.column("TableKey").expect("TableKey");
    assert_eq!(table_key.dtype(), &DataType::Int64);
    assert_eq!(table_key.get(0).expect("row 0"), AnyValue::Int64(5));
    assert_eq!(table_key.get(1).expect("row 1"), AnyValue::Null);
    assert_eq!(table_key.null_count(), 1);
}

#[test]
fn date_frame_renders_full_date_as_text() {
    let output = transform(&sample_sources()).expect("transform");
    let frames = build_mart_frames(&output.tables).expect("frames");
    let dates = frames
        .iter()
        .find(|frame| frame.kind == MartTableKind::DimDate)
        .expect("date frame");

    assert_eq!(dates.record_count(), 1);
    let full_date = dates.data.column("FullDate").expect("FullDate");
    assert_eq!(full_date.dtype(), &DataType::String);
    assert_eq!(full_date.get(0).expect("row 0"), AnyValue::String("2024-03-01"));
}
