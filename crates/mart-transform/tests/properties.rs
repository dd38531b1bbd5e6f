//! Property tests for the transform stage.

use chrono::Datelike;
use proptest::prelude::*;

use mart_model::{RawCustomer, RawEmployee, RawReservation, RawSources, RawTable};
use mart_transform::transform;

fn arb_date() -> impl Strategy<Value = String> {
    (2020i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(year, month, day)| format!("{year:04}-{month:02}-{day:02}"))
}

fn arb_reservation() -> impl Strategy<Value = RawReservation> {
    (
        0u32..10_000,
        arb_date(),
        prop::option::of(0i64..8),
        prop::option::of(0u32..8),
        prop::option::of(95i64..110),
        prop::option::of(1i64..12),
    )
        .prop_map(|(id, date, table, phone, employee, party)| RawReservation {
            reservation_id: Some(id.to_string()),
            reservation_date: Some(date),
            table_id: table,
            customer_phone: phone.map(|n| format!("555-{n:04}")),
            employee_id: employee,
            party_size: party,
            reservation_time: Some("18:00".to_string()),
        })
}

fn arb_sources() -> impl Strategy<Value = RawSources> {
    (
        prop::collection::vec(arb_reservation(), 1..40),
        prop::collection::vec(0u32..8, 1..6),
        prop::collection::btree_set(95i64..110, 1..6),
    )
        .prop_map(|(reservations, phones, employee_ids)| RawSources {
            tables: (0..4)
                .map(|id| RawTable {
                    table_id: Some(id),
                    table_number: Some(id + 1),
                    section: Some("Main".to_string()),
                    max_capacity: Some(4),
                })
                .collect(),
            reservations,
            customers: phones
                .into_iter()
                .map(|n| RawCustomer {
                    phone: Some(format!("555-{n:04}")),
                    first_name: Some("First".to_string()),
                    last_name: Some("Last".to_string()),
                })
                .collect(),
            employees: employee_ids
                .into_iter()
                .map(|id| RawEmployee {
                    employee_id: Some(id),
                    first_name: Some("Staff".to_string()),
                    last_name: Some(id.to_string()),
                    position: Some("Server".to_string()),
                })
                .collect(),
        })
}

proptest! {
    #[test]
    fn fact_cardinality_matches_reservations(sources in arb_sources()) {
        let output = transform(&sources).expect("transform");
        prop_assert_eq!(output.tables.reservations.len(), sources.reservations.len());
        prop_assert_eq!(output.stats.reservations, sources.reservations.len());
    }

    #[test]
    fn customer_and_employee_keys_always_reference_the_dimension(sources in arb_sources()) {
        let output = transform(&sources).expect("transform");
        let tables = &output.tables;
        for fact in &tables.reservations {
            prop_assert!(tables.customers.iter().any(|dim| dim.customer_key == fact.customer_key));
            prop_assert!(tables.employees.iter().any(|dim| dim.employee_key == fact.employee_key));
        }
    }

    #[test]
    fn unmatched_references_use_sentinels(sources in arb_sources()) {
        let output = transform(&sources).expect("transform");
        for (raw, fact) in sources.reservations.iter().zip(&output.tables.reservations) {
            let phone_known = raw.customer_phone.as_ref().is_some_and(|phone| {
                sources.customers.iter().any(|c| c.phone.as_ref() == Some(phone))
            });
            if !phone_known {
                prop_assert_eq!(fact.customer_key.as_str(), "C-1");
            }
            let employee_known = raw.employee_id.is_some_and(|id| {
                sources.employees.iter().any(|e| e.employee_id == Some(id))
            });
            if !employee_known {
                prop_assert_eq!(fact.employee_key, -1);
            }
        }
    }

    #[test]
    fn exactly_one_sentinel_per_dimension(sources in arb_sources()) {
        let output = transform(&sources).expect("transform");
        let tables = &output.tables;
        prop_assert_eq!(tables.customers.iter().filter(|dim| dim.is_unknown()).count(), 1);
        prop_assert_eq!(tables.employees.iter().filter(|dim| dim.is_unknown()).count(), 1);
    }

    #[test]
    fn customer_keys_are_ordinal(sources in arb_sources()) {
        let output = transform(&sources).expect("transform");
        let keys: Vec<String> = output.tables.customers.iter().map(|dim| dim.customer_key.clone()).collect();
        let mut expected: Vec<String> = (1..=sources.customers.len()).map(|n| format!("C{n}")).collect();
        expected.push("C-1".to_string());
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn date_keys_encode_full_date(sources in arb_sources()) {
        let output = transform(&sources).expect("transform");
        let mut keys = std::collections::HashSet::new();
        for dim in &output.tables.dates {
            let date = dim.full_date;
            prop_assert_eq!(
                dim.date_key,
                i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
            );
            prop_assert!(keys.insert(dim.date_key));
        }
        let distinct: std::collections::HashSet<&str> = sources
            .reservations
            .iter()
            .filter_map(|raw| raw.reservation_date.as_deref())
            .collect();
        prop_assert_eq!(output.tables.dates.len(), distinct.len());
    }
}
