use mart_ingest::{
    ConfiguredSources, DEMO_EMPLOYEES, ExtractionError, SourceConfig, SourceExtractor,
    read_employees, seed_source_store,
};
use mart_model::RawEmployee;

#[test]
fn seeded_store_reads_back_demo_roster() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("source_hr.db");

    let inserted = seed_source_store(&path).expect("seed");
    assert_eq!(inserted, DEMO_EMPLOYEES.len());

    let employees = read_employees(&path).expect("read employees");
    assert_eq!(employees.len(), 4);
    assert_eq!(
        employees[0],
        RawEmployee {
            employee_id: Some(101),
            first_name: Some("Sarah".to_string()),
            last_name: Some("Chen".to_string()),
            position: Some("Host".to_string()),
        }
    );
    assert_eq!(employees[3].position.as_deref(), Some("Manager"));
}

#[test]
fn reseeding_replaces_the_roster() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("source_hr.db");

    seed_source_store(&path).expect("first seed");
    seed_source_store(&path).expect("second seed");

    assert_eq!(read_employees(&path).expect("read employees").len(), 4);
}

#[test]
fn missing_store_is_not_created() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.db");

    let error = read_employees(&path).unwrap_err();

    assert!(matches!(error, ExtractionError::SourceStore { .. }));
    assert!(!path.exists());
}

#[test]
fn extraction_stops_at_first_unavailable_source() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = SourceConfig {
        tables_csv: dir.path().join("tables.csv"),
        reservations_json: dir.path().join("reservations_log.json"),
        customer_api_url: "http://127.0.0.1:9/unreachable".to_string(),
        source_db: dir.path().join("source_hr.db"),
        ..SourceConfig::default()
    };

    let error = ConfiguredSources::new(config).extract().unwrap_err();

    assert!(matches!(error, ExtractionError::Csv { .. }));
}
