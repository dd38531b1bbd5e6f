//! HR source store access.
//!
//! Connections live only for the duration of a call; they are closed when
//! dropped, on success and on every error path.

use std::path::Path;

use rusqlite::{Connection, OpenFlags, params};
use tracing::{debug, info};

use mart_model::RawEmployee;

use crate::error::{ExtractionError, Result};

const EMPLOYEE_QUERY: &str =
    "SELECT employee_id, first_name, last_name, position FROM employees ORDER BY employee_id";

const CREATE_EMPLOYEES: &str = "DROP TABLE IF EXISTS employees;
CREATE TABLE employees (
    employee_id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    position TEXT NOT NULL
);";

/// Staff roster used to seed a fresh source store.
pub const DEMO_EMPLOYEES: [(i64, &str, &str, &str); 4] = [
    (101, "Sarah", "Chen", "Host"),
    (102, "Michael", "Smith", "Server"),
    (103, "David", "Lee", "Server"),
    (104, "Emily", "Brown", "Manager"),
];

/// Read every employee from the source store.
///
/// The store is opened read-only so a missing database is an error rather
/// than a freshly created empty file.
pub fn read_employees(path: &Path) -> Result<Vec<RawEmployee>> {
    let to_error = |source| ExtractionError::source_store(path, source);
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(to_error)?;
    let mut stmt = conn.prepare(EMPLOYEE_QUERY).map_err(to_error)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(RawEmployee {
                employee_id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                position: row.get(3)?,
            })
        })
        .map_err(to_error)?;
    let mut employees = Vec::new();
    for row in rows {
        employees.push(row.map_err(to_error)?);
    }
    debug!(path = %path.display(), record_count = employees.len(), "read employees");
    Ok(employees)
}

/// Recreate the `employees` table and fill it with [`DEMO_EMPLOYEES`].
pub fn seed_source_store(path: &Path) -> Result<usize> {
    let to_error = |source| ExtractionError::source_store(path, source);
    let mut conn = Connection::open(path).map_err(to_error)?;
    let tx = conn.transaction().map_err(to_error)?;
    tx.execute_batch(CREATE_EMPLOYEES).map_err(to_error)?;
    {
        let mut insert = tx
            .prepare(
                "INSERT INTO employees (employee_id, first_name, last_name, position) \
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .map_err(to_error)?;
        for (employee_id, first_name, last_name, position) in DEMO_EMPLOYEES {
            insert
                .execute(params![employee_id, first_name, last_name, position])
                .map_err(to_error)?;
        }
    }
    tx.commit().map_err(to_error)?;
    info!(
        path = %path.display(),
        record_count = DEMO_EMPLOYEES.len(),
        "seeded source store"
    );
    Ok(DEMO_EMPLOYEES.len())
}
