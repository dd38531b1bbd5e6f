use mart_model::{EmployeeDim, RawEmployee, SourceKind, UNKNOWN_EMPLOYEE_KEY, require};

use crate::error::{ReservedKeyError, Result};

/// Project raw employees into `DimEmployee` and append the unknown member.
///
/// A source row keyed with the unknown member's id is rejected, so the
/// sentinel stays the only `-1` row.
pub fn build_employee_dimension(raw: &[RawEmployee]) -> Result<Vec<EmployeeDim>> {
    let mut dims = Vec::with_capacity(raw.len() + 1);
    for (row, employee) in raw.iter().enumerate() {
        let employee_key = require(employee.employee_id, SourceKind::Employees, row, "employee_id")?;
        if employee_key == UNKNOWN_EMPLOYEE_KEY {
            return Err(ReservedKeyError {
                row,
                key: employee_key,
            }
            .into());
        }
        let first_name = require(
            employee.first_name.as_deref(),
            SourceKind::Employees,
            row,
            "first_name",
        )?;
        let last_name = require(
            employee.last_name.as_deref(),
            SourceKind::Employees,
            row,
            "last_name",
        )?;
        let position = require(
            employee.position.clone(),
            SourceKind::Employees,
            row,
            "position",
        )?;
        dims.push(EmployeeDim {
            employee_key,
            full_name: format!("{first_name} {last_name}"),
            position,
        });
    }
    dims.push(EmployeeDim::unknown());
    Ok(dims)
}
