//! Dimension rows of the reservation star schema.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Key of the "unknown diner" member of [`CustomerDim`].
pub const UNKNOWN_CUSTOMER_KEY: &str = "C-1";
pub const UNKNOWN_CUSTOMER_NAME: &str = "Unknown Diner";
pub const UNKNOWN_CUSTOMER_PHONE: &str = "Unknown";

/// Key of the "unknown staff" member of [`EmployeeDim`].
pub const UNKNOWN_EMPLOYEE_KEY: i64 = -1;
pub const UNKNOWN_EMPLOYEE_NAME: &str = "Unknown Staff";
pub const UNKNOWN_EMPLOYEE_POSITION: &str = "Unknown";

/// A restaurant table. The key is the source `table_id`, unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableDim {
    pub table_key: i64,
    pub table_number: i64,
    pub section: String,
    pub capacity: i64,
}

/// A diner with an ordinal surrogate key (`C1`, `C2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerDim {
    pub customer_key: String,
    pub customer_name: String,
    pub phone: String,
}

impl CustomerDim {
    /// The sentinel row every customer dimension ends with.
    pub fn unknown() -> Self {
        Self {
            customer_key: UNKNOWN_CUSTOMER_KEY.to_string(),
            customer_name: UNKNOWN_CUSTOMER_NAME.to_string(),
            phone: UNKNOWN_CUSTOMER_PHONE.to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.customer_key == UNKNOWN_CUSTOMER_KEY
    }
}

/// A calendar day referenced by at least one reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DateDim {
    /// `YYYYMMDD` encoded as an integer.
    pub date_key: i64,
    pub full_date: NaiveDate,
    pub month_name: String,
    pub year: i32,
    pub day_of_week: String,
}

/// A staff member. The key is the source `employee_id`, unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeDim {
    pub employee_key: i64,
    pub full_name: String,
    pub position: String,
}

impl EmployeeDim {
    /// The sentinel row every employee dimension ends with.
    pub fn unknown() -> Self {
        Self {
            employee_key: UNKNOWN_EMPLOYEE_KEY,
            full_name: UNKNOWN_EMPLOYEE_NAME.to_string(),
            position: UNKNOWN_EMPLOYEE_POSITION.to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.employee_key == UNKNOWN_EMPLOYEE_KEY
    }
}
