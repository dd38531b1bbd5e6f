use serde::{Deserialize, Serialize};

/// One reservation with its dimension keys resolved.
///
/// `date_key` and `table_key` stay `None` when the lookup found no
/// dimension row; those two dimensions have no unknown member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FactReservation {
    pub reservation_key: String,
    pub date_key: Option<i64>,
    pub customer_key: String,
    pub table_key: Option<i64>,
    pub employee_key: i64,
    pub party_size: Option<i64>,
    pub reservation_time: Option<String>,
}
