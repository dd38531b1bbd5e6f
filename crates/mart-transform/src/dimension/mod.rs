//! Dimension builders.
//!
//! Each builder consumes one raw record set and has no shared state with the
//! others, so they may run in any order.

pub mod customer;
pub mod date;
pub mod employee;
pub mod table;

pub use customer::build_customer_dimension;
pub use date::{
    build_date_dimension, build_date_dimension_from_dates, date_key, parse_reservation_date,
};
pub use employee::build_employee_dimension;
pub use table::build_table_dimension;
