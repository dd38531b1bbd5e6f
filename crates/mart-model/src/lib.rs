pub mod dimension;
pub mod error;
pub mod fact;
pub mod mart;
pub mod raw;

pub use dimension::{
    CustomerDim, DateDim, EmployeeDim, TableDim, UNKNOWN_CUSTOMER_KEY, UNKNOWN_CUSTOMER_NAME,
    UNKNOWN_CUSTOMER_PHONE, UNKNOWN_EMPLOYEE_KEY, UNKNOWN_EMPLOYEE_NAME,
    UNKNOWN_EMPLOYEE_POSITION,
};
pub use error::{ValidationError, require};
pub use fact::FactReservation;
pub use mart::{MartTableKind, MartTables};
pub use raw::{RawCustomer, RawEmployee, RawReservation, RawSources, RawTable, SourceKind};
