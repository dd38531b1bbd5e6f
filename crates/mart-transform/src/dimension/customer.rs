use mart_model::{CustomerDim, RawCustomer, SourceKind, ValidationError, require};

/// Surrogate key for the customer at 1-based `position` in API order.
pub fn customer_key(position: usize) -> String {
    format!("C{position}")
}

/// Build `DimCustomer`: the Nth customer in input order gets key `C{N}`,
/// followed by the unknown member `C-1`.
///
/// Keys depend only on input order, so the same logical diner can receive a
/// different key when the API returns customers in a different order.
pub fn build_customer_dimension(raw: &[RawCustomer]) -> Result<Vec<CustomerDim>, ValidationError> {
    let mut dims = Vec::with_capacity(raw.len() + 1);
    for (row, customer) in raw.iter().enumerate() {
        let phone = require(customer.phone.clone(), SourceKind::Customers, row, "phone")?;
        let first_name = require(
            customer.first_name.as_deref(),
            SourceKind::Customers,
            row,
            "first_name",
        )?;
        let last_name = require(
            customer.last_name.as_deref(),
            SourceKind::Customers,
            row,
            "last_name",
        )?;
        dims.push(CustomerDim {
            customer_key: customer_key(row + 1),
            customer_name: format!("{first_name} {last_name}"),
            phone,
        });
    }
    dims.push(CustomerDim::unknown());
    Ok(dims)
}
