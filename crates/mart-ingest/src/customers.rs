//! Customer API client.
//!
//! The endpoint answers with `{"results": [{"phone": ..., "name": {"first": ..., "last": ...}}]}`.
//! Only the phone number and the two name parts are kept; everything else in
//! a result object is ignored.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use tracing::debug;

use mart_model::RawCustomer;

use crate::error::{ExtractionError, Result};

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    results: Option<Vec<ApiUser>>,
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    name: Option<ApiName>,
}

#[derive(Debug, Deserialize)]
struct ApiName {
    #[serde(default)]
    first: Option<String>,
    #[serde(default)]
    last: Option<String>,
}

impl From<ApiUser> for RawCustomer {
    fn from(user: ApiUser) -> Self {
        let (first_name, last_name) = match user.name {
            Some(name) => (name.first, name.last),
            None => (None, None),
        };
        RawCustomer {
            phone: user.phone,
            first_name,
            last_name,
        }
    }
}

/// Parse a customer API body, keeping response order.
pub fn parse_customer_response(body: &str) -> Result<Vec<RawCustomer>> {
    let response: ApiResponse =
        serde_json::from_str(body).map_err(|error| ExtractionError::malformed(error.to_string()))?;
    let users = response
        .results
        .ok_or_else(|| ExtractionError::malformed("missing `results` array"))?;
    Ok(users.into_iter().map(RawCustomer::from).collect())
}

/// Blocking client for the customer API.
pub struct CustomerApiClient {
    client: Client,
    url: String,
}

impl CustomerApiClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let url = url.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ExtractionError::network(url.clone(), source))?;
        Ok(Self { client, url })
    }

    /// Fetch the customer list. Any non-success status is an error.
    pub fn fetch_customers(&self) -> Result<Vec<RawCustomer>> {
        debug!(url = %self.url, "requesting customers");
        let response = self
            .client
            .get(&self.url)
            .header(
                USER_AGENT,
                format!("restaurant-mart/{}", env!("CARGO_PKG_VERSION")),
            )
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|source| ExtractionError::network(self.url.clone(), source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractionError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|source| ExtractionError::network(self.url.clone(), source))?;
        let customers = parse_customer_response(&body)?;
        debug!(url = %self.url, record_count = customers.len(), "received customers");
        Ok(customers)
    }
}
