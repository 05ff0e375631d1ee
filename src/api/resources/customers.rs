//
//  kongo
//  api/resources/customers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Customers.
//!
//! # Overview
//!
//! Customers are addressed by id or username. The list endpoint filters on
//! any combination of `custom_id`, `id` and `username`, and pages with the
//! usual `offset`/`size` pair.
//!
//! # Example
//!
//! ```rust,no_run
//! use kongo::api::resources::CustomerListOptions;
//! use kongo::KongClient;
//!
//! # async fn example() -> Result<(), kongo::KongError> {
//! let client = KongClient::new("http://127.0.0.1:8001")?;
//!
//! let options = CustomerListOptions {
//!     username: Some("ada".to_string()),
//!     ..Default::default()
//! };
//! let (page, _) = client.customers().list(&options).await?;
//! for customer in &page.data {
//!     println!("{} {:?}", customer.id, customer.custom_id);
//! }
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::{item_path, nullable, with_query, Endpoint};
use crate::api::client::KongClient;
use crate::api::common::{KongError, ListResponse, Timestamp};
use crate::api::response::KongResponse;

const CUSTOMERS_PATH: &str = "/customers";

/// A customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Identifier in an external user store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,

    #[serde(skip_serializing_if = "Timestamp::is_zero")]
    pub created_at: Timestamp,
}

/// Filters and paging for `GET /customers`. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomerListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Customer endpoints.
#[derive(Debug, Clone)]
pub struct CustomersService<'c> {
    endpoint: Endpoint<'c>,
}

impl<'c> CustomersService<'c> {
    pub(crate) fn new(client: &'c KongClient) -> Self {
        Self {
            endpoint: Endpoint::new(client),
        }
    }

    /// Binds `token` to every request made through this view.
    pub fn with_cancel(self, token: CancellationToken) -> Self {
        Self {
            endpoint: self.endpoint.with_cancel(token),
        }
    }

    /// `POST /customers`
    pub async fn create(&self, customer: &Customer) -> Result<(Customer, KongResponse), KongError> {
        self.endpoint.send("POST", CUSTOMERS_PATH, customer).await
    }

    /// `GET /customers/{id_or_username}`
    pub async fn get(&self, id_or_username: &str) -> Result<(Customer, KongResponse), KongError> {
        self.endpoint.fetch(&item_path(CUSTOMERS_PATH, id_or_username)).await
    }

    /// `GET /customers`, one page.
    pub async fn list(
        &self,
        options: &CustomerListOptions,
    ) -> Result<(ListResponse<Customer>, KongResponse), KongError> {
        let query = serde_urlencoded::to_string(options)?;
        self.endpoint.fetch(&with_query(CUSTOMERS_PATH, &query)).await
    }

    /// `PATCH /customers/{id_or_username}`
    pub async fn update(
        &self,
        id_or_username: &str,
        customer: &Customer,
    ) -> Result<(Customer, KongResponse), KongError> {
        self.endpoint
            .send("PATCH", &item_path(CUSTOMERS_PATH, id_or_username), customer)
            .await
    }

    /// `DELETE /customers/{id_or_username}`
    pub async fn delete(&self, id_or_username: &str) -> Result<KongResponse, KongError> {
        self.endpoint.remove(&item_path(CUSTOMERS_PATH, id_or_username)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_options_query() {
        assert_eq!(serde_urlencoded::to_string(CustomerListOptions::default()).unwrap(), "");

        let options = CustomerListOptions {
            custom_id: Some("abc".into()),
            size: Some(10),
            username: Some("ada lovelace".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_urlencoded::to_string(&options).unwrap(),
            "custom_id=abc&size=10&username=ada+lovelace"
        );
    }

    #[test]
    fn test_customer_payload() {
        let customer = Customer {
            username: Some("ada".into()),
            ..Customer::default()
        };
        assert_eq!(serde_json::to_string(&customer).unwrap(), r#"{"username":"ada"}"#);
    }
}
