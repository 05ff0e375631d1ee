//
//  kongo
//  api/resources/consumers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Consumers, as exposed by pre-1.0 Kong releases.
//!
//! # Notes
//!
//! - `created_at` is the raw integer the legacy API returns (milliseconds
//!   since the epoch), not a [`Timestamp`](crate::api::common::Timestamp)
//! - At least one of `username` or `custom_id` must be set on create

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::{item_path, Endpoint};
use crate::api::client::KongClient;
use crate::api::common::{KongError, ListResponse};
use crate::api::response::KongResponse;

const CONSUMERS_PATH: &str = "/consumers";

/// A consumer of proxied services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Identifier mapping the consumer to an external user store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl Consumer {
    /// A consumer to create, identified by `username`.
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }
}

/// Consumer endpoints.
#[derive(Debug, Clone)]
pub struct ConsumersService<'c> {
    endpoint: Endpoint<'c>,
}

impl<'c> ConsumersService<'c> {
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

    /// `GET /consumers`
    pub async fn list(&self) -> Result<(ListResponse<Consumer>, KongResponse), KongError> {
        self.endpoint.fetch(CONSUMERS_PATH).await
    }

    /// `GET /consumers/{id}`, by id or username.
    pub async fn get(&self, id: &str) -> Result<(Consumer, KongResponse), KongError> {
        self.endpoint.fetch(&item_path(CONSUMERS_PATH, id)).await
    }

    /// `POST /consumers`
    pub async fn create(&self, consumer: &Consumer) -> Result<(Consumer, KongResponse), KongError> {
        self.endpoint.send("POST", CONSUMERS_PATH, consumer).await
    }

    /// `DELETE /consumers/{id}`
    pub async fn delete(&self, id: &str) -> Result<KongResponse, KongError> {
        self.endpoint.remove(&item_path(CONSUMERS_PATH, id)).await
    }
}
