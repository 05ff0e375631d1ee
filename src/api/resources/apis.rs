//
//  kongo
//  api/resources/apis.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Legacy API objects (`/apis`), replaced by services and routes in Kong 0.13.

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::{item_path, Endpoint};
use crate::api::client::KongClient;
use crate::api::common::{KongError, ListResponse};
use crate::api::response::KongResponse;

const APIS_PATH: &str = "/apis";

/// A proxied API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Api {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub name: String,

    /// Public DNS address pointing to the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_host: Option<String>,

    /// Base target URL the API proxies to.
    #[serde(default)]
    pub upstream_url: String,

    #[serde(default)]
    pub preserve_host: bool,

    /// Milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

/// Legacy API endpoints.
#[derive(Debug, Clone)]
pub struct ApisService<'c> {
    endpoint: Endpoint<'c>,
}

impl<'c> ApisService<'c> {
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

    /// `GET /apis`
    pub async fn list(&self) -> Result<(ListResponse<Api>, KongResponse), KongError> {
        self.endpoint.fetch(APIS_PATH).await
    }

    /// `GET /apis/{id}`, by id or name.
    pub async fn get(&self, id: &str) -> Result<(Api, KongResponse), KongError> {
        self.endpoint.fetch(&item_path(APIS_PATH, id)).await
    }

    /// `POST /apis`
    pub async fn create(&self, api: &Api) -> Result<(Api, KongResponse), KongError> {
        self.endpoint.send("POST", APIS_PATH, api).await
    }

    /// `DELETE /apis/{id}`
    pub async fn delete(&self, id: &str) -> Result<KongResponse, KongError> {
        self.endpoint.remove(&item_path(APIS_PATH, id)).await
    }
}
