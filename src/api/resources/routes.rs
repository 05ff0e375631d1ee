//
//  kongo
//  api/resources/routes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Routes: the matching rules that send client traffic to a service.
//!
//! At least one of `hosts`, `paths` or `methods` must be set when creating
//! a route. The same [`Route`] type is used for reading and writing; server
//! assigned fields are left out of request bodies while unset.

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::{item_path, nullable, with_query, Endpoint};
use crate::api::client::KongClient;
use crate::api::common::{KongError, ListOptions, ListResponse, Timestamp};
use crate::api::response::KongResponse;

const ROUTES_PATH: &str = "/routes";

/// A route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<String>,

    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,

    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,

    /// Defaults to `["http", "https"]` server side.
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub protocols: Vec<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub preserve_host: bool,

    /// Defaults to `true` server side, so `false` is never sent.
    #[serde(skip_serializing_if = "is_false")]
    pub strip_path: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<RouteServiceRef>,

    #[serde(skip_serializing_if = "Timestamp::is_zero")]
    pub created_at: Timestamp,

    #[serde(skip_serializing_if = "Timestamp::is_zero")]
    pub updated_at: Timestamp,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// The service a route proxies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteServiceRef {
    pub id: String,
}

impl RouteServiceRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Route endpoints.
#[derive(Debug, Clone)]
pub struct RoutesService<'c> {
    endpoint: Endpoint<'c>,
}

impl<'c> RoutesService<'c> {
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

    /// `POST /routes`
    pub async fn create(&self, route: &Route) -> Result<(Route, KongResponse), KongError> {
        self.endpoint.send("POST", ROUTES_PATH, route).await
    }

    /// `GET /routes/{id}`
    pub async fn get(&self, id: &str) -> Result<(Route, KongResponse), KongError> {
        self.endpoint.fetch(&item_path(ROUTES_PATH, id)).await
    }

    /// `GET /routes`, one page.
    pub async fn list(
        &self,
        options: &ListOptions,
    ) -> Result<(ListResponse<Route>, KongResponse), KongError> {
        let reference = with_query(ROUTES_PATH, &options.to_query()?);
        self.endpoint.fetch(&reference).await
    }

    /// `PATCH /routes/{id}`
    pub async fn update(&self, id: &str, route: &Route) -> Result<(Route, KongResponse), KongError> {
        self.endpoint.send("PATCH", &item_path(ROUTES_PATH, id), route).await
    }

    /// `DELETE /routes/{id}`
    pub async fn delete(&self, id: &str) -> Result<KongResponse, KongError> {
        self.endpoint.remove(&item_path(ROUTES_PATH, id)).await
    }
}
