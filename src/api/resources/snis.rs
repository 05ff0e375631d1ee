//
//  kongo
//  api/resources/snis.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Server Name Indication objects mapping hostnames to certificates.

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::{item_path, Endpoint};
use crate::api::client::KongClient;
use crate::api::common::{KongError, ListResponse, Timestamp};
use crate::api::response::KongResponse;

const SNIS_PATH: &str = "/snis";

/// A hostname bound to a certificate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sni {
    pub name: String,

    pub ssl_certificate_id: String,

    #[serde(skip_serializing_if = "Timestamp::is_zero")]
    pub created_at: Timestamp,
}

impl Sni {
    pub fn new(name: impl Into<String>, ssl_certificate_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ssl_certificate_id: ssl_certificate_id.into(),
            created_at: Timestamp::ZERO,
        }
    }
}

/// SNI endpoints.
#[derive(Debug, Clone)]
pub struct SnisService<'c> {
    endpoint: Endpoint<'c>,
}

impl<'c> SnisService<'c> {
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

    /// `POST /snis`
    pub async fn create(&self, sni: &Sni) -> Result<(Sni, KongResponse), KongError> {
        self.endpoint.send("POST", SNIS_PATH, sni).await
    }

    /// `GET /snis/{name}`
    pub async fn get(&self, name: &str) -> Result<(Sni, KongResponse), KongError> {
        self.endpoint.fetch(&item_path(SNIS_PATH, name)).await
    }

    /// `GET /snis`
    pub async fn list(&self) -> Result<(ListResponse<Sni>, KongResponse), KongError> {
        self.endpoint.fetch(SNIS_PATH).await
    }

    /// `PATCH /snis/{name}`
    pub async fn update(&self, name: &str, sni: &Sni) -> Result<(Sni, KongResponse), KongError> {
        self.endpoint.send("PATCH", &item_path(SNIS_PATH, name), sni).await
    }

    /// `DELETE /snis/{name}`
    pub async fn delete(&self, name: &str) -> Result<KongResponse, KongError> {
        self.endpoint.remove(&item_path(SNIS_PATH, name)).await
    }
}
