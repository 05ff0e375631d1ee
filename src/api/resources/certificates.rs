//
//  kongo
//  api/resources/certificates.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! TLS certificates, addressable by id or by one of their SNIs.

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::{item_path, nullable, Endpoint};
use crate::api::client::KongClient;
use crate::api::common::{KongError, ListResponse, Timestamp};
use crate::api::response::KongResponse;

const CERTIFICATES_PATH: &str = "/certificates";

/// A PEM certificate and key pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificate {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// PEM-encoded public certificate.
    pub cert: String,

    /// PEM-encoded private key.
    pub key: String,

    /// Server names bound to this certificate.
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub snis: Vec<String>,

    #[serde(skip_serializing_if = "Timestamp::is_zero")]
    pub created_at: Timestamp,
}

/// Certificate endpoints.
#[derive(Debug, Clone)]
pub struct CertificatesService<'c> {
    endpoint: Endpoint<'c>,
}

impl<'c> CertificatesService<'c> {
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

    /// `POST /certificates`
    pub async fn create(
        &self,
        certificate: &Certificate,
    ) -> Result<(Certificate, KongResponse), KongError> {
        self.endpoint.send("POST", CERTIFICATES_PATH, certificate).await
    }

    /// `GET /certificates/{id_or_sni}`
    pub async fn get(&self, id_or_sni: &str) -> Result<(Certificate, KongResponse), KongError> {
        self.endpoint.fetch(&item_path(CERTIFICATES_PATH, id_or_sni)).await
    }

    /// `GET /certificates`
    pub async fn list(&self) -> Result<(ListResponse<Certificate>, KongResponse), KongError> {
        self.endpoint.fetch(CERTIFICATES_PATH).await
    }

    /// `PATCH /certificates/{id_or_sni}`
    pub async fn update(
        &self,
        id_or_sni: &str,
        certificate: &Certificate,
    ) -> Result<(Certificate, KongResponse), KongError> {
        self.endpoint
            .send("PATCH", &item_path(CERTIFICATES_PATH, id_or_sni), certificate)
            .await
    }

    /// `DELETE /certificates/{id_or_sni}`
    pub async fn delete(&self, id_or_sni: &str) -> Result<KongResponse, KongError> {
        self.endpoint.remove(&item_path(CERTIFICATES_PATH, id_or_sni)).await
    }
}
