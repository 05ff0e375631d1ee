//
//  kongo
//  api/resources/services.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Upstream services.
//!
//! # Overview
//!
//! A service names an upstream and how to reach it. The Admin API accepts
//! the upstream either as separate `protocol`/`host`/`port`/`path` fields or
//! as a single write-only `url` shorthand. The two shapes never mix, so the
//! write payloads carry a [`ServiceTarget`] that is one or the other.
//!
//! # Example
//!
//! ```rust,no_run
//! use kongo::api::resources::{NewService, ServiceHost};
//! use kongo::KongClient;
//!
//! # async fn example() -> Result<(), kongo::KongError> {
//! let client = KongClient::new("http://127.0.0.1:8001")?;
//!
//! // By URL
//! let (svc, _) = client
//!     .services()
//!     .create(&NewService::by_url("billing", "http://billing.internal:8080/v1"))
//!     .await?;
//!
//! // By host
//! let target = ServiceHost::new("billing.internal").port(8080).path("/v1");
//! let (svc, _) = client
//!     .services()
//!     .create(&NewService::by_host("billing", target))
//!     .await?;
//! println!("{} -> {}:{}", svc.name, svc.host, svc.port);
//! # Ok(())
//! # }
//! ```
//!
//! # Notes
//!
//! - `url` is never returned by the Admin API, so [`Service`] has no `url` field
//! - Services are addressed by id or name

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::{item_path, nullable, with_query, Endpoint};
use crate::api::client::KongClient;
use crate::api::common::{KongError, ListOptions, ListResponse, Timestamp};
use crate::api::response::KongResponse;

const SERVICES_PATH: &str = "/services";

/// A registered upstream service.
///
/// # Fields
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `protocol` | `http` | `http` or `https` |
/// | `port` | `80` | Upstream port |
/// | `path` | none | Path prefix used upstream |
/// | `retries` | `5` | Proxy retries on failure |
/// | `*_timeout` | `60000` | Milliseconds |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub id: String,
    /// `null` for unnamed services, read as an empty string.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub protocol: String,
    pub host: String,
    pub port: u16,
    pub path: Option<String>,
    pub retries: u32,
    pub connect_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Where a service sends traffic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ServiceTarget {
    /// Separate protocol, host, port and path fields.
    Host(ServiceHost),
    /// The `url` shorthand, e.g. `https://upstream.internal:8443/api`.
    Url { url: String },
}

/// Upstream given field by field, with the tuning knobs that only this
/// shape accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceHost {
    pub host: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_timeout: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_timeout: Option<u64>,
}

impl ServiceHost {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }
}

/// Payload for `POST /services`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewService {
    pub name: String,

    #[serde(flatten)]
    pub target: ServiceTarget,
}

impl NewService {
    pub fn by_host(name: impl Into<String>, host: ServiceHost) -> Self {
        Self {
            name: name.into(),
            target: ServiceTarget::Host(host),
        }
    }

    pub fn by_url(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: ServiceTarget::Url { url: url.into() },
        }
    }
}

/// Payload for `PATCH /services/{id}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub target: Option<ServiceTarget>,
}

/// Service endpoints.
#[derive(Debug, Clone)]
pub struct ServicesService<'c> {
    endpoint: Endpoint<'c>,
}

impl<'c> ServicesService<'c> {
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

    /// `POST /services`
    pub async fn create(&self, service: &NewService) -> Result<(Service, KongResponse), KongError> {
        self.endpoint.send("POST", SERVICES_PATH, service).await
    }

    /// `GET /services/{id_or_name}`
    pub async fn get(&self, id_or_name: &str) -> Result<(Service, KongResponse), KongError> {
        self.endpoint.fetch(&item_path(SERVICES_PATH, id_or_name)).await
    }

    /// `GET /services`, one page.
    pub async fn list(
        &self,
        options: &ListOptions,
    ) -> Result<(ListResponse<Service>, KongResponse), KongError> {
        let reference = with_query(SERVICES_PATH, &options.to_query()?);
        self.endpoint.fetch(&reference).await
    }

    /// `PATCH /services/{id_or_name}`
    pub async fn update(
        &self,
        id_or_name: &str,
        update: &ServiceUpdate,
    ) -> Result<(Service, KongResponse), KongError> {
        self.endpoint
            .send("PATCH", &item_path(SERVICES_PATH, id_or_name), update)
            .await
    }

    /// `DELETE /services/{id_or_name}`
    pub async fn delete(&self, id_or_name: &str) -> Result<KongResponse, KongError> {
        self.endpoint.remove(&item_path(SERVICES_PATH, id_or_name)).await
    }
}
