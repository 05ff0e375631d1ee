//
//  kongo
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Resource Services
//!
//! One service per Admin API collection. Every service is a borrowed view
//! over a shared [`KongClient`] and only talks to the network through
//! [`KongClient::new_request`] and [`KongClient::execute`] /
//! [`KongClient::execute_into`].
//!
//! ## Services
//!
//! | Accessor | Path | Operations |
//! |----------|------|------------|
//! | [`KongClient::node`] | `/`, `/status` | info, status |
//! | [`KongClient::cluster`] | `/cluster` | status, delete |
//! | [`KongClient::consumers`] | `/consumers` | list, get, create, delete |
//! | [`KongClient::apis`] | `/apis` | list, get, create, delete |
//! | [`KongClient::services`] | `/services` | create, get, list, update, delete |
//! | [`KongClient::routes`] | `/routes` | create, get, list, update, delete |
//! | [`KongClient::certificates`] | `/certificates` | create, get, list, update, delete |
//! | [`KongClient::customers`] | `/customers` | create, get, list, update, delete |
//! | [`KongClient::snis`] | `/snis` | create, get, list, update, delete |
//!
//! ## Cancellation
//!
//! Requests built by a plain service carry no cancellation token. Bind one
//! with `with_cancel`, and every request that view builds will be aborted
//! when the token fires:
//!
//! ```rust,no_run
//! use kongo::KongClient;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), kongo::KongError> {
//! let client = KongClient::new("http://127.0.0.1:8001")?;
//! let token = CancellationToken::new();
//!
//! let routes = client.routes().with_cancel(token.clone());
//! let (page, _) = routes.list(&Default::default()).await?;
//! # Ok(())
//! # }
//! ```

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tokio_util::sync::CancellationToken;

use super::client::KongClient;
use super::common::KongError;
use super::response::KongResponse;

mod apis;
mod certificates;
mod cluster;
mod consumers;
mod customers;
mod node;
mod routes;
mod services;
mod snis;

pub use apis::{Api, ApisService};
pub use certificates::{Certificate, CertificatesService};
pub use cluster::{ClusterNode, ClusterService, ClusterStatus};
pub use consumers::{Consumer, ConsumersService};
pub use customers::{Customer, CustomerListOptions, CustomersService};
pub use node::{
    DatabaseStatus, NodeConfiguration, NodeInfo, NodeListener, NodePlugins, NodeService,
    NodeStatus, NodeTimers, ServerStatus,
};
pub use routes::{Route, RouteServiceRef, RoutesService};
pub use services::{NewService, Service, ServiceHost, ServiceTarget, ServiceUpdate, ServicesService};
pub use snis::{Sni, SnisService};

/// The client reference and optional cancellation token shared by every
/// request a service view builds.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint<'c> {
    client: &'c KongClient,
    cancel: Option<CancellationToken>,
}

impl<'c> Endpoint<'c> {
    pub(crate) fn new(client: &'c KongClient) -> Self {
        Self {
            client,
            cancel: None,
        }
    }

    pub(crate) fn with_cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// `GET` a reference and decode the body.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        reference: &str,
    ) -> Result<(T, KongResponse), KongError> {
        let request = self
            .client
            .new_request(self.cancel.clone(), "GET", reference, None::<&()>)?;
        self.client.execute_into(request).await
    }

    /// Send a JSON body and decode the reply.
    pub(crate) async fn send<B, T>(
        &self,
        method: &str,
        reference: &str,
        body: &B,
    ) -> Result<(T, KongResponse), KongError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .client
            .new_request(self.cancel.clone(), method, reference, Some(body))?;
        self.client.execute_into(request).await
    }

    /// `DELETE` a reference without decoding the body.
    pub(crate) async fn remove(&self, reference: &str) -> Result<KongResponse, KongError> {
        let request = self
            .client
            .new_request(self.cancel.clone(), "DELETE", reference, None::<&()>)?;
        self.client.execute(request).await
    }
}

/// Bytes escaped in a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `"<collection>/<id>"` with `id` escaped as one path segment.
pub(crate) fn item_path(collection: &str, id: &str) -> String {
    format!("{collection}/{}", utf8_percent_encode(id, SEGMENT))
}

/// Appends an encoded query string, leaving the path bare when it is empty.
pub(crate) fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

/// Reads JSON `null` as the field's default. Kong reports unset lists and
/// names as `null` rather than leaving them out.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
