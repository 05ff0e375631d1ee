//
//  kongo
//  api/resources/cluster.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cluster membership for legacy (Serf based) Kong clusters.

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::{item_path, Endpoint};
use crate::api::client::KongClient;
use crate::api::common::KongError;
use crate::api::response::KongResponse;

const CLUSTER_PATH: &str = "/cluster";

/// Members of the cluster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterStatus {
    #[serde(rename = "data")]
    pub nodes: Vec<ClusterNode>,
    pub total: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterNode {
    pub address: String,
    pub name: String,
    /// `alive`, `failed` or `leaving`.
    pub status: String,
}

/// Cluster endpoints.
#[derive(Debug, Clone)]
pub struct ClusterService<'c> {
    endpoint: Endpoint<'c>,
}

impl<'c> ClusterService<'c> {
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

    /// `GET /cluster`
    pub async fn status(&self) -> Result<(ClusterStatus, KongResponse), KongError> {
        self.endpoint.fetch(CLUSTER_PATH).await
    }

    /// `DELETE /cluster/{name}`, forcibly removing a node.
    pub async fn delete(&self, name: &str) -> Result<KongResponse, KongError> {
        self.endpoint.remove(&item_path(CLUSTER_PATH, name)).await
    }
}
