//
//  kongo
//  api/resources/node.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Node information and health.
//!
//! # Overview
//!
//! `GET /` describes the node answering the call: version, hostname, loaded
//! plugins and the effective configuration. `GET /status` reports the
//! health of its nginx workers and whether the datastore is reachable.
//!
//! # Example
//!
//! ```rust,no_run
//! use kongo::KongClient;
//!
//! # async fn example() -> Result<(), kongo::KongError> {
//! let client = KongClient::new("http://127.0.0.1:8001")?;
//!
//! let (info, _) = client.node().info().await?;
//! println!("{} running Kong {}", info.hostname, info.version);
//!
//! let (status, _) = client.node().status().await?;
//! if !status.database.reachable {
//!     eprintln!("datastore unreachable");
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::Endpoint;
use crate::api::client::KongClient;
use crate::api::common::KongError;
use crate::api::response::KongResponse;

/// Information about the node serving the Admin API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeInfo {
    /// Hostname of the machine running the node.
    pub hostname: String,

    /// Node identifier (Kong 0.13+).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,

    pub lua_version: String,

    /// Welcome line, `"Welcome to kong"`.
    pub tagline: String,

    /// Kong version.
    pub version: String,

    pub plugins: NodePlugins,

    pub prng_seeds: HashMap<String, i64>,

    pub timers: NodeTimers,

    pub configuration: NodeConfiguration,
}

/// Effective node configuration.
///
/// The Admin API reports the whole `kong.conf`. Common keys are typed here;
/// everything else lands in [`NodeConfiguration::other`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfiguration {
    /// `postgres`, `cassandra` or `off`.
    pub database: String,
    pub prefix: String,
    pub log_level: String,
    pub admin_listen: Vec<String>,
    pub admin_listeners: Vec<NodeListener>,
    pub proxy_listen: Vec<String>,
    pub proxy_listeners: Vec<NodeListener>,
    pub admin_ssl_enabled: bool,
    pub proxy_ssl_enabled: bool,
    pub pg_host: String,
    pub pg_port: u16,
    pub pg_database: String,
    pub pg_user: String,
    pub cassandra_contact_points: Vec<String>,
    pub cassandra_keyspace: String,
    pub cassandra_port: u16,
    pub db_cache_ttl: i64,
    pub db_update_frequency: i64,
    pub upstream_keepalive: i64,

    /// Keys without a typed field.
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// A single admin or proxy listener.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeListener {
    pub ip: String,
    pub port: u16,
    pub ssl: bool,
    pub http2: bool,
    pub listener: String,
}

/// Plugins known to the node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodePlugins {
    // Older releases map names to `true`, newer ones to version details.
    pub available_on_server: BTreeMap<String, Value>,
    pub enabled_in_cluster: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeTimers {
    pub pending: u64,
    pub running: u64,
}

/// Health of the node serving the Admin API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeStatus {
    pub database: DatabaseStatus,
    pub server: ServerStatus,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseStatus {
    /// Whether the node can reach its datastore.
    pub reachable: bool,
}

/// nginx connection counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerStatus {
    pub connections_accepted: u64,
    pub connections_active: u64,
    pub connections_handled: u64,
    pub connections_reading: u64,
    pub connections_waiting: u64,
    pub connections_writing: u64,
    pub total_requests: u64,
}

/// Node endpoints.
#[derive(Debug, Clone)]
pub struct NodeService<'c> {
    endpoint: Endpoint<'c>,
}

impl<'c> NodeService<'c> {
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

    /// `GET /`
    pub async fn info(&self) -> Result<(NodeInfo, KongResponse), KongError> {
        self.endpoint.fetch("/").await
    }

    /// `GET /status`
    pub async fn status(&self) -> Result<(NodeStatus, KongResponse), KongError> {
        self.endpoint.fetch("/status").await
    }
}
