//
//  kongo
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Command-Line Interface
//!
//! Argument parsing and command dispatch for the `kongo` binary.
//!
//! ## Command Structure
//!
//! ```text
//! kongo [GLOBAL OPTIONS] <COMMAND> <SUBCOMMAND> [ARGS]
//! ```
//!
//! ## Global Options
//!
//! | Option | Environment | Description |
//! |--------|-------------|-------------|
//! | `--url` | `KONGO_URL` | Admin API base address |
//! | `--json` | | Print results as JSON |
//! | `--timeout` | `KONGO_TIMEOUT` | Request timeout in seconds |
//!
//! ## Cancellation
//!
//! Commands that call the Admin API bind a token from
//! [`interrupt_token`] to their requests, so Ctrl+C aborts an in-flight
//! call instead of waiting for it.

mod api;
mod certificate;
mod cluster;
mod completion;
mod config;
mod consumer;
mod customer;
mod node;
mod route;
mod service;
mod sni;

pub use api::ApiCommand;
pub use certificate::CertificateCommand;
pub use cluster::ClusterCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use consumer::ConsumerCommand;
pub use customer::CustomerCommand;
pub use node::NodeCommand;
pub use route::RouteCommand;
pub use service::ServiceCommand;
pub use sni::SniCommand;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::api::common::{ListOptions, ListResponse};
use crate::api::KongClient;
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

/// Kong Admin API from the command line.
#[derive(Parser, Debug)]
#[command(
    name = "kongo",
    version,
    about = "Work with the Kong Admin API from the command line",
    long_about = "kongo is a client for Kong's Admin API.\n\n\
                  It inspects nodes and manages services, routes, certificates and more.",
    propagate_version = true,
    after_help = "Use 'kongo <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Admin API address (overrides the config file)
    #[arg(long, global = true, env = "KONGO_URL")]
    pub url: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "KONGO_TIMEOUT")]
    pub timeout: Option<u64>,
}

impl GlobalOptions {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }

    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(self.output_format())
    }

    /// Loads the config file and applies command-line overrides.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load()?;
        if let Some(url) = &self.url {
            config.admin_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = Some(timeout);
        }
        Ok(config)
    }

    /// Builds the Admin API client for this invocation.
    pub fn client(&self) -> Result<KongClient> {
        let config = self.resolve_config()?;
        KongClient::from_config(&config)
            .with_context(|| format!("Cannot use Admin API address {:?}", config.admin_url))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show node information and status
    Node(NodeCommand),

    /// Inspect and manage cluster members
    Cluster(ClusterCommand),

    /// Manage services
    #[command(visible_alias = "svc")]
    Service(ServiceCommand),

    /// Manage routes
    Route(RouteCommand),

    /// Manage certificates
    #[command(visible_alias = "cert")]
    Certificate(CertificateCommand),

    /// Manage customers
    Customer(CustomerCommand),

    /// Manage SNIs
    Sni(SniCommand),

    /// Manage consumers
    Consumer(ConsumerCommand),

    /// Make a raw Admin API request
    Api(ApiCommand),

    /// Manage configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Show version information
    Version,
}

/// Paging flags shared by list commands.
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Cursor returned by a previous page
    #[arg(long)]
    pub offset: Option<String>,

    /// Number of entries per page
    #[arg(long, short = 'n')]
    pub size: Option<u32>,
}

impl From<&PageArgs> for ListOptions {
    fn from(args: &PageArgs) -> Self {
        Self {
            offset: args.offset.clone(),
            size: args.size,
        }
    }
}

/// Returns a token that is cancelled when the process receives Ctrl+C.
pub fn interrupt_token() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });
    token
}

/// Writes a list page, then a hint for fetching the next one.
pub(crate) fn write_page<T>(writer: &OutputWriter, page: &ListResponse<T>) -> Result<()>
where
    ListResponse<T>: serde::Serialize + crate::output::TableOutput,
{
    writer.write(page)?;
    if writer.format() == OutputFormat::Table {
        if let Some(offset) = page.next_offset() {
            writer.write_info(&format!("More results available: --offset {offset}"));
        }
    }
    Ok(())
}
