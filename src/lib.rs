//
//  kongo
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Kongo
//!
//! A client library for the [Kong](https://konghq.com) Admin API, plus the
//! `kongo` command-line tool built on top of it.
//!
//! ## Overview
//!
//! The core is small: a [`KongClient`] bound to an Admin API base address
//! builds request descriptors ([`KongRequest`]), sends them, classifies the
//! status and optionally decodes the JSON body. Every non-2xx answer becomes
//! a [`KongError::Http`] carrying the response envelope and the message
//! Kong put in the body.
//!
//! Typed services (`client.services()`, `client.routes()`, ...) are thin
//! views over that core, one per Admin API collection.
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP core, error model, timestamps and resource services
//! - [`config`]: Configuration file management
//! - [`output`]: Table and JSON rendering for the CLI
//! - [`cli`]: Command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use kongo::KongClient;
//!
//! # async fn example() -> Result<(), kongo::KongError> {
//! let client = KongClient::new("http://127.0.0.1:8001")?;
//!
//! let (status, _) = client.node().status().await?;
//! println!("database reachable: {}", status.database.reachable);
//!
//! match client.services().get("missing").await {
//!     Err(e) if e.is_not_found() => println!("no such service"),
//!     other => println!("{:?}", other.map(|(service, _)| service.id)),
//! }
//! # Ok(())
//! # }
//! ```

/// HTTP client core and Admin API resources.
///
/// Request building, the send/classify/decode cycle, the error model, the
/// flexible timestamp codec, and one service per Admin API collection.
pub mod api;

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the
/// clap derive API.
pub mod cli;

/// Configuration file management.
///
/// - Linux: `~/.config/kongo/config.toml`
/// - macOS: `~/Library/Application Support/kongo/config.toml`
/// - Windows: `%APPDATA%\kongo\config\config.toml`
pub mod config;

/// Output formatting for the CLI (tables and JSON).
pub mod output;

pub use api::{HttpError, KongClient, KongError, KongRequest, KongResponse, Timestamp};

/// Re-export of the main CLI struct.
///
/// ```rust,no_run
/// use clap::Parser;
/// use kongo::Cli;
///
/// let cli = Cli::parse();
/// ```
pub use cli::Cli;

pub use config::Config;

/// Application name, used for the binary, config paths and the default
/// `User-Agent`.
pub const APP_NAME: &str = "kongo";

/// Crate version, from Cargo.toml.
///
/// ```rust
/// use kongo::VERSION;
///
/// println!("kongo version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// ```rust,no_run
/// use kongo::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::NOT_FOUND);
/// ```
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Details are printed to stderr.
    pub const ERROR: i32 = 1;

    /// The Admin API answered 404 Not Found.
    pub const NOT_FOUND: i32 = 8;

    /// The request was cancelled, typically by Ctrl+C.
    pub const CANCELLED: i32 = 16;
}
