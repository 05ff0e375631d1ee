//
//  kongo
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for Kong's Admin API.
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: Request building and the send / classify / decode pipeline
//! - [`request`]: The outbound request descriptor
//! - [`response`]: The response envelope and error message extraction
//! - [`common`]: Shared types (errors, list envelopes, timestamps)
//! - [`resources`]: One service per Admin API collection
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kongo::api::KongClient;
//!
//! # async fn example() -> Result<(), kongo::KongError> {
//! let client = KongClient::new("http://127.0.0.1:8001")?;
//!
//! let (services, _) = client.services().list(&Default::default()).await?;
//! for service in services.data {
//!     println!("{}", service.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`KongError`]:
//!
//! - Request construction failures never touch the network
//! - `Transport` and `Cancelled` mean no response was received
//! - `Http` carries the response (status, headers) alongside the message
//! - `Decode` means a 2xx body did not match the expected shape

/// Core HTTP client for the Admin API.
pub mod client;

/// Common types shared across resources.
///
/// Includes:
/// - [`KongError`]: Error type for all operations
/// - [`HttpError`](common::HttpError): Non-2xx response with message
/// - [`ListResponse`](common::ListResponse): List envelope
/// - [`Timestamp`](common::Timestamp): Flexible wire timestamp
pub mod common;

pub mod request;

pub mod resources;

pub mod response;

pub use client::KongClient;
pub use common::{HttpError, KongError, Timestamp};
pub use request::KongRequest;
pub use response::KongResponse;
