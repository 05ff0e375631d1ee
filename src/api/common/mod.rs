//
//  kongo
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Kong Admin API
//!
//! This module provides the types shared by the transport core and every
//! resource service: the error taxonomy, list envelopes and the flexible
//! timestamp codec.
//!
//! # Overview
//!
//! - [`KongError`] - Unified error type for all client operations
//! - [`HttpError`] - Non-2xx response, carrying the response envelope
//! - [`ListResponse`] / [`ListOptions`] - List envelopes and paging options
//!   (re-exported from the `pagination` submodule)
//! - [`Timestamp`] - Flexible timestamp (re-exported from the `time` submodule)
//!
//! # Example
//!
//! ```rust
//! use kongo::api::common::KongError;
//!
//! fn describe<T>(result: Result<T, KongError>) -> String {
//!     match result {
//!         Ok(_) => "ok".to_string(),
//!         Err(KongError::Http(err)) => format!("server said {}", err),
//!         Err(KongError::Transport(err)) => format!("could not reach Kong: {}", err),
//!         Err(e) => e.to_string(),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

use super::response::KongResponse;

mod pagination;
mod time;

pub use pagination::*;
pub use time::*;

/// Unified error type for all Kong Admin API operations.
///
/// # Variants
///
/// | Variant | Raised by | Network attempted |
/// |---------|-----------|-------------------|
/// | `Configuration` | client construction | no |
/// | `InvalidMethod` | request builder | no |
/// | `InvalidUrl` | client construction, request builder | no |
/// | `Encoding` | request builder (JSON body) | no |
/// | `QueryEncoding` | resource services (list filters) | no |
/// | `Transport` | send / body read | yes |
/// | `Cancelled` | send / body read | yes |
/// | `Http` | classification of a non-2xx status | yes |
/// | `Decode` | decoding a 2xx body | yes |
///
/// # Notes
///
/// - Only `Http` gives access to the response ([`KongError::response`]). A
///   2xx response whose body fails to decode is reported as `Decode` and the
///   response is not returned; callers cannot inspect its status or headers.
/// - Malformed timestamps inside a response body surface as `Decode`.
/// - Nothing here is retried automatically.
#[derive(Error, Debug)]
pub enum KongError {
    /// The client could not be constructed from the given settings.
    #[error("{0}")]
    Configuration(String),

    /// The HTTP method token is not a valid method.
    #[error("Invalid HTTP method: {0:?}")]
    InvalidMethod(String),

    /// A base address or resource reference did not resolve to a valid URL.
    #[error("Invalid URL {reference:?}: {source}")]
    InvalidUrl {
        /// The address or reference that failed to resolve
        reference: String,
        /// The underlying parse failure
        #[source]
        source: url::ParseError,
    },

    /// The request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Query options could not be encoded.
    #[error("Failed to encode query string: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),

    /// The server could not be reached, or the connection failed mid-call.
    ///
    /// Covers DNS failures, refused connections and client timeouts.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request's cancellation token fired before the call completed.
    #[error("Request cancelled")]
    Cancelled,

    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A 2xx response body could not be decoded into the requested type.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl KongError {
    /// The HTTP status, for `Http` errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http(err) => Some(err.status()),
            _ => None,
        }
    }

    /// The response envelope, for `Http` errors.
    pub fn response(&self) -> Option<&KongResponse> {
        match self {
            Self::Http(err) => Some(err.response()),
            _ => None,
        }
    }

    /// Returns `true` for a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Returns `true` when the failure happened contacting the server.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Cancelled)
    }
}

/// A non-2xx response from the Admin API.
///
/// Displays as `"<status-code> <message>"`, for example `"404 Request error"`
/// or `"405 Method not allowed"`.
#[derive(Error, Debug, Clone)]
#[error("{} {}", .response.status().as_u16(), .message)]
pub struct HttpError {
    response: KongResponse,
    message: String,
}

impl HttpError {
    /// Creates an error from a response envelope and an extracted message.
    pub fn new(response: KongResponse, message: impl Into<String>) -> Self {
        Self {
            response,
            message: message.into(),
        }
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// The message extracted from the response body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The response envelope.
    pub fn response(&self) -> &KongResponse {
        &self.response
    }

    /// Consumes the error, returning the response envelope.
    pub fn into_response(self) -> KongResponse {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use url::Url;

    fn envelope(code: u16) -> KongResponse {
        KongResponse::new(
            StatusCode::from_u16(code).unwrap(),
            HeaderMap::new(),
            Url::parse("http://127.0.0.1:8001/status").unwrap(),
        )
    }

    #[test]
    fn test_http_error_display() {
        let err = HttpError::new(envelope(404), "Request error");
        assert_eq!(err.to_string(), "404 Request error");

        let err = KongError::from(HttpError::new(envelope(400), "Something wrong"));
        assert_eq!(err.to_string(), "400 Something wrong");
    }

    #[test]
    fn test_status_helpers() {
        let err = KongError::from(HttpError::new(envelope(404), "Not found"));
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(err.response().is_some());
        assert!(!err.is_transport());

        assert!(KongError::Cancelled.is_transport());
        assert!(KongError::Cancelled.response().is_none());
        assert!(!KongError::InvalidMethod("bad method".into()).is_not_found());
    }

    #[test]
    fn test_configuration_display() {
        let err = KongError::Configuration("Empty URL is not allowed".into());
        assert_eq!(err.to_string(), "Empty URL is not allowed");
    }
}
