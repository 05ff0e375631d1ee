//
//  kongo
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Response Envelope and Classification
//!
//! Every call that reaches the server produces a [`KongResponse`]: the status
//! line, headers and final URL of the HTTP response. The body itself never
//! leaves the transport layer; it is either decoded into the caller's type or
//! read for an error message, and dropped either way.
//!
//! ## Classification
//!
//! | Status | Outcome | Body |
//! |--------|---------|------|
//! | 200-299 | success | left for the decoder |
//! | anything else | [`HttpError`](super::common::HttpError) | read for a message |
//!
//! The message for a failed response is picked by [`error_message`]:
//!
//! - empty body: `"Request error"`
//! - JSON object with a string `message` field: that field
//! - JSON object without one (or JSON `null`): `"Request error"`
//! - anything else: the body text, verbatim

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

/// Placeholder message used when a failed response carries no usable message.
pub const DEFAULT_ERROR_MESSAGE: &str = "Request error";

/// Status, headers and final URL of an HTTP response from the Admin API.
///
/// Returned alongside decoded values on success, and carried inside
/// [`HttpError`](super::common::HttpError) for non-2xx responses so callers
/// can still inspect what the server said.
#[derive(Debug, Clone)]
pub struct KongResponse {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
}

impl KongResponse {
    /// Creates an envelope from its parts.
    pub fn new(status: StatusCode, headers: HeaderMap, url: Url) -> Self {
        Self {
            status,
            headers,
            url,
        }
    }

    pub(crate) fn from_reqwest(response: &reqwest::Response) -> Self {
        Self::new(
            response.status(),
            response.headers().clone(),
            response.url().clone(),
        )
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// All response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// A single header value, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The URL the response was served from.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns `true` when the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        is_success(self.status)
    }
}

/// Returns `true` for status codes in the inclusive range 200-299.
pub fn is_success(status: StatusCode) -> bool {
    (200..=299).contains(&status.as_u16())
}

/// Extracts a human-readable message from the body of a failed response.
///
/// # Example
///
/// ```rust
/// use kongo::api::response::error_message;
///
/// assert_eq!(error_message(""), "Request error");
/// assert_eq!(error_message(r#"{"message": "Not found"}"#), "Not found");
/// assert_eq!(error_message("Something wrong"), "Something wrong");
/// ```
pub fn error_message(body: &str) -> String {
    if body.is_empty() {
        return DEFAULT_ERROR_MESSAGE.to_string();
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("message") {
            Some(Value::String(message)) => message.clone(),
            Some(Value::Null) | None => DEFAULT_ERROR_MESSAGE.to_string(),
            Some(_) => body.to_string(),
        },
        Ok(Value::Null) => DEFAULT_ERROR_MESSAGE.to_string(),
        _ => body.to_string(),
    }
}
