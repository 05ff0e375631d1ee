//
//  kongo
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Descriptor
//!
//! A [`KongRequest`] is everything needed to perform one Admin API call: the
//! method, the resolved absolute URL, the standard headers, the already
//! serialized JSON body and an optional cancellation token.
//!
//! Descriptors are produced by [`KongClient::new_request`](super::KongClient::new_request)
//! and consumed by [`KongClient::execute`](super::KongClient::execute) or
//! [`KongClient::execute_into`](super::KongClient::execute_into). Building one
//! never touches the network.

use reqwest::header::HeaderMap;
use reqwest::Method;
use tokio_util::sync::CancellationToken;
use url::Url;

/// JSON media type sent as both `Content-Type` and `Accept`.
pub const MEDIA_TYPE: &str = "application/json";

/// An outbound Admin API call.
///
/// # Example
///
/// ```rust
/// use kongo::KongClient;
///
/// let client = KongClient::new("http://127.0.0.1:8001")?;
/// let request = client.new_request(None, "GET", "/status", None::<&()>)?;
///
/// assert_eq!(request.method().as_str(), "GET");
/// assert_eq!(request.url().as_str(), "http://127.0.0.1:8001/status");
/// assert_eq!(request.header("accept"), Some("application/json"));
/// assert!(request.body().is_none());
/// # Ok::<(), kongo::KongError>(())
/// ```
#[derive(Debug, Clone)]
pub struct KongRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    cancel: Option<CancellationToken>,
}

impl KongRequest {
    pub(crate) fn new(
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Vec<u8>>,
        cancel: Option<CancellationToken>,
    ) -> Self {
        Self {
            method,
            url,
            headers,
            body,
            cancel,
        }
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The resolved absolute URL, including any query string.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// A single header value, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The serialized JSON body, if one was supplied.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// The cancellation token bound to this request.
    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancel.as_ref()
    }

    /// Splits the descriptor into a `reqwest` request and its cancellation token.
    pub(crate) fn into_parts(self) -> (reqwest::Request, Option<CancellationToken>) {
        let mut request = reqwest::Request::new(self.method, self.url);
        *request.headers_mut() = self.headers;
        if let Some(body) = self.body {
            *request.body_mut() = Some(body.into());
        }
        (request, self.cancel)
    }
}
