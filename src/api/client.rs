//
//  kongo
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the Kong Admin API
//!
//! This module provides [`KongClient`], the transport core every resource
//! service goes through. It builds requests against a base URL, sends them,
//! classifies the response and decodes JSON bodies.
//!
//! ## Call Flow
//!
//! ```text
//! new_request ──► KongRequest ──► execute / execute_into
//!                                   │
//!                                   ├─ send           (Transport / Cancelled)
//!                                   ├─ classify       (Http, response attached)
//!                                   └─ decode         (Decode, response withheld)
//! ```
//!
//! ## Features
//!
//! - Standard headers on every request (`Content-Type`, `Accept`, `User-Agent`)
//! - JSON request bodies
//! - Optional cancellation through [`CancellationToken`]
//! - Error messages extracted from Kong error bodies
//! - The response body is always consumed or dropped before a call returns

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use super::common::{HttpError, KongError};
use super::request::{KongRequest, MEDIA_TYPE};
use super::resources::{
    ApisService, CertificatesService, ClusterService, ConsumersService, CustomersService,
    NodeService, RoutesService, ServicesService, SnisService,
};
use super::response::{error_message, is_success, KongResponse};
use crate::config::Config;

/// Returns the default `User-Agent` string, `kongo/<version>`.
pub fn default_user_agent() -> String {
    format!("{}/{}", crate::APP_NAME, crate::VERSION)
}

/// The main HTTP client for the Kong Admin API.
///
/// A `KongClient` holds the base address, the underlying `reqwest` client and
/// the `User-Agent` string. It is immutable once built and cheap to clone, so
/// a single instance can be shared by every resource service and by any
/// number of concurrent tasks.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use kongo::KongClient;
///
/// let client = KongClient::new("http://127.0.0.1:8001")?;
///
/// // Or with a preconfigured reqwest client
/// let http = reqwest::Client::builder()
///     .timeout(std::time::Duration::from_secs(5))
///     .build()?;
/// let client = KongClient::with_http_client(http, "http://127.0.0.1:8001")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Resource Services
///
/// ```rust,no_run
/// use kongo::KongClient;
///
/// # async fn example() -> Result<(), kongo::KongError> {
/// let client = KongClient::new("http://127.0.0.1:8001")?;
/// let (status, _response) = client.node().status().await?;
/// println!("Total requests: {}", status.server.total_requests);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct KongClient {
    /// The underlying reqwest HTTP client
    http: reqwest::Client,
    /// Absolute base address every resource reference is resolved against
    base_url: Url,
    /// Identifying string sent on every call
    user_agent: String,
}

impl KongClient {
    /// Creates a client for the Admin API at `base_url` with a default
    /// `reqwest` client.
    ///
    /// # Errors
    ///
    /// - [`KongError::Configuration`] if `base_url` is empty
    /// - [`KongError::InvalidUrl`] if `base_url` is not an absolute URL
    ///
    /// # Example
    ///
    /// ```rust
    /// use kongo::KongClient;
    ///
    /// assert!(KongClient::new("http://127.0.0.1:8001").is_ok());
    /// assert!(KongClient::new("").is_err());
    /// assert!(KongClient::new("http://192.168.1.%1/").is_err());
    /// ```
    pub fn new(base_url: &str) -> Result<Self, KongError> {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client that sends requests through `http`.
    ///
    /// Use this to supply your own timeouts, proxies or TLS settings, or to
    /// point the client at a test server.
    ///
    /// # Errors
    ///
    /// Same as [`KongClient::new`].
    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Result<Self, KongError> {
        if base_url.is_empty() {
            return Err(KongError::Configuration("Empty URL is not allowed".to_string()));
        }

        let base_url = Url::parse(base_url).map_err(|source| KongError::InvalidUrl {
            reference: base_url.to_string(),
            source,
        })?;

        Ok(Self {
            http,
            base_url,
            user_agent: default_user_agent(),
        })
    }

    /// Creates a client from the configuration file settings.
    ///
    /// Applies `timeout_secs` to the underlying `reqwest` client and
    /// `user_agent` when set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kongo::{Config, KongClient};
    ///
    /// let config = Config {
    ///     admin_url: "http://kong.internal:8001".to_string(),
    ///     user_agent: Some("deploy-bot/1.0".to_string()),
    ///     timeout_secs: Some(10),
    /// };
    ///
    /// let client = KongClient::from_config(&config)?;
    /// assert_eq!(client.user_agent(), "deploy-bot/1.0");
    /// # Ok::<(), kongo::KongError>(())
    /// ```
    pub fn from_config(config: &Config) -> Result<Self, KongError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| KongError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        let client = Self::with_http_client(http, &config.admin_url)?;
        Ok(match &config.user_agent {
            Some(agent) => client.with_user_agent(agent.clone()),
            None => client,
        })
    }

    /// Overrides the `User-Agent` string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The base address resource references are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The `User-Agent` string sent on every call.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Node information and status (`/`, `/status`).
    pub fn node(&self) -> NodeService<'_> {
        NodeService::new(self)
    }

    /// Cluster membership (`/cluster`).
    pub fn cluster(&self) -> ClusterService<'_> {
        ClusterService::new(self)
    }

    /// Consumers (`/consumers`).
    pub fn consumers(&self) -> ConsumersService<'_> {
        ConsumersService::new(self)
    }

    /// Legacy API objects (`/apis`).
    pub fn apis(&self) -> ApisService<'_> {
        ApisService::new(self)
    }

    /// Upstream services (`/services`).
    pub fn services(&self) -> ServicesService<'_> {
        ServicesService::new(self)
    }

    /// Routes (`/routes`).
    pub fn routes(&self) -> RoutesService<'_> {
        RoutesService::new(self)
    }

    /// Certificates (`/certificates`).
    pub fn certificates(&self) -> CertificatesService<'_> {
        CertificatesService::new(self)
    }

    /// Customers (`/customers`).
    pub fn customers(&self) -> CustomersService<'_> {
        CustomersService::new(self)
    }

    /// SNIs (`/snis`).
    pub fn snis(&self) -> SnisService<'_> {
        SnisService::new(self)
    }

    /// Builds a request descriptor without sending it.
    ///
    /// `reference` is resolved against the base URL using standard URL
    /// reference resolution: `/status` replaces the base path, while
    /// `status` is resolved relative to it. A query string in `reference` is
    /// kept as given.
    ///
    /// # Parameters
    ///
    /// * `cancel` - Token that aborts the call when cancelled
    /// * `method` - HTTP method token (e.g. `"GET"`, `"PATCH"`)
    /// * `reference` - Resource reference (e.g. `"/services/foo"`, `"/routes?size=10"`)
    /// * `body` - Value serialized as the JSON request body
    ///
    /// # Errors
    ///
    /// - [`KongError::InvalidMethod`] if `method` is not a valid token
    /// - [`KongError::InvalidUrl`] if the reference does not resolve
    /// - [`KongError::Encoding`] if `body` cannot be serialized
    ///
    /// # Example
    ///
    /// ```rust
    /// use kongo::KongClient;
    /// use serde_json::json;
    ///
    /// let client = KongClient::new("http://127.0.0.1:8001")?;
    ///
    /// let body = json!({"name": "foo", "url": "http://foo.org"});
    /// let request = client.new_request(None, "POST", "/services", Some(&body))?;
    /// assert_eq!(request.body(), Some(br#"{"name":"foo","url":"http://foo.org"}"#.as_slice()));
    ///
    /// assert!(client.new_request(None, "bad method", "/status", None::<&()>).is_err());
    /// # Ok::<(), kongo::KongError>(())
    /// ```
    pub fn new_request<B: Serialize + ?Sized>(
        &self,
        cancel: Option<CancellationToken>,
        method: &str,
        reference: &str,
        body: Option<&B>,
    ) -> Result<KongRequest, KongError> {
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|_| KongError::InvalidMethod(method.to_string()))?;

        let url = self
            .base_url
            .join(reference)
            .map_err(|source| KongError::InvalidUrl {
                reference: reference.to_string(),
                source,
            })?;

        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(KongError::Encoding)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(MEDIA_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE));
        let agent = HeaderValue::from_str(&self.user_agent)
            .map_err(|_| KongError::Configuration(format!("Invalid user agent: {:?}", self.user_agent)))?;
        headers.insert(USER_AGENT, agent);

        Ok(KongRequest::new(method, url, headers, body, cancel))
    }

    /// Sends a request without decoding the response body.
    ///
    /// Use this for calls whose body is irrelevant, such as `DELETE`.
    ///
    /// # Returns
    ///
    /// The response envelope for any 2xx status.
    ///
    /// # Errors
    ///
    /// - [`KongError::Transport`] / [`KongError::Cancelled`] if the call did not complete
    /// - [`KongError::Http`] for any other status; the envelope is inside the error
    pub async fn execute(&self, request: KongRequest) -> Result<KongResponse, KongError> {
        let (response, ()) = self
            .round_trip(request, |body| async move {
                drop(body);
                Ok(())
            })
            .await?;
        Ok(response)
    }

    /// Sends a request and decodes a 2xx JSON body into `T`.
    ///
    /// # Returns
    ///
    /// The decoded value together with the response envelope.
    ///
    /// # Errors
    ///
    /// - [`KongError::Transport`] / [`KongError::Cancelled`] if the call did not complete
    /// - [`KongError::Http`] for any non-2xx status; the envelope is inside the error
    /// - [`KongError::Decode`] if the body is not valid JSON for `T`. No
    ///   envelope is returned in this case.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use kongo::KongClient;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Database {
    ///     reachable: bool,
    /// }
    ///
    /// #[derive(Deserialize)]
    /// struct Status {
    ///     database: Database,
    /// }
    ///
    /// # async fn example() -> Result<(), kongo::KongError> {
    /// let client = KongClient::new("http://127.0.0.1:8001")?;
    /// let request = client.new_request(None, "GET", "/status", None::<&()>)?;
    /// let (status, response): (Status, _) = client.execute_into(request).await?;
    /// println!("{} reachable={}", response.status(), status.database.reachable);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute_into<T: DeserializeOwned>(
        &self,
        request: KongRequest,
    ) -> Result<(T, KongResponse), KongError> {
        let (response, value) = self
            .round_trip(request, |body| async move {
                let bytes = body.bytes().await?;
                serde_json::from_slice::<T>(&bytes).map_err(KongError::Decode)
            })
            .await?;
        Ok((value, response))
    }

    /// Sends the request, classifies the status and hands a 2xx response to
    /// `on_success`.
    ///
    /// The `reqwest::Response` is owned by this function and consumed or
    /// dropped on every path, including cancellation.
    async fn round_trip<T, F, Fut>(
        &self,
        request: KongRequest,
        on_success: F,
    ) -> Result<(KongResponse, T), KongError>
    where
        F: FnOnce(reqwest::Response) -> Fut,
        Fut: Future<Output = Result<T, KongError>>,
    {
        let (request, cancel) = request.into_parts();
        let method = request.method().clone();
        let url = request.url().clone();

        debug!(%method, %url, "sending admin API request");

        let call = async {
            let response = self.http.execute(request).await?;
            let envelope = KongResponse::from_reqwest(&response);
            debug!(%method, %url, status = envelope.status().as_u16(), "received response");

            if !is_success(envelope.status()) {
                let text = response.text().await.unwrap_or_default();
                let message = error_message(&text);
                warn!(%method, %url, status = envelope.status().as_u16(), %message, "admin API request failed");
                return Err(KongError::Http(HttpError::new(envelope, message)));
            }

            let value = on_success(response).await?;
            Ok((envelope, value))
        };

        match cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        debug!(%method, %url, "admin API request cancelled");
                        Err(KongError::Cancelled)
                    }
                    result = call => result,
                }
            }
            None => call.await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> KongClient {
        KongClient::new("http://127.0.0.1:8001").unwrap()
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let err = KongClient::new("").unwrap_err();
        assert!(matches!(err, KongError::Configuration(_)));
        assert_eq!(err.to_string(), "Empty URL is not allowed");
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let err = KongClient::new("http://192.168.1.%1/").unwrap_err();
        assert!(matches!(err, KongError::InvalidUrl { .. }));

        let err = KongClient::new("not a url").unwrap_err();
        assert!(matches!(err, KongError::InvalidUrl { .. }));
    }

    #[test]
    fn test_default_user_agent() {
        assert_eq!(client().user_agent(), format!("kongo/{}", crate::VERSION));
        assert_eq!(client().with_user_agent("custom/2").user_agent(), "custom/2");
    }

    #[test]
    fn test_new_request_sets_standard_headers() {
        let client = client();
        let request = client
            .new_request(None, "GET", "/status", None::<&()>)
            .unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.url().path(), "/status");
        assert_eq!(request.header("content-type"), Some(MEDIA_TYPE));
        assert_eq!(request.header("accept"), Some(MEDIA_TYPE));
        assert_eq!(request.header("user-agent"), Some(client.user_agent()));
        assert!(request.cancellation().is_none());
    }

    #[test]
    fn test_new_request_rejects_bad_method() {
        let err = client()
            .new_request(None, "bad method", "/status", None::<&()>)
            .unwrap_err();
        assert!(matches!(err, KongError::InvalidMethod(ref m) if m == "bad method"));
    }

    #[test]
    fn test_new_request_accepts_extension_method() {
        let request = client()
            .new_request(None, "PURGE", "/cache", None::<&()>)
            .unwrap();
        assert_eq!(request.method().as_str(), "PURGE");
    }

    #[test]
    fn test_new_request_binds_cancellation() {
        let token = CancellationToken::new();
        let request = client()
            .new_request(Some(token.clone()), "GET", "/", None::<&()>)
            .unwrap();

        token.cancel();
        assert!(request.cancellation().unwrap().is_cancelled());
    }

    #[test]
    fn test_reference_resolution() {
        let client = KongClient::new("http://kong:8001/admin/").unwrap();

        let absolute = client.new_request(None, "GET", "/status", None::<&()>).unwrap();
        assert_eq!(absolute.url().as_str(), "http://kong:8001/status");

        let relative = client.new_request(None, "GET", "status", None::<&()>).unwrap();
        assert_eq!(relative.url().as_str(), "http://kong:8001/admin/status");

        let other_host = client
            .new_request(None, "GET", "http://other:8001/", None::<&()>)
            .unwrap();
        assert_eq!(other_host.url().host_str(), Some("other"));
    }

    #[test]
    fn test_reference_keeps_query() {
        let request = client()
            .new_request(None, "GET", "/routes?offset=abc&size=10", None::<&()>)
            .unwrap();
        assert_eq!(request.url().path(), "/routes");
        assert_eq!(request.url().query(), Some("offset=abc&size=10"));
    }

    #[test]
    fn test_new_request_rejects_unresolvable_reference() {
        let err = client()
            .new_request(None, "GET", "http://[::1/status", None::<&()>)
            .unwrap_err();
        assert!(matches!(err, KongError::InvalidUrl { .. }));
    }

    #[test]
    fn test_new_request_serializes_body() {
        #[derive(Serialize)]
        struct Payload {
            name: &'static str,
        }

        let request = client()
            .new_request(None, "POST", "/consumers", Some(&Payload { name: "test" }))
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(request.body().unwrap()).unwrap();
        assert_eq!(body["name"], "test");
    }

    #[test]
    fn test_new_request_reports_encoding_failure() {
        use std::collections::HashMap;

        // JSON object keys must be strings
        let mut body = HashMap::new();
        body.insert(vec![1u8, 2], "value");

        let err = client()
            .new_request(None, "POST", "/consumers", Some(&body))
            .unwrap_err();
        assert!(matches!(err, KongError::Encoding(_)));
    }
}
