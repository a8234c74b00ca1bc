// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the cloud API.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};

use crate::error::ProtocolError;
use crate::protocol::{ApiRequest, ApiResponse, Transport};

const APP_TYPE_HEADER: &str = "X-APP-TYPE";
const APP_VERSION_HEADER: &str = "X-APP-VERSION";
const AUTHORIZATION_HEADER: &str = "X-User-Authorization";

// ============================================================================
// CloudConfig - Connection parameters for the cloud API
// ============================================================================

/// Configuration for the cloud HTTP client.
///
/// # Examples
///
/// ```
/// use comfortcloud_lib::protocol::CloudConfig;
/// use std::time::Duration;
///
/// let config = CloudConfig::new()
///     .with_base_url("https://accsmart.example.com")
///     .with_timeout(Duration::from_secs(5))
///     .with_app_version("1.10.0");
///
/// assert_eq!(config.base_url(), "https://accsmart.example.com");
/// ```
#[derive(Debug, Clone)]
pub struct CloudConfig {
    base_url: String,
    timeout: Duration,
    app_version: String,
    user_agent: String,
    accept_invalid_certs: bool,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CloudConfig {
    /// Default API root.
    pub const DEFAULT_BASE_URL: &'static str = "https://accsmart.panasonic.com";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
    /// App version announced to the cloud.
    pub const DEFAULT_APP_VERSION: &'static str = "1.10.0";
    /// User agent of the vendor app.
    pub const DEFAULT_USER_AGENT: &'static str = "G-RAC";

    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
            app_version: Self::DEFAULT_APP_VERSION.to_string(),
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: false,
        }
    }

    /// Sets the API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `X-APP-VERSION` header value.
    ///
    /// The cloud rejects app versions it considers outdated.
    #[must_use]
    pub fn with_app_version(mut self, version: impl Into<String>) -> Self {
        self.app_version = version.into();
        self
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Disables TLS certificate verification.
    #[must_use]
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn accepts_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    fn default_headers(&self) -> Result<HeaderMap, ProtocolError> {
        let mut headers = HeaderMap::new();
        headers.insert(APP_TYPE_HEADER, HeaderValue::from_static("1"));
        headers.insert(
            APP_VERSION_HEADER,
            header_value(APP_VERSION_HEADER, &self.app_version)?,
        );
        headers.insert(USER_AGENT, header_value("User-Agent", &self.user_agent)?);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if a header value is invalid or the HTTP client cannot
    /// be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers()?)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient { client })
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, ProtocolError> {
    HeaderValue::from_str(value).map_err(|_| ProtocolError::InvalidHeader {
        name,
        value: value.to_string(),
    })
}

// ============================================================================
// HttpClient - reqwest-backed transport
// ============================================================================

/// HTTP client for the cloud API.
///
/// Every request carries the app headers configured in [`CloudConfig`];
/// the session token is added per request.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, ProtocolError> {
        CloudConfig::new().into_client()
    }
}

impl Transport for HttpClient {
    async fn send(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
    ) -> Result<ApiResponse, ProtocolError> {
        tracing::debug!(method = %request.method(), url = %request.url(), "Sending cloud request");

        let mut builder = self
            .client
            .request(request.method().clone(), request.url());
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION_HEADER, token);
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(ProtocolError::Http)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(status, body = %body, "Received cloud response");

        Ok(ApiResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = CloudConfig::new();
        assert_eq!(config.base_url(), "https://accsmart.panasonic.com");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.app_version(), "1.10.0");
        assert_eq!(config.user_agent(), "G-RAC");
        assert!(!config.accepts_invalid_certs());
    }

    #[test]
    fn config_builder_chain() {
        let config = CloudConfig::new()
            .with_base_url("http://127.0.0.1:9000")
            .with_timeout(Duration::from_secs(3))
            .with_app_version("1.20.0")
            .with_user_agent("test-agent")
            .danger_accept_invalid_certs(true);

        assert_eq!(config.base_url(), "http://127.0.0.1:9000");
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.app_version(), "1.20.0");
        assert_eq!(config.user_agent(), "test-agent");
        assert!(config.accepts_invalid_certs());
    }

    #[test]
    fn default_headers_contain_app_identity() {
        let headers = CloudConfig::new().default_headers().unwrap();
        assert_eq!(headers[APP_TYPE_HEADER], "1");
        assert_eq!(headers[APP_VERSION_HEADER], "1.10.0");
        assert_eq!(headers[USER_AGENT], "G-RAC");
        assert_eq!(headers[ACCEPT], "application/json");
    }

    #[test]
    fn invalid_header_value_is_rejected() {
        let result = CloudConfig::new().with_app_version("1.0\n").into_client();
        assert!(matches!(
            result,
            Err(ProtocolError::InvalidHeader {
                name: APP_VERSION_HEADER,
                ..
            })
        ));
    }

    #[test]
    fn into_client_succeeds() {
        assert!(CloudConfig::new().into_client().is_ok());
    }
}
