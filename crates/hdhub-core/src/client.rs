//! HTTP client for HDHub4u
//!
//! This module provides the outbound fetch layer. Every request carries a
//! fixed browser identity (cookie, referer, user-agent) the catalog expects,
//! and is bounded by a request timeout. There are no retries and no caching:
//! one invocation is exactly one outbound call.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, COOKIE, REFERER};

use crate::error::{HdhubError, Result};

/// Base URL for the HDHub4u catalog
const HDHUB_BASE_URL: &str = "https://hdhub4u.menu";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36 Edg/131.0.0.0";

/// Static identity cookie the catalog expects from browsers
const DEFAULT_COOKIE: &str = "xla=s4t";

/// Referer presented with every request
const DEFAULT_REFERER: &str = "https://google.com";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the HDHub HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Catalog base URL (default: `https://hdhub4u.menu`)
    pub base_url: String,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: HDHUB_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// HTTP client for HDHub4u with a fixed browser identity
pub struct HdhubClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Catalog base URL, overridable for tests
    base_url: String,
}

impl HdhubClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static(DEFAULT_COOKIE));
        headers.insert(REFERER, HeaderValue::from_static(DEFAULT_REFERER));

        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// The catalog base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a document from an absolute URL
    ///
    /// # Arguments
    /// * `url` - Absolute URL to fetch
    ///
    /// # Returns
    /// The document body as a string
    ///
    /// # Errors
    /// - `HdhubError::Status` - Upstream answered with a non-success status
    /// - `HdhubError::Http` - Transport failure (DNS, refused, timeout)
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(HdhubError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://hdhub4u.menu");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_client_creation() {
        let client = HdhubClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_custom_config() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:8080".to_string(),
            timeout_secs: 5,
        };
        let client = HdhubClient::with_config(config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }
}
