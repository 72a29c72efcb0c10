//! HTTP client shared foundation
//!
//! A thin wrapper over reqwest with a configured timeout and User-Agent.
//! The remote index is queried as a single call: transport failures map to
//! `SourceError` and propagate without retry.

use crate::error::SourceError;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("gemspec/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, SourceError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                SourceError::network(
                    String::new(),
                    "HTTP client",
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request and decode the JSON response
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        gem: &str,
        source: &str,
    ) -> Result<T, SourceError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::timeout(gem, source)
            } else {
                SourceError::network(gem, source, e.to_string())
            }
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SourceError::not_found(gem, source));
        }

        if !response.status().is_success() {
            let status = response.status();
            return Err(SourceError::network(gem, source, format!("HTTP {}", status)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SourceError::invalid_response(gem, source, e.to_string()))
    }
}
