//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Bounded per-request timeout and User-Agent
//! - Exponential backoff retry logic for rate limits and transport errors
//! - Mapping of HTTP failures onto source errors

use crate::error::{AppError, SourceError};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("softup/", env!("CARGO_PKG_VERSION"));

/// Default maximum number of retry attempts
pub const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (in milliseconds)
const BASE_DELAY_MS: u64 = 100;

/// HTTP client wrapper with retry logic
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    max_retries: u32,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, AppError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| AppError::http_client(e.to_string()))?;

        Ok(Self {
            client,
            max_retries: MAX_RETRIES,
        })
    }

    /// Set the maximum number of retries
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Perform a GET request with retry logic and error context
    ///
    /// Any non-success status ends up as `PackageNotFound`; only 429 responses
    /// are retried first. Timeouts are not retried.
    pub async fn get_with_context(
        &self,
        url: &str,
        package: &str,
        source_name: &str,
    ) -> Result<reqwest::Response, SourceError> {
        let mut last_error = None;
        let mut delay = BASE_DELAY_MS;

        for attempt in 0..=self.max_retries {
            debug!(url, attempt, "GET");
            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();

                    if status == StatusCode::TOO_MANY_REQUESTS && attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(delay)).await;
                        delay *= 2;
                        continue;
                    }

                    if !status.is_success() {
                        debug!(url, %status, "non-success status");
                        return Err(SourceError::package_not_found(package, source_name));
                    }

                    return Ok(response);
                }
                Err(e) => {
                    if e.is_timeout() {
                        return Err(SourceError::timeout(package, source_name));
                    }

                    last_error = Some(SourceError::network(package, source_name, e.to_string()));

                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(delay)).await;
                        delay *= 2;
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| SourceError::network(package, source_name, "unknown error")))
    }

    /// Perform a GET request and return the body as text
    pub async fn get_text(
        &self,
        url: &str,
        package: &str,
        source_name: &str,
    ) -> Result<String, SourceError> {
        let response = self.get_with_context(url, package, source_name).await?;

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::timeout(package, source_name)
            } else {
                SourceError::malformed_response(
                    package,
                    source_name,
                    format!("failed to read response body: {}", e),
                )
            }
        })
    }
}
