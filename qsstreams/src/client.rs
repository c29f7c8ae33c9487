//! HTTP client for the streams endpoint
//!
//! The endpoint is a single JSON document listing the available videos.
//! The client issues one GET per call and returns the raw transport payload;
//! mapping and error capture happen in the repository.
//!
//! # Example
//!
//! ```no_run
//! use qsstreams::StreamClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StreamClient::new()?;
//!     let response = client.fetch().await?;
//!     println!("{} videos", response.videos.len());
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::models::StreamsResponse;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default host serving the streams document
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com";

/// Default path of the streams document
pub const DEFAULT_STREAMS_PATH: &str =
    "/gopro-interview-lab/example-json/refs/heads/main/takehome-android.json";

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "QuikStream/0.1.0 (qsstreams)";

/// Anything able to produce the raw streams document.
///
/// [`StreamClient`] is the production implementation; the repository only
/// depends on this trait.
#[async_trait]
pub trait StreamSource: Send + Sync {
    /// Fetch the transport envelope. No retry, no classification.
    async fn fetch(&self) -> Result<StreamsResponse>;
}

/// Streams endpoint HTTP client
///
/// The client is stateless and does not cache responses.
#[derive(Debug, Clone)]
pub struct StreamClient {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl StreamClient {
    /// Create a new client with default settings
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Full URL of the streams document
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the streams document
    ///
    /// # Errors
    ///
    /// - [`Error::Http`] on connectivity failure or timeout
    /// - [`Error::ApiError`] if the server answers with a non-2xx status
    /// - [`Error::Json`] if the body is not a valid streams document
    pub async fn fetch(&self) -> Result<StreamsResponse> {
        debug!(endpoint = %self.endpoint, "Fetching streams");

        let response = self
            .client
            .get(self.endpoint.clone())
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::api_error(format!(
                "API returned status: {}",
                response.status()
            )));
        }

        let body = response.bytes().await?;
        let streams: StreamsResponse = serde_json::from_slice(&body)?;

        debug!(count = streams.videos.len(), "Received streams");
        Ok(streams)
    }

    fn build_endpoint(base_url: &str, path: &str) -> Result<Url> {
        let joined = if path.is_empty() {
            base_url.to_string()
        } else {
            format!(
                "{}/{}",
                base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        };
        Ok(Url::parse(&joined)?)
    }
}

#[async_trait]
impl StreamSource for StreamClient {
    async fn fetch(&self) -> Result<StreamsResponse> {
        StreamClient::fetch(self).await
    }
}

/// Builder for [`StreamClient`]
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    base_url: String,
    path: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            path: DEFAULT_STREAMS_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the base URL (scheme + host, optionally a path prefix)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the path of the streams document
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<StreamClient> {
        let endpoint = StreamClient::build_endpoint(&self.base_url, &self.path)?;

        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout)
                .build()?,
        };

        Ok(StreamClient {
            client,
            endpoint,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let client = StreamClient::new().unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://raw.githubusercontent.com/gopro-interview-lab/example-json/refs/heads/main/takehome-android.json"
        );
    }

    #[test]
    fn test_build_endpoint_joins_slashes() {
        let url = StreamClient::build_endpoint("http://localhost:8080/", "/videos.json").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/videos.json");

        let url = StreamClient::build_endpoint("http://localhost:8080/api", "videos.json").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/videos.json");

        let url = StreamClient::build_endpoint("http://localhost:8080/all.json", "").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/all.json");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = StreamClient::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
