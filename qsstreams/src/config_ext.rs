//! Extension to plug the streams endpoint settings into qsconfig
//!
//! # Example
//!
//! ```no_run
//! use qsconfig::get_config;
//! use qsstreams::StreamsConfigExt;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = get_config();
//! let client = config.streams_client_builder()?.build()?;
//! println!("Fetching from {}", client.endpoint());
//! # Ok(())
//! # }
//! ```

use crate::client::{
    ClientBuilder, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_STREAMS_PATH,
    DEFAULT_USER_AGENT,
};
use anyhow::Result;
use qsconfig::Config;
use serde_yaml::Value;
use std::time::Duration;

const BASE_URL_PATH: &[&str] = &["sources", "streams", "base_url"];
const STREAMS_PATH: &[&str] = &["sources", "streams", "path"];
const TIMEOUT_PATH: &[&str] = &["sources", "streams", "timeout_secs"];
const USER_AGENT_PATH: &[&str] = &["sources", "streams", "user_agent"];

/// Streams endpoint settings stored in `sources.streams`
pub trait StreamsConfigExt {
    /// Base URL of the endpoint (default: raw.githubusercontent.com)
    fn get_streams_base_url(&self) -> Result<String>;

    /// Path of the streams document under the base URL
    fn get_streams_path(&self) -> Result<String>;

    /// HTTP request timeout in seconds (default: 30)
    fn get_streams_timeout_secs(&self) -> Result<u64>;

    /// User-Agent sent with each request
    fn get_streams_user_agent(&self) -> Result<String>;

    /// A [`ClientBuilder`] preloaded with the configured settings
    fn streams_client_builder(&self) -> Result<ClientBuilder>;
}

impl StreamsConfigExt for Config {
    fn get_streams_base_url(&self) -> Result<String> {
        Ok(self.get_string_or(BASE_URL_PATH, DEFAULT_BASE_URL))
    }

    fn get_streams_path(&self) -> Result<String> {
        Ok(self.get_string_or(STREAMS_PATH, DEFAULT_STREAMS_PATH))
    }

    fn get_streams_timeout_secs(&self) -> Result<u64> {
        match self.get_value(TIMEOUT_PATH) {
            Ok(Value::Number(n)) => Ok(n.as_u64().unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)),
            _ => Ok(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    fn get_streams_user_agent(&self) -> Result<String> {
        Ok(self.get_string_or(USER_AGENT_PATH, DEFAULT_USER_AGENT))
    }

    fn streams_client_builder(&self) -> Result<ClientBuilder> {
        Ok(ClientBuilder::new()
            .base_url(self.get_streams_base_url()?)
            .path(self.get_streams_path()?)
            .timeout(Duration::from_secs(self.get_streams_timeout_secs()?))
            .user_agent(self.get_streams_user_agent()?))
    }
}
