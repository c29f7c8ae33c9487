//! Error types for the streams client

/// Result type alias for stream catalogue operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching the stream catalogue
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed (connectivity, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid endpoint URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// API returned a non-success status
    #[error("API error: {0}")]
    ApiError(String),

    /// The fetch panicked before producing a result
    #[error("Fetch task failed: {0}")]
    Task(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create an API error
    pub fn api_error(msg: impl Into<String>) -> Self {
        Self::ApiError(msg.into())
    }

    /// Human readable message, or `None` when the error carries no text.
    pub fn message(&self) -> Option<String> {
        let message = self.to_string();
        if message.trim().is_empty() {
            None
        } else {
            Some(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        assert_eq!(Error::other("Oops").message(), Some("Oops".to_string()));
        assert_eq!(Error::other("").message(), None);
        assert_eq!(Error::other("   ").message(), None);
        assert_eq!(
            Error::api_error("API returned status: 404 Not Found").message(),
            Some("API error: API returned status: 404 Not Found".to_string())
        );
    }
}
