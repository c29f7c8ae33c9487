//! View state of the stream list screen.

use qsstreams::{FetchResult, Stream};

/// Shown when a failed fetch carries no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown Error getting the videos";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MainUiState {
    /// Nothing fetched yet.
    #[default]
    Idle,
    Loading,
    /// An empty list is a valid success.
    Success { streams: Vec<Stream> },
    Error { message: String },
}

impl MainUiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, MainUiState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MainUiState::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, MainUiState::Error { .. })
    }

    /// The fetched list, empty unless the state is `Success`.
    pub fn streams(&self) -> &[Stream] {
        match self {
            MainUiState::Success { streams } => streams,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            MainUiState::Error { message } => Some(message),
            _ => None,
        }
    }
}

impl From<FetchResult<Vec<Stream>>> for MainUiState {
    fn from(result: FetchResult<Vec<Stream>>) -> Self {
        match result {
            FetchResult::Loading => MainUiState::Loading,
            FetchResult::Success(streams) => MainUiState::Success { streams },
            FetchResult::Error(e) => MainUiState::Error {
                message: e
                    .message()
                    .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsstreams::Error;
    use std::sync::Arc;

    #[test]
    fn test_projection() {
        assert_eq!(MainUiState::from(FetchResult::Loading), MainUiState::Loading);

        let streams = vec![Stream::new("A", "AuthA", "UrlA")];
        assert_eq!(
            MainUiState::from(FetchResult::Success(streams.clone())),
            MainUiState::Success { streams }
        );
    }

    #[test]
    fn test_error_message_fallback() {
        let state = MainUiState::from(FetchResult::Error(Arc::new(Error::other("Oops"))));
        assert_eq!(state.error_message(), Some("Oops"));

        let state = MainUiState::from(FetchResult::Error(Arc::new(Error::other(""))));
        assert_eq!(state.error_message(), Some(UNKNOWN_ERROR_MESSAGE));
    }

    #[test]
    fn test_streams_empty_unless_success() {
        assert!(MainUiState::Idle.streams().is_empty());
        assert!(MainUiState::Loading.streams().is_empty());
        assert!(
            MainUiState::Error {
                message: "x".into()
            }
            .streams()
            .is_empty()
        );
    }
}
