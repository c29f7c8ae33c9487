use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    // Navigation contract broken: the playback screen was opened without a stream
    #[error("Missing navigation argument '{0}'")]
    MissingArgument(String),
    #[error("Player has been released")]
    Released,
    #[error("No media item set on the player")]
    NoMedia,
    #[error("Invalid media URI '{0}'")]
    InvalidUri(String),
}

impl PlayerError {
    pub fn missing_argument(key: &str) -> Self {
        PlayerError::MissingArgument(key.to_string())
    }
}
