//! Data models for the streams endpoint
//!
//! The transport shapes ([`StreamResponse`], [`StreamsResponse`]) mirror the
//! JSON body; [`Stream`] is the domain entity handed to the rest of the
//! application.

use serde::{Deserialize, Serialize};

/// JSON / navigation key for the stream title
pub const NAME_KEY: &str = "name";
/// JSON / navigation key for the stream author
pub const AUTHOR_KEY: &str = "author";
/// JSON / navigation key for the playback URL
pub const URL_KEY: &str = "url";

// ============================================================================
// Domain Model
// ============================================================================

/// A playable video stream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Stream {
    /// Display title
    pub name: String,
    /// Creator or uploader
    pub author: String,
    /// Playback URI
    pub url: String,
}

impl Stream {
    /// Create a new stream
    pub fn new(name: impl Into<String>, author: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            url: url.into(),
        }
    }
}

// ============================================================================
// Transport Models
// ============================================================================

/// One entry of the `videos` array
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StreamResponse {
    pub name: String,
    pub author: String,
    pub url: String,
}

/// Body returned by the streams endpoint
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StreamsResponse {
    /// Raw list of streams, in endpoint order
    pub videos: Vec<StreamResponse>,
}

impl From<StreamResponse> for Stream {
    fn from(dto: StreamResponse) -> Self {
        Stream {
            name: dto.name,
            author: dto.author,
            url: dto.url,
        }
    }
}

impl StreamsResponse {
    /// Map every transport record to a [`Stream`], preserving order
    pub fn into_streams(self) -> Vec<Stream> {
        self.videos.into_iter().map(Stream::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_maps_field_for_field() {
        let dto = StreamResponse {
            name: "A".to_string(),
            author: "AuthA".to_string(),
            url: "UrlA".to_string(),
        };
        assert_eq!(Stream::from(dto), Stream::new("A", "AuthA", "UrlA"));
    }

    #[test]
    fn test_deserialize_envelope() {
        let json = r#"{
            "videos": [
                {"name": "Surf", "author": "GoPro", "url": "https://cdn.example.com/surf.m3u8", "extra": 1},
                {"name": "Ski", "author": "GoPro", "url": "https://cdn.example.com/ski.mp4"}
            ]
        }"#;

        let response: StreamsResponse = serde_json::from_str(json).unwrap();
        let streams = response.into_streams();

        assert_eq!(streams.len(), 2);
        assert_eq!(streams[0].name, "Surf");
        assert_eq!(streams[1].url, "https://cdn.example.com/ski.mp4");
    }

    #[test]
    fn test_empty_videos() {
        let response: StreamsResponse = serde_json::from_str(r#"{"videos": []}"#).unwrap();
        assert!(response.into_streams().is_empty());
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let json = r#"{"videos": [{"name": "Surf", "url": "u"}]}"#;
        assert!(serde_json::from_str::<StreamsResponse>(json).is_err());
        assert!(serde_json::from_str::<StreamsResponse>("{}").is_err());
    }
}
