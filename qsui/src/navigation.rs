//! Screen routes.
//!
//! The playback route carries the selected stream as three percent-encoded
//! path segments: `playback/{name}/{author}/{url}`. Parsing decodes them
//! into [`NavArgs`], the map the playback controller is built from.

use std::collections::HashMap;
use std::fmt;

use qsstreams::{AUTHOR_KEY, NAME_KEY, Stream, URL_KEY};
use tracing::warn;

pub const MAIN_ROUTE: &str = "main";
pub const PLAYBACK_ROUTE: &str = "playback";

/// Arguments handed to the destination screen.
pub type NavArgs = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Main,
    Playback { args: NavArgs },
}

impl Route {
    pub fn playback(stream: &Stream) -> Self {
        let args = NavArgs::from([
            (NAME_KEY.to_string(), stream.name.clone()),
            (AUTHOR_KEY.to_string(), stream.author.clone()),
            (URL_KEY.to_string(), stream.url.clone()),
        ]);
        Route::Playback { args }
    }

    /// Arguments of the route; empty for `Main`.
    pub fn args(&self) -> NavArgs {
        match self {
            Route::Main => NavArgs::new(),
            Route::Playback { args } => args.clone(),
        }
    }

    /// Parses a route string. Returns `None` for unknown destinations.
    ///
    /// A playback route with missing or extra segments, or a segment that
    /// does not decode, yields only the arguments that could be read; the
    /// playback controller then refuses to start.
    pub fn parse(route: &str) -> Option<Self> {
        let mut segments = route.trim_matches('/').split('/');
        match segments.next()? {
            MAIN_ROUTE if segments.next().is_none() => Some(Route::Main),
            PLAYBACK_ROUTE => {
                let values: Vec<&str> = segments.collect();
                let mut args = NavArgs::new();
                if values.len() != 3 {
                    warn!(route, "Malformed playback route");
                    return Some(Route::Playback { args });
                }
                for (key, raw) in [NAME_KEY, AUTHOR_KEY, URL_KEY].into_iter().zip(values) {
                    match urlencoding::decode(raw) {
                        Ok(value) => {
                            args.insert(key.to_string(), value.into_owned());
                        }
                        Err(e) => warn!(key, error = %e, "Undecodable route segment"),
                    }
                }
                Some(Route::Playback { args })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Main => f.write_str(MAIN_ROUTE),
            Route::Playback { args } => {
                let segment = |key: &str| {
                    urlencoding::encode(args.get(key).map(String::as_str).unwrap_or_default())
                        .into_owned()
                };
                write!(
                    f,
                    "{}/{}/{}/{}",
                    PLAYBACK_ROUTE,
                    segment(NAME_KEY),
                    segment(AUTHOR_KEY),
                    segment(URL_KEY)
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_playback_route() {
        let stream = Stream::new(
            "Surf & Turf",
            "GoPro/HERO",
            "https://cdn.example.com/a b.m3u8?x=1",
        );
        assert_eq!(
            Route::playback(&stream).to_string(),
            "playback/Surf%20%26%20Turf/GoPro%2FHERO/https%3A%2F%2Fcdn.example.com%2Fa%20b.m3u8%3Fx%3D1"
        );
    }

    #[test]
    fn test_route_round_trip() {
        let stream = Stream::new("Ski? Yes!", "A/B & C", "https://example.com/v/1.mp4?t=10&q=hd");
        let route = Route::playback(&stream);
        let parsed = Route::parse(&route.to_string()).unwrap();
        assert_eq!(parsed, route);

        let args = parsed.args();
        assert_eq!(args[NAME_KEY], "Ski? Yes!");
        assert_eq!(args[AUTHOR_KEY], "A/B & C");
        assert_eq!(args[URL_KEY], "https://example.com/v/1.mp4?t=10&q=hd");
    }

    #[test]
    fn test_parse_main() {
        assert_eq!(Route::parse("main"), Some(Route::Main));
        assert_eq!(Route::Main.to_string(), "main");
        assert!(Route::parse("settings").is_none());
    }

    #[test]
    fn test_missing_segment_leaves_args_absent() {
        let parsed = Route::parse("playback/Surf/GoPro").unwrap();
        assert!(parsed.args().is_empty());
    }

    #[test]
    fn test_undecodable_segment_is_dropped() {
        let parsed = Route::parse("playback/Surf/GoPro/%FF%FE").unwrap();
        let args = parsed.args();
        assert_eq!(args.get(NAME_KEY).map(String::as_str), Some("Surf"));
        assert!(!args.contains_key(URL_KEY));
    }
}
