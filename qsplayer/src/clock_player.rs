//! Software transport driven by a monotonic clock.
//!
//! `ClockPlayer` renders nothing: it validates the media URI and keeps a
//! transport position that advances with time while playing. It backs the
//! composition root and the tests.
//!
//! The clock is `tokio::time::Instant`, so tests can pause and advance time.

use tokio::time::Instant;
use tracing::debug;
use url::Url;

use crate::errors::PlayerError;
use crate::model::PlaybackState;
use crate::player::MediaPlayer;

#[derive(Debug)]
pub struct ClockPlayer {
    uri: Option<String>,
    state: PlaybackState,
    play_when_ready: bool,
    duration_ms: Option<u64>,
    /// Position at `anchor` (or the frozen position when not advancing).
    position_ms: u64,
    /// Set while the position advances.
    anchor: Option<Instant>,
    released: bool,
}

impl Default for ClockPlayer {
    fn default() -> Self {
        Self {
            uri: None,
            state: PlaybackState::Idle,
            play_when_ready: false,
            duration_ms: None,
            position_ms: 0,
            anchor: None,
            released: false,
        }
    }
}

impl ClockPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A player whose media reports the given duration once prepared.
    pub fn with_duration(duration_ms: u64) -> Self {
        Self {
            duration_ms: Some(duration_ms),
            ..Self::default()
        }
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    fn raw_position(&self) -> u64 {
        let advanced = match self.anchor {
            Some(anchor) => self.position_ms + anchor.elapsed().as_millis() as u64,
            None => self.position_ms,
        };
        match self.duration_ms {
            Some(duration) => advanced.min(duration),
            None => advanced,
        }
    }

    fn reached_end(&self) -> bool {
        matches!(self.duration_ms, Some(duration) if self.raw_position() >= duration)
    }

    /// Freezes the position at its current value.
    fn freeze(&mut self) {
        self.position_ms = self.raw_position();
        self.anchor = None;
    }

    /// Resumes advancing if the transport allows it.
    fn resume_if_ready(&mut self) {
        if self.play_when_ready
            && self.state == PlaybackState::Ready
            && self.anchor.is_none()
            && !self.reached_end()
        {
            self.anchor = Some(Instant::now());
        }
    }
}

impl MediaPlayer for ClockPlayer {
    fn set_media_item(&mut self, uri: &str) -> Result<(), PlayerError> {
        if self.released {
            return Err(PlayerError::Released);
        }
        Url::parse(uri).map_err(|_| PlayerError::InvalidUri(uri.to_string()))?;

        debug!(uri = uri, "Media item set");
        self.uri = Some(uri.to_string());
        self.state = PlaybackState::Idle;
        self.position_ms = 0;
        self.anchor = None;
        Ok(())
    }

    fn prepare(&mut self) -> Result<(), PlayerError> {
        if self.released {
            return Err(PlayerError::Released);
        }
        if self.uri.is_none() {
            return Err(PlayerError::NoMedia);
        }

        // Nothing to buffer: the transport is ready immediately.
        self.state = PlaybackState::Ready;
        self.resume_if_ready();
        Ok(())
    }

    fn set_play_when_ready(&mut self, play_when_ready: bool) {
        if self.released {
            return;
        }
        self.play_when_ready = play_when_ready;
        if play_when_ready {
            self.resume_if_ready();
        } else {
            self.freeze();
        }
    }

    fn play_when_ready(&self) -> bool {
        self.play_when_ready
    }

    fn seek_to(&mut self, position_ms: u64) {
        if self.released {
            return;
        }
        self.position_ms = match self.duration_ms {
            Some(duration) => position_ms.min(duration),
            None => position_ms,
        };
        self.anchor = None;
        self.resume_if_ready();
    }

    fn current_position(&self) -> u64 {
        self.raw_position()
    }

    fn duration(&self) -> Option<u64> {
        match self.state {
            PlaybackState::Ready | PlaybackState::Ended => self.duration_ms,
            _ => None,
        }
    }

    fn playback_state(&self) -> PlaybackState {
        if self.state == PlaybackState::Ready && self.reached_end() {
            PlaybackState::Ended
        } else {
            self.state
        }
    }

    fn release(&mut self) {
        if !self.released {
            debug!(uri = ?self.uri, "Releasing clock player");
        }
        self.released = true;
        self.anchor = None;
        self.play_when_ready = false;
        self.state = PlaybackState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const URI: &str = "https://cdn.example.com/video.m3u8";

    #[test]
    fn test_prepare_requires_media() {
        let mut player = ClockPlayer::new();
        assert_eq!(player.prepare(), Err(PlayerError::NoMedia));
    }

    #[test]
    fn test_invalid_uri_rejected() {
        let mut player = ClockPlayer::new();
        assert_eq!(
            player.set_media_item("not a uri"),
            Err(PlayerError::InvalidUri("not a uri".to_string()))
        );
    }

    #[test]
    fn test_duration_unknown_until_prepared() {
        let mut player = ClockPlayer::with_duration(60_000);
        player.set_media_item(URI).unwrap();
        assert_eq!(player.duration(), None);
        player.prepare().unwrap();
        assert_eq!(player.duration(), Some(60_000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_position_advances_only_while_playing() {
        let mut player = ClockPlayer::with_duration(60_000);
        player.set_media_item(URI).unwrap();
        player.set_play_when_ready(true);
        player.prepare().unwrap();
        assert!(player.is_playing());

        tokio::time::advance(Duration::from_millis(1_500)).await;
        assert_eq!(player.current_position(), 1_500);

        player.pause();
        tokio::time::advance(Duration::from_millis(1_000)).await;
        assert_eq!(player.current_position(), 1_500);
        assert!(!player.is_playing());

        player.play();
        tokio::time::advance(Duration::from_millis(500)).await;
        assert_eq!(player.current_position(), 2_000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_position_stops_at_end() {
        let mut player = ClockPlayer::with_duration(1_000);
        player.set_media_item(URI).unwrap();
        player.set_play_when_ready(true);
        player.prepare().unwrap();

        tokio::time::advance(Duration::from_millis(5_000)).await;
        assert_eq!(player.current_position(), 1_000);
        assert_eq!(player.playback_state(), PlaybackState::Ended);
        assert!(!player.is_playing());

        player.seek_to(200);
        assert_eq!(player.playback_state(), PlaybackState::Ready);
        assert!(player.is_playing());
    }

    #[test]
    fn test_seek_clamps_to_duration() {
        let mut player = ClockPlayer::with_duration(10_000);
        player.set_media_item(URI).unwrap();
        player.prepare().unwrap();
        player.seek_to(25_000);
        assert_eq!(player.current_position(), 10_000);
    }

    #[test]
    fn test_release_blocks_further_use() {
        let mut player = ClockPlayer::new();
        player.set_media_item(URI).unwrap();
        player.release();
        assert!(player.is_released());
        assert_eq!(player.prepare(), Err(PlayerError::Released));
        assert_eq!(player.set_media_item(URI), Err(PlayerError::Released));
    }
}
