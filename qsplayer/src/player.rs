//! Media player abstraction.
//!
//! The playback controller drives any backend through this trait, the same
//! way a renderer facade drives its protocol-specific backends. Positions
//! and durations are in milliseconds.

use crate::errors::PlayerError;
use crate::model::PlaybackState;

/// Transport controls and position reporting of a media player.
pub trait MediaPlayer: Send {
    /// Binds the player to the media at `uri`, replacing any previous item.
    fn set_media_item(&mut self, uri: &str) -> Result<(), PlayerError>;

    /// Starts loading the current media item.
    fn prepare(&mut self) -> Result<(), PlayerError>;

    /// Whether playback proceeds as soon as the media is ready.
    fn set_play_when_ready(&mut self, play_when_ready: bool);

    fn play_when_ready(&self) -> bool;

    /// Starts or resumes playback.
    fn play(&mut self) {
        self.set_play_when_ready(true);
    }

    /// Pauses playback, keeping the current position.
    fn pause(&mut self) {
        self.set_play_when_ready(false);
    }

    /// Moves the playback position. Positions past the end are clamped.
    fn seek_to(&mut self, position_ms: u64);

    fn current_position(&self) -> u64;

    /// Duration of the media, `None` while unknown (live or not loaded).
    fn duration(&self) -> Option<u64>;

    fn playback_state(&self) -> PlaybackState;

    /// True when the position is actually advancing.
    fn is_playing(&self) -> bool {
        self.play_when_ready() && self.playback_state() == PlaybackState::Ready
    }

    /// Frees the underlying resources. The player must not be used afterwards.
    fn release(&mut self);
}
