//! Playback controller: one player bound to one stream for one session.
//!
//! The controller owns the player behind `Arc<Mutex<_>>` so the position
//! poller can read it from its own task, and releases it exactly once on
//! [`PlaybackController::release`] or drop.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use qsconfig::Config;
use qsstreams::{AUTHOR_KEY, NAME_KEY, Stream, URL_KEY};
use tracing::{debug, info};

use crate::errors::PlayerError;
use crate::model::PlaybackProgress;
use crate::player::MediaPlayer;
use crate::time_utils::{skip_backward, skip_forward};

pub type SharedPlayer = Arc<Mutex<Box<dyn MediaPlayer>>>;

/// Player behaviour knobs, usually read from the configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSettings {
    pub play_when_ready: bool,
    pub seek_step_ms: u64,
    pub poll_interval: Duration,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            play_when_ready: true,
            seek_step_ms: 10_000,
            poll_interval: Duration::from_millis(500),
        }
    }
}

impl PlayerSettings {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            play_when_ready: config.get_play_when_ready()?,
            seek_step_ms: config.get_seek_step_ms()?,
            poll_interval: Duration::from_millis(config.get_poll_interval_ms()?.max(1)),
        })
    }
}

/// Rebuilds the selected stream from navigation arguments.
///
/// Every key must be present; a missing one means the navigation contract
/// was broken and is reported as [`PlayerError::MissingArgument`].
pub fn stream_from_args(args: &HashMap<String, String>) -> Result<Stream, PlayerError> {
    let get = |key: &str| {
        args.get(key)
            .cloned()
            .ok_or_else(|| PlayerError::missing_argument(key))
    };
    Ok(Stream::new(get(NAME_KEY)?, get(AUTHOR_KEY)?, get(URL_KEY)?))
}

/// Read-only view of the player shared with the position poller.
#[derive(Clone)]
pub struct PlayerHandle {
    player: SharedPlayer,
    released: Arc<AtomicBool>,
}

impl PlayerHandle {
    /// Current progress, `None` once the player has been released.
    pub fn snapshot(&self) -> Option<PlaybackProgress> {
        if self.released.load(Ordering::SeqCst) {
            return None;
        }
        let player = self.player.lock().expect("Player mutex poisoned");
        Some(PlaybackProgress {
            position_ms: player.current_position(),
            duration_ms: player.duration().unwrap_or(0),
            is_playing: player.is_playing(),
        })
    }

    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }
}

pub struct PlaybackController {
    stream: Stream,
    player: SharedPlayer,
    released: Arc<AtomicBool>,
    settings: PlayerSettings,
}

impl PlaybackController {
    /// Binds `player` to the stream's URL, prepares it and arms
    /// play-when-ready according to `settings`.
    pub fn new<P>(stream: Stream, player: P, settings: PlayerSettings) -> Result<Self, PlayerError>
    where
        P: MediaPlayer + 'static,
    {
        let mut player: Box<dyn MediaPlayer> = Box::new(player);
        player.set_media_item(&stream.url)?;
        player.prepare()?;
        player.set_play_when_ready(settings.play_when_ready);

        info!(name = %stream.name, url = %stream.url, "Playback session started");

        Ok(Self {
            stream,
            player: Arc::new(Mutex::new(player)),
            released: Arc::new(AtomicBool::new(false)),
            settings,
        })
    }

    /// Same as [`PlaybackController::new`], resolving the stream from
    /// navigation arguments first. Fails before touching the player if any
    /// argument is missing.
    pub fn from_args<P>(
        args: &HashMap<String, String>,
        player: P,
        settings: PlayerSettings,
    ) -> Result<Self, PlayerError>
    where
        P: MediaPlayer + 'static,
    {
        let stream = stream_from_args(args)?;
        Self::new(stream, player, settings)
    }

    pub fn stream(&self) -> &Stream {
        &self.stream
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    pub fn handle(&self) -> PlayerHandle {
        PlayerHandle {
            player: self.player.clone(),
            released: self.released.clone(),
        }
    }

    fn with_player<R>(
        &self,
        f: impl FnOnce(&mut Box<dyn MediaPlayer>) -> R,
    ) -> Result<R, PlayerError> {
        if self.released.load(Ordering::SeqCst) {
            return Err(PlayerError::Released);
        }
        let mut player = self.player.lock().expect("Player mutex poisoned");
        Ok(f(&mut *player))
    }

    /// Transport control: play
    pub fn play(&self) -> Result<(), PlayerError> {
        self.with_player(|p| p.play())
    }

    /// Transport control: pause
    pub fn pause(&self) -> Result<(), PlayerError> {
        self.with_player(|p| p.pause())
    }

    /// Pauses when playing, plays otherwise. Returns the new playing intent.
    pub fn toggle_play_pause(&self) -> Result<bool, PlayerError> {
        self.with_player(|p| {
            if p.play_when_ready() {
                p.pause();
                false
            } else {
                p.play();
                true
            }
        })
    }

    pub fn seek_to(&self, position_ms: u64) -> Result<(), PlayerError> {
        debug!(position_ms, "Seek");
        self.with_player(|p| p.seek_to(position_ms))
    }

    /// Jumps back by the configured step, never before 0.
    pub fn rewind(&self) -> Result<u64, PlayerError> {
        let step = self.settings.seek_step_ms;
        self.with_player(|p| {
            let target = skip_backward(p.current_position(), step);
            p.seek_to(target);
            target
        })
    }

    /// Jumps forward by the configured step, never past the duration.
    pub fn fast_forward(&self) -> Result<u64, PlayerError> {
        let step = self.settings.seek_step_ms;
        self.with_player(|p| {
            let duration = p.duration().unwrap_or(0);
            let target = skip_forward(p.current_position(), step, duration);
            p.seek_to(target);
            target
        })
    }

    pub fn current_position(&self) -> Result<u64, PlayerError> {
        self.with_player(|p| p.current_position())
    }

    /// Media duration, 0 while unknown.
    pub fn duration(&self) -> Result<u64, PlayerError> {
        self.with_player(|p| p.duration().unwrap_or(0))
    }

    pub fn is_playing(&self) -> Result<bool, PlayerError> {
        self.with_player(|p| p.is_playing())
    }

    pub fn progress(&self) -> Result<PlaybackProgress, PlayerError> {
        self.handle().snapshot().ok_or(PlayerError::Released)
    }

    /// Releases the player. Returns true only for the call that actually
    /// released it.
    pub fn release(&self) -> bool {
        if self.released.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.player.lock().expect("Player mutex poisoned").release();
        info!(name = %self.stream.name, "Playback session released");
        true
    }

    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.release();
    }
}
