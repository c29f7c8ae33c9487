//! Playback screen: one controller for the session, plus a position poller
//! that only runs while the screen is visible.

use qsplayer::{
    MediaPlayer, PlaybackController, PlaybackProgress, PlayerError, PlayerSettings,
    PositionPoller, format_time, progress_fraction,
};
use qsstreams::Stream;
use tokio::sync::watch;
use tracing::debug;

use crate::navigation::NavArgs;

pub struct PlaybackViewModel {
    poller: Option<PositionPoller>,
    controller: PlaybackController,
    last_progress: PlaybackProgress,
}

impl PlaybackViewModel {
    /// Builds the session from navigation arguments.
    pub fn new<P>(args: &NavArgs, player: P, settings: PlayerSettings) -> Result<Self, PlayerError>
    where
        P: MediaPlayer + 'static,
    {
        let controller = PlaybackController::from_args(args, player, settings)?;
        let last_progress = controller.progress()?;
        Ok(Self {
            poller: None,
            controller,
            last_progress,
        })
    }

    pub fn stream(&self) -> &Stream {
        self.controller.stream()
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    /// Starts polling. Must be called from within a tokio runtime.
    pub fn on_visible(&mut self) {
        if self.poller.as_ref().is_some_and(PositionPoller::is_running) {
            return;
        }
        debug!(name = %self.stream().name, "Playback screen visible");
        self.poller = Some(PositionPoller::spawn(
            self.controller.handle(),
            self.controller.settings().poll_interval,
        ));
    }

    /// Stops polling and keeps the last sample.
    pub fn on_hidden(&mut self) {
        if let Some(mut poller) = self.poller.take() {
            self.last_progress = poller.progress();
            poller.stop();
            debug!(name = %self.stream().name, "Playback screen hidden");
        }
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(PositionPoller::is_running)
    }

    /// Latest polled progress.
    pub fn progress(&self) -> PlaybackProgress {
        match &self.poller {
            Some(poller) => poller.progress(),
            None => self.last_progress,
        }
    }

    /// Progress updates while visible.
    pub fn subscribe(&self) -> Option<watch::Receiver<PlaybackProgress>> {
        self.poller.as_ref().map(PositionPoller::subscribe)
    }

    /// `(position, duration)` as `m:ss` labels.
    pub fn time_labels(&self) -> (String, String) {
        let progress = self.progress();
        (
            format_time(progress.position_ms),
            format_time(progress.duration_ms),
        )
    }

    /// Seek bar position in `[0, 1]`, 0 while the duration is unknown.
    pub fn seek_fraction(&self) -> f32 {
        let progress = self.progress();
        progress_fraction(progress.position_ms, progress.duration_ms)
    }

    pub fn toggle_play_pause(&self) -> Result<bool, PlayerError> {
        self.controller.toggle_play_pause()
    }

    pub fn rewind(&self) -> Result<u64, PlayerError> {
        self.controller.rewind()
    }

    pub fn fast_forward(&self) -> Result<u64, PlayerError> {
        self.controller.fast_forward()
    }

    pub fn seek_to(&self, position_ms: u64) -> Result<(), PlayerError> {
        self.controller.seek_to(position_ms)
    }
}

impl Drop for PlaybackViewModel {
    fn drop(&mut self) {
        self.on_hidden();
        self.controller.release();
    }
}
