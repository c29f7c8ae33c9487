//! Position poller for the playback screen.
//!
//! A poller owns one tokio task that samples the player every interval and
//! publishes a [`PlaybackProgress`] on a watch channel. The task only lives
//! while the screen is visible: [`PositionPoller::stop`] or dropping the
//! poller cancels it.
//!
//! ## Lifecycle
//!
//! - `spawn()` publishes a first sample immediately, then one per tick
//! - a released player ends the loop on its own
//! - the last published value stays readable after the task is gone

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::controller::PlayerHandle;
use crate::model::PlaybackProgress;

pub struct PositionPoller {
    cancel: CancellationToken,
    progress_rx: watch::Receiver<PlaybackProgress>,
    task: Option<JoinHandle<()>>,
}

impl PositionPoller {
    /// Starts polling `player` every `interval`. Must be called from within
    /// a tokio runtime.
    pub fn spawn(player: PlayerHandle, interval: Duration) -> Self {
        let initial = player.snapshot().unwrap_or_default();
        let (progress_tx, progress_rx) = watch::channel(initial);
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            debug!(interval_ms = interval.as_millis() as u64, "Position poller started");

            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        debug!("Position poller cancelled");
                        break;
                    }
                    _ = ticker.tick() => {
                        let Some(progress) = player.snapshot() else {
                            debug!("Player released, position poller exiting");
                            break;
                        };
                        trace!(
                            position_ms = progress.position_ms,
                            duration_ms = progress.duration_ms,
                            is_playing = progress.is_playing,
                            "Playback progress"
                        );
                        progress_tx.send_if_modified(|current| {
                            if *current == progress {
                                false
                            } else {
                                *current = progress;
                                true
                            }
                        });
                    }
                }
            }
        });

        Self {
            cancel,
            progress_rx,
            task: Some(task),
        }
    }

    /// Latest published progress.
    pub fn progress(&self) -> PlaybackProgress {
        *self.progress_rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<PlaybackProgress> {
        self.progress_rx.clone()
    }

    /// Cancels the polling task. Safe to call more than once.
    pub fn stop(&mut self) {
        self.cancel.cancel();
        self.task.take();
    }

    pub fn is_running(&self) -> bool {
        self.task
            .as_ref()
            .is_some_and(|task| !task.is_finished() && !self.cancel.is_cancelled())
    }
}

impl Drop for PositionPoller {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
