//! Playback side of QuikStream.
//!
//! A [`PlaybackController`] binds one [`MediaPlayer`] to the selected stream
//! for the lifetime of a playback session; a [`PositionPoller`] samples it
//! on a fixed interval while the playback screen is visible.
//!
//! ```no_run
//! use qsplayer::{ClockPlayer, PlaybackController, PlayerSettings, PositionPoller};
//! use qsstreams::Stream;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), qsplayer::PlayerError> {
//!     let stream = Stream::new("Surf", "GoPro", "https://cdn.example.com/surf.m3u8");
//!     let settings = PlayerSettings::default();
//!     let controller = PlaybackController::new(stream, ClockPlayer::new(), settings.clone())?;
//!     let poller = PositionPoller::spawn(controller.handle(), settings.poll_interval);
//!     println!("{:?}", poller.progress());
//!     Ok(())
//! }
//! ```

pub mod clock_player;
pub mod controller;
pub mod errors;
pub mod model;
pub mod player;
pub mod time_utils;
pub mod watcher;

pub use clock_player::ClockPlayer;
pub use controller::{PlaybackController, PlayerHandle, PlayerSettings, stream_from_args};
pub use errors::PlayerError;
pub use model::{PlaybackProgress, PlaybackState};
pub use player::MediaPlayer;
pub use time_utils::{format_time, progress_fraction};
pub use watcher::PositionPoller;
