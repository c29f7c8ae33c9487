/// Transport state of a media player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// No media prepared yet.
    Idle,
    /// Media can be played from the current position.
    Ready,
    /// Position reached the end of the media.
    Ended,
}

/// Snapshot read by the position poller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackProgress {
    pub position_ms: u64,
    /// 0 while the duration is unknown.
    pub duration_ms: u64,
    pub is_playing: bool,
}
