//! Time formatting and seek arithmetic for the playback screen.
//!
//! All values are milliseconds.

/// Formats a position as `m:ss`. Minutes are not wrapped into hours.
///
/// # Examples
/// ```
/// # use qsplayer::time_utils::format_time;
/// assert_eq!(format_time(0), "0:00");
/// assert_eq!(format_time(61_000), "1:01");
/// assert_eq!(format_time(3_725_000), "62:05");
/// ```
pub fn format_time(ms: u64) -> String {
    let total_seconds = ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Target of a backward skip, floored at 0.
pub fn skip_backward(position_ms: u64, step_ms: u64) -> u64 {
    position_ms.saturating_sub(step_ms)
}

/// Target of a forward skip, capped at `duration_ms`.
///
/// A zero duration means unknown; the target is then left uncapped.
pub fn skip_forward(position_ms: u64, step_ms: u64, duration_ms: u64) -> u64 {
    let target = position_ms.saturating_add(step_ms);
    if duration_ms == 0 {
        target
    } else {
        target.min(duration_ms)
    }
}

/// Progress ratio in `[0, 1]` for a slider, 0 while the duration is unknown.
pub fn progress_fraction(position_ms: u64, duration_ms: u64) -> f32 {
    if duration_ms == 0 {
        return 0.0;
    }
    (position_ms.min(duration_ms) as f64 / duration_ms as f64) as f32
}
