//! Time-in-hold formatting.
//!
//! Entry times are wall-clock timestamps supplied by the holding tracker.
//! Elapsed time is clamped at zero so clock skew (an entry time apparently
//! in the future) renders as `0:00` instead of panicking or showing a
//! negative duration.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Elapsed time an aircraft has spent at its current level.
///
/// Returns zero when `entry_time` is in the future relative to `now`.
pub fn time_in_hold(entry_time: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    (now - entry_time).to_std().unwrap_or(Duration::ZERO)
}

/// Format the time an aircraft has spent at its current level as `M:SS`.
///
/// # Example
///
/// ```
/// use chrono::{Duration, Utc};
/// use holdstack::level::time_in_hold_display;
///
/// let now = Utc::now();
/// let entry = now - Duration::seconds(125);
/// assert_eq!(time_in_hold_display(entry, now), "2:05");
/// ```
pub fn time_in_hold_display(entry_time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = time_in_hold(entry_time, now).as_secs();
    format!("{}:{:02}", elapsed / 60, elapsed % 60)
}
