//! Telemetry and occupancy record types.

use chrono::{DateTime, Utc};

/// One aircraft's telemetry for one update tick.
///
/// Produced by the host's telemetry source for every aircraft relevant to
/// a loaded holding pattern. Altitude is in feet, vertical speed in feet
/// per minute (negative descending).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetrySample {
    /// Aircraft identifier (callsign)
    pub callsign: String,
    /// Fix of the holding pattern the aircraft is assigned to
    pub hold_fix: String,
    /// Pressure altitude in feet
    pub altitude: i32,
    /// Vertical speed in feet per minute
    pub vertical_speed: i32,
}

impl TelemetrySample {
    pub fn new(
        callsign: impl Into<String>,
        hold_fix: impl Into<String>,
        altitude: i32,
        vertical_speed: i32,
    ) -> Self {
        Self {
            callsign: callsign.into(),
            hold_fix: hold_fix.into(),
            altitude,
            vertical_speed,
        }
    }
}

/// Derived occupancy facts for one holding aircraft.
///
/// Recomputed every update tick. `occupied_level` is `None` while the
/// aircraft is climbing or descending through the stack; `entry_time`
/// marks when the aircraft first reached its current stable level and is
/// deliberately insensitive to altitude jitter at that level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldingData {
    /// Aircraft identifier (callsign)
    pub callsign: String,
    /// Fix of the holding pattern the aircraft is assigned to
    pub hold_fix: String,
    /// Latest reported altitude in feet
    pub altitude: i32,
    /// Latest reported vertical speed in feet per minute
    pub vertical_speed: i32,
    /// Level altitude currently occupied, if established at one
    pub occupied_level: Option<i32>,
    /// When the aircraft first occupied its current level
    pub entry_time: DateTime<Utc>,
}
