//! Per-tick maintenance of holding occupancy records.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::trace;

use super::model::{HoldingData, TelemetrySample};
use crate::level::occupied_level;

/// One aircraft's record plus the history needed for the entry-time rule.
#[derive(Debug, Clone)]
struct TrackedAircraft {
    data: HoldingData,
    /// Last level the aircraft was established at. Survives transient
    /// not-found excursions so a vertical-speed spike that settles back at
    /// the same level does not restart the clock.
    stable_level: Option<i32>,
}

/// Owns the set of per-aircraft holding records.
///
/// [`update`](HoldingTracker::update) applies one tick of telemetry:
/// every reported aircraft is rediscretised, aircraft absent from the tick
/// are dropped, and entry times reset only when an aircraft becomes
/// established at a different level (or joins a different hold).
#[derive(Debug, Default)]
pub struct HoldingTracker {
    aircraft: HashMap<String, TrackedAircraft>,
}

impl HoldingTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one update tick of telemetry.
    ///
    /// `now` is the tick timestamp used for new entry times.
    pub fn update(&mut self, samples: &[TelemetrySample], now: DateTime<Utc>) {
        let mut next: HashMap<String, TrackedAircraft> = HashMap::with_capacity(samples.len());

        for sample in samples {
            let level = occupied_level(sample.altitude, sample.vertical_speed);

            let previous = self
                .aircraft
                .get(&sample.callsign)
                .filter(|tracked| tracked.data.hold_fix == sample.hold_fix);

            let (entry_time, stable_level) = match (previous, level) {
                // Established at the same level as before: clock keeps running
                (Some(tracked), Some(l)) if tracked.stable_level == Some(l) => {
                    (tracked.data.entry_time, Some(l))
                }
                // Established at a different level: clock restarts
                (_, Some(l)) => {
                    trace!(
                        callsign = %sample.callsign,
                        level = l,
                        "aircraft established at new level"
                    );
                    (now, Some(l))
                }
                // Between levels: keep the previous clock and stable level
                (Some(tracked), None) => (tracked.data.entry_time, tracked.stable_level),
                // New aircraft still transiting
                (None, None) => (now, None),
            };

            next.insert(
                sample.callsign.clone(),
                TrackedAircraft {
                    data: HoldingData {
                        callsign: sample.callsign.clone(),
                        hold_fix: sample.hold_fix.clone(),
                        altitude: sample.altitude,
                        vertical_speed: sample.vertical_speed,
                        occupied_level: level,
                        entry_time,
                    },
                    stable_level,
                },
            );
        }

        self.aircraft = next;
    }

    /// Look up one aircraft's record.
    pub fn get(&self, callsign: &str) -> Option<&HoldingData> {
        self.aircraft.get(callsign).map(|t| &t.data)
    }

    /// Iterate all records.
    pub fn aircraft(&self) -> impl Iterator<Item = &HoldingData> {
        self.aircraft.values().map(|t| &t.data)
    }

    /// Iterate the records assigned to one holding pattern.
    pub fn for_hold<'a>(&'a self, fix: &'a str) -> impl Iterator<Item = &'a HoldingData> {
        self.aircraft().filter(move |data| data.hold_fix == fix)
    }

    /// Number of tracked aircraft.
    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    /// Whether no aircraft are tracked.
    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }
}
