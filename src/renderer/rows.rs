//! Row production for the holding-stack display.

use chrono::{DateTime, Utc};

use crate::display::HoldDisplayManager;
use crate::holding::{HoldingData, HoldingTracker};
use crate::level::{display_row, level_display, time_in_hold_display};
use crate::profile::{HoldPattern, HoldProfile};

/// One aircraft entry within a display row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAircraft {
    /// Aircraft identifier (callsign)
    pub callsign: String,
    /// Formatted time at this level, e.g. "2:05"
    pub time_in_hold: String,
}

/// One level slot in the rendered stack.
///
/// An empty `aircraft` vec is a blank slot. When several aircraft resolve
/// to the same level (a transient should-not-happen state) they are all
/// listed, earliest entry first, rather than any being dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Level altitude this row represents, in feet
    pub level: i32,
    /// Flight-level style label for the row, e.g. "080"
    pub label: String,
    /// Aircraft occupying this level, earliest entry first
    pub aircraft: Vec<RowAircraft>,
}

/// The rendered stack for one holding pattern, rows ordered top-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDisplay {
    /// Holding fix this stack belongs to
    pub fix: String,
    /// Rows from the pattern's maximum level down to its minimum
    pub rows: Vec<DisplayRow>,
}

/// Stateless producer of per-pattern display rows.
///
/// Holds only a display-manager handle; the profile is re-read on every
/// [`render`](Self::render) so the output always reflects the manager's
/// current state.
#[derive(Clone)]
pub struct HoldRenderer {
    display_manager: HoldDisplayManager,
}

impl HoldRenderer {
    /// Create a renderer reading profiles through the given manager.
    pub fn new(display_manager: HoldDisplayManager) -> Self {
        Self { display_manager }
    }

    /// Render the current profile's holding stacks.
    ///
    /// Returns one [`PatternDisplay`] per pattern in the current profile,
    /// in profile order, or an empty vec when no profile is selected.
    pub fn render(&self, tracker: &HoldingTracker, now: DateTime<Utc>) -> Vec<PatternDisplay> {
        let Some(profile) = self.display_manager.current() else {
            return Vec::new();
        };

        render_profile(&profile, tracker, now)
    }
}

/// Render every pattern of one profile. Pure given its inputs.
fn render_profile(
    profile: &HoldProfile,
    tracker: &HoldingTracker,
    now: DateTime<Utc>,
) -> Vec<PatternDisplay> {
    profile
        .patterns()
        .iter()
        .map(|pattern| render_pattern(pattern, tracker, now))
        .collect()
}

fn render_pattern(
    pattern: &HoldPattern,
    tracker: &HoldingTracker,
    now: DateTime<Utc>,
) -> PatternDisplay {
    let mut rows: Vec<DisplayRow> = pattern
        .levels_descending()
        .map(|level| DisplayRow {
            level,
            label: level_display(level),
            aircraft: Vec::new(),
        })
        .collect();

    let mut occupants: Vec<&HoldingData> = tracker
        .for_hold(&pattern.fix)
        .filter(|data| data.occupied_level.is_some())
        .collect();
    occupants.sort_by_key(|data| data.entry_time);

    for data in occupants {
        let level = data.occupied_level.unwrap_or_default();

        // Below the stack: no row to show. Above it, display_row clamps
        // into the top row so over-stacked aircraft stay visible.
        if level < pattern.minimum_level {
            continue;
        }

        let row = display_row(pattern.maximum_level, level) as usize;
        if let Some(slot) = rows.get_mut(row) {
            slot.aircraft.push(RowAircraft {
                callsign: data.callsign.clone(),
                time_in_hold: time_in_hold_display(data.entry_time, now),
            });
        }
    }

    PatternDisplay {
        fix: pattern.fix.clone(),
        rows,
    }
}
