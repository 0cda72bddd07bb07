//! Altitude and vertical-speed discretisation.
//!
//! An aircraft is attributed a holding level only when it is actually
//! established there: vertically slow enough to be considered level, and
//! close enough to a defined level altitude. Anything else reports "no
//! occupied level" rather than flapping between adjacent slots.

/// Vertical separation between holding levels, in feet.
pub const LEVEL_SPACING: i32 = 1000;

/// Vertical-speed magnitude (ft/min) at or above which an aircraft is
/// treated as climbing or descending through the stack rather than
/// occupying a level.
pub const MINIMUM_VERTICAL_SPEED: i32 = 300;

/// Maximum distance (feet) from a level altitude at which an aircraft is
/// still attributed that level. Altitude wobble inside this band does not
/// move the aircraft between levels.
pub const MINIMUM_LEVEL_OFFSET: i32 = 210;

/// Determine the level an aircraft occupies, if any.
///
/// Returns the altitude of the occupied level (a multiple of
/// [`LEVEL_SPACING`]), or `None` when the aircraft is not established at
/// any level:
///
/// - Vertical speed magnitude at or above [`MINIMUM_VERTICAL_SPEED`]
///   (transiting between levels)
/// - Altitude more than [`MINIMUM_LEVEL_OFFSET`] feet from the nearest
///   level (between levels)
/// - Negative altitude (no level is defined below zero)
///
/// # Example
///
/// ```
/// use holdstack::level::occupied_level;
///
/// // Established at FL080, 200ft high and gently correcting
/// assert_eq!(occupied_level(8200, -150), Some(8000));
///
/// // Descending through the stack
/// assert_eq!(occupied_level(8200, -1200), None);
/// ```
pub fn occupied_level(altitude: i32, vertical_speed: i32) -> Option<i32> {
    if vertical_speed.abs() >= MINIMUM_VERTICAL_SPEED {
        return None;
    }

    if altitude < 0 {
        return None;
    }

    let nearest = ((altitude + LEVEL_SPACING / 2) / LEVEL_SPACING) * LEVEL_SPACING;
    if (altitude - nearest).abs() > MINIMUM_LEVEL_OFFSET {
        return None;
    }

    Some(nearest)
}

/// Map an occupied level onto a display row for a stack topping out at
/// `hold_max` feet.
///
/// Rows run top-down: the pattern's maximum level is row 0, the level
/// below it row 1, and so on. Levels above `hold_max` clamp to row 0 so
/// over-stacked aircraft remain visible instead of disappearing off the
/// top of the display.
///
/// Callers are responsible for excluding levels below the pattern's
/// minimum; this function only bounds the top of the stack.
pub fn display_row(hold_max: i32, occupied_level: i32) -> u32 {
    if occupied_level >= hold_max {
        return 0;
    }

    ((hold_max - occupied_level) / LEVEL_SPACING) as u32
}

/// Format a level altitude as a flight-level style label.
///
/// `8000` renders as `"080"`, `15000` as `"150"`.
pub fn level_display(altitude: i32) -> String {
    format!("{:03}", altitude / 100)
}
