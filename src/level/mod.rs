//! Level Discretiser - pure functions mapping telemetry onto the stack.
//!
//! Holding stacks are vertical ladders of levels spaced [`LEVEL_SPACING`]
//! feet apart. This module converts a continuous `(altitude, vertical speed)`
//! reading into the discrete level an aircraft occupies, converts an occupied
//! level into a bounded display row, and formats time-in-hold durations for
//! the renderer.
//!
//! All functions here are stateless and total: every input has a defined
//! output (including `None` for "not occupying any level"), so callers never
//! need an error path. This favours always-renderable output over strict
//! validation.
//!
//! # Components
//!
//! - [`discretiser`] - `occupied_level`, `display_row`, `level_display`
//! - [`duration`] - `time_in_hold`, `time_in_hold_display`

mod discretiser;
mod duration;

pub use discretiser::{
    display_row, level_display, occupied_level, LEVEL_SPACING, MINIMUM_LEVEL_OFFSET,
    MINIMUM_VERTICAL_SPEED,
};
pub use duration::{time_in_hold, time_in_hold_display};
