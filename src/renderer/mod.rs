//! Hold Renderer - turns profile and occupancy state into display rows.
//!
//! The renderer is a pure function of the current profile (read through
//! the display manager on every pass) and the live holding data. It owns
//! no state, so a profile switch or invalidation is visible on the very
//! next render pass with no cache to flush.

mod rows;

pub use rows::{DisplayRow, HoldRenderer, PatternDisplay, RowAircraft};
