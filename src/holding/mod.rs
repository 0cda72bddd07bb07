//! Holding Data - per-aircraft occupancy facts.
//!
//! Each host update tick delivers fresh telemetry for the aircraft holding
//! at loaded patterns. The [`HoldingTracker`] recomputes every aircraft's
//! occupied level through the discretiser and maintains the one piece of
//! history the display needs: the time at which the aircraft first reached
//! its current level. Everything else is derived, not persisted.
//!
//! # Components
//!
//! - [`model`] - `TelemetrySample` (the telemetry boundary record) and
//!   `HoldingData` (the derived occupancy record)
//! - [`tracker`] - `HoldingTracker` applying one tick of telemetry

mod model;
mod tracker;

pub use model::{HoldingData, TelemetrySample};
pub use tracker::HoldingTracker;
