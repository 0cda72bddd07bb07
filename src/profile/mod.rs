//! Hold profile value types and the profile data source boundary.
//!
//! A profile is a named, immutable collection of holding-pattern definitions
//! a controller can select as the active view. Profiles are produced by a
//! [`ProfileSource`] (the host's profile store - typically JSON-backed) and
//! cached by the display manager; edits produce a new profile value, never
//! in-place mutation of a cached instance.
//!
//! # Components
//!
//! - [`types`] - `HoldProfile`, `HoldPattern`, `TurnDirection`, `ProfileSummary`
//! - [`error`] - `ProfileError`
//! - [`source`] - `ProfileSource` trait for fetching and enumerating profiles

mod error;
mod source;
mod types;

pub use error::ProfileError;
pub use source::ProfileSource;
pub use types::{HoldPattern, HoldProfile, ProfileSummary, TurnDirection};
