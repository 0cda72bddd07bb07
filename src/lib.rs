//! Holdstack - holding-stack occupancy and hold profile management
//!
//! This library provides the core of a holding-pattern display subsystem for
//! an air-traffic-control simulation client: it maps live aircraft telemetry
//! onto discrete holding levels, tracks how long each aircraft has occupied
//! its level, and manages a cache of named hold profiles with a single
//! "current" profile feeding the display.
//!
//! # High-Level API
//!
//! ```
//! use std::sync::Arc;
//! use holdstack::display::HoldDisplayManager;
//! use holdstack::holding::{HoldingTracker, TelemetrySample};
//! use holdstack::profile::{HoldPattern, HoldProfile, ProfileError, ProfileSource, ProfileSummary, TurnDirection};
//! use holdstack::renderer::HoldRenderer;
//!
//! struct StaticSource(HoldProfile);
//!
//! impl ProfileSource for StaticSource {
//!     fn fetch(&self, id: u32) -> Result<HoldProfile, ProfileError> {
//!         if id == self.0.id() {
//!             Ok(self.0.clone())
//!         } else {
//!             Err(ProfileError::NotFound(id))
//!         }
//!     }
//!
//!     fn catalogue(&self) -> Vec<ProfileSummary> {
//!         vec![ProfileSummary::new(self.0.id(), self.0.name())]
//!     }
//! }
//!
//! let pattern = HoldPattern::new("TIMBA", 309, TurnDirection::Right, 7000, 15000);
//! let profile = HoldProfile::new(1, "Gatwick Arrivals", vec![pattern]).unwrap();
//!
//! let manager = HoldDisplayManager::new(Arc::new(StaticSource(profile)));
//! manager.load_profile(1).unwrap();
//!
//! let mut tracker = HoldingTracker::new();
//! tracker.update(
//!     &[TelemetrySample::new("BAW123", "TIMBA", 8010, -120)],
//!     chrono::Utc::now(),
//! );
//!
//! let renderer = HoldRenderer::new(manager.clone());
//! let displays = renderer.render(&tracker, chrono::Utc::now());
//! assert_eq!(displays[0].fix, "TIMBA");
//! ```
//!
//! # Components
//!
//! - [`level`] - Pure discretisation functions (altitude → level → row)
//! - [`profile`] - Hold profile value types and the profile data source trait
//! - [`holding`] - Per-aircraft occupancy facts derived each update tick
//! - [`display`] - Profile cache, current-profile pointer, invalidation
//! - [`renderer`] - Current profile + holding data → display rows
//! - [`menu`] - Profile selection menu and host configuration surface

pub mod display;
pub mod holding;
pub mod level;
pub mod menu;
pub mod profile;
pub mod renderer;

/// Version of the holdstack library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
