//! Hold Display Manager - the single authority for profile state.
//!
//! Exactly one profile is "current" at any time; the renderer and menu
//! components hold no profile state of their own and read through the
//! manager every time, so there is one source of truth and no driftable
//! copies. The manager owns a cache of loaded profiles and the
//! invalidation protocol that keeps the on-screen profile in step with
//! its backing data.

mod manager;

pub use manager::HoldDisplayManager;
