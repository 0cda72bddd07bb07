//! Profile cache, current-profile pointer, and invalidation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::profile::{HoldProfile, ProfileError, ProfileSource, ProfileSummary};

/// Lifecycle of a cached profile.
///
/// `Loaded → Stale` on invalidation, `Stale → Loaded` on the next access
/// (immediately when the profile is current, lazily otherwise). Entries
/// leave the cache only when a reload of the current profile fails.
#[derive(Debug, Clone)]
enum CacheEntry {
    Loaded(Arc<HoldProfile>),
    Stale(Arc<HoldProfile>),
}

impl CacheEntry {
    fn is_stale(&self) -> bool {
        matches!(self, CacheEntry::Stale(_))
    }

    fn profile(&self) -> &Arc<HoldProfile> {
        match self {
            CacheEntry::Loaded(profile) | CacheEntry::Stale(profile) => profile,
        }
    }
}

/// Mutable manager state, guarded as one unit so readers never observe a
/// half-updated cache/current-pointer pair.
#[derive(Debug, Default)]
struct ManagerState {
    cache: HashMap<u32, CacheEntry>,
    current: Option<u32>,
}

/// Single authority for which hold profile is active and what profiles
/// are known.
///
/// Cloneable handle over shared state; all mutation goes through
/// [`load_profile`](Self::load_profile) and
/// [`invalidate_profile`](Self::invalidate_profile). The cache is
/// unbounded - profiles are small and the known set is host-curated.
///
/// # Example
///
/// ```ignore
/// let manager = HoldDisplayManager::new(source);
/// manager.load_profile(1)?;
/// assert_eq!(manager.current_profile(), Some(1));
///
/// // Backing data changed: the visible profile reloads in place
/// manager.invalidate_profile(1);
/// ```
#[derive(Clone)]
pub struct HoldDisplayManager {
    state: Arc<RwLock<ManagerState>>,
    source: Arc<dyn ProfileSource>,
}

impl HoldDisplayManager {
    /// Create a manager with no profile selected.
    pub fn new(source: Arc<dyn ProfileSource>) -> Self {
        Self {
            state: Arc::new(RwLock::new(ManagerState::default())),
            source,
        }
    }

    /// Make the given profile current, fetching it if needed.
    ///
    /// A cached, non-stale profile is a pure cache hit: no fetch occurs.
    /// On a miss or a stale entry the profile is fetched from the data
    /// source, the cached entry replaced, and the profile set current.
    ///
    /// # Errors
    ///
    /// Propagates the data source's error ([`ProfileError::NotFound`] or
    /// [`ProfileError::Malformed`]); the current profile and cache are
    /// left exactly as they were, so a bad selection never blanks a
    /// working display.
    pub fn load_profile(&self, id: u32) -> Result<(), ProfileError> {
        let mut state = self.state.write().unwrap();

        let fresh_hit = matches!(state.cache.get(&id), Some(entry) if !entry.is_stale());
        if fresh_hit {
            debug!(profile = id, "profile cache hit, set current");
            state.current = Some(id);
            return Ok(());
        }

        let profile = self.source.fetch(id)?;
        debug!(profile = id, name = %profile.name(), "profile loaded from source");
        state.cache.insert(id, CacheEntry::Loaded(Arc::new(profile)));
        state.current = Some(id);
        Ok(())
    }

    /// Id of the profile presently shown, or `None` before any selection.
    ///
    /// Pure read, safe at any time; never returns the id of an unloaded
    /// or evicted profile.
    pub fn current_profile(&self) -> Option<u32> {
        self.state.read().unwrap().current
    }

    /// The current profile's contents, for the renderer.
    pub fn current(&self) -> Option<Arc<HoldProfile>> {
        let state = self.state.read().unwrap();
        let id = state.current?;
        state.cache.get(&id).map(|entry| Arc::clone(entry.profile()))
    }

    /// A cached profile's contents, fresh entries only.
    pub fn profile(&self, id: u32) -> Option<Arc<HoldProfile>> {
        let state = self.state.read().unwrap();
        state.cache.get(&id).and_then(|entry| match entry {
            CacheEntry::Loaded(profile) => Some(Arc::clone(profile)),
            CacheEntry::Stale(_) => None,
        })
    }

    /// Mark a profile's cached data stale.
    ///
    /// A background profile is only marked: the next `load_profile` for it
    /// re-fetches. The *current* profile reloads synchronously so the very
    /// next render reflects the new backing data. If that reload fails the
    /// entry is evicted and the current pointer cleared - the display
    /// degrades to "no profile" rather than showing stale content.
    pub fn invalidate_profile(&self, id: u32) {
        let mut state = self.state.write().unwrap();

        let stale = match state.cache.get(&id) {
            Some(entry) => CacheEntry::Stale(Arc::clone(entry.profile())),
            None => return, // Nothing cached, nothing to invalidate
        };
        state.cache.insert(id, stale);

        if state.current != Some(id) {
            debug!(profile = id, "background profile marked stale");
            return;
        }

        match self.source.fetch(id) {
            Ok(profile) => {
                debug!(profile = id, "current profile reloaded after invalidation");
                state.cache.insert(id, CacheEntry::Loaded(Arc::new(profile)));
            }
            Err(err) => {
                warn!(profile = id, error = %err, "reload of current profile failed, clearing display");
                state.cache.remove(&id);
                state.current = None;
            }
        }
    }

    /// Every profile known to the manager: the source catalogue united
    /// with cached entries, deduplicated by id. Backs the selection menu.
    pub fn known_profiles(&self) -> Vec<ProfileSummary> {
        let mut known = self.source.catalogue();

        let state = self.state.read().unwrap();
        for entry in state.cache.values() {
            let profile = entry.profile();
            if !known.iter().any(|summary| summary.id == profile.id()) {
                known.push(profile.summary());
            }
        }

        known.sort_by_key(|summary| summary.id);
        known
    }
}
