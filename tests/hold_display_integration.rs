//! Integration tests for the hold display subsystem.
//!
//! These tests verify the complete flows:
//! - Telemetry → HoldingTracker → HoldRenderer (occupancy to rows)
//! - Menu selection → HoldDisplayManager → renderer pick-up
//! - Invalidation → eager reload of the current profile, lazy for others
//!
//! Run with: `cargo test --test hold_display_integration`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};

use holdstack::display::HoldDisplayManager;
use holdstack::holding::{HoldingTracker, TelemetrySample};
use holdstack::level::{occupied_level, MINIMUM_VERTICAL_SPEED};
use holdstack::menu::{
    DialogContext, DialogHost, DialogKind, HoldConfigurationMenuItem, HoldSelectionMenu,
    MenuItemProvider, OPEN_DIALOG_COMMAND,
};
use holdstack::profile::{
    HoldPattern, HoldProfile, ProfileError, ProfileSource, ProfileSummary, TurnDirection,
};
use holdstack::renderer::HoldRenderer;

// ============================================================================
// Test Helpers
// ============================================================================

/// Profile source over fixed profiles, counting every fetch.
struct CountingSource {
    profiles: Mutex<Vec<HoldProfile>>,
    fetches: AtomicUsize,
}

impl CountingSource {
    fn new(profiles: Vec<HoldProfile>) -> Self {
        Self {
            profiles: Mutex::new(profiles),
            fetches: AtomicUsize::new(0),
        }
    }

    fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Replace a profile's backing data, as the configuration dialog's
    /// save path would.
    fn replace(&self, profile: HoldProfile) {
        let mut profiles = self.profiles.lock().unwrap();
        profiles.retain(|p| p.id() != profile.id());
        profiles.push(profile);
    }
}

impl ProfileSource for CountingSource {
    fn fetch(&self, id: u32) -> Result<HoldProfile, ProfileError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id() == id)
            .cloned()
            .ok_or(ProfileError::NotFound(id))
    }

    fn catalogue(&self) -> Vec<ProfileSummary> {
        self.profiles.lock().unwrap().iter().map(|p| p.summary()).collect()
    }
}

/// Dialog host that records every open request.
struct RecordingDialogHost {
    opened: Mutex<Vec<DialogKind>>,
}

impl RecordingDialogHost {
    fn new() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
        }
    }
}

impl DialogHost for RecordingDialogHost {
    fn open_dialog(&self, kind: DialogKind, _context: DialogContext) {
        self.opened.lock().unwrap().push(kind);
    }
}

fn gatwick_profile() -> HoldProfile {
    let timba = HoldPattern::new("TIMBA", 309, TurnDirection::Right, 7000, 15000);
    let willo = HoldPattern::new("WILLO", 283, TurnDirection::Left, 7000, 15000);
    HoldProfile::new(1, "Gatwick", vec![timba, willo]).unwrap()
}

fn heathrow_profile() -> HoldProfile {
    let bnn = HoldPattern::new("BNN", 117, TurnDirection::Right, 7000, 15000);
    HoldProfile::new(2, "Heathrow", vec![bnn]).unwrap()
}

fn setup() -> (HoldDisplayManager, Arc<CountingSource>) {
    let source = Arc::new(CountingSource::new(vec![
        gatwick_profile(),
        heathrow_profile(),
    ]));
    (HoldDisplayManager::new(source.clone()), source)
}

// ============================================================================
// Discretiser Properties
// ============================================================================

/// Aircraft transiting between levels are never attributed a stable slot.
#[test]
fn test_fast_vertical_speed_never_occupies() {
    for altitude in (0..20000).step_by(250) {
        for vs in [
            MINIMUM_VERTICAL_SPEED,
            -MINIMUM_VERTICAL_SPEED,
            1000,
            -2500,
        ] {
            assert_eq!(
                occupied_level(altitude, vs),
                None,
                "altitude {altitude} vs {vs} must not occupy a level"
            );
        }
    }
}

// ============================================================================
// Load / Cache Scenarios
// ============================================================================

/// Load, switch, switch back: the third load is a pure cache hit.
#[test]
fn test_profile_switching_scenario() {
    let (manager, source) = setup();

    manager.load_profile(1).unwrap();
    assert_eq!(source.fetch_count(), 1);
    assert_eq!(manager.current_profile(), Some(1));

    manager.load_profile(2).unwrap();
    assert_eq!(source.fetch_count(), 2);
    assert_eq!(manager.current_profile(), Some(2));

    manager.load_profile(1).unwrap();
    assert_eq!(source.fetch_count(), 2, "switch back must be a cache hit");
    assert_eq!(manager.current_profile(), Some(1));
}

/// Selecting an id the source does not know leaves the display alone.
#[test]
fn test_unknown_profile_selection() {
    let (manager, _source) = setup();
    manager.load_profile(1).unwrap();

    let result = manager.load_profile(99);

    assert!(matches!(result, Err(ProfileError::NotFound(99))));
    assert_eq!(manager.current_profile(), Some(1));
}

// ============================================================================
// Invalidation Asymmetry
// ============================================================================

/// Invalidating the on-screen profile reloads it before the next render.
#[test]
fn test_invalidate_current_is_synchronous() {
    let (manager, source) = setup();
    manager.load_profile(1).unwrap();

    // Configuration dialog saves a new version of profile 1
    let updated = HoldProfile::new(
        1,
        "Gatwick",
        vec![HoldPattern::new(
            "TIMBA",
            309,
            TurnDirection::Right,
            7000,
            11000,
        )],
    )
    .unwrap();
    source.replace(updated);
    manager.invalidate_profile(1);

    assert_eq!(source.fetch_count(), 2, "exactly one extra fetch");
    let current = manager.current().expect("profile still current");
    assert_eq!(current.patterns()[0].maximum_level, 11000);

    // The renderer sees the new stack height immediately
    let renderer = HoldRenderer::new(manager.clone());
    let displays = renderer.render(&HoldingTracker::new(), Utc::now());
    assert_eq!(displays[0].rows.len(), 5);
}

/// Invalidating a background profile costs nothing until it is reloaded.
#[test]
fn test_invalidate_background_is_lazy() {
    let (manager, source) = setup();
    manager.load_profile(2).unwrap();
    manager.load_profile(1).unwrap();
    assert_eq!(source.fetch_count(), 2);

    manager.invalidate_profile(2);
    assert_eq!(source.fetch_count(), 2, "no fetch until next load");

    manager.load_profile(2).unwrap();
    assert_eq!(source.fetch_count(), 3, "exactly one fetch on next load");
}

// ============================================================================
// Telemetry → Renderer Flow
// ============================================================================

/// A holding aircraft renders in the right row with a running clock, and
/// altitude jitter does not reset it.
#[test]
fn test_time_in_hold_survives_jitter() {
    let (manager, _source) = setup();
    manager.load_profile(1).unwrap();
    let renderer = HoldRenderer::new(manager);

    let t0 = Utc::now();
    let mut tracker = HoldingTracker::new();
    tracker.update(&[TelemetrySample::new("BAW123", "TIMBA", 8000, 0)], t0);

    // 125 seconds later the aircraft has wobbled 150ft high
    let t1 = t0 + Duration::seconds(125);
    tracker.update(&[TelemetrySample::new("BAW123", "TIMBA", 8150, -60)], t1);

    let displays = renderer.render(&tracker, t1);
    let timba = &displays[0];
    let row = timba
        .rows
        .iter()
        .find(|row| row.level == 8000)
        .expect("FL080 row present");

    assert_eq!(row.aircraft.len(), 1);
    assert_eq!(row.aircraft[0].callsign, "BAW123");
    assert_eq!(row.aircraft[0].time_in_hold, "2:05");
}

/// With no profile selected the renderer produces nothing.
#[test]
fn test_render_without_profile_is_empty() {
    let (manager, _source) = setup();
    let renderer = HoldRenderer::new(manager);

    let displays = renderer.render(&HoldingTracker::new(), Utc::now());

    assert!(displays.is_empty());
}

// ============================================================================
// Menu Surface Flow
// ============================================================================

/// Dot-command → dialog open → picker selection → renderer pick-up.
#[test]
fn test_menu_selection_end_to_end() {
    let (manager, _source) = setup();
    let host = Arc::new(RecordingDialogHost::new());
    let item = HoldConfigurationMenuItem::new(
        host.clone(),
        manager.clone(),
        42,
        DialogContext(1),
    );
    let picker = HoldSelectionMenu::new(manager.clone());

    // Typed command opens the picker; other commands fall through
    assert!(!item.process_command(".notours"));
    assert!(item.process_command(OPEN_DIALOG_COMMAND));
    assert_eq!(*host.opened.lock().unwrap(), vec![DialogKind::HoldSelector]);

    // The picker lists the catalogue and applies the user's choice
    let profiles = picker.profiles();
    assert_eq!(profiles.len(), 2);
    picker.select(profiles[1].id);
    assert_eq!(manager.current_profile(), Some(2));

    // The renderer follows the selection with no extra plumbing
    let renderer = HoldRenderer::new(manager);
    let displays = renderer.render(&HoldingTracker::new(), Utc::now());
    assert_eq!(displays.len(), 1);
    assert_eq!(displays[0].fix, "BNN");
}

/// The menu entry registers with its stable callback id.
#[test]
fn test_menu_item_registration() {
    let (manager, _source) = setup();
    let host = Arc::new(RecordingDialogHost::new());
    let item = HoldConfigurationMenuItem::new(host, manager, 42, DialogContext(1));

    let menu_item = item.menu_item();
    assert_eq!(menu_item.callback_id, 42);
    assert!(!menu_item.first_value.is_empty());
}
