//! Profile selection menu backing the picker dialog.

use tracing::debug;

use crate::display::HoldDisplayManager;
use crate::profile::ProfileSummary;

/// Backs the profile picker: lists the profiles a user can choose from
/// and forwards the choice to the display manager.
///
/// Holds no profile state; both the list and the selection go through the
/// manager so the picker can never drift from what the renderer shows.
#[derive(Clone)]
pub struct HoldSelectionMenu {
    display_manager: HoldDisplayManager,
}

impl HoldSelectionMenu {
    pub fn new(display_manager: HoldDisplayManager) -> Self {
        Self { display_manager }
    }

    /// The profiles to offer in the picker, ordered by id.
    pub fn profiles(&self) -> Vec<ProfileSummary> {
        self.display_manager.known_profiles()
    }

    /// Id of the currently selected profile, for marking in the picker.
    pub fn selected(&self) -> Option<u32> {
        self.display_manager.current_profile()
    }

    /// The user picked a profile.
    ///
    /// No validation here; the display manager owns the not-found failure
    /// mode and leaves the previous profile displayed on a bad pick.
    pub fn select(&self, id: u32) {
        debug!(profile = id, "profile picked from selection menu");
        if let Err(err) = self.display_manager.load_profile(id) {
            debug!(profile = id, error = %err, "selection not applied");
        }
    }
}
