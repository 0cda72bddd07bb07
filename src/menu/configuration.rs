//! The hold subsystem's configuration menu entry.

use std::sync::Arc;

use tracing::warn;

use super::host::{DialogContext, DialogHost, DialogKind, MenuItemProvider, PopupMenuItem};
use crate::display::HoldDisplayManager;

/// Reserved dot-command that opens the hold profile picker.
pub const OPEN_DIALOG_COMMAND: &str = ".hold";

const MENU_ITEM_DESCRIPTION: &str = "Configure Holds";

/// The hold-specific configuration menu entry.
///
/// Turns a menu click or the reserved dot-command into a request to open
/// the profile picker, and forwards picker selections to the display
/// manager. Validation of a selected id lives in the manager, not here.
pub struct HoldConfigurationMenuItem {
    dialog_host: Arc<dyn DialogHost>,
    display_manager: HoldDisplayManager,
    callback_id: u32,
    context: DialogContext,
}

impl HoldConfigurationMenuItem {
    /// Create the menu entry.
    ///
    /// `callback_id` is the stable identifier the host associates with
    /// this entry; `context` is the opaque token handed back through
    /// dialog callbacks.
    pub fn new(
        dialog_host: Arc<dyn DialogHost>,
        display_manager: HoldDisplayManager,
        callback_id: u32,
        context: DialogContext,
    ) -> Self {
        Self {
            dialog_host,
            display_manager,
            callback_id,
            context,
        }
    }

    /// The user picked a profile in the selector dialog.
    ///
    /// Forwards straight to the display manager; a failed load leaves the
    /// previous profile displayed, so this only logs. The host's normal
    /// messaging surface is the place for user feedback.
    pub fn select_profile(&self, id: u32) {
        if let Err(err) = self.display_manager.load_profile(id) {
            warn!(profile = id, error = %err, "selected profile could not be loaded");
        }
    }

    /// A profile's backing data changed.
    ///
    /// Only triggers a reload when the profile is the one on screen; the
    /// display manager's own stale-check stays authoritative, this is a
    /// cheap short-circuit for profiles nobody is looking at.
    pub fn invalidate_profile(&self, id: u32) {
        if self.display_manager.current_profile() != Some(id) {
            return;
        }

        self.display_manager.invalidate_profile(id);
    }
}

impl MenuItemProvider for HoldConfigurationMenuItem {
    fn configure(&self, context: DialogContext) {
        self.dialog_host.open_dialog(DialogKind::HoldSelector, context);
    }

    fn menu_item(&self) -> PopupMenuItem {
        PopupMenuItem {
            first_value: MENU_ITEM_DESCRIPTION.to_string(),
            second_value: String::new(),
            callback_id: self.callback_id,
            checked: false,
            disabled: false,
            fixed_position: false,
        }
    }

    fn process_command(&self, command: &str) -> bool {
        if command == OPEN_DIALOG_COMMAND {
            self.configure(self.context);
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{HoldPattern, HoldProfile, ProfileError, ProfileSource, ProfileSummary, TurnDirection};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct RecordingDialogHost {
        opened: Mutex<Vec<(DialogKind, DialogContext)>>,
    }

    impl RecordingDialogHost {
        fn new() -> Self {
            Self {
                opened: Mutex::new(Vec::new()),
            }
        }

        fn opened(&self) -> Vec<(DialogKind, DialogContext)> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl DialogHost for RecordingDialogHost {
        fn open_dialog(&self, kind: DialogKind, context: DialogContext) {
            self.opened.lock().unwrap().push((kind, context));
        }
    }

    struct CountingSource {
        fetches: AtomicUsize,
    }

    impl ProfileSource for CountingSource {
        fn fetch(&self, id: u32) -> Result<HoldProfile, ProfileError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if id == 1 {
                let pattern = HoldPattern::new("TIMBA", 309, TurnDirection::Right, 7000, 15000);
                HoldProfile::new(1, "Gatwick", vec![pattern])
            } else {
                Err(ProfileError::NotFound(id))
            }
        }

        fn catalogue(&self) -> Vec<ProfileSummary> {
            vec![ProfileSummary::new(1, "Gatwick")]
        }
    }

    fn menu_item_with_host() -> (
        HoldConfigurationMenuItem,
        Arc<RecordingDialogHost>,
        HoldDisplayManager,
        Arc<CountingSource>,
    ) {
        let host = Arc::new(RecordingDialogHost::new());
        let source = Arc::new(CountingSource {
            fetches: AtomicUsize::new(0),
        });
        let manager = HoldDisplayManager::new(source.clone());
        let item = HoldConfigurationMenuItem::new(
            host.clone(),
            manager.clone(),
            55,
            DialogContext(0xBEEF),
        );
        (item, host, manager, source)
    }

    #[test]
    fn test_menu_item_shape() {
        let (item, _host, _manager, _source) = menu_item_with_host();

        let menu_item = item.menu_item();
        assert_eq!(menu_item.first_value, "Configure Holds");
        assert_eq!(menu_item.callback_id, 55);
        assert!(!menu_item.checked);
        assert!(!menu_item.disabled);
        assert!(!menu_item.fixed_position);
    }

    #[test]
    fn test_reserved_command_opens_selector() {
        let (item, host, _manager, _source) = menu_item_with_host();

        assert!(item.process_command(OPEN_DIALOG_COMMAND));

        let opened = host.opened();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0], (DialogKind::HoldSelector, DialogContext(0xBEEF)));
    }

    #[test]
    fn test_other_commands_fall_through() {
        let (item, host, _manager, _source) = menu_item_with_host();

        assert!(!item.process_command(".metar EGKK"));
        assert!(!item.process_command(".hold extra"));
        assert!(!item.process_command(""));
        assert!(host.opened().is_empty());
    }

    #[test]
    fn test_configure_opens_selector_with_given_context() {
        let (item, host, _manager, _source) = menu_item_with_host();

        item.configure(DialogContext(7));

        assert_eq!(host.opened(), vec![(DialogKind::HoldSelector, DialogContext(7))]);
    }

    #[test]
    fn test_select_profile_loads_it() {
        let (item, _host, manager, _source) = menu_item_with_host();

        item.select_profile(1);

        assert_eq!(manager.current_profile(), Some(1));
    }

    #[test]
    fn test_select_missing_profile_keeps_display() {
        let (item, _host, manager, _source) = menu_item_with_host();
        item.select_profile(1);

        item.select_profile(99);

        assert_eq!(manager.current_profile(), Some(1));
    }

    #[test]
    fn test_invalidate_current_profile_reloads() {
        let (item, _host, _manager, source) = menu_item_with_host();
        item.select_profile(1);
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);

        item.invalidate_profile(1);

        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_invalidate_other_profile_is_noop() {
        let (item, _host, manager, source) = menu_item_with_host();
        item.select_profile(1);

        item.invalidate_profile(2);

        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
        assert_eq!(manager.current_profile(), Some(1));
    }
}
