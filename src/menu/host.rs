//! Host-facing capability traits and boundary records.

/// Which dialog the core is asking the host to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// The hold profile picker.
    HoldSelector,
}

/// Opaque context token passed back to the core through dialog callbacks.
///
/// The core never interprets the value; it only carries it through to the
/// host so the host can route the dialog's result to the right component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogContext(pub u64);

/// Capability for opening host-native dialogs.
///
/// Keeps windowing-API concerns entirely on the host side of the
/// boundary; the core only names the dialog kind and hands over a token.
pub trait DialogHost: Send + Sync {
    /// Ask the host to open a dialog.
    fn open_dialog(&self, kind: DialogKind, context: DialogContext);
}

/// A menu entry as the host's menu subsystem expects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupMenuItem {
    /// Primary column text
    pub first_value: String,
    /// Secondary column text
    pub second_value: String,
    /// Stable callback identifier the host invokes on click
    pub callback_id: u32,
    /// Whether the entry shows a checkmark
    pub checked: bool,
    /// Whether the entry is greyed out
    pub disabled: bool,
    /// Whether the entry keeps its position in the menu
    pub fixed_position: bool,
}

/// Capability implemented by each configuration menu entry.
///
/// The host enumerates these uniformly: it collects menu items through
/// [`menu_item`](Self::menu_item), routes clicks to
/// [`configure`](Self::configure), and offers typed commands to each
/// provider's [`process_command`](Self::process_command) in turn until one
/// consumes it.
pub trait MenuItemProvider: Send + Sync {
    /// The user clicked this entry's menu item.
    fn configure(&self, context: DialogContext);

    /// The menu entry to register with the host.
    fn menu_item(&self) -> PopupMenuItem;

    /// Offer a typed command to this provider.
    ///
    /// Returns `true` when consumed; `false` lets dispatch fall through
    /// to other handlers.
    fn process_command(&self, command: &str) -> bool;
}
