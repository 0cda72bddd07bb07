//! User-facing control surface for profile selection.
//!
//! The host owns the real menus and dialogs; this module supplies the
//! boundary records it needs (menu entries, dialog requests) and turns
//! host callbacks (menu clicks, typed commands, picker selections) into
//! display-manager calls. None of these components hold profile state of
//! their own.
//!
//! # Components
//!
//! - [`host`] - `DialogHost` capability, `PopupMenuItem`, `MenuItemProvider`
//! - [`configuration`] - `HoldConfigurationMenuItem`, the hold-specific menu entry
//! - [`selection`] - `HoldSelectionMenu`, backing the profile picker

mod configuration;
mod host;
mod selection;

pub use configuration::{HoldConfigurationMenuItem, OPEN_DIALOG_COMMAND};
pub use host::{DialogContext, DialogHost, DialogKind, MenuItemProvider, PopupMenuItem};
pub use selection::HoldSelectionMenu;
