//! App-wide yewdux store.
//!
//! # Design
//! - Hold only state that crosses screen boundaries; screens keep their own data in hooks.
//! - The dialog stack lives here so nested modals agree on which one is on top.

use crate::core::dialog::{DialogId, DialogStack};
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Global application store.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Open confirmation dialogs.
    pub dialogs: DialogStack,
}

impl AppStore {
    /// Register a dialog as open and on top.
    pub fn open_dialog(&mut self, id: DialogId) {
        self.dialogs.open(id);
    }

    /// Remove a dialog from the stack.
    pub fn close_dialog(&mut self, id: DialogId) {
        self.dialogs.close(id);
    }
}

/// Dispatch handle for the global store.
#[must_use]
pub fn app_dispatch() -> Dispatch<AppStore> {
    Dispatch::<AppStore>::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_tracks_dialog_order() {
        let mut store = AppStore::default();
        let outer = DialogId::new();
        let inner = DialogId::new();
        store.open_dialog(outer);
        store.open_dialog(inner);
        assert!(store.dialogs.is_top(inner));
        store.close_dialog(inner);
        assert!(store.dialogs.is_top(outer));
        store.close_dialog(outer);
        assert_eq!(store.dialogs.depth(), 0);
    }
}
