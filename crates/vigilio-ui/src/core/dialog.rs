//! App-level stack of open confirmation dialogs.
//!
//! # Design
//! - Each modal instance owns a [`DialogId`] for its whole lifetime.
//! - Opening pushes the id, closing removes it wherever it sits.
//! - Only the top of the stack accepts input; lower dialogs render inert.

use uuid::Uuid;

/// Identity of one modal instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DialogId(Uuid);

impl DialogId {
    /// Allocate a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DialogId {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered set of open dialogs, bottom first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogStack {
    open: Vec<DialogId>,
}

impl DialogStack {
    /// Open a dialog; reopening moves it to the top.
    pub fn open(&mut self, id: DialogId) {
        self.open.retain(|entry| *entry != id);
        self.open.push(id);
    }

    /// Close a dialog. Returns false when it was not open.
    pub fn close(&mut self, id: DialogId) -> bool {
        let before = self.open.len();
        self.open.retain(|entry| *entry != id);
        before != self.open.len()
    }

    /// Whether the dialog is open at any depth.
    #[must_use]
    pub fn is_open(&self, id: DialogId) -> bool {
        self.open.contains(&id)
    }

    /// Whether the dialog is the one accepting input.
    #[must_use]
    pub fn is_top(&self, id: DialogId) -> bool {
        self.open.last() == Some(&id)
    }

    /// Number of open dialogs.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_dialog_is_interactive() {
        let mut stack = DialogStack::default();
        let first = DialogId::new();
        let second = DialogId::new();
        stack.open(first);
        stack.open(second);
        assert!(stack.is_open(first));
        assert!(!stack.is_top(first));
        assert!(stack.is_top(second));

        assert!(stack.close(second));
        assert!(stack.is_top(first));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn closing_an_unknown_dialog_is_a_no_op() {
        let mut stack = DialogStack::default();
        assert!(!stack.close(DialogId::new()));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn reopening_moves_dialog_to_top() {
        let mut stack = DialogStack::default();
        let first = DialogId::new();
        let second = DialogId::new();
        stack.open(first);
        stack.open(second);
        stack.open(first);
        assert!(stack.is_top(first));
        assert_eq!(stack.depth(), 2);
    }
}
