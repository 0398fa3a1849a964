//! Selection state store.
//!
//! Holds the currently selected content category and the right-hand sidebar
//! flag for the whole session. State is only mutated through [`SelectionStore::dispatch`];
//! readers take a [`SelectionStore::snapshot`] or hold a `watch` receiver from
//! [`SelectionStore::subscribe`], which fires only when a dispatch changes
//! something.

use portal_core::prelude::*;
use tokio::sync::watch;

/// Shared selection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub category_name: String,
    /// `None` until a section has been selected
    pub category_index: Option<usize>,
    pub show_right_sidebar: bool,
}

impl SelectionState {
    pub fn new(default_category: impl Into<String>) -> Self {
        Self {
            category_name: default_category.into(),
            category_index: None,
            show_right_sidebar: true,
        }
    }
}

/// Actions accepted by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    SelectContentCategory { name: String, index: usize },
    /// Sets the flag to `show`; not a toggle
    HideRightSidebar { show: bool },
}

/// Owner of [`SelectionState`]
#[derive(Debug)]
pub struct SelectionStore {
    tx: watch::Sender<SelectionState>,
    /// Number of sections a category index may address
    category_count: usize,
}

impl SelectionStore {
    pub fn new(initial: SelectionState, category_count: usize) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx, category_count }
    }

    /// Current state; before any dispatch this is the initial default
    pub fn snapshot(&self) -> SelectionState {
        self.tx.borrow().clone()
    }

    /// Receiver notified whenever a dispatch changes the state
    pub fn subscribe(&self) -> watch::Receiver<SelectionState> {
        self.tx.subscribe()
    }

    pub fn category_count(&self) -> usize {
        self.category_count
    }

    /// Apply `action`.
    ///
    /// Returns `Ok(true)` when the state changed. Out-of-range category indices
    /// are rejected and leave the state untouched.
    pub fn dispatch(&self, action: SelectionAction) -> Result<bool> {
        if let SelectionAction::SelectContentCategory { index, .. } = &action {
            if *index >= self.category_count {
                let err = Error::category_out_of_range(*index, self.category_count);
                warn!("Rejected selection: {}", err);
                return Err(err);
            }
        }

        let changed = self.tx.send_if_modified(|state| match action {
            SelectionAction::SelectContentCategory { name, index } => {
                if state.category_index == Some(index) && state.category_name == name {
                    return false;
                }
                state.category_name = name;
                state.category_index = Some(index);
                true
            }
            SelectionAction::HideRightSidebar { show } => {
                if state.show_right_sidebar == show {
                    return false;
                }
                state.show_right_sidebar = show;
                true
            }
        });

        if changed {
            trace!("Selection state changed: {:?}", *self.tx.borrow());
        }
        Ok(changed)
    }
}
