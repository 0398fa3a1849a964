//! Content selector dropdown: two-column section picker.
//!
//! Activating a section selects its category in the store, applies the
//! section's right-sidebar flag and navigates to the paired route.

use portal_core::prelude::*;
use portal_core::{Column, Section, SectionRegistry};

use crate::router::Navigator;
use crate::store::{SelectionAction, SelectionStore};

/// Open/closed state plus a (column, row) cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSelectorState {
    pub open: bool,
    pub column: Column,
    pub row: usize,
}

impl Default for ContentSelectorState {
    fn default() -> Self {
        Self {
            open: false,
            column: Column::Left,
            row: 0,
        }
    }
}

impl ContentSelectorState {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Place the cursor on the section at flat `index`
    pub fn focus_index(&mut self, registry: &SectionRegistry, index: usize) {
        if let Some(section) = registry.get(index) {
            self.column = section.column;
            self.row = match section.column {
                Column::Left => index,
                Column::Right => index - registry.split(),
            };
        }
    }

    pub fn move_up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    pub fn move_down(&mut self, registry: &SectionRegistry) {
        let len = registry.column(self.column).len();
        if self.row + 1 < len {
            self.row += 1;
        }
    }

    /// Switch to the other column, keeping the row where possible
    pub fn switch_column(&mut self, registry: &SectionRegistry) {
        let other = self.column.other();
        let len = registry.column(other).len();
        if len == 0 {
            return;
        }
        self.column = other;
        self.row = self.row.min(len - 1);
    }

    /// Section under the cursor
    pub fn highlighted<'a>(&self, registry: &'a SectionRegistry) -> Option<&'a Section> {
        registry.at(self.column, self.row)
    }
}

/// Apply a section selection.
///
/// Dispatches `SelectContentCategory`, then `HideRightSidebar` with the
/// section's flag, then navigates to the section's route. A rejected dispatch
/// stops the sequence before navigation.
pub fn activate(
    section: &Section,
    store: &SelectionStore,
    navigator: &mut dyn Navigator,
) -> Result<()> {
    store.dispatch(SelectionAction::SelectContentCategory {
        name: section.title().to_string(),
        index: section.index,
    })?;
    store.dispatch(SelectionAction::HideRightSidebar {
        show: section.category.show_side_bar,
    })?;

    match &section.route {
        Some(route) => {
            info!("Section '{}' selected, opening {}", section.title(), route);
            navigator.navigate(route);
        }
        None => warn!("Section '{}' has no route to open", section.title()),
    }
    Ok(())
}
