//! Expansion and cursor state for the navigation tree.

use std::collections::HashSet;

use portal_core::{NavTree, NodeId, Route, TreeRow};

/// Tracks which groups are collapsed and which row has the cursor.
///
/// Groups are expanded by default; only explicit collapses are recorded.
#[derive(Debug, Clone, Default)]
pub struct NavTreeState {
    collapsed: HashSet<NodeId>,

    /// Cursor position within the visible rows
    pub selected: usize,

    /// First visible row
    pub scroll_offset: usize,
}

impl NavTreeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        !self.collapsed.contains(&id)
    }

    /// Toggle the expansion of a group
    pub fn toggle(&mut self, id: NodeId) {
        if !self.collapsed.remove(&id) {
            self.collapsed.insert(id);
        }
    }

    pub fn collapse_all(&mut self, tree: &NavTree) {
        self.collapsed.extend(tree.group_ids());
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    /// Rows currently visible; a non-empty `filter` shows matches with their ancestors
    pub fn rows<'a>(&self, tree: &'a NavTree, filter: &str) -> Vec<TreeRow<'a>> {
        if filter.trim().is_empty() {
            tree.visible_rows(|id| self.is_expanded(id))
        } else {
            tree.filtered_rows(filter)
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, row_count: usize) {
        if row_count > 0 && self.selected + 1 < row_count {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, row_count: usize) {
        self.selected = row_count.saturating_sub(1);
    }

    /// Keep the cursor inside the visible rows
    pub fn clamp(&mut self, row_count: usize) {
        if self.selected >= row_count {
            self.selected = row_count.saturating_sub(1);
        }
    }

    /// Adjust `scroll_offset` so the cursor stays within `height` rows
    pub fn ensure_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + height {
            self.scroll_offset = self.selected + 1 - height;
        }
    }

    /// Move the cursor onto the node for `route`, expanding its ancestors.
    ///
    /// Returns false when no node has that route.
    pub fn reveal(&mut self, tree: &NavTree, route: &Route) -> bool {
        let Some(target) = tree.find_by_route(route) else {
            return false;
        };

        let mut parent = tree.get(target).and_then(|n| n.parent);
        while let Some(id) = parent {
            self.collapsed.remove(&id);
            parent = tree.get(id).and_then(|n| n.parent);
        }

        let rows = tree.visible_rows(|id| self.is_expanded(id));
        if let Some(pos) = rows.iter().position(|r| r.node.id == target) {
            self.selected = pos;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::NavigationEntry;

    fn tree() -> NavTree {
        NavTree::build(&[
            NavigationEntry::new("Intro", "intro/index.mdx"),
            NavigationEntry::new("Schema", "schema/index.mdx").with_children(vec![
                NavigationEntry::new("Types", "schema/types.mdx"),
                NavigationEntry::new("Directives", "schema/directives.mdx"),
            ]),
        ])
    }

    #[test]
    fn test_groups_expanded_by_default() {
        let tree = tree();
        let state = NavTreeState::new();
        assert_eq!(state.rows(&tree, "").len(), 4);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let tree = tree();
        let schema = tree.roots()[1];
        let mut state = NavTreeState::new();

        state.toggle(schema);
        assert!(!state.is_expanded(schema));
        assert_eq!(state.rows(&tree, "").len(), 2);

        state.toggle(schema);
        assert!(state.is_expanded(schema));
        assert_eq!(state.rows(&tree, "").len(), 4);
    }

    #[test]
    fn test_collapse_and_expand_all() {
        let tree = tree();
        let mut state = NavTreeState::new();
        state.selected = 3;
        state.collapse_all(&tree);
        assert_eq!(state.rows(&tree, "").len(), 2);
        assert_eq!(state.selected, 0);
        state.expand_all();
        assert_eq!(state.rows(&tree, "").len(), 4);
    }

    #[test]
    fn test_filter_ignores_collapse() {
        let tree = tree();
        let mut state = NavTreeState::new();
        state.collapse_all(&tree);
        let rows = state.rows(&tree, "types");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].node.title, "Types");
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = NavTreeState::new();
        state.select_previous();
        assert_eq!(state.selected, 0);
        state.select_next(2);
        state.select_next(2);
        assert_eq!(state.selected, 1);
        state.select_last(4);
        assert_eq!(state.selected, 3);
        state.clamp(2);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_ensure_visible_scrolls() {
        let mut state = NavTreeState::new();
        state.selected = 7;
        state.ensure_visible(5);
        assert_eq!(state.scroll_offset, 3);
        state.selected = 1;
        state.ensure_visible(5);
        assert_eq!(state.scroll_offset, 1);
    }

    #[test]
    fn test_reveal_expands_ancestors() {
        let tree = tree();
        let mut state = NavTreeState::new();
        state.collapse_all(&tree);

        assert!(state.reveal(&tree, &Route::from_doc_path("schema/directives.mdx")));
        assert_eq!(state.selected, 3);
        assert!(state.is_expanded(tree.roots()[1]));
        assert!(!state.reveal(&tree, &Route::from_doc_path("missing.mdx")));
    }
}
