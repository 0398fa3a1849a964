//! Navigation tree widget for the sidebar

use portal_app::nav_state::NavTreeState;
use portal_core::{Route, TreeRow};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

use crate::theme::styles;

use super::truncate;

const EXPANDED_MARKER: &str = "▾ ";
const COLLAPSED_MARKER: &str = "▸ ";
const LEAF_MARKER: &str = "  ";
const INDENT: &str = "  ";

/// Renders the visible rows of the navigation tree.
///
/// Scrolls through `NavTreeState` so the cursor stays on screen.
pub struct NavTreeView<'a> {
    rows: &'a [TreeRow<'a>],
    current: &'a Route,
    focused: bool,
    filtering: bool,
}

impl<'a> NavTreeView<'a> {
    pub fn new(rows: &'a [TreeRow<'a>], current: &'a Route) -> Self {
        Self {
            rows,
            current,
            focused: true,
            filtering: false,
        }
    }

    /// Whether the tree owns the cursor (dims the selection otherwise)
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Rows come from a search filter
    pub fn filtering(mut self, filtering: bool) -> Self {
        self.filtering = filtering;
        self
    }

    fn row_line(&self, row: &TreeRow<'_>, selected: bool, width: usize) -> Line<'static> {
        let node = row.node;
        let marker = match (node.has_children(), row.expanded) {
            (true, true) => EXPANDED_MARKER,
            (true, false) => COLLAPSED_MARKER,
            (false, _) => LEAF_MARKER,
        };
        let prefix = format!("{}{}", INDENT.repeat(node.depth), marker);
        let title = truncate(&node.title, width.saturating_sub(prefix.chars().count()));

        let is_current = &node.route == self.current;
        let title_style = if selected && self.focused {
            styles::focused_selected()
        } else if selected {
            styles::unfocused_selected()
        } else if is_current {
            styles::accent_bold()
        } else if node.depth == 0 {
            styles::text_primary()
        } else {
            styles::text_secondary()
        };

        Line::from(vec![
            Span::styled(prefix, styles::text_muted()),
            Span::styled(title, title_style),
        ])
    }
}

impl StatefulWidget for NavTreeView<'_> {
    type State = NavTreeState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.rows.is_empty() {
            let text = if self.filtering {
                "No pages match"
            } else {
                "No pages configured"
            };
            Line::styled(text, styles::text_muted()).render(area, buf);
            return;
        }

        state.clamp(self.rows.len());
        state.ensure_visible(area.height as usize);

        let width = area.width as usize;
        let visible = self
            .rows
            .iter()
            .enumerate()
            .skip(state.scroll_offset)
            .take(area.height as usize);

        for (y, (index, row)) in (area.y..).zip(visible) {
            let line = self.row_line(row, index == state.selected, width);
            buf.set_line(area.x, y, &line, area.width);
        }
    }
}
