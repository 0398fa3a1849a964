//! Sidebar shell: home link, version button, content title and navigation tree

use portal_app::nav_state::NavTreeState;
use portal_app::version::VersionSwitcher;
use portal_core::{Route, TreeRow};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

use crate::theme::styles;

use super::{truncate, NavTreeView};

/// Rows above the tree: home, version, content title, separator
const HEADER_ROWS: u16 = 4;

/// Left-hand sidebar shell.
///
/// The content title shows the category name currently held by the
/// selection store, so it follows every content selector activation.
pub struct Sidebar<'a> {
    site_title: &'a str,
    versions: &'a VersionSwitcher,
    category_name: &'a str,
    rows: &'a [TreeRow<'a>],
    current: &'a Route,
    selector_open: bool,
    tree_focused: bool,
    filtering: bool,
}

impl<'a> Sidebar<'a> {
    pub fn new(
        site_title: &'a str,
        category_name: &'a str,
        rows: &'a [TreeRow<'a>],
        current: &'a Route,
        versions: &'a VersionSwitcher,
    ) -> Self {
        Self {
            site_title,
            versions,
            category_name,
            rows,
            current,
            selector_open: false,
            tree_focused: true,
            filtering: false,
        }
    }

    pub fn selector_open(mut self, open: bool) -> Self {
        self.selector_open = open;
        self
    }

    pub fn tree_focused(mut self, focused: bool) -> Self {
        self.tree_focused = focused;
        self
    }

    pub fn filtering(mut self, filtering: bool) -> Self {
        self.filtering = filtering;
        self
    }

    /// Screen row of the version button, used to anchor the version dropdown
    pub fn version_area(area: Rect) -> Rect {
        Self::inner_row(area, 1)
    }

    /// Screen row of the content title, used to anchor the selector dropdown
    pub fn content_title_area(area: Rect) -> Rect {
        Self::inner_row(area, 2)
    }

    fn inner_row(area: Rect, row: u16) -> Rect {
        Rect::new(area.x + 1, area.y + 1 + row, area.width.saturating_sub(2), 1).intersection(area)
    }

    fn home_line(&self, width: usize) -> Line<'static> {
        let style = if self.current.is_home() {
            styles::accent_bold()
        } else {
            styles::text_primary()
        };
        Line::from(vec![
            Span::styled(truncate("⌂ Home", width.saturating_sub(4)), style),
            Span::styled(" [H]", styles::keybinding()),
        ])
    }

    fn version_line(&self, width: usize) -> Line<'static> {
        if self.versions.is_empty() {
            return Line::styled("Version: latest", styles::text_muted());
        }
        let current = self.versions.current().unwrap_or("latest");
        Line::from(vec![
            Span::styled("Version: ", styles::text_secondary()),
            Span::styled(
                truncate(current, width.saturating_sub(15)),
                styles::text_primary(),
            ),
            Span::styled(" ▾", styles::text_muted()),
            Span::styled(" [v]", styles::keybinding()),
        ])
    }

    fn content_title_line(&self, width: usize) -> Line<'static> {
        let style = if self.selector_open {
            styles::focused_selected()
        } else {
            styles::accent_bold()
        };
        let marker = if self.selector_open { " ▴" } else { " ▾" };
        Line::from(vec![
            Span::styled(truncate(self.category_name, width.saturating_sub(6)), style),
            Span::styled(marker, styles::text_muted()),
            Span::styled(" [s]", styles::keybinding()),
        ])
    }
}

impl StatefulWidget for Sidebar<'_> {
    type State = NavTreeState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = styles::glass_block(self.tree_focused)
            .title(Span::styled(format!(" {} ", self.site_title), styles::accent_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = inner.width as usize;
        let header = [
            self.home_line(width),
            self.version_line(width),
            self.content_title_line(width),
            Line::styled("─".repeat(width), styles::border_inactive()),
        ];
        for (y, line) in (inner.y..inner.bottom()).zip(header.iter()) {
            buf.set_line(inner.x, y, line, inner.width);
        }

        if inner.height <= HEADER_ROWS {
            return;
        }
        let tree_area = Rect {
            y: inner.y + HEADER_ROWS,
            height: inner.height - HEADER_ROWS,
            ..inner
        };
        NavTreeView::new(self.rows, self.current)
            .focused(self.tree_focused)
            .filtering(self.filtering)
            .render(tree_area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use portal_core::{NavTree, NavigationEntry};

    fn tree() -> NavTree {
        NavTree::build(&[
            NavigationEntry::new("GraphQL Intro", "intro/index.mdx"),
            NavigationEntry::new("Tutorials", "tutorials/index.mdx"),
        ])
    }

    #[test]
    fn test_shows_category_name_and_tree() {
        let tree = tree();
        let mut state = NavTreeState::new();
        let rows = state.rows(&tree, "");
        let home = Route::home();
        let versions = VersionSwitcher::default();

        let mut term = TestTerminal::with_size(34, 12);
        let sidebar = Sidebar::new("Dgraph GraphQL", "Tutorials", &rows, &home, &versions);
        term.render_stateful_widget(sidebar, term.area(), &mut state);

        assert!(term.buffer_contains(" Dgraph GraphQL "));
        assert!(term.buffer_contains("⌂ Home [H]"));
        assert!(term.buffer_contains("Version: latest"));
        assert_eq!(term.find_row("Tutorials ▾ [s]"), Some(3));
        assert_eq!(term.find_row("GraphQL Intro"), Some(5));
    }

    #[test]
    fn test_version_button_shows_current_version() {
        let tree = tree();
        let mut state = NavTreeState::new();
        let rows = state.rows(&tree, "");
        let home = Route::home();
        let versions = VersionSwitcher::from_parts(
            Some("https://graphql.dgraph.io/".to_string()),
            vec!["master".to_string(), "v20.07".to_string()],
            Some("v20.07".to_string()),
        );

        let mut term = TestTerminal::with_size(34, 12);
        let sidebar = Sidebar::new("Docs", "Tutorials", &rows, &home, &versions);
        term.render_stateful_widget(sidebar, term.area(), &mut state);

        assert!(term.buffer_contains("Version: v20.07 ▾ [v]"));
    }

    #[test]
    fn test_anchor_rows() {
        let area = Rect::new(0, 0, 34, 20);
        assert_eq!(Sidebar::version_area(area), Rect::new(1, 2, 32, 1));
        assert_eq!(Sidebar::content_title_area(area), Rect::new(1, 3, 32, 1));
    }

    #[test]
    fn test_tiny_area_skips_tree() {
        let tree = tree();
        let mut state = NavTreeState::new();
        let rows = state.rows(&tree, "");
        let home = Route::home();
        let versions = VersionSwitcher::default();

        let mut term = TestTerminal::with_size(34, 5);
        let sidebar = Sidebar::new("Docs", "Tutorials", &rows, &home, &versions);
        term.render_stateful_widget(sidebar, term.area(), &mut state);

        assert!(!term.buffer_contains("GraphQL Intro"));
    }
}
