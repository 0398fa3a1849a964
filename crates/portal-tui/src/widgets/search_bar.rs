//! Search input above the document pane

use portal_app::search::{SearchState, SEARCH_PLACEHOLDER};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Search bar filtering the sidebar tree by page title
pub struct SearchBar<'a> {
    search: &'a SearchState,
}

impl<'a> SearchBar<'a> {
    pub fn new(search: &'a SearchState) -> Self {
        Self { search }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.search.is_active).title(Line::from(vec![
            Span::raw(" Search "),
            Span::styled("[/] ", styles::keybinding()),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![Span::styled("/ ", styles::keybinding())];
        if self.search.query.is_empty() && !self.search.is_active {
            spans.push(Span::styled(SEARCH_PLACEHOLDER, styles::text_muted()));
        } else {
            spans.push(Span::styled(self.search.query.as_str(), styles::text_primary()));
            if self.search.is_active {
                spans.push(Span::styled("_", styles::status_yellow()));
            }

            let status = self.search.display_status();
            if !status.is_empty() {
                spans.push(Span::raw(" "));
                let style = if self.search.has_matches() {
                    styles::status_green()
                } else {
                    styles::status_red()
                };
                spans.push(Span::styled(status, style));
            }
        }

        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
    }
}
