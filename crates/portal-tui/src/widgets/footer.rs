//! Footer with project links, key hints and transient status

use portal_app::config::FooterLink;
use portal_app::UiMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct Footer<'a> {
    links: &'a [FooterLink],
    status: Option<&'a str>,
    mode: UiMode,
}

impl<'a> Footer<'a> {
    pub fn new(links: &'a [FooterLink], mode: UiMode) -> Self {
        Self {
            links,
            status: None,
            mode,
        }
    }

    pub fn status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }
}

fn hints(mode: UiMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        UiMode::Normal => &[
            ("s", "sections"),
            ("v", "version"),
            ("/", "search"),
            ("e", "console"),
            ("q", "quit"),
        ],
        UiMode::ContentSelector | UiMode::VersionMenu => {
            &[("↑↓", "move"), ("Enter", "select"), ("Esc", "close")]
        }
        UiMode::SearchInput => &[("Enter", "keep filter"), ("Esc", "clear")],
        UiMode::Console => &[("Ctrl+R", "run"), ("Esc", "close")],
        UiMode::ConfirmDialog => &[("y", "quit"), ("n", "stay")],
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let right = match self.status {
            Some(status) => Line::styled(format!("{status} "), styles::status_yellow()),
            None => {
                let mut spans = Vec::new();
                for (key, label) in hints(self.mode) {
                    spans.push(Span::styled(*key, styles::keybinding()));
                    spans.push(Span::styled(format!(" {label}  "), styles::text_muted()));
                }
                Line::from(spans)
            }
        };
        right.right_aligned().render(inner, buf);

        let mut spans = Vec::new();
        for (i, link) in self.links.iter().enumerate().take(9) {
            spans.push(Span::styled(format!("[{}] ", i + 1), styles::keybinding()));
            spans.push(Span::styled(link.label.as_str(), styles::link()));
            spans.push(Span::raw("  "));
        }
        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn links() -> Vec<FooterLink> {
        vec![
            FooterLink::new("Twitter", "https://twitter.com/dgraphlabs"),
            FooterLink::new("GitHub", "https://github.com/dgraph-io/graphql-dgraph-web"),
        ]
    }

    #[test]
    fn test_links_are_numbered() {
        let links = links();
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(Footer::new(&links, UiMode::Normal), term.area());
        assert!(term.buffer_contains("[1] Twitter  [2] GitHub"));
        assert!(term.buffer_contains("s sections"));
    }

    #[test]
    fn test_status_replaces_hints() {
        let links = links();
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(
            Footer::new(&links, UiMode::Normal).status(Some("No versions configured")),
            term.area(),
        );
        assert!(term.buffer_contains("No versions configured"));
        assert!(!term.buffer_contains("s sections"));
    }

    #[test]
    fn test_hints_follow_mode() {
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(Footer::new(&[], UiMode::Console), term.area());
        assert!(term.buffer_contains("Ctrl+R run"));
    }
}
