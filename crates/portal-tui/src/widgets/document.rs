//! Document pane

use portal_core::{Document, Route};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// Renders the current page, or a placeholder when no file backs the route
pub struct DocumentView<'a> {
    document: Option<&'a Document>,
    route: &'a Route,
    scroll: u16,
}

impl<'a> DocumentView<'a> {
    pub fn new(document: Option<&'a Document>, route: &'a Route) -> Self {
        Self {
            document,
            route,
            scroll: 0,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

/// Style markdown source line by line: headings and fenced code stand out
fn styled_body(body: &str) -> Vec<Line<'_>> {
    let mut in_code = false;
    body.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            if trimmed.starts_with("```") {
                in_code = !in_code;
                return Line::styled(line, styles::text_muted());
            }
            if in_code {
                Line::styled(line, styles::text_secondary())
            } else if trimmed.starts_with('#') {
                Line::styled(line, styles::accent_bold())
            } else if trimmed.starts_with('>') {
                Line::styled(line, styles::text_secondary())
            } else {
                Line::styled(line, styles::text_primary())
            }
        })
        .collect()
}

impl Widget for DocumentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(document) = self.document else {
            render_not_found(self.route, area, buf);
            return;
        };

        let title = document
            .display_title()
            .unwrap_or_else(|| self.route.as_str());
        let total = document.body.lines().count();
        let position = format!(" {}/{} ", (self.scroll as usize + 1).min(total.max(1)), total);

        let block = styles::glass_block(false)
            .title(Span::styled(format!(" {title} "), styles::text_bright_bold()))
            .title_bottom(Line::styled(position, styles::text_muted()).right_aligned());

        Paragraph::new(styled_body(&document.body))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

fn render_not_found(route: &Route, area: Rect, buf: &mut Buffer) {
    let block = styles::glass_block(false).title(" Not found ");
    let inner = block.inner(area);
    block.render(area, buf);

    let lines = vec![
        Line::styled("Page not found", styles::status_yellow()),
        Line::styled(route.as_str().to_string(), styles::text_muted()),
        Line::default(),
        Line::from(vec![
            Span::styled("Press ", styles::text_secondary()),
            Span::styled("H", styles::keybinding()),
            Span::styled(" to go home or ", styles::text_secondary()),
            Span::styled("b", styles::keybinding()),
            Span::styled(" to go back", styles::text_secondary()),
        ]),
    ];

    let top = inner.y + inner.height.saturating_sub(lines.len() as u16) / 2;
    let text_area = Rect {
        y: top,
        height: inner.bottom().saturating_sub(top),
        ..inner
    };
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(text_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use std::path::PathBuf;

    fn document() -> Document {
        let content = "---\ntitle: Schema\n---\n# Types\nScalars and objects.\n\n```graphql\ntype Task { id: ID! }\n```\n## Directives\n";
        Document::parse(
            Route::from_doc_path("reference/schema/index.mdx"),
            PathBuf::from("docs/reference/schema/index.mdx"),
            content,
        )
    }

    #[test]
    fn test_renders_title_and_body() {
        let doc = document();
        let mut term = TestTerminal::with_size(60, 12);
        term.render_widget(DocumentView::new(Some(&doc), &doc.route), term.area());

        assert!(term.buffer_contains(" Schema "));
        assert!(term.buffer_contains("# Types"));
        assert!(term.buffer_contains("type Task { id: ID! }"));
        assert!(!term.buffer_contains("title: Schema"));
        assert!(term.buffer_contains(" 1/7 "));
    }

    #[test]
    fn test_headings_use_accent() {
        let doc = document();
        let mut term = TestTerminal::with_size(60, 12);
        term.render_widget(DocumentView::new(Some(&doc), &doc.route), term.area());

        let y = term.find_row("# Types").unwrap();
        assert_eq!(term.buffer()[(1, y)].fg, crate::theme::palette::ACCENT);
    }

    #[test]
    fn test_scroll_skips_lines() {
        let doc = document();
        let mut term = TestTerminal::with_size(60, 12);
        term.render_widget(
            DocumentView::new(Some(&doc), &doc.route).scroll(1),
            term.area(),
        );
        assert!(!term.buffer_contains("# Types"));
        assert!(term.buffer_contains("Scalars and objects."));
    }

    #[test]
    fn test_missing_document_shows_placeholder() {
        let route = Route::from_doc_path("nowhere/index.mdx");
        let mut term = TestTerminal::with_size(60, 12);
        term.render_widget(DocumentView::new(None, &route), term.area());

        assert!(term.buffer_contains("Page not found"));
        assert!(term.buffer_contains(route.as_str()));
        assert!(term.buffer_contains("to go home"));
    }

    #[test]
    fn test_styled_body_tracks_code_fences() {
        let lines = styled_body("```\n# not a heading\n```\n# heading");
        assert_eq!(lines[1].style, styles::text_secondary());
        assert_eq!(lines[3].style, styles::accent_bold());
    }
}
