//! Right-hand contextual sidebar listing the headings of the current page

use portal_core::Heading;
use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use crate::theme::styles;

use super::truncate;

pub struct RightSidebar<'a> {
    headings: &'a [Heading],
}

impl<'a> RightSidebar<'a> {
    pub fn new(headings: &'a [Heading]) -> Self {
        Self { headings }
    }
}

impl Widget for RightSidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" On this page ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.headings.is_empty() {
            buf.set_line(
                inner.x,
                inner.y,
                &Line::styled("No headings", styles::text_muted()),
                inner.width,
            );
            return;
        }

        // Indent relative to the shallowest heading on the page
        let top_level = self.headings.iter().map(|h| h.level).min().unwrap_or(1);
        let width = inner.width as usize;

        for (y, heading) in (inner.top()..inner.bottom()).zip(self.headings) {
            let depth = (heading.level - top_level) as usize;
            let indent = "  ".repeat(depth);
            let style = if depth == 0 {
                styles::text_primary()
            } else {
                styles::text_secondary()
            };
            let text = truncate(&heading.text, width.saturating_sub(indent.len()));
            buf.set_line(
                inner.x,
                y,
                &Line::styled(format!("{indent}{text}"), style),
                inner.width,
            );
        }
    }
}
