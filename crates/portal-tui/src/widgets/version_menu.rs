//! Version dropdown

use portal_app::version::VersionSwitcher;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use crate::theme::styles;

use super::truncate;

pub struct VersionMenu<'a> {
    versions: &'a VersionSwitcher,
}

impl<'a> VersionMenu<'a> {
    pub fn new(versions: &'a VersionSwitcher) -> Self {
        Self { versions }
    }

    pub fn size(versions: &VersionSwitcher) -> (u16, u16) {
        let longest = versions
            .versions()
            .iter()
            .map(|v| v.chars().count())
            .max()
            .unwrap_or(0) as u16;
        // Marker, padding and borders around the longest name
        ((longest + 6).max(22), versions.versions().len() as u16 + 2)
    }
}

impl Widget for VersionMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::modal_block(" Versions ");
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        for (y, (index, version)) in (inner.top()..inner.bottom())
            .zip(self.versions.versions().iter().enumerate())
        {
            let active = self.versions.is_active(version);
            let marker = if active { "● " } else { "  " };
            let style = if index == self.versions.cursor {
                styles::focused_selected()
            } else if active {
                styles::accent_bold()
            } else {
                styles::text_primary()
            };
            let line = Line::from(vec![
                Span::styled(marker, styles::status_green()),
                Span::styled(truncate(version, width.saturating_sub(2)), style),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
