//! Quit confirmation shown while a query is still running

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::styles;

pub struct ConfirmDialog<'a> {
    message: &'a str,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    pub const WIDTH: u16 = 44;
    pub const HEIGHT: u16 = 6;
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let lines = vec![
            Line::styled(self.message, styles::text_primary()),
            Line::default(),
            Line::from(vec![
                Span::styled("[y]", styles::keybinding()),
                Span::styled(" Quit   ", styles::text_secondary()),
                Span::styled("[n]", styles::keybinding()),
                Span::styled(" Stay", styles::text_secondary()),
            ]),
        ];

        Paragraph::new(lines)
            .block(styles::modal_block(" Quit? "))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
