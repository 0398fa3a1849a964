//! Content selector dropdown: the two-column section picker

use portal_app::content_selector::ContentSelectorState;
use portal_core::{Column, Section, SectionRegistry};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use crate::theme::styles;

use super::truncate;

/// Width of one column of sections
pub const COLUMN_WIDTH: u16 = 34;

/// Lines used per section: title row and subtitle row
const ITEM_HEIGHT: u16 = 2;

const HINT: &str = "↑↓ move  ←→ column  Enter open  Esc close";

pub struct ContentSelectorPopup<'a> {
    registry: &'a SectionRegistry,
    selector: &'a ContentSelectorState,
    active_index: Option<usize>,
    show_icons: bool,
}

impl<'a> ContentSelectorPopup<'a> {
    pub fn new(registry: &'a SectionRegistry, selector: &'a ContentSelectorState) -> Self {
        Self {
            registry,
            selector,
            active_index: None,
            show_icons: true,
        }
    }

    /// Index of the category currently held by the selection store
    pub fn active_index(mut self, index: Option<usize>) -> Self {
        self.active_index = index;
        self
    }

    pub fn show_icons(mut self, show: bool) -> Self {
        self.show_icons = show;
        self
    }

    /// Outer size needed to show every section
    pub fn size(registry: &SectionRegistry) -> (u16, u16) {
        let rows = registry
            .column(Column::Left)
            .len()
            .max(registry.column(Column::Right).len()) as u16;
        // Borders, divider column, hint row
        (COLUMN_WIDTH * 2 + 3, rows * ITEM_HEIGHT + 3)
    }

    fn render_column(&self, column: Column, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        let sections = self.registry.column(column);

        for (row, section) in sections.iter().enumerate() {
            let y = area.y + row as u16 * ITEM_HEIGHT;
            if y >= area.bottom() {
                break;
            }
            let highlighted = self.selector.column == column && self.selector.row == row;
            let title = self.title_line(section, highlighted, width);
            buf.set_line(area.x, y, &title, area.width);

            if y + 1 < area.bottom() {
                let indent = if self.show_icons { "  " } else { "" };
                let sub_title = Line::styled(
                    format!(
                        "{indent}{}",
                        truncate(&section.category.sub_title, width.saturating_sub(indent.len()))
                    ),
                    styles::text_muted(),
                );
                buf.set_line(area.x, y + 1, &sub_title, area.width);
            }
        }
    }

    fn title_line(&self, section: &Section, highlighted: bool, width: usize) -> Line<'static> {
        let is_active = self.active_index == Some(section.index);
        let style = if highlighted {
            styles::focused_selected()
        } else if is_active {
            styles::accent_bold()
        } else {
            styles::text_bright_bold()
        };

        let mut spans = Vec::new();
        let mut used = 0;
        if self.show_icons {
            let icon = format!("{} ", section.category.icon);
            used += icon.chars().count();
            spans.push(Span::styled(icon, style));
        }

        let badge = section
            .category
            .stage
            .map(|stage| format!(" {} ", stage.label()));
        let reserved = badge.as_ref().map(|b| b.len() + 1).unwrap_or(0);
        spans.push(Span::styled(
            truncate(section.title(), width.saturating_sub(used + reserved)),
            style,
        ));

        if let Some(badge) = badge {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(badge, styles::beta_badge()));
        }
        Line::from(spans)
    }
}

impl Widget for ContentSelectorPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::modal_block(" Content ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width < 3 {
            return;
        }

        let [columns, hint] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        let [left, divider, right] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(columns);

        self.render_column(Column::Left, left, buf);
        for y in divider.top()..divider.bottom() {
            buf.set_string(divider.x, y, "│", styles::border_inactive());
        }
        self.render_column(Column::Right, right, buf);

        let hint_line = Line::styled(truncate(HINT, hint.width as usize), styles::text_muted());
        buf.set_line(hint.x, hint.y, &hint_line, hint.width);
    }
}
