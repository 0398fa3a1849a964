//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's `TestBackend` so widget and full-screen tests can render
//! and then search the resulting buffer as plain text.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::{Frame, Terminal};

/// Standard test terminal size, wide enough for the right sidebar
pub const TEST_WIDTH: u16 = 120;
pub const TEST_HEIGHT: u16 = 32;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    pub fn render_stateful_widget<W, S>(&mut self, widget: W, area: Rect, state: &mut S)
    where
        W: StatefulWidget<State = S>,
    {
        self.terminal
            .draw(|frame| frame.render_stateful_widget(widget, area, state))
            .expect("Failed to render stateful widget");
    }

    /// Draw a full frame, e.g. with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Text of row `y`, one symbol per cell
    pub fn line(&self, y: u16) -> String {
        let buf = self.buffer();
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    /// All rows joined with newlines
    pub fn content(&self) -> String {
        let area = self.buffer().area;
        (area.top()..area.bottom())
            .map(|y| self.line(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether any row contains `text`
    pub fn buffer_contains(&self, text: &str) -> bool {
        let area = self.buffer().area;
        (area.top()..area.bottom()).any(|y| self.line(y).contains(text))
    }

    /// Row index of the first row containing `text`
    pub fn find_row(&self, text: &str) -> Option<u16> {
        let area = self.buffer().area;
        (area.top()..area.bottom()).find(|&y| self.line(y).contains(text))
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
