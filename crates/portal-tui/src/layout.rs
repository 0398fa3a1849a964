//! Screen layout definitions for the TUI
//!
//! The portal screen is a sidebar on the left, a search bar over the
//! document pane in the middle, an optional contextual sidebar on the right,
//! and an optional footer along the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the right-hand "On this page" sidebar
pub const RIGHT_SIDEBAR_WIDTH: u16 = 28;

/// Below this width the right sidebar is dropped even when requested
pub const MIN_WIDTH_FOR_RIGHT_SIDEBAR: u16 = 100;

/// Narrowest the sidebar is allowed to get
const MIN_SIDEBAR_WIDTH: u16 = 20;

const SEARCH_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Logo, version button, content title and navigation tree
    pub sidebar: Rect,

    /// Search input above the document
    pub search: Rect,

    /// Document pane
    pub content: Rect,

    /// Headings of the current document, when shown
    pub right_sidebar: Option<Rect>,

    /// Footer links and status line, when enabled
    pub footer: Option<Rect>,
}

/// Options that shape the main layout
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    pub sidebar_width: u16,
    pub show_right_sidebar: bool,
    pub show_footer: bool,
}

/// Create the main screen layout
pub fn create(area: Rect, options: LayoutOptions) -> ScreenAreas {
    let (body, footer) = if options.show_footer && area.height > FOOTER_HEIGHT * 3 {
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).areas(area);
        (body, Some(footer))
    } else {
        (area, None)
    };

    // Keep at least half the width for the document
    let sidebar_width = options
        .sidebar_width
        .max(MIN_SIDEBAR_WIDTH)
        .min(body.width / 2);

    let with_right =
        options.show_right_sidebar && body.width >= MIN_WIDTH_FOR_RIGHT_SIDEBAR;

    let (sidebar, main, right_sidebar) = if with_right {
        let [sidebar, main, right] = Layout::horizontal([
            Constraint::Length(sidebar_width),
            Constraint::Min(0),
            Constraint::Length(RIGHT_SIDEBAR_WIDTH),
        ])
        .areas(body);
        (sidebar, main, Some(right))
    } else {
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)])
                .areas(body);
        (sidebar, main, None)
    };

    let [search, content] =
        Layout::vertical([Constraint::Length(SEARCH_HEIGHT), Constraint::Min(0)]).areas(main);

    ScreenAreas {
        sidebar,
        search,
        content,
        right_sidebar,
        footer,
    }
}
