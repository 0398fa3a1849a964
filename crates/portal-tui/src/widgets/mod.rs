//! Custom widget components

mod confirm_dialog;
mod console;
mod content_selector;
mod document;
mod footer;
pub mod modal_overlay;
mod nav_tree;
mod right_sidebar;
mod search_bar;
mod sidebar;
mod version_menu;

pub use confirm_dialog::ConfirmDialog;
pub use console::ConsolePanel;
pub use content_selector::ContentSelectorPopup;
pub use document::DocumentView;
pub use footer::Footer;
pub use nav_tree::NavTreeView;
pub use right_sidebar::RightSidebar;
pub use search_bar::SearchBar;
pub use sidebar::Sidebar;
pub use version_menu::VersionMenu;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max_width` columns, marking the cut with `…`
pub(crate) fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
