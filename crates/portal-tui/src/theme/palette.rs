//! Color palette for the portal theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
/// Foreground drawn on top of `ACCENT`
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Portal specific ---
pub const BETA_BADGE_BG: Color = Color::Magenta;
pub const LINK: Color = Color::Blue;
pub const SELECTED_UNFOCUSED_BG: Color = Color::Rgb(45, 51, 59);
pub const EDITOR_BG: Color = Color::Rgb(18, 21, 28);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_layers_are_rgb() {
        for color in [POPUP_BG, SELECTED_UNFOCUSED_BG, EDITOR_BG] {
            assert!(matches!(color, Color::Rgb(_, _, _)), "{color:?} should be RGB");
        }
    }

    #[test]
    fn test_contrast_differs_from_accent() {
        assert_ne!(CONTRAST_FG, ACCENT);
    }
}
