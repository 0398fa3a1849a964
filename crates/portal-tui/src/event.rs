//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use portal_app::{InputKey, Message};
use portal_core::prelude::*;

/// Poll interval for terminal input (20 FPS)
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert a crossterm key event to the portal's key model
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    let input = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputKey::CharCtrl(c.to_ascii_lowercase())
        }
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => InputKey::BackTab,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::BackTab => InputKey::BackTab,
        KeyCode::Backspace => InputKey::Backspace,
        KeyCode::Delete => InputKey::Delete,
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::Home => InputKey::Home,
        KeyCode::End => InputKey::End,
        KeyCode::PageUp => InputKey::PageUp,
        KeyCode::PageDown => InputKey::PageDown,
        KeyCode::F(n) => InputKey::F(n),
        _ => return None,
    };
    Some(input)
}

/// Poll for a terminal event, producing `Tick` when the interval elapses
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        // Resizes are picked up by the next draw
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_plain_and_shifted_chars() {
        assert_eq!(key_event_to_input(key(KeyCode::Char('/'))), Some(InputKey::Char('/')));
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(InputKey::Char('G'))
        );
    }

    #[test]
    fn test_ctrl_chars_are_lowercased() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(InputKey::CharCtrl('r'))
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(
                KeyCode::Char('E'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT
            )),
            Some(InputKey::CharCtrl('e'))
        );
    }

    #[test]
    fn test_tree_navigation_keys() {
        assert_eq!(key_event_to_input(key(KeyCode::Up)), Some(InputKey::Up));
        assert_eq!(key_event_to_input(key(KeyCode::Down)), Some(InputKey::Down));
        assert_eq!(key_event_to_input(key(KeyCode::Home)), Some(InputKey::Home));
        assert_eq!(key_event_to_input(key(KeyCode::End)), Some(InputKey::End));
        assert_eq!(key_event_to_input(key(KeyCode::PageDown)), Some(InputKey::PageDown));
    }

    #[test]
    fn test_shift_tab_is_backtab() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)),
            Some(InputKey::BackTab)
        );
        assert_eq!(key_event_to_input(key(KeyCode::BackTab)), Some(InputKey::BackTab));
        assert_eq!(key_event_to_input(key(KeyCode::Tab)), Some(InputKey::Tab));
    }

    #[test]
    fn test_function_key_for_run_query() {
        assert_eq!(key_event_to_input(key(KeyCode::F(5))), Some(InputKey::F(5)));
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        assert_eq!(key_event_to_input(key(KeyCode::Insert)), None);
        assert_eq!(key_event_to_input(key(KeyCode::CapsLock)), None);
    }
}
