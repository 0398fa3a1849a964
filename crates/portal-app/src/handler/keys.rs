//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C always quits
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Normal => handle_key_normal(key),
        UiMode::ContentSelector => handle_key_content_selector(key),
        UiMode::VersionMenu => handle_key_version_menu(state, key),
        UiMode::SearchInput => handle_key_search_input(key),
        UiMode::Console => handle_key_console(state, key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
    }
}

fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::RequestQuit),

        // Tree
        InputKey::Char('j') | InputKey::Down => Some(Message::TreeDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::TreeUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::TreeTop),
        InputKey::Char('G') | InputKey::End => Some(Message::TreeBottom),
        InputKey::Char(' ') | InputKey::Right | InputKey::Left => Some(Message::TreeToggle),
        InputKey::Enter => Some(Message::TreeOpen),
        InputKey::Char('C') => Some(Message::CollapseAll),
        InputKey::Char('E') => Some(Message::ExpandAll),

        // Routing
        InputKey::Backspace | InputKey::Char('b') => Some(Message::NavigateBack),
        InputKey::Char('H') => Some(Message::GoHome),

        // Dropdowns and overlays
        InputKey::Char('s') => Some(Message::ToggleContentSelector),
        InputKey::Char('v') => Some(Message::OpenVersionMenu),
        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Char('e') => Some(Message::OpenConsole),

        // Document
        InputKey::Char('J') | InputKey::CharCtrl('n') => Some(Message::ScrollDocDown),
        InputKey::Char('K') | InputKey::CharCtrl('p') => Some(Message::ScrollDocUp),
        InputKey::PageDown => Some(Message::DocPageDown),
        InputKey::PageUp => Some(Message::DocPageUp),

        // Footer links: 1-9
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(Message::OpenFooterLink(index))
        }

        _ => None,
    }
}

fn handle_key_content_selector(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('s') | InputKey::Char('q') => {
            Some(Message::CloseContentSelector)
        }
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectorUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::SelectorDown),
        InputKey::Char('h')
        | InputKey::Char('l')
        | InputKey::Left
        | InputKey::Right
        | InputKey::Tab
        | InputKey::BackTab => Some(Message::SelectorSwitchColumn),
        InputKey::Enter => Some(Message::SelectorActivate),
        _ => None,
    }
}

fn handle_key_version_menu(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('v') | InputKey::Char('q') => {
            Some(Message::CloseVersionMenu)
        }
        InputKey::Char('k') | InputKey::Up => Some(Message::VersionUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::VersionDown),
        InputKey::Enter => state
            .versions
            .highlighted()
            .map(|v| Message::SwitchVersion(v.to_string())),
        _ => None,
    }
}

fn handle_key_search_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelSearch),
        InputKey::Enter => Some(Message::SubmitSearch),
        InputKey::Backspace => Some(Message::SearchBackspace),
        InputKey::Down => Some(Message::TreeDown),
        InputKey::Up => Some(Message::TreeUp),
        InputKey::Char(c) => Some(Message::SearchInput(c)),
        _ => None,
    }
}

fn handle_key_console(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseConsole),
        InputKey::CharCtrl('r') | InputKey::F(5) => Some(Message::RunQuery),
        InputKey::CharCtrl('e') => Some(Message::ToggleExplorer),
        InputKey::CharCtrl('o') => Some(Message::CycleOperation),
        InputKey::Tab => Some(Message::ConsoleSwitchFocus),
        InputKey::PageUp => Some(Message::ScrollOutputUp),
        InputKey::PageDown => Some(Message::ScrollOutputDown),
        InputKey::Up if state.console.explorer_open => Some(Message::ExplorerUp),
        InputKey::Down if state.console.explorer_open => Some(Message::ExplorerDown),
        InputKey::Enter => Some(Message::ConsoleNewline),
        InputKey::Backspace => Some(Message::ConsoleBackspace),
        InputKey::Char(c) => Some(Message::ConsoleInput(c)),
        _ => None,
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        _ => None,
    }
}
