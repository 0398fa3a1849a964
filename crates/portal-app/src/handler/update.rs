//! Main update function - handles state transitions (TEA pattern)

use crate::content_selector;
use crate::graphql::SchemaStatus;
use crate::message::Message;
use crate::router::Navigator;
use crate::state::{AppState, UiMode};
use portal_core::prelude::*;
use portal_core::Route;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Lines moved by a document page scroll
const DOC_PAGE_LINES: u16 = 20;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    let result = dispatch(state, message);
    state.sync_selection();
    result
}

fn dispatch(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            // Any key press dismisses the previous status message
            state.status = None;
            match handle_key(state, key) {
                Some(msg) => UpdateResult::message(msg),
                None => UpdateResult::none(),
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Quit Flow
        // ─────────────────────────────────────────────────────────
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }
        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }
        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }
        Message::Quit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Tree
        // ─────────────────────────────────────────────────────────
        Message::TreeUp => {
            state.nav_state.select_previous();
            UpdateResult::none()
        }
        Message::TreeDown => {
            let count = state.rows().len();
            state.nav_state.select_next(count);
            UpdateResult::none()
        }
        Message::TreeTop => {
            state.nav_state.select_first();
            UpdateResult::none()
        }
        Message::TreeBottom => {
            let count = state.rows().len();
            state.nav_state.select_last(count);
            UpdateResult::none()
        }
        Message::TreeToggle => {
            let target = state
                .rows()
                .get(state.nav_state.selected)
                .filter(|row| row.node.has_children())
                .map(|row| row.node.id);
            if let Some(id) = target {
                state.nav_state.toggle(id);
                let count = state.rows().len();
                state.nav_state.clamp(count);
            }
            UpdateResult::none()
        }
        Message::TreeOpen => {
            let route = state
                .rows()
                .get(state.nav_state.selected)
                .map(|row| row.node.route.clone());
            match route {
                Some(route) => UpdateResult::message(Message::NavigateTo(route)),
                None => UpdateResult::none(),
            }
        }
        Message::CollapseAll => {
            state.nav_state.collapse_all(&state.tree);
            UpdateResult::none()
        }
        Message::ExpandAll => {
            state.nav_state.expand_all();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Routing
        // ─────────────────────────────────────────────────────────
        Message::NavigateTo(route) => {
            navigate(state, &route);
            UpdateResult::none()
        }
        Message::GoHome => {
            navigate(state, &Route::home());
            UpdateResult::none()
        }
        Message::NavigateBack => {
            if state.router.back() {
                state.on_route_changed();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Content Selector
        // ─────────────────────────────────────────────────────────
        Message::ToggleContentSelector => {
            state.selector.toggle();
            state.ui_mode = if state.selector.open {
                UiMode::ContentSelector
            } else {
                UiMode::Normal
            };
            UpdateResult::none()
        }
        Message::CloseContentSelector => {
            close_selector(state);
            UpdateResult::none()
        }
        Message::SelectorUp => {
            state.selector.move_up();
            UpdateResult::none()
        }
        Message::SelectorDown => {
            state.selector.move_down(&state.registry);
            UpdateResult::none()
        }
        Message::SelectorSwitchColumn => {
            state.selector.switch_column(&state.registry);
            UpdateResult::none()
        }
        Message::SelectorActivate => {
            let index = state.selector.highlighted(&state.registry).map(|s| s.index);
            match index {
                Some(index) => UpdateResult::message(Message::SelectSection(index)),
                None => UpdateResult::none(),
            }
        }
        Message::SelectSection(index) => {
            handle_select_section(state, index);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Version Switcher
        // ─────────────────────────────────────────────────────────
        Message::OpenVersionMenu => {
            if state.versions.is_empty() {
                state.status = Some("No versions configured".to_string());
            } else {
                state.ui_mode = UiMode::VersionMenu;
            }
            UpdateResult::none()
        }
        Message::CloseVersionMenu => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
        Message::VersionUp => {
            state.versions.move_up();
            UpdateResult::none()
        }
        Message::VersionDown => {
            state.versions.move_down();
            UpdateResult::none()
        }
        Message::SwitchVersion(version) => {
            state.ui_mode = UiMode::Normal;
            match state.versions.target_for(&version) {
                Ok(url) => {
                    info!("Switching to version {} at {}", version, url);
                    UpdateResult::action(UpdateAction::OpenUrl { url })
                }
                Err(e) => {
                    warn!("Cannot switch to version {}: {}", version, e);
                    state.status = Some(e.to_string());
                    UpdateResult::none()
                }
            }
        }

        // ─────────────────────────────────────────────────────────
        // Search Bar
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            state.search.activate();
            state.ui_mode = UiMode::SearchInput;
            refresh_search(state);
            UpdateResult::none()
        }
        Message::SearchInput(c) => {
            state.search.push(c);
            refresh_search(state);
            UpdateResult::none()
        }
        Message::SearchBackspace => {
            state.search.backspace();
            refresh_search(state);
            UpdateResult::none()
        }
        Message::SubmitSearch => {
            state.search.deactivate();
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
        Message::CancelSearch => {
            state.search.clear();
            state.ui_mode = UiMode::Normal;
            let route = state.router.current().clone();
            state.nav_state.reveal(&state.tree, &route);
            let count = state.rows().len();
            state.nav_state.clamp(count);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Document Pane
        // ─────────────────────────────────────────────────────────
        Message::ScrollDocUp => {
            state.doc_scroll = state.doc_scroll.saturating_sub(1);
            UpdateResult::none()
        }
        Message::ScrollDocDown => {
            state.doc_scroll = state.doc_scroll.saturating_add(1).min(max_doc_scroll(state));
            UpdateResult::none()
        }
        Message::DocPageUp => {
            state.doc_scroll = state.doc_scroll.saturating_sub(DOC_PAGE_LINES);
            UpdateResult::none()
        }
        Message::DocPageDown => {
            state.doc_scroll = state
                .doc_scroll
                .saturating_add(DOC_PAGE_LINES)
                .min(max_doc_scroll(state));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Footer
        // ─────────────────────────────────────────────────────────
        Message::OpenFooterLink(index) => match state.footer.get(index) {
            Some(link) => UpdateResult::action(UpdateAction::OpenUrl {
                url: link.url.clone(),
            }),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // GraphQL Console
        // ─────────────────────────────────────────────────────────
        Message::OpenConsole => {
            state.ui_mode = UiMode::Console;
            if state.console.needs_schema() {
                state.console.schema = SchemaStatus::Loading;
                UpdateResult::action(UpdateAction::FetchSchema)
            } else {
                UpdateResult::none()
            }
        }
        Message::CloseConsole => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
        Message::ConsoleInput(c) => {
            state.console.insert_char(c);
            UpdateResult::none()
        }
        Message::ConsoleNewline => {
            state.console.insert_newline();
            UpdateResult::none()
        }
        Message::ConsoleBackspace => {
            state.console.backspace();
            UpdateResult::none()
        }
        Message::ConsoleSwitchFocus => {
            state.console.switch_focus();
            UpdateResult::none()
        }
        Message::ToggleExplorer => {
            state.console.toggle_explorer();
            UpdateResult::none()
        }
        Message::ExplorerUp => {
            state.console.explorer_up();
            UpdateResult::none()
        }
        Message::ExplorerDown => {
            state.console.explorer_down();
            UpdateResult::none()
        }
        Message::CycleOperation => {
            state.console.cycle_operation();
            UpdateResult::none()
        }
        Message::ScrollOutputUp => {
            state.console.scroll_output_up(DOC_PAGE_LINES);
            UpdateResult::none()
        }
        Message::ScrollOutputDown => {
            state.console.scroll_output_down(DOC_PAGE_LINES);
            UpdateResult::none()
        }
        Message::RunQuery => {
            if state.console.in_flight {
                return UpdateResult::none();
            }
            match state.console.build_request() {
                Ok(request) => {
                    state.console.start_query();
                    UpdateResult::action(UpdateAction::ExecuteQuery(request))
                }
                Err(e) => {
                    state.console.finish_query(Err(e.to_string()));
                    UpdateResult::none()
                }
            }
        }
        Message::SchemaLoaded { result } => {
            if let Err(e) = &result {
                warn!("Schema introspection failed: {}", e);
            }
            state.console.finish_schema(result);
            UpdateResult::none()
        }
        Message::QueryCompleted { result } => {
            state.console.finish_query(result);
            UpdateResult::none()
        }

        Message::ActionFailed(message) => {
            state.status = Some(message);
            UpdateResult::none()
        }
    }
}

fn navigate(state: &mut AppState, route: &Route) {
    state.router.navigate(route);
    state.on_route_changed();
}

fn close_selector(state: &mut AppState) {
    state.selector.close();
    if state.ui_mode == UiMode::ContentSelector {
        state.ui_mode = UiMode::Normal;
    }
}

fn handle_select_section(state: &mut AppState, index: usize) {
    let Some(section) = state.registry.get(index).cloned() else {
        let err = Error::category_out_of_range(index, state.registry.len());
        warn!("Ignoring section selection: {}", err);
        state.status = Some(err.to_string());
        return;
    };

    let before = state.router.current().clone();
    match content_selector::activate(&section, &state.store, &mut state.router) {
        Ok(()) => {
            close_selector(state);
            state.status = None;
            if state.router.current() != &before {
                state.on_route_changed();
            }
        }
        Err(e) => {
            warn!("Section activation failed: {}", e);
            state.status = Some(e.to_string());
        }
    }
}

fn refresh_search(state: &mut AppState) {
    let count = state.rows().len();
    state.search.match_count = if state.search.is_filtering() { count } else { 0 };
    state.nav_state.selected = 0;
    state.nav_state.scroll_offset = 0;
}

fn max_doc_scroll(state: &AppState) -> u16 {
    state
        .document
        .as_ref()
        .map(|doc| doc.body.lines().count().saturating_sub(1))
        .unwrap_or(0)
        .min(u16::MAX as usize) as u16
}
