//! Tests for the update function and key handling

use super::*;
use crate::config::{Settings, SiteConfig};
use crate::graphql::{GraphqlResponse, SchemaStatus, SchemaSummary};
use crate::input_key::InputKey;
use crate::state::{AppState, UiMode};
use portal_core::{Column, Route};
use tempfile::TempDir;

fn test_state() -> (TempDir, AppState) {
    let temp = tempfile::tempdir().unwrap();
    let docs = temp.path().join("docs");
    std::fs::create_dir_all(docs.join("examples")).unwrap();
    std::fs::write(
        docs.join("examples/index.mdx"),
        "---\ntitle: Example Apps\n---\n# Examples\n## Todo app\n",
    )
    .unwrap();
    let state =
        AppState::new(temp.path().to_path_buf(), Settings::default(), SiteConfig::default())
            .unwrap();
    (temp, state)
}

/// Run a message and every follow-up message it produces
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(message);
    while let Some(msg) = next {
        let result = update(state, msg);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    run(state, Message::Key(key))
}

#[test]
fn test_select_right_column_item_navigates_to_paired_entry() {
    let (_temp, mut state) = test_state();

    press(&mut state, InputKey::Char('s'));
    assert_eq!(state.ui_mode, UiMode::ContentSelector);

    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Down);
    assert_eq!(state.selector.column, Column::Right);
    press(&mut state, InputKey::Enter);

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(!state.selector.open);
    assert_eq!(state.selection.category_index, Some(4));
    assert_eq!(state.selection.category_name, "Example Apps");
    assert_eq!(state.current_route().as_str(), "/examples/");
    // Example Apps hides the right sidebar in the built-in site
    assert!(!state.show_right_sidebar());
    assert_eq!(
        state.document.as_ref().unwrap().display_title(),
        Some("Example Apps")
    );
}

#[test]
fn test_select_section_out_of_range_keeps_state() {
    let (_temp, mut state) = test_state();
    run(&mut state, Message::SelectSection(42));
    assert_eq!(state.selection.category_index, None);
    assert!(state.current_route().is_home());
    assert!(state.status.as_ref().unwrap().contains("out of range"));
}

#[test]
fn test_reselecting_section_keeps_history() {
    let (_temp, mut state) = test_state();
    run(&mut state, Message::SelectSection(1));
    run(&mut state, Message::SelectSection(1));
    assert_eq!(state.router.history_len(), 1);
}

#[test]
fn test_tree_toggle_and_open() {
    let (_temp, mut state) = test_state();
    let initial = state.rows().len();

    // First row is "Slash GraphQL", a group
    press(&mut state, InputKey::Char(' '));
    assert!(state.rows().len() < initial);
    press(&mut state, InputKey::Char(' '));
    assert_eq!(state.rows().len(), initial);

    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);
    assert_eq!(state.current_route().as_str(), "/slash-graphql/quick-start");

    press(&mut state, InputKey::Backspace);
    assert!(state.current_route().is_home());
}

#[test]
fn test_collapse_all_then_navigate_reveals_route() {
    let (_temp, mut state) = test_state();
    run(&mut state, Message::CollapseAll);
    assert_eq!(state.rows().len(), 6);

    run(
        &mut state,
        Message::NavigateTo(Route::from_doc_path("reference/schema/directives.mdx")),
    );
    let rows = state.rows();
    assert_eq!(rows[state.nav_state.selected].node.title, "Directives");
}

#[test]
fn test_search_filters_tree() {
    let (_temp, mut state) = test_state();
    press(&mut state, InputKey::Char('/'));
    assert_eq!(state.ui_mode, UiMode::SearchInput);

    for c in "quick".chars() {
        press(&mut state, InputKey::Char(c));
    }
    // Two "Quick Start" pages plus their two parents
    assert_eq!(state.rows().len(), 4);
    assert_eq!(state.search.match_count, 4);

    press(&mut state, InputKey::Enter);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.rows().len(), 4);

    press(&mut state, InputKey::Char('/'));
    press(&mut state, InputKey::Esc);
    assert!(state.search.query.is_empty());
    assert!(state.rows().len() > 4);
}

#[test]
fn test_switch_version_opens_url() {
    let (_temp, mut state) = test_state();
    state.versions = crate::version::VersionSwitcher::from_parts(
        Some("https://graphql.dgraph.io/".to_string()),
        vec!["master".to_string(), "v20.07".to_string()],
        Some("master".to_string()),
    );

    press(&mut state, InputKey::Char('v'));
    assert_eq!(state.ui_mode, UiMode::VersionMenu);
    press(&mut state, InputKey::Down);
    let actions = press(&mut state, InputKey::Enter);

    assert_eq!(
        actions,
        vec![UpdateAction::OpenUrl {
            url: "https://graphql.dgraph.io/v20.07".to_string()
        }]
    );
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_version_menu_without_versions_stays_closed() {
    let (_temp, mut state) = test_state();
    state.versions = crate::version::VersionSwitcher::default();
    run(&mut state, Message::OpenVersionMenu);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.status.is_some());
}

#[test]
fn test_footer_link_opens_url() {
    let (_temp, mut state) = test_state();
    let actions = press(&mut state, InputKey::Char('2'));
    assert_eq!(
        actions,
        vec![UpdateAction::OpenUrl {
            url: "https://github.com/dgraph-io/graphql-dgraph-web".to_string()
        }]
    );
    assert!(press(&mut state, InputKey::Char('9')).is_empty());
}

#[test]
fn test_console_fetches_schema_once() {
    let (_temp, mut state) = test_state();
    let actions = run(&mut state, Message::OpenConsole);
    assert_eq!(actions, vec![UpdateAction::FetchSchema]);
    assert_eq!(state.console.schema, SchemaStatus::Loading);

    run(
        &mut state,
        Message::SchemaLoaded {
            result: Ok(SchemaSummary::default()),
        },
    );
    run(&mut state, Message::CloseConsole);
    assert!(run(&mut state, Message::OpenConsole).is_empty());
}

#[test]
fn test_console_retries_failed_schema_on_reopen() {
    let (_temp, mut state) = test_state();
    run(&mut state, Message::OpenConsole);
    run(
        &mut state,
        Message::SchemaLoaded {
            result: Err("connection refused".to_string()),
        },
    );
    run(&mut state, Message::CloseConsole);

    let actions = run(&mut state, Message::OpenConsole);
    assert_eq!(actions, vec![UpdateAction::FetchSchema]);
    assert_eq!(state.console.schema, SchemaStatus::Loading);
}

#[test]
fn test_run_query_round_trip() {
    let (_temp, mut state) = test_state();
    run(&mut state, Message::OpenConsole);

    let actions = press(&mut state, InputKey::CharCtrl('r'));
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::ExecuteQuery(request)] if request.query.contains("__typename")
    ));
    assert!(state.console.in_flight);

    // A second run while in flight is ignored
    assert!(press(&mut state, InputKey::CharCtrl('r')).is_empty());

    run(
        &mut state,
        Message::QueryCompleted {
            result: Ok(GraphqlResponse {
                data: Some(serde_json::json!({ "__typename": "Query" })),
                errors: None,
            }),
        },
    );
    assert!(!state.console.in_flight);
    assert!(state.console.output_text().unwrap().contains("Query"));
}

#[test]
fn test_console_keys_edit_query() {
    let (_temp, mut state) = test_state();
    run(&mut state, Message::OpenConsole);
    state.console.query.clear();

    for c in "{ a }".chars() {
        press(&mut state, InputKey::Char(c));
    }
    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::Backspace);
    assert_eq!(state.console.query, "{ a }");

    // 'q' is text inside the console, not quit
    press(&mut state, InputKey::Char('q'));
    assert!(!state.should_quit());

    press(&mut state, InputKey::CharCtrl('e'));
    assert!(state.console.explorer_open);
    press(&mut state, InputKey::Esc);
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_quit_confirmation_while_query_runs() {
    let (_temp, mut state) = test_state();
    state.console.in_flight = true;

    press(&mut state, InputKey::Char('q'));
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
    press(&mut state, InputKey::Char('n'));
    assert_eq!(state.ui_mode, UiMode::Normal);

    press(&mut state, InputKey::Char('q'));
    press(&mut state, InputKey::Char('y'));
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_from_any_mode() {
    let (_temp, mut state) = test_state();
    run(&mut state, Message::OpenConsole);
    press(&mut state, InputKey::CharCtrl('c'));
    assert!(state.should_quit());
}

#[test]
fn test_handle_key_maps_normal_mode() {
    let (_temp, state) = test_state();
    assert!(matches!(
        handle_key(&state, InputKey::Char('H')),
        Some(Message::GoHome)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('e')),
        Some(Message::OpenConsole)
    ));
    assert!(handle_key(&state, InputKey::F(12)).is_none());
}

#[test]
fn test_key_press_clears_status() {
    let (_temp, mut state) = test_state();
    run(
        &mut state,
        Message::ActionFailed("Could not open browser".to_string()),
    );
    assert!(state.status.is_some());

    press(&mut state, InputKey::Char('j'));
    assert!(state.status.is_none());
}

#[test]
fn test_console_page_keys_scroll_response() {
    let (_temp, mut state) = test_state();
    run(&mut state, Message::OpenConsole);
    run(
        &mut state,
        Message::QueryCompleted {
            result: Err("a\nb\nc".to_string()),
        },
    );

    press(&mut state, InputKey::PageDown);
    assert_eq!(state.console.output_scroll, 2);
    press(&mut state, InputKey::PageUp);
    assert_eq!(state.console.output_scroll, 0);
}
