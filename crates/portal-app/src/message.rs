//! Message types for the application (TEA pattern)

use crate::graphql::{GraphqlResponse, SchemaSummary};
use crate::input_key::InputKey;
use portal_core::Route;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick from the event loop
    Tick,

    // ─────────────────────────────────────────────────────────
    // Quit Flow
    // ─────────────────────────────────────────────────────────
    RequestQuit,
    ConfirmQuit,
    CancelQuit,
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Tree
    // ─────────────────────────────────────────────────────────
    TreeUp,
    TreeDown,
    TreeTop,
    TreeBottom,
    /// Expand or collapse the group under the cursor
    TreeToggle,
    /// Navigate to the page under the cursor
    TreeOpen,
    CollapseAll,
    ExpandAll,

    // ─────────────────────────────────────────────────────────
    // Routing
    // ─────────────────────────────────────────────────────────
    NavigateTo(Route),
    NavigateBack,
    GoHome,

    // ─────────────────────────────────────────────────────────
    // Content Selector
    // ─────────────────────────────────────────────────────────
    ToggleContentSelector,
    CloseContentSelector,
    SelectorUp,
    SelectorDown,
    SelectorSwitchColumn,
    /// Activate the highlighted section
    SelectorActivate,
    /// Activate the section at a flat registry index
    SelectSection(usize),

    // ─────────────────────────────────────────────────────────
    // Version Switcher
    // ─────────────────────────────────────────────────────────
    OpenVersionMenu,
    CloseVersionMenu,
    VersionUp,
    VersionDown,
    SwitchVersion(String),

    // ─────────────────────────────────────────────────────────
    // Search Bar
    // ─────────────────────────────────────────────────────────
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    /// Leave search mode, keeping the filter
    SubmitSearch,
    /// Leave search mode and clear the filter
    CancelSearch,

    // ─────────────────────────────────────────────────────────
    // Document Pane
    // ─────────────────────────────────────────────────────────
    ScrollDocUp,
    ScrollDocDown,
    DocPageUp,
    DocPageDown,

    // ─────────────────────────────────────────────────────────
    // Footer
    // ─────────────────────────────────────────────────────────
    OpenFooterLink(usize),

    // ─────────────────────────────────────────────────────────
    // GraphQL Console
    // ─────────────────────────────────────────────────────────
    OpenConsole,
    CloseConsole,
    ConsoleInput(char),
    ConsoleNewline,
    ConsoleBackspace,
    ConsoleSwitchFocus,
    ToggleExplorer,
    ExplorerUp,
    ExplorerDown,
    CycleOperation,
    RunQuery,
    /// Scroll the response pane by a page
    ScrollOutputUp,
    ScrollOutputDown,
    SchemaLoaded {
        result: Result<SchemaSummary, String>,
    },
    QueryCompleted {
        result: Result<GraphqlResponse, String>,
    },

    /// Result of a background action that failed
    ActionFailed(String),
}
