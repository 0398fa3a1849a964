//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use portal_core::prelude::*;
use portal_core::{document, Document, NavTree, Route, SectionRegistry, TreeRow};
use tokio::sync::watch;

use crate::config::{Settings, SiteConfig};
use crate::content_selector::ContentSelectorState;
use crate::graphql::ConsoleState;
use crate::nav_state::NavTreeState;
use crate::router::Router;
use crate::search::SearchState;
use crate::store::{SelectionState, SelectionStore};
use crate::version::VersionSwitcher;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Sidebar, document and right sidebar
    #[default]
    Normal,

    /// Content selector dropdown is open
    ContentSelector,

    /// Version dropdown is open
    VersionMenu,

    /// Search bar is capturing text
    SearchInput,

    /// GraphQL console overlay
    Console,

    /// Quit confirmation while a query is running
    ConfirmDialog,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,

    /// Project root holding `.portal/`
    pub project_path: PathBuf,
    /// Directory the document files live in
    pub docs_root: PathBuf,

    pub settings: Settings,
    pub site_title: String,
    pub footer: Vec<crate::config::FooterLink>,

    // Navigation
    pub tree: NavTree,
    pub nav_state: NavTreeState,
    pub router: Router,

    // Sections and shared selection
    pub registry: SectionRegistry,
    pub selector: ContentSelectorState,
    pub store: SelectionStore,
    selection_rx: watch::Receiver<SelectionState>,
    /// Last selection observed through the store subscription
    pub selection: SelectionState,

    // Page content
    pub document: Option<Document>,
    pub doc_scroll: u16,

    pub versions: VersionSwitcher,
    pub search: SearchState,
    pub console: ConsoleState,

    /// Transient message shown in the footer
    pub status: Option<String>,
}

impl AppState {
    /// Build state from loaded configuration.
    ///
    /// Fails when the section list and the top-level sidebar entries disagree.
    pub fn new(project_path: PathBuf, settings: Settings, site: SiteConfig) -> Result<Self> {
        let registry =
            SectionRegistry::join(site.sections, &site.sidebar, settings.layout.column_split)?;
        let tree = NavTree::build(&site.sidebar);
        for skipped in tree.skipped() {
            warn!(
                "Sidebar entry '{}' left out: {} ({} children dropped)",
                skipped.title, skipped.reason, skipped.dropped_children
            );
        }

        let initial = SelectionState::new(settings.behavior.default_category.clone());
        let store = SelectionStore::new(initial.clone(), registry.len());
        let selection_rx = store.subscribe();

        let docs_root = project_path.join(&settings.behavior.docs_dir);
        let versions = VersionSwitcher::from_settings(&settings.versions);
        let console = ConsoleState::new(settings.graphql.default_query.as_deref());

        info!(
            "Portal ready: {} pages, {} sections, docs at {}",
            tree.len(),
            registry.len(),
            docs_root.display()
        );

        let mut state = Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            project_path,
            docs_root,
            settings,
            site_title: site.title,
            footer: site.footer,
            tree,
            nav_state: NavTreeState::new(),
            router: Router::default(),
            registry,
            selector: ContentSelectorState::default(),
            store,
            selection_rx,
            selection: initial,
            document: None,
            doc_scroll: 0,
            versions,
            search: SearchState::default(),
            console,
            status: None,
        };
        state.load_current_document();
        Ok(state)
    }

    // ─────────────────────────────────────────────────────────
    // Quit Flow
    // ─────────────────────────────────────────────────────────

    /// Request quit, asking first if a query is still running
    pub fn request_quit(&mut self) {
        if self.console.in_flight && self.settings.behavior.confirm_quit {
            self.ui_mode = UiMode::ConfirmDialog;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn cancel_quit(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Selection Subscription
    // ─────────────────────────────────────────────────────────

    /// Pull a pending store change into `selection`. Returns true on change.
    pub fn sync_selection(&mut self) -> bool {
        if !self.selection_rx.has_changed().unwrap_or(false) {
            return false;
        }
        let next = self.selection_rx.borrow_and_update().clone();
        if let Some(index) = next.category_index {
            self.selector.focus_index(&self.registry, index);
        }
        debug!(
            "Selection now '{}' (right sidebar {})",
            next.category_name,
            if next.show_right_sidebar { "shown" } else { "hidden" }
        );
        self.selection = next;
        true
    }

    /// Whether the right-hand sidebar is drawn
    pub fn show_right_sidebar(&self) -> bool {
        self.selection.show_right_sidebar
    }

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────

    /// Visible sidebar rows, filtered by the search query
    pub fn rows(&self) -> Vec<TreeRow<'_>> {
        self.nav_state.rows(&self.tree, &self.search.query)
    }

    pub fn current_route(&self) -> &Route {
        self.router.current()
    }

    /// Refresh everything that depends on the current route
    pub fn on_route_changed(&mut self) {
        let route = self.router.current().clone();
        if !self.search.is_filtering() {
            self.nav_state.reveal(&self.tree, &route);
        }
        self.load_current_document();
    }

    pub fn load_current_document(&mut self) {
        self.doc_scroll = 0;
        match document::load(&self.docs_root, self.router.current()) {
            Ok(doc) => self.document = doc,
            Err(e) => {
                warn!("Failed to load {}: {}", self.router.current(), e);
                self.document = None;
                self.status = Some(format!("Could not load page: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_new_with_default_site() {
        let temp = tempdir().unwrap();
        let state =
            AppState::new(temp.path().to_path_buf(), Settings::default(), SiteConfig::default())
                .unwrap();
        assert_eq!(state.registry.len(), 6);
        assert_eq!(state.selection.category_name, "Dgraph GraphQL");
        assert!(state.current_route().is_home());
        assert!(state.document.is_none());
    }

    #[test]
    fn test_new_rejects_mismatched_site() {
        let temp = tempdir().unwrap();
        let mut site = SiteConfig::default();
        site.sections.pop();
        let err = AppState::new(temp.path().to_path_buf(), Settings::default(), site).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_request_quit_confirms_only_while_query_runs() {
        let temp = tempdir().unwrap();
        let mut state =
            AppState::new(temp.path().to_path_buf(), Settings::default(), SiteConfig::default())
                .unwrap();

        state.console.in_flight = true;
        state.request_quit();
        assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
        assert!(!state.should_quit());

        state.cancel_quit();
        state.console.in_flight = false;
        state.request_quit();
        assert!(state.should_quit());
    }

    #[test]
    fn test_sync_selection_observes_store() {
        let temp = tempdir().unwrap();
        let mut state =
            AppState::new(temp.path().to_path_buf(), Settings::default(), SiteConfig::default())
                .unwrap();
        assert!(!state.sync_selection());

        state
            .store
            .dispatch(crate::store::SelectionAction::SelectContentCategory {
                name: "Tutorials".to_string(),
                index: 3,
            })
            .unwrap();
        assert!(state.sync_selection());
        assert_eq!(state.selection.category_index, Some(3));
        assert_eq!(state.selector.column, portal_core::Column::Right);
        assert_eq!(state.selector.row, 0);
    }

    #[test]
    fn test_loads_home_document() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        std::fs::create_dir_all(&docs).unwrap();
        std::fs::write(docs.join("index.mdx"), "---\ntitle: Welcome\n---\n# Hi\n").unwrap();

        let state =
            AppState::new(temp.path().to_path_buf(), Settings::default(), SiteConfig::default())
                .unwrap();
        assert_eq!(state.document.as_ref().unwrap().title.as_deref(), Some("Welcome"));
    }
}
