//! Main render/view function (View in TEA pattern)


use portal_app::state::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout::{self, LayoutOptions, ScreenAreas};
use crate::theme::palette;
use crate::widgets::{self, modal_overlay};

const QUIT_WHILE_RUNNING: &str = "A query is still running.";

/// Render the complete UI (View function in TEA)
///
/// Only widget bookkeeping (tree scroll offset) is written back to state.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(
        area,
        LayoutOptions {
            sidebar_width: state.settings.layout.sidebar_width,
            show_right_sidebar: state.show_right_sidebar(),
            show_footer: state.settings.layout.show_footer,
        },
    );

    render_sidebar(frame, &areas, state);

    frame.render_widget(widgets::SearchBar::new(&state.search), areas.search);

    frame.render_widget(
        widgets::DocumentView::new(state.document.as_ref(), state.router.current())
            .scroll(state.doc_scroll),
        areas.content,
    );

    if let Some(right) = areas.right_sidebar {
        let headings = state
            .document
            .as_ref()
            .map(|doc| doc.headings.as_slice())
            .unwrap_or(&[]);
        frame.render_widget(widgets::RightSidebar::new(headings), right);
    }

    if let Some(footer) = areas.footer {
        frame.render_widget(
            widgets::Footer::new(&state.footer, state.ui_mode).status(state.status.as_deref()),
            footer,
        );
    }

    render_overlay(frame, &areas, state);
}

fn render_sidebar(frame: &mut Frame, areas: &ScreenAreas, state: &mut AppState) {
    let rows = state.nav_state.rows(&state.tree, &state.search.query);
    let tree_focused = matches!(state.ui_mode, UiMode::Normal | UiMode::SearchInput);

    let sidebar = widgets::Sidebar::new(
        &state.site_title,
        &state.selection.category_name,
        &rows,
        state.router.current(),
        &state.versions,
    )
    .selector_open(state.selector.open)
    .tree_focused(tree_focused)
    .filtering(state.search.is_filtering());

    frame.render_stateful_widget(sidebar, areas.sidebar, &mut state.nav_state);
}

fn render_overlay(frame: &mut Frame, areas: &ScreenAreas, state: &AppState) {
    let area = frame.area();

    match state.ui_mode {
        UiMode::Normal | UiMode::SearchInput => {}

        UiMode::ContentSelector => {
            let (width, height) = widgets::ContentSelectorPopup::size(&state.registry);
            let anchor = widgets::Sidebar::content_title_area(areas.sidebar);
            let rect = modal_overlay::dropdown_rect(anchor, width, height, area);
            frame.render_widget(
                widgets::ContentSelectorPopup::new(&state.registry, &state.selector)
                    .active_index(state.selection.category_index)
                    .show_icons(state.settings.ui.show_icons),
                rect,
            );
        }

        UiMode::VersionMenu => {
            let (width, height) = widgets::VersionMenu::size(&state.versions);
            let anchor = widgets::Sidebar::version_area(areas.sidebar);
            let rect = modal_overlay::dropdown_rect(anchor, width, height, area);
            frame.render_widget(widgets::VersionMenu::new(&state.versions), rect);
        }

        UiMode::Console => {
            modal_overlay::dim_background(frame.buffer_mut(), area);
            let rect = modal_overlay::centered_rect_percent(92, 88, area);
            frame.render_widget(
                widgets::ConsolePanel::new(&state.console, &state.settings.graphql.endpoint),
                rect,
            );
        }

        UiMode::ConfirmDialog => {
            let rect = modal_overlay::centered_rect(
                widgets::ConfirmDialog::WIDTH,
                widgets::ConfirmDialog::HEIGHT,
                area,
            );
            frame.render_widget(widgets::ConfirmDialog::new(QUIT_WHILE_RUNNING), rect);
        }
    }
}
