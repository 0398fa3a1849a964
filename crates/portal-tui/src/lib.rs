//! portal-tui - Terminal UI for the docs portal
//!
//! This crate provides the ratatui-based terminal interface. It owns the
//! terminal, polls input, renders the sidebar, document pane and overlays,
//! and drives the portal-app update loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run_with_project;
