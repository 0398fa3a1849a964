//! docs-portal Library
//!
//! A terminal portal for browsing a GraphQL documentation site: a sidebar
//! navigation tree, a content selector that switches documentation sections,
//! a version switcher and a GraphQL query console.

pub use portal_app::config;
pub use portal_core::logging;

// Re-export main entry point
pub use portal_tui::run_with_project;
