//! # portal-core - Core Domain Types
//!
//! Foundation crate for the docs portal. Provides the navigation data model,
//! the arena-backed navigation tree, the joined section registry, document
//! loading, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing, toml).
//!
//! ## Public API
//!
//! ### Navigation (`navigation`, `tree`, `route`)
//! - [`NavigationEntry`] - One configured page or section
//! - [`NavTree`] - Renderable tree built from the configuration, nodes keyed by [`NodeId`]
//! - [`Route`] - Document route with index/extension markers stripped
//!
//! ### Sections (`category`)
//! - [`ContentCategory`] - A content-selector entry (title, subtitle, icon, stage)
//! - [`SectionRegistry`] - Categories joined with their top-level navigation entries
//!
//! ### Documents (`document`)
//! - [`Document`] - A loaded page with frontmatter title and headings
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use portal_core::prelude::*;
//! ```

pub mod category;
pub mod document;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod route;
pub mod tree;

/// Prelude for common imports used throughout all portal crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use category::{Column, ContentCategory, Section, SectionRegistry, Stage, DEFAULT_COLUMN_SPLIT};
pub use document::{Document, Heading};
pub use error::{Error, Result, ResultExt};
pub use navigation::NavigationEntry;
pub use route::{strip_markers, Route};
pub use tree::{NavNode, NavTree, NodeId, SkippedEntry, TreeRow};
