//! Document routes derived from configuration paths.
//!
//! Configuration paths are relative document identifiers such as
//! `graphql/schema/index.mdx` or `quick-start.mdx`. Before a path can be used
//! as a route its index and extension markers are stripped and a leading `/`
//! is added: `graphql/schema/index.mdx` becomes `/graphql/schema/`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index markers, removed only as a whole path segment.
pub const INDEX_MARKERS: &[&str] = &["index.mdx", "index.md"];

/// Extension markers, removed as plain suffixes.
pub const EXTENSION_MARKERS: &[&str] = &[".mdx", ".md"];

/// Strip index/extension markers from a configuration path.
///
/// `index.mdx` is only treated as an index marker when it is the last path
/// segment, so `graphql/reindex.mdx` keeps its name and becomes
/// `graphql/reindex`. Markers are removed until none remain, which makes the
/// operation idempotent: `strip_markers(strip_markers(p)) == strip_markers(p)`.
pub fn strip_markers(path: &str) -> &str {
    let mut current = path;
    while let Some(rest) = strip_index_marker(current).or_else(|| strip_extension(current)) {
        current = rest;
    }
    current
}

fn strip_index_marker(path: &str) -> Option<&str> {
    INDEX_MARKERS.iter().find_map(|marker| {
        let rest = path.strip_suffix(marker)?;
        (rest.is_empty() || rest.ends_with('/')).then_some(rest)
    })
}

fn strip_extension(path: &str) -> Option<&str> {
    EXTENSION_MARKERS
        .iter()
        .find_map(|marker| path.strip_suffix(marker))
}

/// A navigable route within the portal, always starting with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Route(String);

impl Route {
    /// The portal landing page
    pub fn home() -> Self {
        Self("/".to_string())
    }

    /// Build a route from a configuration path, stripping doc markers
    pub fn from_doc_path(path: &str) -> Self {
        let stripped = strip_markers(path.trim());
        Self(format!("/{}", stripped.trim_start_matches('/')))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_home(&self) -> bool {
        self.0 == "/"
    }

    /// Route without the leading slash, relative to the docs root
    pub fn relative(&self) -> &str {
        self.0.trim_start_matches('/')
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::home()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_index_marker() {
        assert_eq!(strip_markers("graphql/schema/index.mdx"), "graphql/schema/");
        assert_eq!(strip_markers("index.mdx"), "");
    }

    #[test]
    fn test_strip_extension_marker() {
        assert_eq!(strip_markers("quick-start.mdx"), "quick-start");
        assert_eq!(strip_markers("notes.md"), "notes");
    }

    #[test]
    fn test_strip_leaves_plain_paths_alone() {
        assert_eq!(strip_markers("deploy/overview"), "deploy/overview");
        assert_eq!(strip_markers(""), "");
    }

    #[test]
    fn test_strip_is_idempotent() {
        for path in [
            "graphql/index.mdx",
            "a.mdx.mdx",
            "index.md.mdx",
            "docs/intro.mdx",
            "plain",
            "dir/",
            "graphql/reindex.mdx",
            "api/schema-index.mdx",
        ] {
            let once = strip_markers(path);
            assert_eq!(strip_markers(once), once, "not idempotent for {path}");
        }
    }

    #[test]
    fn test_route_from_doc_path() {
        assert_eq!(Route::from_doc_path("slash/index.mdx").as_str(), "/slash/");
        assert_eq!(Route::from_doc_path("intro.mdx").as_str(), "/intro");
        assert_eq!(Route::from_doc_path("/already/rooted.mdx").as_str(), "/already/rooted");
        assert_eq!(Route::from_doc_path("index.mdx"), Route::home());
        assert_eq!(Route::from_doc_path("graphql/reindex.mdx").as_str(), "/graphql/reindex");
        assert_eq!(
            Route::from_doc_path("api/schema-index.mdx").as_str(),
            "/api/schema-index"
        );
    }

    #[test]
    fn test_index_marker_needs_segment_boundary() {
        assert_eq!(strip_markers("api/schema-index.mdx"), "api/schema-index");
        assert_eq!(strip_markers("reindex.md"), "reindex");
        assert_eq!(strip_markers("api/index.md"), "api/");
        assert_eq!(strip_markers("index.md.mdx"), "");
    }

    #[test]
    fn test_route_relative() {
        let route = Route::from_doc_path("tutorials/todo.mdx");
        assert_eq!(route.relative(), "tutorials/todo");
        assert!(Route::home().is_home());
        assert_eq!(Route::home().relative(), "");
    }
}
