//! Navigation entries from the site configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::route::Route;

/// One page or section in the sidebar configuration.
///
/// Entries are immutable after loading. `path` is optional at the serde layer
/// so a hand-edited config with a missing path still loads; the tree builder
/// decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct NavigationEntry {
    pub title: String,

    #[serde(default)]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavigationEntry>,
}

impl NavigationEntry {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: Some(path.into()),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<NavigationEntry>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Route for this entry, or an error when the path is missing or blank
    pub fn route(&self) -> Result<Route> {
        match self.path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => Ok(Route::from_doc_path(path)),
            Some(_) => Err(Error::invalid_entry(&self.title, "path is empty")),
            None => Err(Error::invalid_entry(&self.title, "path is missing")),
        }
    }
}
