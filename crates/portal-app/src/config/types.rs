//! Configuration types for the docs portal
//!
//! Defines:
//! - `Settings` - Global application settings (`.portal/config.toml`)
//! - `SiteConfig` - Sidebar entries, content sections and footer links (`.portal/site.toml`)
//! - Related sub-types

use portal_core::{ContentCategory, NavigationEntry, DEFAULT_COLUMN_SPLIT};
use serde::{Deserialize, Serialize};

/// Application settings (.portal/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub layout: LayoutSettings,

    #[serde(default)]
    pub versions: VersionSettings,

    #[serde(default)]
    pub graphql: GraphqlSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Category name shown before any section is selected
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Directory holding the `.mdx` sources, relative to the project root
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    /// Ask before quitting while a console request is in flight
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            docs_dir: default_docs_dir(),
            confirm_quit: true,
        }
    }
}

fn default_category() -> String {
    "Dgraph GraphQL".to_string()
}

fn default_docs_dir() -> String {
    "docs".to_string()
}

fn default_true() -> bool {
    true
}

/// Layout settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LayoutSettings {
    /// Number of sections in the content selector's left column
    #[serde(default = "default_column_split")]
    pub column_split: usize,

    /// Sidebar width in terminal columns
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,

    #[serde(default = "default_true")]
    pub show_footer: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            column_split: default_column_split(),
            sidebar_width: default_sidebar_width(),
            show_footer: true,
        }
    }
}

fn default_column_split() -> usize {
    DEFAULT_COLUMN_SPLIT
}

fn default_sidebar_width() -> u16 {
    34
}

/// Version switcher settings. Unset fields fall back to the environment.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VersionSettings {
    /// Site base URL (overrides `PORTAL_URL`)
    #[serde(default)]
    pub base_url: Option<String>,

    /// Published versions (overrides `PORTAL_VERSIONS`)
    #[serde(default)]
    pub versions: Vec<String>,

    /// Version this build documents (overrides `PORTAL_CURRENT_VERSION`)
    #[serde(default)]
    pub current: Option<String>,

    /// Browser to use (empty = system default)
    #[serde(default)]
    pub browser: String,
}

/// GraphQL console settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphqlSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Query placed in the editor when the console first opens
    #[serde(default)]
    pub default_query: Option<String>,
}

impl Default for GraphqlSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            default_query: None,
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:8080/graphql".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Render section icons in the content selector
    #[serde(default = "default_true")]
    pub show_icons: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_icons: true }
    }
}

/// A link rendered in the footer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

impl FooterLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Site content configuration (.portal/site.toml)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Portal title shown next to the logo
    #[serde(default = "default_site_title")]
    pub title: String,

    /// Navigation entries driving the sidebar
    #[serde(default)]
    pub sidebar: Vec<NavigationEntry>,

    /// Content selector sections, one per top-level sidebar entry
    #[serde(default)]
    pub sections: Vec<ContentCategory>,

    #[serde(default)]
    pub footer: Vec<FooterLink>,
}

fn default_site_title() -> String {
    "Dgraph GraphQL".to_string()
}
