//! Configuration file parsing for the docs portal
//!
//! Supports:
//! - `.portal/config.toml` - Global settings
//! - `.portal/site.toml` - Sidebar, content sections and footer links

pub mod settings;
pub mod site;
pub mod types;

/// Directory holding the portal's configuration files
pub const PORTAL_DIR: &str = ".portal";

pub use settings::{init_config_dir, load_settings};
pub use site::load_site;
pub use types::*;
