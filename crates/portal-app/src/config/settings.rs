//! Settings parser for .portal/config.toml

use super::types::Settings;
use super::PORTAL_DIR;
use portal_core::prelude::*;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from .portal/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(PORTAL_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create default config files in .portal/ directory
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let portal_dir = project_path.join(PORTAL_DIR);

    if !portal_dir.exists() {
        std::fs::create_dir_all(&portal_dir)
            .map_err(|e| Error::config(format!("Failed to create .portal dir: {}", e)))?;
    }

    let config_path = portal_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, generate_default_config())
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created {:?}", config_path);
    }

    Ok(())
}

fn generate_default_config() -> String {
    r#"# Docs Portal Configuration

[behavior]
default_category = "Dgraph GraphQL"
docs_dir = "docs"
confirm_quit = true     # Ask before quitting while a query is running

[layout]
column_split = 3        # Sections in the left column of the content selector
sidebar_width = 34
show_footer = true

[versions]
# Leave unset to read PORTAL_URL, PORTAL_VERSIONS and PORTAL_CURRENT_VERSION
# base_url = "https://graphql.dgraph.io/"
# versions = ["master", "v20.07"]
# current = "master"
browser = ""            # Empty = system default

[graphql]
endpoint = "http://localhost:8080/graphql"
timeout_ms = 10000
# default_query = "{ __typename }"

[ui]
show_icons = true
"#
    .to_string()
}
