//! Version switcher.
//!
//! Lists the published documentation versions and builds the URL of the
//! site for a chosen version. Values come from settings first and the
//! `PORTAL_URL`, `PORTAL_VERSIONS` and `PORTAL_CURRENT_VERSION` environment
//! variables second.

use portal_core::prelude::*;
use url::Url;

use crate::config::VersionSettings;

pub const URL_ENV_VAR: &str = "PORTAL_URL";
pub const VERSIONS_ENV_VAR: &str = "PORTAL_VERSIONS";
pub const CURRENT_VERSION_ENV_VAR: &str = "PORTAL_CURRENT_VERSION";

/// Version whose site lives at the base URL itself
pub const MASTER_VERSION: &str = "master";

/// Split a comma separated version list, trimming entries and dropping empties
pub fn parse_versions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionSwitcher {
    base_url: Option<String>,
    versions: Vec<String>,
    current: Option<String>,
    /// Highlighted entry while the menu is open
    pub cursor: usize,
}

impl VersionSwitcher {
    pub fn from_parts(
        base_url: Option<String>,
        versions: Vec<String>,
        current: Option<String>,
    ) -> Self {
        let cursor = current
            .as_ref()
            .and_then(|c| versions.iter().position(|v| v == c))
            .unwrap_or(0);
        Self {
            base_url: base_url.filter(|u| !u.trim().is_empty()),
            versions,
            current: current.filter(|c| !c.trim().is_empty()),
            cursor,
        }
    }

    /// Build from settings, filling unset values from the environment
    pub fn from_settings(settings: &VersionSettings) -> Self {
        let base_url = settings
            .base_url
            .clone()
            .or_else(|| std::env::var(URL_ENV_VAR).ok());
        let versions = if settings.versions.is_empty() {
            std::env::var(VERSIONS_ENV_VAR)
                .map(|raw| parse_versions(&raw))
                .unwrap_or_default()
        } else {
            settings
                .versions
                .iter()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .collect()
        };
        let current = settings
            .current
            .clone()
            .or_else(|| std::env::var(CURRENT_VERSION_ENV_VAR).ok());

        if base_url.is_none() && !versions.is_empty() {
            warn!("{} versions configured but no base URL", versions.len());
        }
        Self::from_parts(base_url, versions, current)
    }

    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn is_active(&self, version: &str) -> bool {
        self.current.as_deref() == Some(version)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.versions.len() {
            self.cursor += 1;
        }
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.versions.get(self.cursor).map(String::as_str)
    }

    /// URL of the site for `version`.
    ///
    /// `master` maps to the base URL unchanged; any other version is appended
    /// to the base URL as-is.
    pub fn target_for(&self, version: &str) -> Result<String> {
        let base = self
            .base_url
            .as_deref()
            .ok_or_else(|| Error::config(format!("{URL_ENV_VAR} is not set")))?;

        let target = if version == MASTER_VERSION {
            base.to_string()
        } else {
            format!("{base}{version}")
        };

        Url::parse(&target)
            .map_err(|e| Error::config(format!("Invalid version URL '{target}': {e}")))?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn switcher() -> VersionSwitcher {
        VersionSwitcher::from_parts(
            Some("https://graphql.dgraph.io/".to_string()),
            vec!["master".to_string(), "v20.07".to_string()],
            Some("v20.07".to_string()),
        )
    }

    #[test]
    fn test_master_maps_to_base_url() {
        assert_eq!(
            switcher().target_for("master").unwrap(),
            "https://graphql.dgraph.io/"
        );
    }

    #[test]
    fn test_other_version_is_appended() {
        assert_eq!(
            switcher().target_for("v20.07").unwrap(),
            "https://graphql.dgraph.io/v20.07"
        );
    }

    #[test]
    fn test_missing_base_url_is_config_error() {
        let switcher = VersionSwitcher::from_parts(None, vec!["master".into()], None);
        assert!(matches!(
            switcher.target_for("master"),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let switcher = VersionSwitcher::from_parts(Some("not a url".into()), vec![], None);
        assert!(switcher.target_for("master").is_err());
    }

    #[test]
    fn test_parse_versions_trims_and_drops_empty() {
        assert_eq!(
            parse_versions(" master, v20.07 ,,v20.03 "),
            vec!["master", "v20.07", "v20.03"]
        );
        assert!(parse_versions("").is_empty());
    }

    #[test]
    fn test_active_and_cursor_start_on_current() {
        let switcher = switcher();
        assert!(switcher.is_active("v20.07"));
        assert!(!switcher.is_active("master"));
        assert_eq!(switcher.highlighted(), Some("v20.07"));
    }

    #[test]
    fn test_cursor_bounds() {
        let mut switcher = switcher();
        switcher.move_down();
        assert_eq!(switcher.cursor, 1);
        switcher.move_up();
        switcher.move_up();
        assert_eq!(switcher.cursor, 0);
    }

    #[test]
    #[serial]
    fn test_from_settings_reads_environment() {
        std::env::set_var(URL_ENV_VAR, "https://docs.example.com/");
        std::env::set_var(VERSIONS_ENV_VAR, "master,v1");
        std::env::set_var(CURRENT_VERSION_ENV_VAR, "master");

        let switcher = VersionSwitcher::from_settings(&VersionSettings::default());
        assert_eq!(switcher.base_url(), Some("https://docs.example.com/"));
        assert_eq!(switcher.versions(), ["master", "v1"]);
        assert_eq!(switcher.current(), Some("master"));

        std::env::remove_var(URL_ENV_VAR);
        std::env::remove_var(VERSIONS_ENV_VAR);
        std::env::remove_var(CURRENT_VERSION_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_settings_override_environment() {
        std::env::set_var(URL_ENV_VAR, "https://env.example.com/");

        let settings = VersionSettings {
            base_url: Some("https://config.example.com/".to_string()),
            versions: vec![" v2 ".to_string(), "".to_string()],
            current: None,
            browser: String::new(),
        };
        let switcher = VersionSwitcher::from_settings(&settings);
        assert_eq!(switcher.base_url(), Some("https://config.example.com/"));
        assert_eq!(switcher.versions(), ["v2"]);

        std::env::remove_var(URL_ENV_VAR);
    }
}
