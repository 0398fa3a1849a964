//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Docs root not found: {path}")]
    DocsRootNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Navigation / Selection Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Category index {index} is out of range (registry has {len} sections)")]
    CategoryOutOfRange { index: usize, len: usize },

    #[error(
        "Section registry has {categories} categories but the sidebar has {entries} top-level entries"
    )]
    RegistryMismatch { categories: usize, entries: usize },

    #[error("Invalid navigation entry '{title}': {reason}")]
    InvalidNavigationEntry { title: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // GraphQL Console Errors
    // ─────────────────────────────────────────────────────────────
    #[error("GraphQL request failed: {message}")]
    GraphqlTransport { message: String },

    #[error("GraphQL endpoint returned an unexpected response: {message}")]
    GraphqlResponse { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn category_out_of_range(index: usize, len: usize) -> Self {
        Self::CategoryOutOfRange { index, len }
    }

    pub fn registry_mismatch(categories: usize, entries: usize) -> Self {
        Self::RegistryMismatch {
            categories,
            entries,
        }
    }

    pub fn invalid_entry(title: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidNavigationEntry {
            title: title.into(),
            reason: reason.into(),
        }
    }

    pub fn graphql_transport(message: impl Into<String>) -> Self {
        Self::GraphqlTransport {
            message: message.into(),
        }
    }

    pub fn graphql_response(message: impl Into<String>) -> Self {
        Self::GraphqlResponse {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::CategoryOutOfRange { .. }
                | Error::InvalidNavigationEntry { .. }
                | Error::GraphqlTransport { .. }
                | Error::GraphqlResponse { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::RegistryMismatch { .. } | Error::DocsRootNotFound { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
