//! portal-app - Application state and orchestration for the docs portal
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the selection store shared by the sidebar components, the
//! content selector, version switcher, search bar, router, the GraphQL query
//! console, and configuration loading.

pub mod actions;
pub mod config;
pub mod content_selector;
pub mod graphql;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod nav_state;
pub mod router;
pub mod search;
pub mod state;
pub mod store;
pub mod version;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use router::{Navigator, Router};
pub use state::{AppState, UiMode};
pub use store::{SelectionAction, SelectionState, SelectionStore};
