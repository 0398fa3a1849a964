//! Search bar state.
//!
//! The search bar filters the navigation tree by page title. The query is
//! kept after leaving search mode so the filter stays applied until cleared.

pub const SEARCH_PLACEHOLDER: &str = "Search documentation...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    /// Whether the search bar is receiving input
    pub is_active: bool,
    /// Number of tree rows matching the query, updated by the handler
    pub match_count: usize,
}

impl SearchState {
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    /// Leave search mode, keeping the query
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Leave search mode and drop the filter
    pub fn clear(&mut self) {
        self.query.clear();
        self.is_active = false;
        self.match_count = 0;
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn backspace(&mut self) {
        self.query.pop();
    }

    pub fn is_filtering(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn has_matches(&self) -> bool {
        self.match_count > 0
    }

    /// Status text shown after the query, empty when not filtering
    pub fn display_status(&self) -> String {
        if !self.is_filtering() {
            return String::new();
        }
        match self.match_count {
            0 => "[no matches]".to_string(),
            1 => "[1 page]".to_string(),
            n => format!("[{n} pages]"),
        }
    }
}
