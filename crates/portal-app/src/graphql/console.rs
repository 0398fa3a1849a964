//! State of the embedded GraphQL query console.

use std::sync::LazyLock;

use chrono::{DateTime, Local};
use portal_core::prelude::*;
use regex::Regex;
use serde_json::Value;

use super::client::{GraphqlRequest, GraphqlResponse, SchemaSummary};

static OPERATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:query|mutation|subscription)\s+([_A-Za-z][_0-9A-Za-z]*)")
        .expect("Invalid operation regex")
});

/// Query shown when no default query is configured
pub const FALLBACK_QUERY: &str = "# Type a GraphQL query and press Ctrl+R to run it\n{\n  __typename\n}\n";

/// Which text area receives typing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorFocus {
    #[default]
    Query,
    Variables,
}

/// Schema introspection progress
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SchemaStatus {
    #[default]
    NotLoaded,
    Loading,
    Loaded(SchemaSummary),
    Failed(String),
}

/// Outcome of the last query run
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutput {
    Response(GraphqlResponse),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleState {
    pub query: String,
    /// JSON object text; blank means no variables
    pub variables: String,
    pub focus: EditorFocus,
    pub explorer_open: bool,
    /// Highlighted type in the explorer
    pub explorer_cursor: usize,
    pub schema: SchemaStatus,
    pub output: Option<QueryOutput>,
    pub in_flight: bool,
    /// Index into `operation_names()` used when the document has several
    pub operation_cursor: usize,
    pub last_run: Option<DateTime<Local>>,
    pub output_scroll: u16,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ConsoleState {
    pub fn new(default_query: Option<&str>) -> Self {
        Self {
            query: default_query.unwrap_or(FALLBACK_QUERY).to_string(),
            variables: String::new(),
            focus: EditorFocus::Query,
            explorer_open: false,
            explorer_cursor: 0,
            schema: SchemaStatus::NotLoaded,
            output: None,
            in_flight: false,
            operation_cursor: 0,
            last_run: None,
            output_scroll: 0,
        }
    }

    fn focused_text(&mut self) -> &mut String {
        match self.focus {
            EditorFocus::Query => &mut self.query,
            EditorFocus::Variables => &mut self.variables,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_text().push(c);
    }

    pub fn insert_newline(&mut self) {
        self.focused_text().push('\n');
    }

    pub fn backspace(&mut self) {
        self.focused_text().pop();
    }

    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            EditorFocus::Query => EditorFocus::Variables,
            EditorFocus::Variables => EditorFocus::Query,
        };
    }

    pub fn toggle_explorer(&mut self) {
        self.explorer_open = !self.explorer_open;
    }

    pub fn explorer_up(&mut self) {
        self.explorer_cursor = self.explorer_cursor.saturating_sub(1);
    }

    pub fn explorer_down(&mut self) {
        if let SchemaStatus::Loaded(summary) = &self.schema {
            if self.explorer_cursor + 1 < summary.types.len() {
                self.explorer_cursor += 1;
            }
        }
    }

    /// Whether opening the console should start introspection; failures retry
    pub fn needs_schema(&self) -> bool {
        matches!(self.schema, SchemaStatus::NotLoaded | SchemaStatus::Failed(_))
    }

    /// Names of the operations declared in the query text
    pub fn operation_names(&self) -> Vec<String> {
        OPERATION_PATTERN
            .captures_iter(&self.query)
            .map(|c| c[1].to_string())
            .collect()
    }

    pub fn cycle_operation(&mut self) {
        let count = self.operation_names().len();
        if count > 0 {
            self.operation_cursor = (self.operation_cursor + 1) % count;
        }
    }

    /// Operation sent as `operationName`; only set when the document has several
    pub fn selected_operation(&self) -> Option<String> {
        let names = self.operation_names();
        if names.len() < 2 {
            return None;
        }
        names.get(self.operation_cursor.min(names.len() - 1)).cloned()
    }

    /// Build the request for the current editor contents
    pub fn build_request(&self) -> Result<GraphqlRequest> {
        if self.query.trim().is_empty() {
            return Err(Error::graphql_response("query is empty"));
        }
        let variables = if self.variables.trim().is_empty() {
            None
        } else {
            let value: Value = serde_json::from_str(&self.variables)?;
            if !value.is_object() {
                return Err(Error::graphql_response("variables must be a JSON object"));
            }
            Some(value)
        };
        Ok(GraphqlRequest {
            query: self.query.clone(),
            variables,
            operation_name: self.selected_operation(),
        })
    }

    pub fn scroll_output_up(&mut self, lines: u16) {
        self.output_scroll = self.output_scroll.saturating_sub(lines);
    }

    /// Scroll the response pane, stopping at its last line
    pub fn scroll_output_down(&mut self, lines: u16) {
        let max = self
            .output_text()
            .map(|text| text.lines().count().saturating_sub(1))
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16;
        self.output_scroll = self.output_scroll.saturating_add(lines).min(max);
    }

    pub fn start_query(&mut self) {
        self.in_flight = true;
        self.output_scroll = 0;
    }

    /// Record a query result; errors arrive as display strings from the task
    pub fn finish_query(&mut self, result: std::result::Result<GraphqlResponse, String>) {
        self.in_flight = false;
        self.last_run = Some(Local::now());
        self.output = Some(match result {
            Ok(response) => QueryOutput::Response(response),
            Err(message) => QueryOutput::Failed(message),
        });
    }

    pub fn finish_schema(&mut self, result: std::result::Result<SchemaSummary, String>) {
        self.schema = match result {
            Ok(summary) => SchemaStatus::Loaded(summary),
            Err(message) => SchemaStatus::Failed(message),
        };
        self.explorer_cursor = 0;
    }

    /// Text for the response pane
    pub fn output_text(&self) -> Option<String> {
        self.output.as_ref().map(|output| match output {
            QueryOutput::Response(response) => response.pretty(),
            QueryOutput::Failed(message) => format!("Error: {message}"),
        })
    }
}
