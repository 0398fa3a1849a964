//! GraphQL query console overlay: editors, schema explorer and response pane

use portal_app::graphql::{ConsoleState, EditorFocus, QueryOutput, SchemaStatus, SchemaSummary};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use crate::theme::styles;

use super::truncate;

const EXPLORER_WIDTH: u16 = 30;
const VARIABLES_HEIGHT: u16 = 6;

pub struct ConsolePanel<'a> {
    console: &'a ConsoleState,
    endpoint: &'a str,
}

impl<'a> ConsolePanel<'a> {
    pub fn new(console: &'a ConsoleState, endpoint: &'a str) -> Self {
        Self { console, endpoint }
    }

    fn render_editor(&self, area: Rect, buf: &mut Buffer, focus: EditorFocus) {
        let focused = self.console.focus == focus;
        let (title, text) = match focus {
            EditorFocus::Query => {
                let title = match self.console.selected_operation() {
                    Some(op) => format!(" Query ({op}) "),
                    None => " Query ".to_string(),
                };
                (title, self.console.query.as_str())
            }
            EditorFocus::Variables => (" Variables ".to_string(), self.console.variables.as_str()),
        };

        let mut lines: Vec<Line> = text
            .split('\n')
            .map(|l| Line::styled(l, styles::text_primary()))
            .collect();
        if focused {
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::styled("_", styles::status_yellow()));
            }
        }

        // Keep the end of the text, where typing happens, in view
        let visible = area.height.saturating_sub(2) as usize;
        let skip = lines.len().saturating_sub(visible) as u16;

        Paragraph::new(Text::from(lines))
            .block(styles::glass_block(focused).title(title))
            .scroll((skip, 0))
            .render(area, buf);
    }

    fn render_response(&self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::glass_block(false).title(" Response ");
        if let Some(at) = self.console.last_run {
            block = block.title_bottom(
                Line::styled(format!(" {} ", at.format("%H:%M:%S")), styles::text_muted())
                    .right_aligned(),
            );
        }

        let text = if self.console.in_flight {
            Text::styled("Running query...", styles::status_yellow())
        } else {
            match &self.console.output {
                None => Text::styled("Press Ctrl+R to run the query", styles::text_muted()),
                Some(QueryOutput::Failed(message)) => {
                    Text::styled(format!("Error: {message}"), styles::status_red())
                }
                Some(QueryOutput::Response(response)) => {
                    let style = if response.has_errors() {
                        styles::status_red()
                    } else {
                        styles::text_primary()
                    };
                    Text::styled(response.pretty(), style)
                }
            }
        };

        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.console.output_scroll, 0))
            .render(area, buf);
    }

    fn render_explorer(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Schema ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match &self.console.schema {
            SchemaStatus::NotLoaded => vec![Line::styled("Not loaded", styles::text_muted())],
            SchemaStatus::Loading => vec![Line::styled("Loading schema...", styles::status_yellow())],
            SchemaStatus::Failed(message) => vec![
                Line::styled("Introspection failed", styles::status_red()),
                Line::styled(message.clone(), styles::text_muted()),
            ],
            SchemaStatus::Loaded(summary) => {
                explorer_lines(summary, self.console.explorer_cursor, inner)
            }
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

/// Type list with the cursor kept on screen
fn explorer_lines(summary: &SchemaSummary, cursor: usize, area: Rect) -> Vec<Line<'static>> {
    if summary.types.is_empty() {
        return vec![Line::styled("No types", styles::text_muted())];
    }

    let height = area.height as usize;
    let offset = (cursor + 1).saturating_sub(height);
    let width = area.width as usize;
    let roots: Vec<&str> = summary.root_types().map(|t| t.name.as_str()).collect();

    summary
        .types
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(index, ty)| {
            let marker = if roots.contains(&ty.name.as_str()) { "◆ " } else { "  " };
            let label = format!("{marker}{}", ty.name);
            let kind = format!(" {}", ty.kind.to_lowercase());
            let label = truncate(&label, width.saturating_sub(kind.len()));
            if index == cursor {
                Line::from(vec![
                    Span::styled(label, styles::focused_selected()),
                    Span::styled(kind, styles::text_muted()),
                ])
            } else {
                Line::from(vec![
                    Span::styled(label, styles::text_primary()),
                    Span::styled(kind, styles::text_muted()),
                ])
            }
        })
        .collect()
}

impl Widget for ConsolePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::modal_block(" GraphQL Console ").title_bottom(
            Line::styled(format!(" {} ", self.endpoint), styles::text_muted()).right_aligned(),
        );
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 4 || inner.width < 20 {
            return;
        }

        let [body, hint] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let editors = if self.console.explorer_open {
            let [explorer, rest] = Layout::horizontal([
                Constraint::Length(EXPLORER_WIDTH),
                Constraint::Min(0),
            ])
            .areas(body);
            self.render_explorer(explorer, buf);
            rest
        } else {
            body
        };

        let [left, response] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(editors);
        let [query, variables] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(VARIABLES_HEIGHT)])
                .areas(left);

        self.render_editor(query, buf, EditorFocus::Query);
        self.render_editor(variables, buf, EditorFocus::Variables);
        self.render_response(response, buf);

        let hint_line = Line::from(vec![
            Span::styled("Ctrl+R", styles::keybinding()),
            Span::styled(" run  ", styles::text_muted()),
            Span::styled("Tab", styles::keybinding()),
            Span::styled(" query/variables  ", styles::text_muted()),
            Span::styled("Ctrl+E", styles::keybinding()),
            Span::styled(" schema  ", styles::text_muted()),
            Span::styled("Ctrl+O", styles::keybinding()),
            Span::styled(" operation  ", styles::text_muted()),
            Span::styled("PgUp/PgDn", styles::keybinding()),
            Span::styled(" scroll  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" close", styles::text_muted()),
        ]);
        buf.set_line(hint.x, hint.y, &hint_line, hint.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use portal_app::graphql::{GraphqlResponse, SchemaType};
    use serde_json::json;

    fn render(console: &ConsoleState) -> TestTerminal {
        let mut term = TestTerminal::with_size(110, 24);
        term.render_widget(
            ConsolePanel::new(console, "http://localhost:8080/graphql"),
            term.area(),
        );
        term
    }

    #[test]
    fn test_shows_editors_and_endpoint() {
        let console = ConsoleState::new(Some("{ queryTask { id } }"));
        let term = render(&console);

        assert!(term.buffer_contains(" GraphQL Console "));
        assert!(term.buffer_contains("http://localhost:8080/graphql"));
        assert!(term.buffer_contains("{ queryTask { id } }_"));
        assert!(term.buffer_contains(" Variables "));
        assert!(term.buffer_contains("Press Ctrl+R to run the query"));
        assert!(!term.buffer_contains(" Schema "));
    }

    #[test]
    fn test_response_is_pretty_printed() {
        let mut console = ConsoleState::new(Some("{ a }"));
        console.finish_query(Ok(GraphqlResponse {
            data: Some(json!({ "queryTask": [{ "id": "0x1" }] })),
            errors: None,
        }));
        let term = render(&console);

        assert!(term.buffer_contains("\"queryTask\": ["));
        assert!(term.buffer_contains("\"id\": \"0x1\""));
    }

    #[test]
    fn test_in_flight_and_failure_states() {
        let mut console = ConsoleState::new(Some("{ a }"));
        console.start_query();
        assert!(render(&console).buffer_contains("Running query..."));

        console.finish_query(Err("connection refused".to_string()));
        assert!(render(&console).buffer_contains("Error: connection refused"));
    }

    #[test]
    fn test_explorer_lists_types_with_root_marker() {
        let mut console = ConsoleState::new(Some("{ a }"));
        console.toggle_explorer();
        console.finish_schema(Ok(SchemaSummary {
            query_type: Some("Query".to_string()),
            mutation_type: None,
            subscription_type: None,
            types: vec![
                SchemaType {
                    name: "Query".to_string(),
                    kind: "OBJECT".to_string(),
                    fields: vec!["queryTask".to_string()],
                },
                SchemaType {
                    name: "Task".to_string(),
                    kind: "OBJECT".to_string(),
                    fields: vec!["id".to_string()],
                },
            ],
        }));
        let term = render(&console);

        assert!(term.buffer_contains(" Schema "));
        assert!(term.buffer_contains("◆ Query object"));
        assert!(term.buffer_contains("  Task object"));
    }

    #[test]
    fn test_schema_loading_state() {
        let mut console = ConsoleState::new(Some("{ a }"));
        console.toggle_explorer();
        console.schema = SchemaStatus::Loading;
        assert!(render(&console).buffer_contains("Loading schema..."));
    }

    #[test]
    fn test_selected_operation_in_title() {
        let console = ConsoleState::new(Some(
            "query First { a }\nquery Second { b }",
        ));
        assert!(render(&console).buffer_contains(" Query (First) "));
    }
}
