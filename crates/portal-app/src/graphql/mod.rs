//! Embedded GraphQL query console: HTTP client, schema summary and editor state.

pub mod client;
pub mod console;

pub use client::{
    fetch_schema, parse_response, summarize_schema, GraphqlRequest, GraphqlResponse,
    GraphqlTransport, HttpTransport, LocalGraphqlTransport, SchemaSummary, SchemaType,
    INTROSPECTION_QUERY,
};
pub use console::{ConsoleState, EditorFocus, QueryOutput, SchemaStatus};
