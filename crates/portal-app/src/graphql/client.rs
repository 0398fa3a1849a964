//! GraphQL HTTP client.
//!
//! Requests are POSTed as JSON `{query, variables?, operationName?}` and the
//! response is expected to carry `data` and/or `errors`. The transport is a
//! trait so the console logic can be exercised without a server.

use std::time::Duration;

use portal_core::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Introspection query used to populate the schema explorer
pub const INTROSPECTION_QUERY: &str = r#"query IntrospectionQuery {
  __schema {
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types {
      kind
      name
      description
      fields(includeDeprecated: true) { name }
    }
  }
}"#;

/// Body of a GraphQL HTTP request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl GraphqlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            operation_name: None,
        }
    }

    pub fn introspection() -> Self {
        Self::new(INTROSPECTION_QUERY)
    }
}

/// Body of a GraphQL HTTP response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GraphqlResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Value>>,
}

impl GraphqlResponse {
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// First error message, if any
    pub fn first_error(&self) -> Option<String> {
        self.errors.as_ref()?.first().map(|e| {
            e.get("message")
                .and_then(Value::as_str)
                .map(String::from)
                .unwrap_or_else(|| e.to_string())
        })
    }

    /// Pretty-printed JSON for the response pane
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Sends GraphQL requests
#[trait_variant::make(GraphqlTransport: Send)]
pub trait LocalGraphqlTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<GraphqlResponse>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::graphql_transport(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl GraphqlTransport for HttpTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<GraphqlResponse> {
        debug!("POST {} ({} bytes of query)", self.endpoint, request.query.len());

        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::graphql_transport(format!("{}: {e}", self.endpoint)))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| Error::graphql_transport(e.to_string()))?;

        // GraphQL servers report validation failures with a non-2xx status and
        // an `errors` body, so the body is parsed before the status is checked.
        match parse_response(&text) {
            Ok(response) => Ok(response),
            Err(_) if !status.is_success() => Err(Error::graphql_transport(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text.trim()
            ))),
            Err(e) => Err(e),
        }
    }
}

/// Parse a response body, requiring `data` or `errors`
pub fn parse_response(body: &str) -> Result<GraphqlResponse> {
    let response: GraphqlResponse = serde_json::from_str(body)?;
    if response.data.is_none() && response.errors.is_none() {
        return Err(Error::graphql_response("neither data nor errors present"));
    }
    Ok(response)
}

/// A named type from the introspection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaType {
    pub name: String,
    pub kind: String,
    pub fields: Vec<String>,
}

/// What the explorer panel shows of a schema
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaSummary {
    pub query_type: Option<String>,
    pub mutation_type: Option<String>,
    pub subscription_type: Option<String>,
    /// User types sorted by name, `__` built-ins excluded
    pub types: Vec<SchemaType>,
}

impl SchemaSummary {
    pub fn get(&self, name: &str) -> Option<&SchemaType> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Root operation types first, then the rest
    pub fn root_types(&self) -> impl Iterator<Item = &SchemaType> {
        [&self.query_type, &self.mutation_type, &self.subscription_type]
            .into_iter()
            .flatten()
            .filter_map(|name| self.get(name))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionData {
    #[serde(rename = "__schema")]
    schema: IntrospectionSchema,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionSchema {
    query_type: Option<NamedRef>,
    mutation_type: Option<NamedRef>,
    subscription_type: Option<NamedRef>,
    #[serde(default)]
    types: Vec<IntrospectionType>,
}

#[derive(Deserialize)]
struct NamedRef {
    name: String,
}

#[derive(Deserialize)]
struct IntrospectionType {
    kind: String,
    name: Option<String>,
    #[serde(default)]
    fields: Option<Vec<NamedRef>>,
}

/// Reduce an introspection `data` payload to the explorer summary
pub fn summarize_schema(data: &Value) -> Result<SchemaSummary> {
    let parsed: IntrospectionData = serde_json::from_value(data.clone())?;
    let schema = parsed.schema;

    let mut types: Vec<SchemaType> = schema
        .types
        .into_iter()
        .filter_map(|t| {
            let name = t.name?;
            if name.starts_with("__") {
                return None;
            }
            Some(SchemaType {
                name,
                kind: t.kind,
                fields: t
                    .fields
                    .unwrap_or_default()
                    .into_iter()
                    .map(|f| f.name)
                    .collect(),
            })
        })
        .collect();
    types.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(SchemaSummary {
        query_type: schema.query_type.map(|r| r.name),
        mutation_type: schema.mutation_type.map(|r| r.name),
        subscription_type: schema.subscription_type.map(|r| r.name),
        types,
    })
}

/// Run the introspection query and summarize the schema
pub async fn fetch_schema<T: GraphqlTransport>(transport: &T) -> Result<SchemaSummary> {
    let response = transport.execute(&GraphqlRequest::introspection()).await?;
    if let Some(message) = response.first_error() {
        return Err(Error::graphql_response(message));
    }
    let data = response
        .data
        .ok_or_else(|| Error::graphql_response("introspection returned no data"))?;
    let summary = summarize_schema(&data)?;
    info!("Loaded schema with {} types", summary.types.len());
    Ok(summary)
}
