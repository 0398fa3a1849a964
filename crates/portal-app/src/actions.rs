//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::graphql::{fetch_schema, GraphqlRequest, GraphqlTransport};
use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task.
///
/// Results come back to the event loop as messages on `msg_tx`.
pub fn handle_action<T>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    transport: Arc<T>,
    browser: &str,
) where
    T: GraphqlTransport + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchSchema => {
            tokio::spawn(async move {
                let result = fetch_schema(transport.as_ref())
                    .await
                    .map_err(|e| e.to_string());
                let _ = msg_tx.send(Message::SchemaLoaded { result }).await;
            });
        }

        UpdateAction::ExecuteQuery(request) => {
            tokio::spawn(async move {
                let result = execute_query(transport.as_ref(), request).await;
                let _ = msg_tx.send(Message::QueryCompleted { result }).await;
            });
        }

        UpdateAction::OpenUrl { url } => {
            info!("Opening {} in browser", url);
            if let Err(e) = open_url_in_browser(&url, browser) {
                warn!("Failed to open browser for {}: {}", url, e);
                let _ = msg_tx.try_send(Message::ActionFailed(format!(
                    "Could not open browser: {e}"
                )));
            }
        }
    }
}

async fn execute_query<T: GraphqlTransport>(
    transport: &T,
    request: GraphqlRequest,
) -> Result<crate::graphql::GraphqlResponse, String> {
    let started = std::time::Instant::now();
    let result = transport.execute(&request).await;
    match &result {
        Ok(response) if response.has_errors() => warn!(
            "Query returned errors after {:?}: {}",
            started.elapsed(),
            response.first_error().unwrap_or_default()
        ),
        Ok(_) => info!("Query completed in {:?}", started.elapsed()),
        Err(e) => warn!("Query failed: {}", e),
    }
    result.map_err(|e| e.to_string())
}

/// Open a URL in the user's browser.
///
/// If `browser` is non-empty, uses it as the browser command.
/// Otherwise uses the platform-default browser opener.
fn open_url_in_browser(url: &str, browser: &str) -> std::io::Result<()> {
    use std::process::Command;

    if !browser.is_empty() {
        Command::new(browser).arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::client::tests::{introspection_data, MockTransport};
    use crate::graphql::GraphqlResponse;
    use portal_core::Error;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_schema_action_reports_summary() {
        let (tx, mut rx) = mpsc::channel(4);
        let transport = Arc::new(MockTransport::new(Ok(GraphqlResponse {
            data: Some(introspection_data()),
            errors: None,
        })));

        handle_action(UpdateAction::FetchSchema, tx, transport, "");

        match rx.recv().await {
            Some(Message::SchemaLoaded { result: Ok(summary) }) => {
                assert_eq!(summary.query_type.as_deref(), Some("Query"));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_execute_query_action_forwards_request() {
        let (tx, mut rx) = mpsc::channel(4);
        let transport = Arc::new(MockTransport::new(Ok(GraphqlResponse {
            data: Some(json!({ "queryTask": [] })),
            errors: None,
        })));

        let mut request = GraphqlRequest::new("query Tasks { queryTask { id } }");
        request.variables = Some(json!({ "first": 10 }));
        handle_action(
            UpdateAction::ExecuteQuery(request.clone()),
            tx,
            transport.clone(),
            "",
        );

        let msg = rx.recv().await;
        assert!(matches!(msg, Some(Message::QueryCompleted { result: Ok(_) })));
        assert_eq!(transport.requests.lock().unwrap()[0], request);
    }

    #[tokio::test]
    async fn test_execute_query_action_reports_transport_error() {
        let (tx, mut rx) = mpsc::channel(4);
        let transport = Arc::new(MockTransport::new(Err(Error::graphql_transport(
            "connection refused",
        ))));

        handle_action(
            UpdateAction::ExecuteQuery(GraphqlRequest::new("{ a }")),
            tx,
            transport,
            "",
        );

        match rx.recv().await {
            Some(Message::QueryCompleted { result: Err(message) }) => {
                assert!(message.contains("connection refused"));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
