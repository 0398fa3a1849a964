//! Main TUI runner - entry point and event loop

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use portal_app::actions::handle_action;
use portal_app::config;
use portal_app::graphql::{GraphqlTransport, HttpTransport};
use portal_app::handler;
use portal_app::{AppState, Message};
use portal_core::prelude::*;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Capacity of the channel carrying background results back to the loop
const MESSAGE_CHANNEL_CAPACITY: usize = 64;

/// Run the portal TUI for the docs project at `project_path`
pub async fn run_with_project(project_path: &Path) -> Result<()> {
    let settings = config::load_settings(project_path);
    let site = config::load_site(project_path);
    info!(
        "Loaded site '{}': {} sidebar entries, {} sections",
        site.title,
        site.sidebar.len(),
        site.sections.len()
    );

    // Build state before taking the terminal so startup errors print normally
    let mut state = AppState::new(project_path.to_path_buf(), settings, site)?;

    let transport = Arc::new(HttpTransport::new(
        state.settings.graphql.endpoint.clone(),
        Duration::from_millis(state.settings.graphql.timeout_ms),
    )?);

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

    let mut term = terminal::enter();
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, transport);
    terminal::leave();

    if let Err(ref e) = result {
        error!("Portal loop failed: {}", e);
    }
    info!("Portal exiting");
    result
}

fn run_loop<T>(
    term: &mut DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    transport: Arc<T>,
) -> Result<()>
where
    T: GraphqlTransport + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Results from background tasks
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &transport);
        }

        term.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &transport);
        }
    }
    Ok(())
}

/// Run a message through `update`, following up messages and spawning actions
pub fn process_message<T>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    transport: &Arc<T>,
) where
    T: GraphqlTransport + Send + Sync + 'static,
{
    let mut next = Some(message);
    while let Some(msg) = next {
        let result = handler::update(state, msg);
        if let Some(action) = result.action {
            debug!("Dispatching action {:?}", action);
            handle_action(
                action,
                msg_tx.clone(),
                Arc::clone(transport),
                &state.settings.versions.browser,
            );
        }
        next = result.message;
    }
}
