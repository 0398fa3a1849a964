//! Terminal ownership: alternate screen, raw mode and panic restoration

use ratatui::DefaultTerminal;
use tracing::error;

/// Take over the terminal for the portal UI.
///
/// A panic while the UI is up restores the terminal before the panic
/// report is printed.
pub fn enter() -> DefaultTerminal {
    install_panic_hook();
    ratatui::init()
}

/// Hand the terminal back to the shell
pub fn leave() {
    ratatui::restore();
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        error!("Portal panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
