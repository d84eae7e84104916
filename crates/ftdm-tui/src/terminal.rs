//! Terminal setup and restoration

use ratatui::DefaultTerminal;
use tracing::debug;

/// Enter raw mode and the alternate screen, restoring on panic
pub fn init() -> DefaultTerminal {
    install_panic_hook();
    debug!("Entering alternate screen");
    ratatui::init()
}

/// Leave the alternate screen
pub fn restore() {
    ratatui::restore();
    debug!("Terminal restored");
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
