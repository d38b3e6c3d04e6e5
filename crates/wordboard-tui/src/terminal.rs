//! Terminal setup and restoration

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use wordboard_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter raw mode with mouse capture enabled.
pub fn init() -> Result<ratatui::DefaultTerminal> {
    let terminal = ratatui::init();
    crossterm::execute!(std::io::stdout(), EnableMouseCapture)
        .map_err(|e| Error::TerminalInit(e.to_string()))?;
    Ok(terminal)
}

/// Leave raw mode and release the mouse.
pub fn restore() -> Result<()> {
    crossterm::execute!(std::io::stdout(), DisableMouseCapture)
        .map_err(|e| Error::TerminalRestore(e.to_string()))?;
    ratatui::restore();
    Ok(())
}
