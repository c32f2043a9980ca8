//! Terminal lifecycle management.
//!
//! Setup, restore, and the panic hook. The terminal is restored on normal
//! exit (runtime `Drop`), on a second Ctrl+C (interrupt restore hook), and on
//! panic.

use std::io::{self, IsTerminal, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Whether stdin and stdout are both attached to a terminal.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// Enters raw mode and the alternate screen.
///
/// Call `install_panic_hook()` first so a panic during the session still
/// restores the terminal.
///
/// # Errors
/// Returns an error if the terminal cannot be switched over.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Enables mouse capture for wheel scrolling and pointer parallax.
///
/// # Errors
/// Returns an error if the escape sequence cannot be written.
pub fn enable_mouse() -> Result<()> {
    execute!(io::stdout(), EnableMouseCapture).context("Failed to enable mouse capture")?;
    Ok(())
}

/// Disables mouse capture. Safe to call when it was never enabled.
///
/// # Errors
/// Returns an error if the escape sequence cannot be written.
pub fn disable_mouse() -> Result<()> {
    execute!(io::stdout(), DisableMouseCapture).context("Failed to disable mouse capture")?;
    Ok(())
}

/// Puts the terminal back the way the shell expects it.
///
/// Idempotent.
///
/// # Errors
/// Returns an error if leaving the alternate screen or raw mode fails.
pub fn restore_terminal() -> Result<()> {
    // Mouse reporting must stop before raw mode ends.
    let _ = disable_mouse();
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before the panic message
/// is printed.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
