//! Raw mode and alternate screen handling.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Restores the terminal on drop.
///
/// Created before raw mode is entered, so a failure anywhere during setup
/// or the event loop still leaves the user's shell usable.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode and switches `out` to the alternate screen.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            out,
            raw_mode: true,
        };
        execute!(guard.out, EnterAlternateScreen)?;
        debug!("Terminal prepared");
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if self.raw_mode
            && let Err(e) = disable_raw_mode()
        {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        debug!("Terminal restored");
    }
}
