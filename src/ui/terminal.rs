//! Terminal session management
//!
//! RAII guard for raw mode and the alternate screen. The guard restores the
//! terminal on drop, including on unwind, so a failed draw never leaves the
//! user's shell in raw mode.

use std::io;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

/// Raw-mode + alternate-screen session with guaranteed restore
pub struct TerminalSession(());

impl TerminalSession {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(error) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(error);
        }
        Ok(Self(()))
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
