//! Main event loop
//!
//! Draw, poll, dispatch. All shell state mutations happen here on the single
//! event-handling thread, one discrete event at a time; embedded applications
//! run on their own worker threads behind the embed host.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::app::controller::ShellController;
use crate::embed::host::EmbedHost;
use crate::input::keyboard;
use crate::ui;
use crate::ui::terminal::TerminalSession;

/// Redraw cadence while idle; embedded snapshots refresh on this beat
const POLL_INTERVAL: Duration = Duration::from_millis(150);

/// Runs the shell until the user quits
pub fn run<H: EmbedHost>(controller: &mut ShellController<H>) -> Result<()> {
    let _session = TerminalSession::new().context("enter terminal session")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    while controller.is_running() {
        terminal
            .draw(|frame| ui::renderer::draw(frame, &*controller))
            .context("draw frame")?;

        if !event::poll(POLL_INTERVAL).context("poll input")? {
            continue;
        }
        match event::read().context("read input")? {
            Event::Key(key) => {
                let dropdown_open = controller.nav().dropdown_open();
                if let Some(shell_event) = keyboard::map_key(key, dropdown_open) {
                    controller.handle_event(shell_event);
                }
            }
            // Resizes are picked up by the next draw.
            _ => {}
        }
    }

    Ok(())
}
