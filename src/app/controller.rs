//! Shell controller and coordination layer
//!
//! The controller maps shell events onto the navigation state, the message
//! relay, and the embed host. It owns all mutable shell state; there is no
//! global singleton, and every consumer reaches the state through a reference
//! to the controller.
//!
//! Failure philosophy: user-level preconditions that do not hold (blank
//! draft, no mounted target, dropdown row with no entry) degrade to silent
//! no-ops, traced at debug level and never surfaced as errors.

use tracing::debug;

use crate::app::relay::{MessageRelay, SendOutcome};
use crate::app::state::{NavigationState, SelectionChange, ShellEvent, View};
use crate::domain::registry::{AppId, Registry};
use crate::embed::host::EmbedHost;

/// Coordinates the shell's components
///
/// Generic over the embed host so tests can substitute a recording stub.
pub struct ShellController<H: EmbedHost> {
    registry: Registry,
    nav: NavigationState,
    relay: MessageRelay,
    host: H,
    running: bool,
}

impl<H: EmbedHost> ShellController<H> {
    pub fn new(registry: Registry, host: H) -> Self {
        Self {
            registry,
            nav: NavigationState::new(),
            relay: MessageRelay::new(),
            host,
            running: true,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn relay(&self) -> &MessageRelay {
        &self.relay
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn view(&self) -> View {
        self.nav.view(&self.registry)
    }

    /// Dispatches one shell event
    pub fn handle_event(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::SelectEntry(index) => self.select_entry(index),
            ShellEvent::ToggleDropdown => self.nav.toggle_dropdown(),
            ShellEvent::CloseDropdown => self.nav.close_dropdown(),
            ShellEvent::DraftInsert(ch) => self.relay.insert(ch),
            ShellEvent::DraftBackspace => self.relay.backspace(),
            ShellEvent::Submit => self.submit(),
            ShellEvent::Quit => self.running = false,
        }
    }

    /// Selects the dropdown row at `index`
    ///
    /// A row past the end of the table is a silent no-op. Re-selecting the
    /// current application closes the dropdown but does not remount the
    /// embedded content; switching mounts a fresh instance, so whatever state
    /// the previous application held is discarded.
    fn select_entry(&mut self, index: usize) {
        let Some(descriptor) = self.registry.by_index(index) else {
            debug!(index, "dropdown row has no entry, ignoring");
            return;
        };
        let id = descriptor.id;

        match self.nav.select(id) {
            SelectionChange::Reselected => {
                debug!(app = %id, "application already selected");
            }
            SelectionChange::Switched => {
                debug!(app = %id, "application selected");
                if descriptor.is_embeddable() {
                    self.host.mount(descriptor);
                } else {
                    self.host.unmount();
                }
            }
        }
    }

    fn submit(&mut self) {
        match self.relay.send(&self.host) {
            SendOutcome::Sent => debug!("shared message sent"),
            SendOutcome::BlankDraft | SendOutcome::NoTarget => {}
        }
    }

    /// Dropdown row index of an application id, for input shortcuts
    pub fn entry_index(&self, id: AppId) -> Option<usize> {
        self.registry.iter().position(|entry| entry.id == id)
    }
}
