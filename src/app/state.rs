//! Navigation state management
//!
//! Defines the shell's navigation state machine and the events it reacts to.
//! The state holds only the selected application id and the dropdown flag;
//! which view is rendered is derived from the registry, never stored
//! separately.

use crate::domain::registry::{AppId, Registry};

/// What the shell body currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The landing page with the application cards
    Landing,
    /// The embedded pane for one application
    Embedded(AppId),
}

/// Result of a selection event
///
/// Selecting the already-selected application is a distinct outcome so the
/// controller can avoid remounting embedded content that is already showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// The selection moved to a different application
    Switched,
    /// The selection was already on this application; nothing to reload
    Reselected,
}

/// Events produced by the input layer and dispatched by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// Select the dropdown row at this zero-based index
    SelectEntry(usize),
    ToggleDropdown,
    CloseDropdown,
    /// Append a character to the draft message
    DraftInsert(char),
    /// Remove the last character of the draft message
    DraftBackspace,
    /// Commit the draft message to the embedded application
    Submit,
    Quit,
}

/// Navigation state: selected application plus the dropdown flag
///
/// Mutated only by user navigation events on the single event-handling thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    selected: AppId,
    dropdown_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            selected: AppId::Home,
            dropdown_open: false,
        }
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> AppId {
        self.selected
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// Selects an application and closes the dropdown
    ///
    /// Returns whether the selection actually moved; re-selecting the current
    /// application reports [`SelectionChange::Reselected`] and changes nothing
    /// else.
    pub fn select(&mut self, id: AppId) -> SelectionChange {
        self.dropdown_open = false;
        if self.selected == id {
            SelectionChange::Reselected
        } else {
            self.selected = id;
            SelectionChange::Switched
        }
    }

    /// Flips the dropdown flag; no other state is affected
    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// Derives the current view from the selected descriptor
    ///
    /// An entry without an embed source renders the landing page; everything
    /// else renders its embedded pane.
    pub fn view(&self, registry: &Registry) -> View {
        if registry.descriptor(self.selected).is_embeddable() {
            View::Embedded(self.selected)
        } else {
            View::Landing
        }
    }
}
