//! Built-in embedded applications
//!
//! Each sub-application is a self-contained unit behind the [`EmbeddedApp`]
//! trait, looked up by the embed source its descriptor names. The shell knows
//! nothing about what an application does with a notification; displaying,
//! logging, or ignoring it is entirely the application's choice.

use crate::domain::message::Notification;

pub mod text_compare;
pub mod timestamp_lab;

/// One embedded sub-application, driven by its worker thread
pub trait EmbeddedApp: Send {
    /// Reacts to a decoded notification from the shell
    fn on_notification(&mut self, note: Notification);

    /// Periodic update between notifications
    fn tick(&mut self) {}

    /// Current view as plain text lines
    fn render(&self) -> Vec<String>;
}

/// Instantiates the application registered under an embed source
pub fn load(source: &str) -> Option<Box<dyn EmbeddedApp>> {
    match source {
        text_compare::SOURCE => Some(Box::new(text_compare::TextCompare::new())),
        timestamp_lab::SOURCE => Some(Box::new(timestamp_lab::TimestampLab::new())),
        _ => None,
    }
}

/// True if an embed source resolves to a loadable application
pub fn is_known(source: &str) -> bool {
    matches!(source, text_compare::SOURCE | timestamp_lab::SOURCE)
}
