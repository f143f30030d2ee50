//! Message relay
//!
//! Owns the pending draft text and the last successfully sent message, and
//! forwards the draft to the currently embedded application on an explicit
//! send. Delivery is one-way and fire-and-forget; the relay never learns
//! whether the embedded side consumed the payload.

use tracing::debug;

use crate::domain::message::Notification;
use crate::embed::host::EmbedHost;

/// Outcome of a send attempt
///
/// The skipped variants are silent no-ops towards the user; they exist so the
/// controller can trace what happened without surfacing an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The message was dispatched and recorded as the last sent value
    Sent,
    /// The draft was empty or whitespace-only; nothing changed
    BlankDraft,
    /// No embedded application is mounted; nothing changed
    NoTarget,
}

/// Draft and last-sent message state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageRelay {
    draft: String,
    last_sent: Option<String>,
}

impl MessageRelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn last_sent(&self) -> Option<&str> {
        self.last_sent.as_deref()
    }

    /// Replaces the draft verbatim; no length limit, no sanitization
    pub fn update_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Appends one character to the draft
    pub fn insert(&mut self, ch: char) {
        let mut next = self.draft.clone();
        next.push(ch);
        self.update_draft(next);
    }

    /// Removes the last character of the draft, if any
    pub fn backspace(&mut self) {
        let mut next = self.draft.clone();
        next.pop();
        self.update_draft(next);
    }

    /// Sends the draft to the mounted embedded application
    ///
    /// Preconditions: the trimmed draft is non-empty and the host currently
    /// has a mounted target. If either fails the call is a silent no-op with
    /// no partial state change. On success the untrimmed draft is recorded as
    /// the last sent message, exactly one notification is dispatched, and the
    /// draft is cleared.
    ///
    /// Dispatch is at-most-once and unacknowledged: a payload the embedded
    /// side is not ready to take is dropped by the host without any error
    /// reaching the user.
    pub fn send<H: EmbedHost>(&mut self, host: &H) -> SendOutcome {
        if self.draft.trim().is_empty() {
            debug!("send skipped: draft is blank");
            return SendOutcome::BlankDraft;
        }
        if host.mounted().is_none() {
            debug!("send skipped: no embedded target mounted");
            return SendOutcome::NoTarget;
        }

        let message = std::mem::take(&mut self.draft);
        host.deliver(&Notification::shared(message.clone()));
        self.last_sent = Some(message);
        SendOutcome::Sent
    }
}
