//! Embedded-application hosting
//!
//! Each embedded application runs in its own isolated execution context: a
//! worker thread that exclusively owns the application value. The host keeps
//! exactly two endpoints per mount, a bounded notification mailbox and the
//! latest render snapshot.
//!
//! Threading discipline:
//! - the worker never touches host state; everything crosses the channel
//! - the host never blocks on the worker and never joins it
//! - unmounting drops the host endpoints; the worker notices the disconnect
//!   on its next receive and exits on its own
//!
//! Notification delivery is at-most-once and unacknowledged. The mailbox
//! holds a single payload and is written with a non-blocking send: if the
//! embedded side is not draining its inbox, the payload is dropped and the
//! loss is not reported anywhere but the debug log. The host also does not
//! verify which application is listening; whatever is mounted receives the
//! payload.

use std::sync::mpsc::{Receiver, RecvTimeoutError, SyncSender, TrySendError, sync_channel};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::message::Notification;
use crate::domain::registry::{AppDescriptor, AppId};
use crate::embed::apps::{self, EmbeddedApp};

/// Single payload slot; the channel is a mailbox, not a queue
const INBOX_CAPACITY: usize = 1;

/// How long the worker waits for a notification before running a tick
const IDLE_TICK: Duration = Duration::from_millis(120);

/// Host side of the embedded-content boundary
///
/// The production implementation is [`ThreadHost`]; controller and relay
/// tests substitute a recording stub.
pub trait EmbedHost {
    /// Mounts the application named by the descriptor's embed source,
    /// replacing any current mount with a fresh instance
    fn mount(&mut self, descriptor: &AppDescriptor);

    /// Discards the current mount, if any
    fn unmount(&mut self);

    /// Id of the currently mounted application
    fn mounted(&self) -> Option<AppId>;

    /// Fire-and-forget dispatch of one notification to the mounted target
    fn deliver(&self, note: &Notification);

    /// Latest rendered lines of the mounted application; empty while the
    /// application is still starting up or when nothing is mounted
    fn snapshot(&self) -> Vec<String>;
}

struct Mount {
    id: AppId,
    inbox: SyncSender<String>,
    frame: Arc<Mutex<Vec<String>>>,
}

/// Thread-per-mount embed host
#[derive(Default)]
pub struct ThreadHost {
    active: Option<Mount>,
}

impl ThreadHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmbedHost for ThreadHost {
    fn mount(&mut self, descriptor: &AppDescriptor) {
        self.unmount();

        let Some(source) = descriptor.embed_source else {
            return;
        };
        let Some(app) = apps::load(source) else {
            warn!(source, "no embedded application for source");
            return;
        };

        let (inbox, outbox) = sync_channel(INBOX_CAPACITY);
        let frame = Arc::new(Mutex::new(Vec::new()));
        let worker_frame = Arc::clone(&frame);

        let spawned = thread::Builder::new()
            .name(format!("embed-{}", descriptor.id.key()))
            .spawn(move || run_embedded(app, outbox, worker_frame));
        if let Err(error) = spawned {
            warn!(app = %descriptor.id, %error, "failed to start embedded application");
            return;
        }

        info!(app = %descriptor.id, source, "mounted embedded application");
        self.active = Some(Mount {
            id: descriptor.id,
            inbox,
            frame,
        });
    }

    fn unmount(&mut self) {
        if let Some(mount) = self.active.take() {
            // Dropping the inbox sender is the only shutdown signal the
            // worker gets; its state is discarded, never preserved.
            info!(app = %mount.id, "unmounted embedded application");
        }
    }

    fn mounted(&self) -> Option<AppId> {
        self.active.as_ref().map(|mount| mount.id)
    }

    fn deliver(&self, note: &Notification) {
        let Some(mount) = &self.active else {
            return;
        };
        let raw = match note.encode() {
            Ok(raw) => raw,
            Err(error) => {
                debug!(%error, "notification failed to encode, dropped");
                return;
            }
        };

        match mount.inbox.try_send(raw) {
            Ok(()) => debug!(app = %mount.id, "notification dispatched"),
            Err(TrySendError::Full(_)) => {
                debug!(app = %mount.id, "inbox full, notification dropped");
            }
            Err(TrySendError::Disconnected(_)) => {
                debug!(app = %mount.id, "embedded application gone, notification dropped");
            }
        }
    }

    fn snapshot(&self) -> Vec<String> {
        let Some(mount) = &self.active else {
            return Vec::new();
        };
        match mount.frame.lock() {
            Ok(lines) => lines.clone(),
            Err(_) => Vec::new(),
        }
    }
}

/// Worker loop for one embedded application
///
/// Runs until the host drops its inbox sender. Each iteration drains at most
/// one notification, ticks the application, and publishes a fresh snapshot.
fn run_embedded(
    mut app: Box<dyn EmbeddedApp>,
    inbox: Receiver<String>,
    frame: Arc<Mutex<Vec<String>>>,
) {
    publish(&frame, app.render());
    loop {
        match inbox.recv_timeout(IDLE_TICK) {
            Ok(raw) => match Notification::decode(&raw) {
                Some(note) => app.on_notification(note),
                // Unrecognized payloads are the embedded side's to ignore.
                None => debug!("embedded application ignored unrecognized payload"),
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        app.tick();
        publish(&frame, app.render());
    }
}

fn publish(frame: &Mutex<Vec<String>>, lines: Vec<String>) {
    if let Ok(mut slot) = frame.lock() {
        *slot = lines;
    }
}
