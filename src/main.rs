//! appdeck: a terminal shell hosting embedded sub-applications
//!
//! Pick an application from the dropdown, see it rendered in the embedded
//! pane, and relay a one-line message to it. All state lives for the duration
//! of the process; nothing is persisted.

mod app;
mod config;
mod domain;
mod embed;
mod input;
mod ui;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app::ShellController;
use crate::app::runtime;
use crate::embed::host::ThreadHost;

fn main() -> Result<()> {
    init_tracing();

    let registry = config::apps::build_registry().context("validate application registry")?;
    tracing::info!(apps = registry.len(), "application registry validated");

    let mut controller = ShellController::new(registry, ThreadHost::new());
    runtime::run(&mut controller)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
