//! Application orchestration layer
//!
//! This module coordinates between input, domain, UI, and embed layers.
//! It manages the shell state and event handling.

pub mod controller;
pub mod relay;
pub mod runtime;
pub mod state;

pub use controller::ShellController;
