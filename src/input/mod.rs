//! Input handling
//!
//! Translates terminal events into shell events. Mapping is pure; all state
//! changes happen in the controller.

pub mod keyboard;
