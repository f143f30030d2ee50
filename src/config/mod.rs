//! Start-up configuration
//!
//! Fixed tables validated once during start-up. There is no file- or
//! environment-driven configuration; the shell has no external interface
//! beyond the terminal.

pub mod apps;
