//! Terminal user interface

pub mod renderer;
pub mod terminal;
