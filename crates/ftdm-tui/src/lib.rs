//! ftdm-tui - Terminal UI for the FTDM docs browser
//!
//! This crate provides the ratatui-based terminal interface on top of the
//! ftdm-app state machine: event polling, rendering, and widget display.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::{run, RunOptions};
