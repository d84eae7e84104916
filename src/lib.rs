//! FTDM docs browser
//!
//! Terminal documentation for the FTDM/EFTDM framework. The work happens in
//! the workspace crates; this crate adds the command line and headless mode.

pub mod headless;

pub use headless::{write_report, PageReport};
