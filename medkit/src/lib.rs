//! Shared kit for the MedFlow site.
//!
//! Everything here is free of any UI framework: the domain types, the mock
//! fixtures, the two-locale dictionary and the small state machines that drive
//! the interactive demo. The web service wraps these in reactive signals.

pub mod booking;
pub mod chart;
pub mod config;
pub mod errors;
pub mod examination;
pub mod fixtures;
pub mod i18n;
pub mod queue;
pub mod reveal;
pub mod types;

pub use errors::{DemoError, Result};
