//! Logging utilities
//!
//! Subscriber initialisation and log-friendly formatting helpers.

pub mod logging;

pub use logging::*;
