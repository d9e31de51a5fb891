//! Utility functions module
//!
//! Formatting helpers and process signal handling.

pub mod format;
pub mod signals;

// Re-export main functions
pub use format::{format_seconds, format_tenths, format_time, status_title};
pub use signals::shutdown_signal;
