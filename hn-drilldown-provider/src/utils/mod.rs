//! Utility modules.

/// Log truncation so large HTML bodies stay readable in debug logs.
pub mod log_sanitizer;
