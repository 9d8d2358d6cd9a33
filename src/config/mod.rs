//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, the map suffix, etc.)
//! - The library `Config` struct
//! - CLI value enums for log level and format

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
