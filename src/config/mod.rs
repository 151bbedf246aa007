//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (pool limits, identifier limits, env var names)
//! - Store configuration and logging option types
//! - CLI option parsing for the `post_tracker` binary

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command};
pub use constants::*;
pub use types::{LogFormat, LogLevel, StoreConfig};
