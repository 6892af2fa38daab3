//! App-wide constants.
//!
//! Centralises the tool name and version so a rename only requires
//! changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "tally";

/// Crate version, taken from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
