//! tally — interactive command-line calculator (library crate).
//!
//! Re-exports public modules for integration tests and the binary.

pub mod constants;
pub mod input;
pub mod math;
pub mod models;
pub mod output;
pub mod session;
