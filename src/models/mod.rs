//! Shared types used across all modules.
//!
//! Other modules import the operation model from here rather than
//! reaching into each other's internals.

pub mod operation;

pub use operation::{Operation, ParseOperationError};
