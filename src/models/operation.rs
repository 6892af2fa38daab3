//! The `Operation` enum: the four arithmetic operations a user can request.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::math::{self, MathError};

/// An arithmetic operation selected by user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Error for operation names that match none of the supported operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized operation: '{0}'. Supported: add, subtract, multiply, divide")]
pub struct ParseOperationError(pub String);

impl Operation {
    /// All operations in canonical order. The banner and the operation
    /// prompt derive their name lists from this rather than hardcoding.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// The lowercase name users type to select this operation.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Apply this operation to a pair of operands.
    pub fn apply(self, x: f64, y: f64) -> Result<f64, MathError> {
        match self {
            Operation::Add => Ok(math::add(x, y)),
            Operation::Subtract => Ok(math::subtract(x, y)),
            Operation::Multiply => Ok(math::multiply(x, y)),
            Operation::Divide => math::divide(x, y),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Matching is case-insensitive and ignores surrounding whitespace:
    /// `"  ADD "` selects [`Operation::Add`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            other => Err(ParseOperationError(other.to_string())),
        }
    }
}
