//! Operand parsing: user text → `f64`.

use thiserror::Error;

/// Errors from operand parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The text is not a valid numeric literal.
    #[error("could not parse '{0}' as a number")]
    InvalidNumber(String),
}

/// Parse one operand from a line of user input.
///
/// Surrounding whitespace (including the trailing newline of a line read)
/// is ignored. Accepts anything Rust's float grammar accepts: signs,
/// decimals, exponents, `inf`, `NaN`.
pub fn parse_operand(raw: &str) -> Result<f64, InputError> {
    let text = raw.trim();
    text.parse::<f64>()
        .map_err(|_| InputError::InvalidNumber(text.to_string()))
}
