//! Terminal output rendering: banner, prompts, and result/error lines.
//!
//! Everything renders to `String` so the session and the tests share one
//! formatting source; callers decide where the text goes.

use std::fmt;

use colored::Colorize;

use crate::constants;
use crate::models::Operation;

/// Fixed line printed when the operation name matches nothing.
pub const INVALID_OPERATION: &str = "Invalid operation!";

/// Welcome banner: tool name plus the supported operations.
pub fn banner() -> String {
    format!(
        "{} {}\nOperations: {}\n",
        constants::APP_NAME.bold(),
        "· interactive calculator".dimmed(),
        operation_list(", "),
    )
}

/// Prompt for the first operand.
pub fn first_operand_prompt() -> String {
    "Enter the first number: ".to_string()
}

/// Prompt for the second operand.
pub fn second_operand_prompt() -> String {
    "Enter the second number: ".to_string()
}

/// Prompt for the operation name, listing the supported names.
pub fn operation_prompt() -> String {
    format!("Enter the operation ({}): ", operation_list("/"))
}

/// `Result: <value>`, with the default `f64` rendering.
pub fn result_line(value: f64) -> String {
    format!("Result: {value}")
}

/// `Error: <message>`.
pub fn error_line(err: &impl fmt::Display) -> String {
    format!("Error: {err}")
}

/// The four operation names joined by `sep`, in canonical order.
fn operation_list(sep: &str) -> String {
    Operation::ALL
        .iter()
        .map(|op| op.name())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::math::MathError;

    #[test]
    fn banner_names_every_operation() {
        let banner = banner();
        assert!(banner.contains("tally"));
        assert!(banner.contains("Operations: add, subtract, multiply, divide"));
    }

    #[test]
    fn operation_prompt_lists_the_names() {
        assert_eq!(
            operation_prompt(),
            "Enter the operation (add/subtract/multiply/divide): "
        );
    }

    #[test]
    fn operand_prompts() {
        assert_eq!(first_operand_prompt(), "Enter the first number: ");
        assert_eq!(second_operand_prompt(), "Enter the second number: ");
    }

    #[test]
    fn result_line_uses_default_float_rendering() {
        assert_eq!(result_line(7.0), "Result: 7");
        assert_eq!(result_line(2.5), "Result: 2.5");
        assert_eq!(result_line(-1.0), "Result: -1");
    }

    #[test]
    fn error_line_wraps_the_message() {
        assert_eq!(
            error_line(&MathError::DivisionByZero),
            "Error: Cannot divide by zero!"
        );
    }
}
