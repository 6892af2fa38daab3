//! The interactive session: one round of prompt → read → dispatch → print.
//!
//! Generic over the input and output streams so tests can drive a session
//! with in-memory buffers while the binary passes stdin/stdout.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::input::{InputError, parse_operand};
use crate::math::MathError;
use crate::models::Operation;
use crate::output;

/// How a session ended when no error propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    /// A `Result:` line was printed.
    Completed,
    /// The operation name matched nothing; `Invalid operation!` was
    /// printed. The binary maps this to exit code 1.
    InvalidOperation,
}

/// Errors that abort a session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Math(#[from] MathError),

    #[error("failed to read or write the terminal: {0}")]
    Io(#[from] std::io::Error),
}

/// Run one calculator round against the given streams.
///
/// Reads are strictly sequential and blocking: operand 1, operand 2,
/// operation name. The first failure ends the session; there is no
/// re-prompting. EOF reads as an empty line and fails operand parsing.
pub fn run<R, W>(reader: &mut R, out: &mut W) -> Result<SessionExit, SessionError>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{}", output::banner())?;

    let x = prompt_operand(reader, out, &output::first_operand_prompt())?;
    let y = prompt_operand(reader, out, &output::second_operand_prompt())?;

    write!(out, "{}", output::operation_prompt())?;
    out.flush()?;
    let raw = read_line(reader)?;

    let op: Operation = match raw.parse() {
        Ok(op) => op,
        Err(_) => {
            writeln!(out, "{}", output::INVALID_OPERATION)?;
            return Ok(SessionExit::InvalidOperation);
        }
    };

    let value = op.apply(x, y)?;
    writeln!(out, "{}", output::result_line(value))?;

    Ok(SessionExit::Completed)
}

/// Write a prompt, then read and parse one operand.
fn prompt_operand<R, W>(reader: &mut R, out: &mut W, prompt: &str) -> Result<f64, SessionError>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{prompt}")?;
    out.flush()?;
    let raw = read_line(reader)?;
    Ok(parse_operand(&raw)?)
}

/// Read one line, untrimmed (the parsers trim).
fn read_line<R: BufRead>(reader: &mut R) -> std::io::Result<String> {
    let mut buf = String::new();
    reader.read_line(&mut buf)?;
    Ok(buf)
}
