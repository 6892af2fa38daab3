//! tally — interactive command-line calculator.
//!
//! Entry point and error handling boundary. Uses `anyhow` for unexpected
//! failures; arithmetic and parse failures are reported as an `Error:`
//! line on stdout and end the run normally.

mod cli;

use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use tally::output;
use tally::session::{self, SessionError, SessionExit};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();

    let stdin = io::stdin();
    match session::run(&mut stdin.lock(), &mut io::stdout()) {
        Ok(SessionExit::Completed) => Ok(()),
        // The session already printed `Invalid operation!`.
        Ok(SessionExit::InvalidOperation) => process::exit(1),
        Err(SessionError::Io(err)) => Err(err.into()),
        // Caught calculator errors report on stdout and end the run
        // with a zero status.
        Err(err) => {
            println!("{}", output::error_line(&err));
            Ok(())
        }
    }
}
