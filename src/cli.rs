//! CLI definition and argument parsing.
//!
//! The calculator is interactive and takes no arguments; clap still owns
//! the entry so `--help` and `--version` behave like every other tool.

use clap::Parser;

use tally::constants;

/// Interactive command-line calculator.
#[derive(Parser, Debug)]
#[command(
    name = constants::APP_NAME,
    version = constants::VERSION,
    about = "Interactive command-line calculator. Reads two numbers and an \
             operation (add/subtract/multiply/divide) from the terminal."
)]
pub struct Cli {}
