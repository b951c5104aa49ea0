//! arith — four-operation integer reduction CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::io::Write;
use std::process;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use arith::constants;
use arith::method::Method;
use arith::operands;
use arith::reduce;

use cli::args::Cli;

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "Error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // An unrecognized method is not a fault: the contract is to print the
    // literal `Invalid method` on stdout and exit cleanly, without
    // touching the operands.
    let Ok(method) = Method::from_str(&cli.method) else {
        return print_stdout(constants::INVALID_METHOD);
    };

    let items = operands::parse_operands(&cli.operands).context("failed to parse operands")?;
    let result = reduce::reduce(method, &items).with_context(|| format!("{method} failed"))?;

    print_stdout(&result.to_string())
}

/// Write `text` to stdout with no trailing newline and flush.
fn print_stdout(text: &str) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{text}")?;
    handle.flush()?;
    Ok(())
}
