//! Clap argument types for the dispatcher.

use clap::Parser;

/// Four-operation integer reduction CLI.
///
/// Reduces the operands left to right with the chosen method and prints
/// the decimal result to stdout.
#[derive(Parser, Debug)]
#[command(name = arith::constants::APP_NAME, version)]
pub struct Cli {
    /// Reduction method: add, subtract, multiply, or devide.
    //
    // Free-form string rather than a value enum: an unrecognized name
    // must reach the dispatcher and produce the `Invalid method` output,
    // not a clap usage error.
    pub method: String,

    /// Integer operands, reduced left to right.
    #[arg(allow_hyphen_values = true)]
    pub operands: Vec<String>,
}
