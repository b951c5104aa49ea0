//! Operand conversion: ordered, all-or-nothing string-to-integer parsing.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors from operand conversion.
#[derive(Error, Debug)]
pub enum OperandError {
    #[error("invalid integer operand '{literal}': {source}")]
    Parse {
        literal: String,
        source: ParseIntError,
    },
}

/// Convert raw argument strings into integers, preserving order and length.
///
/// Conversion is all-or-nothing: the first element that is not a signed
/// base-10 literal aborts the whole conversion, and no later element is
/// parsed.
pub fn parse_operands(raw: &[String]) -> Result<Vec<i32>, OperandError> {
    raw.iter()
        .map(|s| {
            s.parse::<i32>().map_err(|source| OperandError::Parse {
                literal: s.clone(),
                source,
            })
        })
        .collect()
}
