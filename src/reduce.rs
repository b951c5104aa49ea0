//! The reduction engine: a pure left-to-right fold over the operand
//! sequence with 32-bit wraparound arithmetic.

use thiserror::Error;

use crate::method::Method;

/// Errors from the reduction engine.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReduceError {
    #[error("no operands supplied")]
    EmptyOperands,

    #[error("division by zero (operand #{position})")]
    DivisionByZero {
        /// 1-based position of the zero operand in the sequence.
        position: usize,
    },
}

/// Fold `operands` left to right with the given method, seeding the
/// accumulator with the first element.
///
/// Arithmetic wraps on overflow, bit-for-bit compatible with 32-bit
/// two's-complement (so `i32::MIN / -1` wraps to `i32::MIN` instead of
/// panicking). Division truncates toward zero.
pub fn reduce(method: Method, operands: &[i32]) -> Result<i32, ReduceError> {
    let (&first, rest) = operands.split_first().ok_or(ReduceError::EmptyOperands)?;

    let mut acc = first;
    for (i, &next) in rest.iter().enumerate() {
        acc = match method {
            Method::Add => acc.wrapping_add(next),
            Method::Subtract => acc.wrapping_sub(next),
            Method::Multiply => acc.wrapping_mul(next),
            Method::Divide => {
                if next == 0 {
                    return Err(ReduceError::DivisionByZero { position: i + 2 });
                }
                acc.wrapping_div(next)
            }
        };
    }

    Ok(acc)
}
