//! arith — four-operation integer reduction CLI (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod constants;
pub mod method;
pub mod operands;
pub mod reduce;
