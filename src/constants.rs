//! App-wide constants.
//!
//! Centralises the tool name and the fixed user-facing strings so a
//! rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "arith";

/// Exact text written to stdout for an unrecognized method. Callers
/// match on this string, so it must not change.
pub const INVALID_METHOD: &str = "Invalid method";
