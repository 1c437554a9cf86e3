//! Builder-level errors.

use thiserror::Error;

/// Internal-invariant failures of a [`CodeBuilder`](crate::CodeBuilder).
///
/// These indicate a bug in the emitting walker, not bad input, and are kept
/// distinct from "unsupported construct" skips so callers can tell the two
/// apart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuilderError {
    #[error("indentation underflow: attempted to dedent below depth zero")]
    IndentUnderflow,
}
