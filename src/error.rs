//! Error types for provgen.

use thiserror::Error;

/// A rejected line of operator input.
///
/// The payload is the exact message shown to the operator before the field
/// is prompted again. The two variants separate "could not be read as the
/// requested type" from "read fine but not allowed", so tests and callers
/// can tell the failure class apart without matching on message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input could not be parsed as the expected type.
    #[error("{0}")]
    Parse(String),

    /// The input parsed but violates the address policy.
    #[error("{0}")]
    Policy(String),
}

impl ValidationError {
    /// The message shown to the operator.
    pub fn message(&self) -> &str {
        match self {
            ValidationError::Parse(msg) => msg,
            ValidationError::Policy(msg) => msg,
        }
    }
}
