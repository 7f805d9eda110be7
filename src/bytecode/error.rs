use std::error::Error;
use std::fmt::{self, Display};

/// A single flat error type for the bytecode subsystem. Unlike the tree-walk
/// interpreter's phase-specific `Error` taxonomy, the bytecode frontend has no
/// REPL-spanning diagnostics to accumulate — one expression per line, one
/// error per failure — so a plain message is enough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BytecodeError(pub String);

impl Display for BytecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for BytecodeError {}

impl From<&str> for BytecodeError {
    fn from(message: &str) -> Self {
        BytecodeError(message.to_string())
    }
}

impl From<String> for BytecodeError {
    fn from(message: String) -> Self {
        BytecodeError(message)
    }
}
