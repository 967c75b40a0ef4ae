use std::io;
use thiserror::Error;

/// Errors produced while parsing a `.dbc` file.
///
/// A parse either returns a complete [`CanDatabase`](crate::dbc::types::database::CanDatabase)
/// or one of these errors; a failed parse never hands back a partial model.
#[derive(Debug, Error)]
pub enum DbcParseError {
    #[error("Not a valid .dbc file: {path}")]
    InvalidExtension { path: String },
    #[error("Failed to open '{path}'. \nError: {source}")]
    OpenFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while reading '{path}'. \nError: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
    #[error("Internal error: {directive} expected a value on the {stack} stack but it was empty")]
    StackUnderflow {
        stack: &'static str,
        directive: &'static str,
    },
    #[error("Internal error: values left over after {directive}: {details}")]
    UnconsumedValues {
        directive: &'static str,
        details: String,
    },
    #[error("Invalid number '{token}' in {directive}")]
    InvalidNumber {
        token: String,
        directive: &'static str,
    },
}

impl DbcParseError {
    /// True for errors that point at a parser bug rather than at the input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            DbcParseError::StackUnderflow { .. } | DbcParseError::UnconsumedValues { .. }
        )
    }
}
