//! Error types for the peaclock resolver.
//!
//! Uses thiserror for derive macros. Every fatal condition in the resolver is
//! a typed error propagated up to `main`, which owns presentation (coloured
//! message on stderr) and the process exit code. Library code never exits.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for resolution operations.
///
/// Each variant corresponds to one class of fatal failure and maps to a
/// distinct exit code.
#[derive(Error, Debug)]
pub enum PeaclockError {
    /// A referenced file, directory, or binary does not exist.
    #[error("{0}")]
    MissingResource(String),

    /// A supplied value failed validation against the accepted set.
    #[error("{0}")]
    Validation(String),

    /// A config or barcodes file could not be parsed.
    #[error("{0}")]
    Parse(String),

    /// The external demultiplexing tool failed to run.
    #[error("{0}")]
    Tool(String),
}

impl PeaclockError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PeaclockError::MissingResource(_) => exit_codes::MISSING_RESOURCE,
            PeaclockError::Validation(_) => exit_codes::VALIDATION_FAILURE,
            PeaclockError::Parse(_) => exit_codes::PARSE_FAILURE,
            PeaclockError::Tool(_) => exit_codes::TOOL_FAILURE,
        }
    }
}

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, PeaclockError>;
