//! Error handling for the templateme application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for templateme operations.
///
/// This enum represents all possible errors that can occur within the
/// application. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents failures to read or write the generator store
    #[error("Store error: {0}.")]
    StoreError(String),

    /// Represents errors that occur during schema parsing or serialization
    #[error("Schema error: {0}.")]
    SchemaError(String),

    /// Represents a materialization batch in which one or more template
    /// entries failed; the per-entry outcomes were already reported
    #[error("{failed} of {total} template entries failed to materialize.")]
    MaterializeError { failed: usize, total: usize },

    /// Represents an operation that is declared by the CLI surface but
    /// intentionally left unimplemented
    #[error("The '{operation}' operation is not implemented.")]
    Unimplemented { operation: String },
}

/// Convenience type alias for Results with the templateme Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
