/// Parsing errors.
///
/// Defines all error types that can occur during tokenizing and parsing of
/// source code: unknown characters, malformed indentation, missing or
/// unexpected tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined variables, type mismatches, bad indices and escaped control
/// signals.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The single failure reported by the top-level entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while running.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// The worker thread that runs the program could not be started.
    #[error("Failed to start the interpreter thread: {details}")]
    Thread { details: String },
}
