/// Represents all errors that can occur during tokenizing or parsing.
///
/// Parsing is fail-fast: the first error aborts the whole parse and no
/// statements are produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A character that starts no valid token.
    #[error("Error on line {line}: Unknown character '{character}'.")]
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal whose closing quote is missing on the same line.
    #[error("Error on line {line}: Unterminated string literal.")]
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A dedent that does not return to any enclosing indentation level.
    #[error("Error on line {line}: Inconsistent indentation: width {width} matches no outer level.")]
    InconsistentIndentation {
        /// Width of the offending line, in columns.
        width: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric literal that could not be converted to a number.
    #[error("Error on line {line}: Invalid number literal '{text}'.")]
    InvalidNumber {
        /// The literal as written.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found a token that cannot appear at this position.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was required but something else was found.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    Expected {
        /// Description of what the grammar required.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The token stream ended in the middle of a construct.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left side of `=` is not a plain name.
    #[error("Error on line {line}: Invalid assignment target.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::InconsistentIndentation { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::Expected { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::InvalidAssignmentTarget { line } => *line,
        }
    }
}
