use crate::interpreter::token::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// Found a token that cannot continue the current grammar rule.
    UnexpectedToken {
        /// The construct the parser was looking for.
        expected: &'static str,
        /// The token encountered instead.
        found:    Token,
    },
    /// Reached the end of input in the middle of an expression.
    UnexpectedEndOfInput {
        /// The construct the parser was looking for.
        expected: &'static str,
        /// Byte offset of the end of input.
        position: usize,
    },
}

impl ParseError {
    /// Builds the error for `found` not matching `expected`, choosing
    /// [`ParseError::UnexpectedEndOfInput`] when `found` is the end marker.
    #[must_use]
    pub fn unexpected(expected: &'static str, found: Token) -> Self {
        if found.token() == TokenKind::Eof {
            Self::UnexpectedEndOfInput { expected,
                                         position: found.position() }
        } else {
            Self::UnexpectedToken { expected, found }
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => write!(f,
                                                                "Error at position {}: Expected {expected}, found {found}.",
                                                                found.position()),
            Self::UnexpectedEndOfInput { expected, position } => write!(f,
                                                                        "Error at position {position}: Expected {expected}, found end of input."),
        }
    }
}

impl std::error::Error for ParseError {}
