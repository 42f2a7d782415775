use crate::interpreter::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a syntax tree.
///
/// The parser never builds a tree that triggers one of these; they guard
/// against hand-built trees whose tokens do not fit their node.
pub enum EvalError {
    /// A factor node holds a token that is not a numeric literal.
    UnknownFactorKind {
        /// The kind found in the node.
        kind: TokenKind,
    },
    /// A unary node holds a token other than `+` or `-`.
    UnknownUnaryOperator {
        /// The kind found in the node.
        kind: TokenKind,
    },
    /// A binary node holds a token that is not an arithmetic operator.
    UnknownBinaryOperator {
        /// The kind found in the node.
        kind: TokenKind,
    },
    /// A literal's text cannot be converted to a number.
    MalformedLiteral {
        /// The literal text.
        text: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFactorKind { kind } => {
                write!(f, "Unable to evaluate: unknown factor kind {kind}.")
            },
            Self::UnknownUnaryOperator { kind } => {
                write!(f, "Unable to evaluate: unknown unary operator {kind}.")
            },
            Self::UnknownBinaryOperator { kind } => {
                write!(f, "Unable to evaluate: unknown binary operator {kind}.")
            },
            Self::MalformedLiteral { text } => {
                write!(f, "Unable to evaluate: malformed numeric literal '{text}'.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
