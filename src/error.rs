/// Lexing errors.
///
/// Raised when the source contains a character that does not begin any token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the errors raised when the token stream does not match the
/// expression grammar: unexpected tokens, missing parentheses and premature
/// end of input.
pub mod parse_error;
/// Evaluation errors.
///
/// Raised when a syntax tree node carries a token its variant cannot hold.
/// Arithmetic edge cases such as division by zero are not errors.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure of a pipeline run, tagged by the phase that raised it.
pub enum Error {
    /// The lexer met an unrecognized character.
    Lex(LexError),
    /// The parser met a token that does not fit the grammar.
    Parse(ParseError),
    /// The interpreter met a malformed tree.
    Eval(EvalError),
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<EvalError> for Error {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
