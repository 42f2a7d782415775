/// Parser state and the top-level entry point.
///
/// Holds the lexer, the single token of lookahead and the helpers every
/// grammar rule shares.
pub mod core;

/// Binary precedence levels.
///
/// Additive, multiplicative and exponent rules. The first two fold
/// left-associatively; exponentiation folds to the right.
pub mod binary;

/// Unary signs and atoms.
///
/// Parses an optional leading `+`/`-`, literals and parenthesized groups.
pub mod unary;

pub use self::core::{ParseResult, Parser};
