/// The token model.
///
/// Declares the closed set of token kinds and the immutable [`Token`] value
/// that pairs a kind with its source text.
///
/// [`Token`]: token::Token
pub mod token;
/// The lexer module tokenizes source text for the parser.
///
/// Turns the raw character sequence into tokens on demand, skipping
/// whitespace, and reports characters that begin no token.
pub mod lexer;
/// The parser module builds syntax trees from tokens.
///
/// A recursive-descent parser with one rule per precedence level. Each call
/// yields the tree of the next top-level expression.
pub mod parser;
/// The evaluator module reduces syntax trees to numbers.
///
/// Walks one tree per call and exposes the [`Evaluator`] driver that runs a
/// source string through the whole pipeline.
///
/// [`Evaluator`]: evaluator::Evaluator
pub mod evaluator;
