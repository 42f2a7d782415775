/// Core evaluation logic and the pipeline driver.
///
/// Contains the [`Interpreter`](core::Interpreter), which walks one tree at a
/// time, and the [`Evaluator`](core::Evaluator), which wires a source string
/// through the lexer, parser and interpreter.
pub mod core;

/// Literal evaluation.
///
/// Converts `Factor` tokens into numbers.
pub mod factor;

/// Unary operator evaluation.
///
/// Implements the identity `+` and negating `-` signs.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the six arithmetic operators with IEEE-754 semantics.
pub mod binary;

pub use self::core::{EvalResult, Evaluator, Interpreter};
