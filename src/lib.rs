//! # reckon
//!
//! reckon evaluates arithmetic expressions written as text. Source is
//! tokenized on demand, parsed with operator precedence into a syntax tree,
//! and the tree is reduced to an `f64`.
//!
//! ```text
//! expr  := term (("+" | "-") term)*
//! term  := unary (("*" | "/" | "%") unary)*
//! unary := ("+" | "-")? power
//! power := atom ("^" power)?
//! atom  := INTEGER | FLOAT | "NaN" | "Infinity" | "(" expr ")"
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::Error, interpreter::evaluator::Evaluator};

/// Defines the structure of parsed expressions.
///
/// The `Ast` sum type has one variant per node shape: literal factors, unary
/// signs and binary operators. Nodes own their children and are never
/// modified after the parser builds them.
pub mod ast;
/// Provides the error types for lexing, parsing and evaluation.
///
/// Each phase has its own error enum; [`Error`] wraps all three so a pipeline
/// run reports a single type. Every error aborts the run that raised it.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// Ties together the token model, lexer, parser and evaluator, and exposes
/// the [`Evaluator`] driver.
///
/// # Responsibilities
/// - Converts source text into tokens and tokens into syntax trees.
/// - Reduces each tree to a number using IEEE-754 arithmetic.
/// - Surfaces the first failure of any phase to the caller.
pub mod interpreter;
/// General helpers shared by the library and the command-line front end.
pub mod util;

/// Evaluates `source` as a single expression.
///
/// Returns `Ok(None)` if the source holds no expression at all.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails, or if anything
/// follows the expression. Use [`evaluate_all`] for sources holding several
/// expressions.
///
/// # Examples
/// ```
/// use reckon::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), Some(14.0));
/// assert_eq!(evaluate("   ").unwrap(), None);
/// assert!(evaluate("1 / 0").unwrap().unwrap().is_infinite());
///
/// // Malformed input is always an error, never a wrong number.
/// assert!(evaluate("2 +").is_err());
/// assert!(evaluate("2 $ 3").is_err());
/// assert!(evaluate("2 3").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Option<f64>, Error> {
    let mut evaluator = Evaluator::new(source);
    let value = evaluator.run()?;
    evaluator.finish()?;
    Ok(value)
}

/// Evaluates every top-level expression in `source`, in order.
///
/// Expressions are delimited by juxtaposition: an expression ends where the
/// grammar can no longer extend it, and the next one starts with the
/// following token. Line breaks are ordinary whitespace, so a line starting
/// with `+` or `-` continues the expression on the line before it: `"1\n-1"`
/// is the single expression `1 - 1`. Wrap such a line in parentheses to start
/// a new expression.
///
/// # Errors
/// Returns the first error met; results of earlier expressions are dropped.
///
/// # Examples
/// ```
/// use reckon::evaluate_all;
///
/// assert_eq!(evaluate_all("1 + 1  (3) -4").unwrap(), vec![2.0, -1.0]);
/// assert_eq!(evaluate_all("7\n8\n9").unwrap(), vec![7.0, 8.0, 9.0]);
/// assert!(evaluate_all("1 2 )").is_err());
/// assert_eq!(evaluate_all("1\n-1").unwrap(), vec![0.0]);
/// assert_eq!(evaluate_all("1\n(-1)").unwrap(), vec![1.0, -1.0]);
/// ```
pub fn evaluate_all(source: &str) -> Result<Vec<f64>, Error> {
    let results = Evaluator::new(source).collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = results.len(), "evaluated source");
    Ok(results)
}
