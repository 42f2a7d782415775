use crate::{
    ast::Ast,
    error::{Error, EvalError},
    interpreter::{lexer::Lexer, parser::Parser},
};

/// Result type used by the interpreter.
///
/// Tree evaluation can only fail on malformed trees, reported as
/// [`EvalError`].
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates the expressions produced by a [`Parser`], one per call.
///
/// All arithmetic is carried out on `f64`, whatever the literal kinds.
/// Division or remainder by zero and undefined powers are not errors; they
/// yield infinities or `NaN` exactly as IEEE-754 prescribes.
pub struct Interpreter<'a> {
    parser: Parser<'a>,
}

impl<'a> Interpreter<'a> {
    /// Creates an interpreter that owns `parser`.
    #[must_use]
    pub const fn new(parser: Parser<'a>) -> Self {
        Self { parser }
    }

    /// Parses and evaluates the next top-level expression.
    ///
    /// Returns `Ok(None)` once the input is exhausted, on this and every later
    /// call.
    ///
    /// # Errors
    /// Returns the first lexing, parsing or evaluation error met. No partial
    /// result is produced.
    pub fn run(&mut self) -> Result<Option<f64>, Error> {
        let Some(ast) = self.parser.next()? else {
            return Ok(None);
        };

        let value = Self::eval(&ast)?;
        tracing::debug!(value, "evaluated expression");
        Ok(Some(value))
    }

    /// Fails unless the whole input has been consumed.
    ///
    /// # Errors
    /// See [`Parser::expect_end`].
    pub fn finish(&mut self) -> Result<(), Error> {
        self.parser.expect_end()
    }

    /// Reduces a tree to its numeric value.
    ///
    /// Operands are evaluated left before right, and both before the
    /// operator's token kind is checked.
    ///
    /// # Errors
    /// Returns an [`EvalError`] when a node holds a token its variant cannot
    /// carry, or a literal whose text does not convert.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::Ast,
    ///     error::EvalError,
    ///     interpreter::{
    ///         evaluator::Interpreter,
    ///         token::{Token, TokenKind},
    ///     },
    /// };
    ///
    /// let two = Ast::Factor(Token::new(TokenKind::Integer, "2", 0));
    /// let neg = Ast::unary(Token::symbol(TokenKind::Sub, 0), two.clone());
    /// assert_eq!(Interpreter::eval(&neg), Ok(-2.0));
    ///
    /// let bad = Ast::unary(Token::symbol(TokenKind::Mul, 0), two);
    /// assert_eq!(Interpreter::eval(&bad),
    ///            Err(EvalError::UnknownUnaryOperator { kind: TokenKind::Mul }));
    /// ```
    pub fn eval(ast: &Ast) -> EvalResult<f64> {
        match ast {
            Ast::Factor(token) => Self::eval_factor(token),
            Ast::UniOp { token, child } => {
                let operand = Self::eval(child)?;
                Self::eval_unary(token.token(), operand)
            },
            Ast::BiOp { token, left, right } => {
                let left = Self::eval(left)?;
                let right = Self::eval(right)?;
                Self::eval_binary(token.token(), left, right)
            },
        }
    }
}

/// Runs a source string through the whole pipeline.
///
/// Each instance owns its own lexer, parser and interpreter; nothing is shared
/// between instances and nothing outlives the source.
///
/// Errors are fatal: after a run fails, every later run returns `Ok(None)`
/// and iteration ends, so no expression past the failure is evaluated.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::Evaluator;
///
/// let mut evaluator = Evaluator::new("2 ^ 3 ^ 2  (2 + 3) * 4");
/// assert_eq!(evaluator.run().unwrap(), Some(512.0));
/// assert_eq!(evaluator.run().unwrap(), Some(20.0));
/// assert_eq!(evaluator.run().unwrap(), None);
/// assert_eq!(evaluator.run().unwrap(), None);
/// ```
pub struct Evaluator<'a> {
    interpreter: Interpreter<'a>,
    failed:      bool,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { interpreter: Interpreter::new(Parser::new(Lexer::new(source))),
               failed:      false, }
    }

    /// Evaluates the next top-level expression, or returns `Ok(None)` when the
    /// source holds no further expression or an earlier run failed.
    ///
    /// # Errors
    /// See [`Interpreter::run`].
    pub fn run(&mut self) -> Result<Option<f64>, Error> {
        if self.failed {
            return Ok(None);
        }
        let result = self.interpreter.run();
        self.failed = result.is_err();
        result
    }

    /// Fails unless the source holds nothing after the expressions already
    /// evaluated.
    ///
    /// # Errors
    /// See [`Parser::expect_end`].
    pub fn finish(&mut self) -> Result<(), Error> {
        if self.failed {
            return Ok(());
        }
        let result = self.interpreter.finish();
        self.failed = result.is_err();
        result
    }
}

/// Yields one result per top-level expression.
///
/// Iteration ends at the end of input, or right after the first error.
impl Iterator for Evaluator<'_> {
    type Item = Result<f64, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.run().transpose()
    }
}
