use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        token::TokenKind,
    },
};

impl Interpreter<'_> {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// None of the operators fail on their operands:
    /// - `/` by zero yields a signed infinity, or `NaN` for `0 / 0`.
    /// - `%` is the truncated remainder, taking the sign of the dividend;
    ///   a zero divisor yields `NaN`.
    /// - `^` is real exponentiation via `powf`, so a negative base with a
    ///   fractional exponent yields `NaN`.
    ///
    /// # Errors
    /// [`EvalError::UnknownBinaryOperator`] if `op` is not an arithmetic
    /// operator.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{evaluator::Interpreter, token::TokenKind};
    ///
    /// assert_eq!(Interpreter::eval_binary(TokenKind::Mod, -7.0, 3.0), Ok(-1.0));
    /// assert_eq!(Interpreter::eval_binary(TokenKind::Div, 1.0, 0.0), Ok(f64::INFINITY));
    /// assert!(Interpreter::eval_binary(TokenKind::Pow, -8.0, 1.0 / 3.0).unwrap().is_nan());
    /// assert!(Interpreter::eval_binary(TokenKind::Integer, 1.0, 2.0).is_err());
    /// ```
    pub fn eval_binary(op: TokenKind, left: f64, right: f64) -> EvalResult<f64> {
        match op {
            TokenKind::Add => Ok(left + right),
            TokenKind::Sub => Ok(left - right),
            TokenKind::Mul => Ok(left * right),
            TokenKind::Div => Ok(left / right),
            TokenKind::Mod => Ok(left % right),
            TokenKind::Pow => Ok(left.powf(right)),
            kind => Err(EvalError::UnknownBinaryOperator { kind }),
        }
    }
}
