use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        token::{Token, TokenKind},
    },
};

impl Interpreter<'_> {
    /// Converts a literal token to its numeric value.
    ///
    /// `Integer` text is read as a base-10 integer and `Float` text as a
    /// decimal fraction, both rounded to the nearest `f64`, so digit runs too
    /// long for any integer type still evaluate. `NaN` and `Infinity` map to
    /// the IEEE-754 special values.
    ///
    /// # Errors
    /// - [`EvalError::UnknownFactorKind`] if the token is not a literal.
    /// - [`EvalError::MalformedLiteral`] if the text does not have the shape
    ///   the lexer gives that kind.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{
    ///     evaluator::Interpreter,
    ///     token::{Token, TokenKind},
    /// };
    ///
    /// let big = Token::new(TokenKind::Integer, "100000000000000000000000", 0);
    /// assert_eq!(Interpreter::eval_factor(&big), Ok(1e23));
    ///
    /// let inf = Token::new(TokenKind::Infinity, "INFINITY", 0);
    /// assert_eq!(Interpreter::eval_factor(&inf), Ok(f64::INFINITY));
    /// ```
    pub fn eval_factor(token: &Token) -> EvalResult<f64> {
        let text = token.value();
        match token.token() {
            TokenKind::Integer if is_digits(text) => parse_decimal(text),
            TokenKind::Float if is_fraction(text) => parse_decimal(text),
            TokenKind::Integer | TokenKind::Float => {
                Err(EvalError::MalformedLiteral { text: text.to_string() })
            },
            TokenKind::NaN => Ok(f64::NAN),
            TokenKind::Infinity => Ok(f64::INFINITY),
            kind => Err(EvalError::UnknownFactorKind { kind }),
        }
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn is_fraction(text: &str) -> bool {
    text.split_once('.')
        .is_some_and(|(whole, frac)| is_digits(whole) && is_digits(frac))
}

fn parse_decimal(text: &str) -> EvalResult<f64> {
    text.parse()
        .map_err(|_| EvalError::MalformedLiteral { text: text.to_string() })
}
