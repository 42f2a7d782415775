use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        token::TokenKind,
    },
};

impl Interpreter<'_> {
    /// Applies a sign to an evaluated operand.
    ///
    /// `+` returns the operand unchanged and `-` negates it. Negating `NaN`
    /// gives `NaN`; negating zero gives negative zero.
    ///
    /// # Errors
    /// [`EvalError::UnknownUnaryOperator`] for any other kind.
    pub fn eval_unary(op: TokenKind, operand: f64) -> EvalResult<f64> {
        match op {
            TokenKind::Add => Ok(operand),
            TokenKind::Sub => Ok(-operand),
            kind => Err(EvalError::UnknownUnaryOperator { kind }),
        }
    }
}
