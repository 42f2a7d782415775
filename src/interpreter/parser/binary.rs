use crate::{
    ast::Ast,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// This is the lowest precedence level, so parenthesized groups re-enter
    /// the grammar here.
    ///
    /// Grammar: `expr := term (("+" | "-") term)*`
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> ParseResult<Ast> {
        self.parse_additive()
    }

    /// Parses addition and subtraction.
    ///
    /// Left-associative: `a - b - c` folds into `(a - b) - c`.
    fn parse_additive(&mut self) -> ParseResult<Ast> {
        let mut left = self.parse_multiplicative()?;
        while matches!(self.peek_kind()?, TokenKind::Add | TokenKind::Sub) {
            let token = self.advance()?;
            let right = self.parse_multiplicative()?;
            left = Ast::binary(token, left, right);
        }
        Ok(left)
    }

    /// Parses multiplication, division and remainder.
    ///
    /// Grammar: `term := unary (("*" | "/" | "%") unary)*`
    fn parse_multiplicative(&mut self) -> ParseResult<Ast> {
        let mut left = self.parse_unary()?;
        while matches!(self.peek_kind()?,
                       TokenKind::Mul | TokenKind::Div | TokenKind::Mod)
        {
            let token = self.advance()?;
            let right = self.parse_unary()?;
            left = Ast::binary(token, left, right);
        }
        Ok(left)
    }

    /// Parses exponentiation.
    ///
    /// Right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`. The exponent is
    /// itself a `power`, so it cannot carry a bare sign.
    ///
    /// Grammar: `power := atom ("^" power)?`
    pub(in crate::interpreter::parser) fn parse_power(&mut self) -> ParseResult<Ast> {
        let base = self.parse_atom()?;
        if self.peek_kind()? == TokenKind::Pow {
            let token = self.advance()?;
            let exponent = self.parse_power()?;
            return Ok(Ast::binary(token, base, exponent));
        }
        Ok(base)
    }
}
