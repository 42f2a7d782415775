use crate::{
    ast::Ast,
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses an optionally signed power.
    ///
    /// The sign binds looser than `^`, so `-2^2` is `-(2^2)`, and tighter than
    /// `*`, so `-2 * 3` is `(-2) * 3`. At most one sign is accepted.
    ///
    /// Grammar: `unary := ("+" | "-")? power`
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> ParseResult<Ast> {
        if matches!(self.peek_kind()?, TokenKind::Add | TokenKind::Sub) {
            let token = self.advance()?;
            let operand = self.parse_power()?;
            return Ok(Ast::unary(token, operand));
        }
        self.parse_power()
    }

    /// Parses a literal or a parenthesized expression.
    ///
    /// A group yields its inner tree unchanged; no node is added for the
    /// parentheses.
    ///
    /// Grammar: `atom := INTEGER | FLOAT | "NaN" | "Infinity" | "(" expr ")"`
    pub(in crate::interpreter::parser) fn parse_atom(&mut self) -> ParseResult<Ast> {
        let token = self.advance()?;
        match token.token() {
            kind if kind.is_literal() => Ok(Ast::Factor(token)),
            TokenKind::LParen => {
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(inner)
            },
            _ => Err(ParseError::unexpected("a number or '('", token).into()),
        }
    }
}
