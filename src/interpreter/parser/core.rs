use crate::{
    ast::Ast,
    error::{Error, ParseError},
    interpreter::{
        lexer::Lexer,
        token::{Token, TokenKind},
    },
};

/// Result type used by the parser.
///
/// Parsing pulls tokens from the lexer, so the error side carries lexing
/// failures as well as [`ParseError`]s.
pub type ParseResult<T> = Result<T, Error>;

/// Recursive-descent parser producing one [`Ast`] per top-level expression.
///
/// The parser owns its [`Lexer`] and pulls tokens only when a rule needs to
/// look at the next one. Grammar, lowest precedence first:
///
/// ```text
/// expr  := term (("+" | "-") term)*
/// term  := unary (("*" | "/" | "%") unary)*
/// unary := ("+" | "-")? power
/// power := atom ("^" power)?
/// atom  := INTEGER | FLOAT | "NaN" | "Infinity" | "(" expr ")"
/// ```
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::Lexer, parser::Parser};
///
/// let mut parser = Parser::new(Lexer::new("1 + 2 * 3"));
/// let ast = parser.next().unwrap().unwrap();
/// assert_eq!(ast.to_string(), "(1 + (2 * 3))");
/// assert!(parser.next().unwrap().is_none());
/// ```
pub struct Parser<'a> {
    lexer:     Lexer<'a>,
    lookahead: Option<Token>,
}

impl<'a> Parser<'a> {
    /// Creates a parser reading from `lexer`.
    #[must_use]
    pub const fn new(lexer: Lexer<'a>) -> Self {
        Self { lexer,
               lookahead: None }
    }

    /// Parses the next top-level expression.
    ///
    /// Returns `Ok(None)` once the token stream is exhausted, and keeps doing
    /// so on every later call. A top-level expression must be followed by the
    /// end of input or by a token that starts another expression, so trailing
    /// tokens such as a stray `)` are rejected here rather than on the next
    /// call.
    ///
    /// # Errors
    /// Returns [`Error::Lex`] for unrecognized characters and [`Error::Parse`]
    /// when the tokens do not match the grammar.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> ParseResult<Option<Ast>> {
        if self.peek_kind()? == TokenKind::Eof {
            return Ok(None);
        }

        let ast = self.parse_expression()?;

        let follow = self.peek()?;
        if follow.token() != TokenKind::Eof && !follow.token().starts_expression() {
            return Err(ParseError::unexpected("an operator or end of input", follow.clone()).into());
        }

        tracing::debug!(%ast, "parsed expression");
        Ok(Some(ast))
    }

    /// Checks that no tokens remain after the expressions parsed so far.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] naming the first leftover
    /// token, or [`Error::Lex`] if the leftover text does not tokenize.
    pub fn expect_end(&mut self) -> ParseResult<()> {
        let token = self.peek()?;
        if token.token() == TokenKind::Eof {
            Ok(())
        } else {
            Err(ParseError::unexpected("end of input", token.clone()).into())
        }
    }

    /// Returns the lookahead token, pulling it from the lexer if needed.
    pub(in crate::interpreter::parser) fn peek(&mut self) -> ParseResult<&Token> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        Ok(self.lookahead.insert(token))
    }

    /// Kind of the lookahead token.
    pub(in crate::interpreter::parser) fn peek_kind(&mut self) -> ParseResult<TokenKind> {
        Ok(self.peek()?.token())
    }

    /// Consumes and returns the lookahead token.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Token> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => Ok(self.lexer.next_token()?),
        }
    }

    /// Consumes a token of `kind`, failing with `expected` otherwise.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 kind: TokenKind,
                                                 expected: &'static str)
                                                 -> ParseResult<Token> {
        let token = self.advance()?;
        if token.token() == kind {
            Ok(token)
        } else {
            Err(ParseError::unexpected(expected, token).into())
        }
    }
}
