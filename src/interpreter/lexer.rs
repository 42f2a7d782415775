use logos::Logos;

use crate::{
    error::LexError,
    interpreter::token::{Token, TokenKind},
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Raw lexemes recognized by the generated scanner.
///
/// This is the `logos` view of the source; [`Lexer`] turns it into
/// [`Token`]s with text and position attached.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    /// Integer or float literal. The callback extends the match over a
    /// fractional part and reports which kind it produced.
    #[regex(r"[0-9]+", lex_number)]
    Number(TokenKind),
    /// `NaN`, in any ASCII case.
    #[token("nan", ignore(ascii_case))]
    NaN,
    /// `Infinity`, in any ASCII case.
    #[token("infinity", ignore(ascii_case))]
    Infinity,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl RawToken {
    const fn kind(self) -> TokenKind {
        match self {
            Self::Number(kind) => kind,
            Self::NaN => TokenKind::NaN,
            Self::Infinity => TokenKind::Infinity,
            Self::Plus => TokenKind::Add,
            Self::Minus => TokenKind::Sub,
            Self::Star => TokenKind::Mul,
            Self::Slash => TokenKind::Div,
            Self::Percent => TokenKind::Mod,
            Self::Caret => TokenKind::Pow,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
        }
    }
}

/// Extends a digit run over `.digits` when present.
///
/// A dot that is not followed by a digit is left alone, so `1.` lexes as the
/// integer `1` followed by an unrecognized `.`.
fn lex_number(lex: &mut logos::Lexer<RawToken>) -> TokenKind {
    let rest = lex.remainder().as_bytes();
    if rest.first() == Some(&b'.') {
        let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            lex.bump(1 + digits);
            return TokenKind::Float;
        }
    }
    TokenKind::Integer
}

/// Produces tokens on demand from a source string.
///
/// Whitespace is skipped. Once the source is exhausted every further pull
/// returns an [`TokenKind::Eof`] token positioned at the end of the source.
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let mut lexer = Lexer::new("1.5 * nan");
/// assert_eq!(lexer.next_token().unwrap().token(), TokenKind::Float);
/// assert_eq!(lexer.next_token().unwrap().token(), TokenKind::Mul);
/// assert_eq!(lexer.next_token().unwrap().value(), "nan");
/// assert_eq!(lexer.next_token().unwrap().token(), TokenKind::Eof);
/// assert_eq!(lexer.next_token().unwrap().token(), TokenKind::Eof);
/// ```
pub struct Lexer<'a> {
    source:      &'a str,
    inner:       logos::Lexer<'a, RawToken>,
    exhausted:   bool,
    emitted_eof: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { source,
               inner: RawToken::lexer(source),
               exhausted: false,
               emitted_eof: false }
    }

    /// Returns the next token.
    ///
    /// # Errors
    /// Returns [`LexError::UnrecognizedCharacter`] when the cursor sits on a
    /// character that does not begin any token.
    pub fn next_token(&mut self) -> LexResult<Token> {
        if self.exhausted {
            return Ok(self.eof());
        }

        match self.inner.next() {
            Some(Ok(raw)) => {
                let kind = raw.kind();
                let text = if kind.is_literal() { self.inner.slice() } else { "" };
                let token = Token::new(kind, text, self.inner.span().start);
                tracing::trace!(kind = %kind, text, position = token.position(), "token");
                Ok(token)
            },
            Some(Err(())) => {
                let position = self.inner.span().start;
                let character = self.source[position..].chars()
                                                       .next()
                                                       .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(LexError::UnrecognizedCharacter { character, position })
            },
            None => {
                self.exhausted = true;
                Ok(self.eof())
            },
        }
    }

    fn eof(&self) -> Token {
        Token::symbol(TokenKind::Eof, self.source.len())
    }
}

/// Iterates over every token up to and including the first end marker.
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let kinds = Lexer::new("(2)").map(|t| t.unwrap().token())
///                              .collect::<Vec<_>>();
/// assert_eq!(kinds,
///            [TokenKind::LParen, TokenKind::Integer, TokenKind::RParen, TokenKind::Eof]);
/// ```
impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted_eof {
            return None;
        }
        let token = self.next_token();
        if matches!(&token, Ok(t) if t.token() == TokenKind::Eof) {
            self.emitted_eof = true;
        }
        Some(token)
    }
}
