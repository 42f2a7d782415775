/// The closed vocabulary of lexical symbols.
///
/// Every token produced by the lexer has exactly one of these kinds. Literal
/// kinds (`Integer`, `Float`, `NaN`, `Infinity`) carry their lexeme in
/// [`Token::text`]; every other kind has empty text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
    /// A run of decimal digits, such as `42`.
    Integer,
    /// Digits, a dot and more digits, such as `3.25`.
    Float,
    /// The `NaN` keyword (any ASCII case).
    NaN,
    /// The `Infinity` keyword (any ASCII case).
    Infinity,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input. Returned forever once the source is exhausted.
    Eof,
}

impl TokenKind {
    /// Returns `true` for the kinds a `Factor` node may hold.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::token::TokenKind;
    ///
    /// assert!(TokenKind::Float.is_literal());
    /// assert!(TokenKind::NaN.is_literal());
    /// assert!(!TokenKind::Add.is_literal());
    /// ```
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(self,
                 Self::Integer | Self::Float | Self::NaN | Self::Infinity)
    }

    /// Returns `true` for the arithmetic operator kinds.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self,
                 Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod | Self::Pow)
    }

    /// Returns `true` if a token of this kind can begin an expression.
    #[must_use]
    pub const fn starts_expression(self) -> bool {
        self.is_literal() || matches!(self, Self::Add | Self::Sub | Self::LParen)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::NaN => "NaN",
            Self::Infinity => "Infinity",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Eof => "end of input",
        };
        write!(f, "{name}")
    }
}

/// A lexical token: a [`TokenKind`] paired with its raw source text.
///
/// Tokens are immutable once created by the lexer. Two tokens compare equal
/// when their kinds and texts match; the source position is ignored.
#[derive(Debug, Clone, Eq)]
pub struct Token {
    kind:     TokenKind,
    text:     String,
    position: usize,
}

impl Token {
    /// Creates a token. `position` is the byte offset of the lexeme.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }

    /// Creates a token with empty text, as used for operators and punctuation.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::token::{Token, TokenKind};
    ///
    /// let plus = Token::symbol(TokenKind::Add, 3);
    /// assert_eq!(plus.token(), TokenKind::Add);
    /// assert_eq!(plus.value(), "");
    /// assert_eq!(plus, Token::symbol(TokenKind::Add, 0));
    /// ```
    #[must_use]
    pub fn symbol(kind: TokenKind, position: usize) -> Self {
        Self::new(kind, String::new(), position)
    }

    /// The kind of this token.
    #[must_use]
    pub const fn token(&self) -> TokenKind {
        self.kind
    }

    /// The verbatim lexeme; empty for operators, punctuation and end of input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.text
    }

    /// Byte offset of the lexeme in the source.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Integer | TokenKind::Float => write!(f, "{} '{}'", self.kind, self.text),
            TokenKind::Eof => write!(f, "{}", self.kind),
            _ => write!(f, "'{}'", self.kind),
        }
    }
}
