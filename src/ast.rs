use crate::interpreter::token::Token;

/// An abstract syntax tree (AST) node for an arithmetic expression.
///
/// `Ast` is a closed sum over the three node shapes the parser builds. Every
/// node owns its token, and composite nodes own their children outright, so a
/// tree is acyclic and is dropped as a whole once evaluated.
///
/// The parser guarantees that a [`Ast::Factor`] holds a literal token and that
/// [`Ast::UniOp`] and [`Ast::BiOp`] hold operator tokens. Trees built by hand
/// may break that rule; the interpreter then reports an
/// [`EvalError`](crate::error::EvalError).
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    /// A numeric literal: integer, float, `NaN` or `Infinity`.
    Factor(Token),
    /// A unary `+` or `-` applied to one subexpression.
    UniOp {
        /// The operator token.
        token: Token,
        /// The operand.
        child: Box<Self>,
    },
    /// A binary operator applied to two subexpressions.
    BiOp {
        /// The operator token.
        token: Token,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Ast {
    /// Builds a unary node.
    #[must_use]
    pub fn unary(token: Token, child: Self) -> Self {
        Self::UniOp { token,
                      child: Box::new(child) }
    }

    /// Builds a binary node.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::Ast,
    ///     interpreter::token::{Token, TokenKind},
    /// };
    ///
    /// let one = Ast::Factor(Token::new(TokenKind::Integer, "1", 0));
    /// let two = Ast::Factor(Token::new(TokenKind::Integer, "2", 4));
    /// let sum = Ast::binary(Token::symbol(TokenKind::Add, 2), one.clone(), two.clone());
    ///
    /// assert_eq!(sum.token().token(), TokenKind::Add);
    /// assert_eq!(sum.left_child(), Some(&one));
    /// assert_eq!(sum.right_child(), Some(&two));
    /// assert_eq!(sum.child(), None);
    /// ```
    #[must_use]
    pub fn binary(token: Token, left: Self, right: Self) -> Self {
        Self::BiOp { token,
                     left: Box::new(left),
                     right: Box::new(right) }
    }

    /// The token owned by this node.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::Factor(token) | Self::UniOp { token, .. } | Self::BiOp { token, .. } => token,
        }
    }

    /// The operand of a unary node.
    #[must_use]
    pub fn child(&self) -> Option<&Self> {
        match self {
            Self::UniOp { child, .. } => Some(child),
            _ => None,
        }
    }

    /// The left operand of a binary node.
    #[must_use]
    pub fn left_child(&self) -> Option<&Self> {
        match self {
            Self::BiOp { left, .. } => Some(left),
            _ => None,
        }
    }

    /// The right operand of a binary node.
    #[must_use]
    pub fn right_child(&self) -> Option<&Self> {
        match self {
            Self::BiOp { right, .. } => Some(right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Ast {
    /// Renders the tree fully parenthesized, e.g. `(1 + (2 * 3))`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Factor(token) => write!(f, "{}", token.value()),
            Self::UniOp { token, child } => write!(f, "({}{child})", token.token()),
            Self::BiOp { token, left, right } => {
                write!(f, "({left} {} {right})", token.token())
            },
        }
    }
}
