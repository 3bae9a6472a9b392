//! Core token types shared across the lexer, filters, and renderer.
//!
//! A token is a `(kind, text)` pair: the classification assigned by the
//! lexer and the literal lexeme. Filters pass tokens through by value and
//! may synthesize new whitespace tokens, but they never alter the text of
//! a non-whitespace token.

use serde::{Deserialize, Serialize};

/// Classification of a token.
///
/// Filters only ever inspect `Keyword`, `Punctuation`, and `Whitespace`;
/// every other kind is opaque pass-through data. `Whitespace` is the
/// generic text/whitespace class: it covers spaces, tabs, and newlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A reserved word from the fixed keyword set (`SELECT`, `FROM`, ...).
    Keyword,
    /// Structural punctuation: parentheses, commas, semicolons.
    Punctuation,
    /// Spaces, tabs, and newlines.
    Whitespace,
    /// An identifier: table, column, or function name.
    Name,
    /// A numeric literal.
    Number,
    /// A quoted string literal.
    Str,
    /// An operator lexeme such as `=`, `<>`, or `*`.
    Operator,
    /// A line comment, kept verbatim.
    Comment,
    /// A parameter placeholder such as `%s`.
    Placeholder,
}

/// A classified lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn keyword(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Keyword, text)
    }

    pub fn punctuation(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Punctuation, text)
    }

    pub fn whitespace(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Whitespace, text)
    }

    pub fn name(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Name, text)
    }

    /// Whether this token belongs to the whitespace/text class.
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}
