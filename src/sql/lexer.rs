//! Base tokenization for SQL text using the logos lexer library.
//!
//! This is the entry point where source strings become token streams.
//! It is deliberately shallow: words are classified against a fixed,
//! case-insensitive keyword list and everything else maps to a small set
//! of lexeme classes. There is no parsing and no validation; byte
//! sequences the lexer does not recognize are skipped rather than
//! reported, so downstream filters always receive a well-typed stream.
//!
//! Filters operate on the token stream produced by this module; the
//! pretty-print filter itself never tokenizes text.

use crate::sql::tokens::{Token, TokenKind};
use logos::Logos;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The fixed keyword list, uppercase. Words are matched case-insensitively.
///
/// The set is MySQL-flavored but intentionally incomplete: a word missing
/// here simply lexes as a `Name` and is never treated as a clause boundary.
static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "SELECT", "FROM", "WHERE", "GROUP", "BY", "ORDER", "HAVING", "LIMIT", "OFFSET", "INSERT",
        "INTO", "VALUES", "UPDATE", "SET", "DELETE", "CREATE", "ALTER", "DROP", "TABLE", "INDEX",
        "VIEW", "AS", "ON", "IN", "AND", "OR", "NOT", "INNER", "OUTER", "LEFT", "RIGHT", "CROSS",
        "JOIN", "UNION", "ALL", "DISTINCT", "EXISTS", "BETWEEN", "LIKE", "IS", "NULL", "CASE",
        "WHEN", "THEN", "ELSE", "END", "ASC", "DESC", "USING",
    ]
    .into_iter()
    .collect()
});

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"--[^\n]*", priority = 10)]
    Comment,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    #[regex(r"`[^`]*`")]
    QuotedName,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r"'[^']*'")]
    #[regex(r#""[^"]*""#)]
    Str,

    #[regex(r"%[A-Za-z]")]
    Placeholder,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[regex(r"[=<>!+\-*/%.]+")]
    Operator,
}

/// Tokenize SQL source text into classified tokens.
///
/// Every recognized lexeme is kept verbatim, whitespace included, so that
/// `render` over an unfiltered stream reproduces the recognized input.
/// Unrecognized bytes are dropped.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let Ok(raw) = result else { continue };
        let text = lexer.slice();
        let token = match raw {
            RawToken::Whitespace => Token::whitespace(text),
            RawToken::Comment => Token::new(TokenKind::Comment, text),
            RawToken::Word => {
                if KEYWORDS.contains(text.to_ascii_uppercase().as_str()) {
                    Token::keyword(text)
                } else {
                    Token::name(text)
                }
            }
            RawToken::QuotedName => Token::name(text),
            RawToken::Number => Token::new(TokenKind::Number, text),
            RawToken::Str => Token::new(TokenKind::Str, text),
            RawToken::Placeholder => Token::new(TokenKind::Placeholder, text),
            RawToken::OpenParen | RawToken::CloseParen | RawToken::Comma | RawToken::Semicolon => {
                Token::punctuation(text)
            }
            RawToken::Operator => Token::new(TokenKind::Operator, text),
        };
        tokens.push(token);
    }

    tokens
}
