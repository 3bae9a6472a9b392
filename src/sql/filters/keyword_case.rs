//! Keyword case normalization filter.
//!
//! Rewrites the text of keyword tokens to a uniform case and leaves every
//! other token untouched. Formatted output reads best with uppercased
//! keywords, so this filter conventionally runs ahead of `pprint-sql`.

use crate::sql::filters::{TokenFilter, TokenIter};
use crate::sql::tokens::TokenKind;

/// Target case for keyword lexemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordCase {
    Upper,
    Lower,
}

/// The keyword-casing filter, registered as `keyword-case`.
#[derive(Debug, Clone)]
pub struct KeywordCaseFilter {
    case: KeywordCase,
}

impl KeywordCaseFilter {
    pub fn new(case: KeywordCase) -> Self {
        KeywordCaseFilter { case }
    }

    pub fn upper() -> Self {
        Self::new(KeywordCase::Upper)
    }

    pub fn lower() -> Self {
        Self::new(KeywordCase::Lower)
    }
}

impl Default for KeywordCaseFilter {
    fn default() -> Self {
        Self::upper()
    }
}

impl TokenFilter for KeywordCaseFilter {
    fn name(&self) -> &str {
        "keyword-case"
    }

    fn description(&self) -> &str {
        "Rewrite keyword lexemes to a uniform case"
    }

    fn apply<'a>(&self, input: TokenIter<'a>) -> TokenIter<'a> {
        let case = self.case;
        Box::new(input.map(move |mut token| {
            if token.kind == TokenKind::Keyword {
                token.text = match case {
                    KeywordCase::Upper => token.text.to_uppercase(),
                    KeywordCase::Lower => token.text.to_lowercase(),
                };
            }
            token
        }))
    }
}
