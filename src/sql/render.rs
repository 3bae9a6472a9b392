//! Renderer for token streams.
//!
//! The renderer is the output boundary of the pipeline: it concatenates
//! token texts in order and nothing else. All layout decisions live in the
//! filters; by the time a stream reaches the renderer, line breaks and
//! indentation are ordinary whitespace tokens.

use crate::sql::tokens::Token;

/// Concatenate the texts of a token stream into a string.
pub fn render<I>(tokens: I) -> String
where
    I: IntoIterator<Item = Token>,
{
    let mut result = String::new();
    for token in tokens {
        result.push_str(&token.text);
    }
    result
}
