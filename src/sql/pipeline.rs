//! Ordered filter chaining.
//!
//! A `Pipeline` holds a sequence of token filters and applies them in the
//! order they were added. Each filter lazily wraps the previous one, so a
//! pipeline over an iterator never materializes the stream; the text
//! convenience path (`format`) tokenizes, applies, and renders in one call.
//!
//! # Examples
//!
//! ```ignore
//! let pipeline = Pipeline::new()
//!     .add_filter(KeywordCaseFilter::upper())
//!     .add_filter(PrettyPrintFilter::default());
//!
//! let formatted = pipeline.format("select * from users");
//! ```

use crate::sql::filters::{TokenFilter, TokenIter};
use crate::sql::lexer;
use crate::sql::render::render;

/// A sequence of token filters applied in order.
pub struct Pipeline {
    filters: Vec<Box<dyn TokenFilter>>,
}

impl Pipeline {
    /// Create a new empty pipeline. An empty pipeline passes streams
    /// through unchanged.
    pub fn new() -> Self {
        Pipeline {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the end of the pipeline (builder pattern).
    pub fn add_filter<F: TokenFilter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Add an already-boxed filter, e.g. one taken from a registry.
    pub fn add_boxed_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Number of filters in the pipeline.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Wrap a token stream with every filter in order.
    pub fn apply<'a>(&'a self, input: TokenIter<'a>) -> TokenIter<'a> {
        self.filters
            .iter()
            .fold(input, |stream, filter| filter.apply(stream))
    }

    /// Tokenize source text, apply the pipeline, and render the result.
    pub fn format(&self, source: &str) -> String {
        let tokens = lexer::tokenize(source);
        render(self.apply(Box::new(tokens.into_iter())))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
