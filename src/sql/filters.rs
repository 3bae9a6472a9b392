//! Token filters and the filter registry.
//!
//! A filter is a named, stateless transformation over a lazy token stream:
//! it wraps an upstream iterator and yields a rewritten stream without ever
//! materializing it. Filters are chained in order by the
//! [`Pipeline`](crate::sql::pipeline::Pipeline); the registry exposes the
//! shipped filters under stable names for tooling.
//!
//! Each `apply` call builds fresh per-invocation state, so a single filter
//! value can serve any number of concurrent streams.

pub mod keyword_case;
pub mod pprint;

pub use keyword_case::{KeywordCase, KeywordCaseFilter};
pub use pprint::{reformat, PrettyPrint, PrettyPrintFilter, ReformatOptions, ReformatterState};

use crate::sql::tokens::Token;
use std::collections::HashMap;

/// A boxed lazy token stream.
pub type TokenIter<'a> = Box<dyn Iterator<Item = Token> + 'a>;

/// A named transformation over a token stream.
pub trait TokenFilter {
    /// Stable registry name, e.g. `"pprint-sql"`.
    fn name(&self) -> &str;

    /// One-line human-readable summary for tooling output.
    fn description(&self) -> &str;

    /// Wrap an upstream stream, returning the filtered stream.
    ///
    /// The returned iterator pulls from `input` on demand and may yield
    /// zero or more tokens per upstream token. It must be safe to abandon
    /// at any point.
    fn apply<'a>(&self, input: TokenIter<'a>) -> TokenIter<'a>;
}

/// Registry of token filters, keyed by name.
pub struct FilterRegistry {
    filters: HashMap<String, Box<dyn TokenFilter>>,
}

impl FilterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        FilterRegistry {
            filters: HashMap::new(),
        }
    }

    /// Register a filter under its own name.
    pub fn register(&mut self, filter: Box<dyn TokenFilter>) {
        self.filters.insert(filter.name().to_string(), filter);
    }

    /// Get a filter by name.
    pub fn get(&self, name: &str) -> Option<&dyn TokenFilter> {
        self.filters.get(name).map(|filter| filter.as_ref())
    }

    /// Check if a filter exists.
    pub fn has(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// List all filters (sorted by name).
    pub fn list_all(&self) -> Vec<&dyn TokenFilter> {
        let mut filters: Vec<_> = self.filters.values().map(|filter| filter.as_ref()).collect();
        filters.sort_by_key(|filter| filter.name().to_string());
        filters
    }

    /// Create a registry with the shipped filters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PrettyPrintFilter::default()));
        registry.register(Box::new(KeywordCaseFilter::upper()));
        registry
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = FilterRegistry::new();
        assert!(registry.list_all().is_empty());
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = FilterRegistry::new();
        registry.register(Box::new(KeywordCaseFilter::lower()));

        assert!(registry.has("keyword-case"));
        let filter = registry.get("keyword-case").unwrap();
        assert_eq!(filter.name(), "keyword-case");
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = FilterRegistry::new();
        assert!(registry.get("nonexistent").is_none());
        assert!(!registry.has("nonexistent"));
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FilterRegistry::with_defaults();
        assert!(registry.has("pprint-sql"));
        assert!(registry.has("keyword-case"));
    }

    #[test]
    fn test_registry_list_all_sorted() {
        let registry = FilterRegistry::with_defaults();
        let names: Vec<_> = registry.list_all().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["keyword-case", "pprint-sql"]);
    }

    #[test]
    fn test_registered_filter_applies() {
        let registry = FilterRegistry::with_defaults();
        let filter = registry.get("pprint-sql").unwrap();

        let input: TokenIter<'_> = Box::new(vec![Token::keyword("SELECT")].into_iter());
        let output: Vec<_> = filter.apply(input).collect();
        assert_eq!(
            output,
            vec![Token::keyword("SELECT"), Token::whitespace("\n")]
        );
    }
}
