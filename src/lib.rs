//! # sqlpprint
//!
//! Pretty format SQL queries for easier reading.
//!
//! The crate is built around a stream of classified tokens. A small lexer
//! turns SQL text into `(kind, text)` tokens, named filters rewrite the
//! stream lazily, and a renderer concatenates the result back into text.
//! The interesting filter is [`sql::filters::PrettyPrintFilter`], which
//! inserts newline/indentation tokens so that clauses start on their own
//! lines and subqueries are indented, while every non-whitespace token
//! passes through unchanged.
//!
//! ```
//! use sqlpprint::sql::filters::{KeywordCaseFilter, PrettyPrintFilter};
//! use sqlpprint::sql::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::new()
//!     .add_filter(KeywordCaseFilter::upper())
//!     .add_filter(PrettyPrintFilter::default());
//!
//! let formatted = pipeline.format("select id from users where id = 1");
//! assert_eq!(formatted, "SELECT id\nFROM users\nWHERE id = 1\n");
//! ```

pub mod sql;
