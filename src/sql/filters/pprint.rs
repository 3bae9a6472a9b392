//! The SQL pretty-print filter.
//!
//! A single-pass reformatter over a classified token stream. It inserts
//! synthetic whitespace tokens so that clause keywords start new lines and
//! parenthesized subqueries are indented, while every non-whitespace token
//! passes through unchanged and runs of original whitespace collapse to a
//! single space.
//!
//! # How breaks are decided
//!
//! The filter walks the stream once, tracking two nesting counters:
//!
//! - `indent_depth` counts statement-nesting parentheses: a `(` whose
//!   preceding real token was a keyword (`IN (`, `JOIN (`) opens a subquery
//!   and indents its body.
//! - `call_depth` counts function-call parentheses: a `(` preceded by
//!   anything else (`substring_index(`) keeps its argument list inline.
//!
//! A break before a token is requested either immediately (`wrap_now`, for
//! clause keywords and for the `)` closing a subquery) or deferred by one
//! token (`wrap_pending`, so the break for an opening subquery lands after
//! the `(` rather than before it). CREATE/ALTER/DROP clauses suppress
//! formatting until a SELECT re-enables it, which keeps
//! `CREATE TABLE .. AS SELECT ..` readable.
//!
//! The transform is re-architected from a generator walk into an explicit
//! [`ReformatterState`] with a pure per-token [`step`](ReformatterState::step)
//! operation, plus the [`PrettyPrint`] iterator adapter that drives it
//! lazily. The step function is directly testable token by token.

use crate::sql::filters::{TokenFilter, TokenIter};
use crate::sql::tokens::{Token, TokenKind};
use once_cell::sync::Lazy;
use std::collections::{HashSet, VecDeque};

/// Keywords that begin a data-definition clause. Formatting is suppressed
/// from one of these until the next SELECT.
static DDL_KEYWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["CREATE", "ALTER", "DROP"].into_iter().collect());

/// Keywords that conventionally start a new line in formatted SQL.
static NEWLINE_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "SELECT", "FROM", "LEFT", "RIGHT", "INNER", "OUTER", "WHERE", "HAVING", "GROUP", "EXISTS",
        "UNION", "AND", "OR", "ON", "NOT", "LIMIT", "INSERT", "UPDATE",
    ]
    .into_iter()
    .collect()
});

/// Style knobs for the pretty-print filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReformatOptions {
    /// The string inserted once per nesting level after a generated line
    /// break.
    pub indent_unit: String,
}

impl Default for ReformatOptions {
    fn default() -> Self {
        ReformatOptions {
            indent_unit: "    ".to_string(),
        }
    }
}

/// Per-invocation reformatter state.
///
/// Owned by exactly one pass over one stream; never shared. Feed tokens
/// through [`step`](Self::step) in order, then call
/// [`finish`](Self::finish) once the input is exhausted.
#[derive(Debug, Clone)]
pub struct ReformatterState {
    indent_unit: String,
    /// Open statement-nesting (subquery) parentheses.
    indent_depth: usize,
    /// Open function-call parentheses.
    call_depth: usize,
    /// Kind of the last non-whitespace token seen, `None` at start.
    last_kind: Option<TokenKind>,
    /// A buffered collapsed space, flushed before the next real token
    /// unless a generated break supersedes it.
    pending_space: bool,
    /// Inside a CREATE/ALTER/DROP clause; formatting suppressed.
    in_ddl: bool,
    /// Deferred break: fires on the token after the one that set it.
    wrap_pending: bool,
    /// Immediate break: fires before emitting the current token.
    wrap_now: bool,
}

impl ReformatterState {
    pub fn new(options: ReformatOptions) -> Self {
        ReformatterState {
            indent_unit: options.indent_unit,
            indent_depth: 0,
            call_depth: 0,
            last_kind: None,
            pending_space: false,
            in_ddl: false,
            wrap_pending: false,
            wrap_now: false,
        }
    }

    /// Current subquery nesting depth.
    pub fn indent_depth(&self) -> usize {
        self.indent_depth
    }

    /// Current function-call nesting depth.
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// Process one incoming token, returning the tokens to emit for it.
    ///
    /// Whitespace input produces no output: it collapses into a single
    /// buffered space. A content token yields the token itself, possibly
    /// preceded by a generated line break or by the buffered space.
    pub fn step(&mut self, token: Token) -> Vec<Token> {
        if token.is_whitespace() {
            self.pending_space = true;
            return Vec::new();
        }

        let mut out = Vec::new();

        if token.kind == TokenKind::Keyword {
            let upper = token.text.to_uppercase();
            if !self.in_ddl && DDL_KEYWORDS.contains(upper.as_str()) {
                self.in_ddl = true;
            } else if upper == "SELECT" {
                // CREATE TABLE .. SELECT resumes formatting at the SELECT.
                self.in_ddl = false;
            }
        }

        if !self.in_ddl && self.last_kind.is_some() {
            if self.wrap_pending {
                self.wrap_now = true;
                self.wrap_pending = false;
            }

            if token.kind == TokenKind::Keyword
                && self.last_kind != Some(TokenKind::Keyword)
                && NEWLINE_KEYWORDS.contains(token.text.to_uppercase().as_str())
            {
                self.wrap_now = true;
            }

            if token.kind == TokenKind::Punctuation {
                match token.text.as_str() {
                    "(" => {
                        if self.last_kind == Some(TokenKind::Keyword) {
                            // Subquery opener: the break lands after the
                            // parenthesis, at the deeper indent.
                            self.indent_depth += 1;
                            self.wrap_pending = true;
                        } else {
                            self.call_depth += 1;
                        }
                    }
                    ")" => {
                        if self.call_depth > 0 {
                            // Function calls close inline.
                            self.call_depth -= 1;
                        } else {
                            // Unbalanced input clamps at zero; the break
                            // before the `)` still fires.
                            self.indent_depth = self.indent_depth.saturating_sub(1);
                            self.wrap_now = true;
                        }
                    }
                    _ => {}
                }
            }

            if self.wrap_now {
                out.push(Token::whitespace(format!(
                    "\n{}",
                    self.indent_unit.repeat(self.indent_depth)
                )));
                self.wrap_now = false;
                self.pending_space = false;
            }
        }

        if self.pending_space {
            out.push(Token::whitespace(" "));
            self.pending_space = false;
        }

        self.last_kind = Some(token.kind);
        out.push(token);
        out
    }

    /// The unconditional trailing newline emitted after the input ends.
    pub fn finish(&mut self) -> Token {
        Token::whitespace("\n")
    }
}

/// Lazy reformatting iterator.
///
/// Pulls one token at a time from the upstream iterator and yields zero or
/// more tokens per pull; after the upstream is exhausted it yields a single
/// trailing newline token. Holds no external resources, so it can be
/// dropped at any point.
pub struct PrettyPrint<I> {
    input: I,
    state: ReformatterState,
    queue: VecDeque<Token>,
    finished: bool,
}

impl<I> PrettyPrint<I>
where
    I: Iterator<Item = Token>,
{
    pub fn new(input: I, options: ReformatOptions) -> Self {
        PrettyPrint {
            input,
            state: ReformatterState::new(options),
            queue: VecDeque::new(),
            finished: false,
        }
    }
}

impl<I> Iterator for PrettyPrint<I>
where
    I: Iterator<Item = Token>,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return Some(token);
            }
            if self.finished {
                return None;
            }
            match self.input.next() {
                Some(token) => self.queue.extend(self.state.step(token)),
                None => {
                    self.finished = true;
                    self.queue.push_back(self.state.finish());
                }
            }
        }
    }
}

/// Reformat a token stream with the given options.
pub fn reformat<I>(tokens: I, options: ReformatOptions) -> PrettyPrint<I::IntoIter>
where
    I: IntoIterator<Item = Token>,
{
    PrettyPrint::new(tokens.into_iter(), options)
}

/// The pretty-print filter, registered as `pprint-sql`.
#[derive(Debug, Clone, Default)]
pub struct PrettyPrintFilter {
    options: ReformatOptions,
}

impl PrettyPrintFilter {
    pub fn new(options: ReformatOptions) -> Self {
        PrettyPrintFilter { options }
    }
}

impl TokenFilter for PrettyPrintFilter {
    fn name(&self) -> &str {
        "pprint-sql"
    }

    fn description(&self) -> &str {
        "Insert line breaks and indentation for readable SQL"
    }

    fn apply<'a>(&self, input: TokenIter<'a>) -> TokenIter<'a> {
        Box::new(PrettyPrint::new(input, self.options.clone()))
    }
}
