//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the scanning loop and the
//! delimiter classification.

use std::borrow::Cow;
use std::collections::VecDeque;

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::lexer::comment::DocComment;

/// Characters that end a free-form token and are emitted on their own,
/// in addition to whitespace.
const DELIMITERS: &[char] = &[
    '{', '}', '=', ';', ':', '[', ']', ',', '\'', '"', '(', ')', '<', '>',
];

/// Returns true if `c` always stands alone as a one-character token.
#[inline]
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || DELIMITERS.contains(&c)
}

/// Lexer for schema definition sources.
///
/// Tokens are plain strings: either a single delimiter character or a
/// maximal run of non-delimiter characters. A quoted literal comes out as
/// three tokens (opening quote, decoded body, closing quote). Documentation
/// comments never appear in the token stream; they are kept in a one-slot
/// buffer and handed out through [`Lexer::cmnt`].
///
/// # Example
///
/// ```
/// use idlc_lex::Lexer;
///
/// let mut lexer = Lexer::new("message X { a = 1; }");
/// let tokens: Vec<_> = lexer.by_ref().collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens, ["message", "X", "{", "a", "=", "1", ";", "}"]);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Session options.
    pub(crate) config: LexerConfig,

    /// Pushed-back tokens, served oldest first before any new scanning.
    pub(crate) stack: VecDeque<Cow<'a, str>>,

    /// Quote character whose literal body the next request must read.
    pub(crate) string_delim: Option<char>,

    /// Captured documentation comment not yet handed out.
    pub(crate) comment: Option<DocComment>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Creates a new lexer for the given source.
    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            stack: VecDeque::with_capacity(4),
            string_delim: None,
            comment: None,
        }
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// Pushed-back tokens are returned first. After an opening quote the
    /// next call yields the decoded literal body instead of scanning.
    ///
    /// # Errors
    ///
    /// [`LexError::IllegalComment`](crate::LexError::IllegalComment) for a
    /// block comment left open and
    /// [`LexError::IllegalString`](crate::LexError::IllegalString) for a
    /// literal without its closing quote. Either one ends the session.
    pub fn next_token(&mut self) -> Result<Option<Cow<'a, str>>> {
        if let Some(token) = self.stack.pop_front() {
            return Ok(Some(token));
        }

        if let Some(delim) = self.string_delim {
            return self.read_string(delim).map(Some);
        }

        if !self.skip_whitespace_and_comments()? {
            return Ok(None);
        }

        let start = self.cursor.position();
        let first = self.cursor.current_char();
        self.cursor.advance();

        // A slash that did not open a comment stands alone
        if first != '/' && !is_delimiter(first) {
            while !self.cursor.is_at_end() && !is_delimiter(self.cursor.current_char()) {
                self.cursor.advance();
            }
        }

        let token = self.cursor.slice_from(start);
        if first == '"' || first == '\'' {
            self.string_delim = Some(first);
        }

        log::trace!("token {:?} on line {}", token, self.cursor.line());
        Ok(Some(Cow::Borrowed(token)))
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the configuration this session runs with.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Ends the session after a fatal error.
    ///
    /// Everything buffered is dropped and the cursor moves to the end, so
    /// every later request reports end of input.
    pub(crate) fn terminate(&mut self) {
        self.stack.clear();
        self.string_delim = None;
        self.comment = None;
        self.cursor.exhaust();
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Cow<'a, str>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
