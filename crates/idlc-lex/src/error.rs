//! Error types for idlc-lex
//!
//! Every lexing error is fatal for the session that raised it. Each variant
//! carries the 1-based line the lexer was on when it gave up.
//!
//! # Error Categories
//!
//! - `IllegalComment` - block comment still open at end of input
//! - `IllegalString` - quoted literal without a matching closing quote
//! - `UnexpectedToken` - a required token was not where `skip` expected it

use thiserror::Error;

/// Error type for all lexer operations.
///
/// # Examples
///
/// ```
/// use idlc_lex::{LexError, Lexer};
///
/// let mut lexer = Lexer::new("/* never closed");
/// match lexer.next_token() {
///     Err(LexError::IllegalComment { line }) => assert_eq!(line, 1),
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Block comment not closed before end of input.
    #[error("illegal comment (line {line})")]
    IllegalComment {
        /// Line the lexer reached while looking for `*/`.
        line: u32,
    },

    /// Quoted literal not closed before end of input.
    #[error("illegal string (line {line})")]
    IllegalString {
        /// Line of the opening quote.
        line: u32,
    },

    /// `skip` found a different token than the one it was told to expect.
    #[error(
        "illegal token '{}', '{expected}' expected (line {line})",
        .actual.as_deref().unwrap_or("<eof>")
    )]
    UnexpectedToken {
        /// Token actually present, `None` at end of input.
        actual: Option<String>,
        /// Token the caller required.
        expected: String,
        /// Current line.
        line: u32,
    },
}

impl LexError {
    /// Returns the line number the error was raised on.
    pub fn line(&self) -> u32 {
        match self {
            LexError::IllegalComment { line }
            | LexError::IllegalString { line }
            | LexError::UnexpectedToken { line, .. } => *line,
        }
    }
}

/// Result type alias for lexer operations
pub type Result<T> = std::result::Result<T, LexError>;
