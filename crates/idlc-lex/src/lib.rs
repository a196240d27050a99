//! idlc-lex - Lexical Analyzer for the idlc Schema Definition Language
//!
//! This crate turns schema source text (a Protocol Buffers style IDL) into a
//! stream of string tokens for the parser, and keeps track of documentation
//! comments so the parser can attach them to the declarations they describe.
//!
//! # Example Usage
//!
//! ```
//! use idlc_lex::Lexer;
//!
//! let source = "/// A greeting.\nmessage Hello {\n  string name = 1; /// Who to greet.\n}";
//! let mut lexer = Lexer::new(source);
//!
//! assert!(Lexer::skip(&mut lexer, "message", false).unwrap());
//! assert_eq!(lexer.cmnt(None).unwrap().as_deref(), Some("A greeting."));
//! assert_eq!(lexer.next_token().unwrap().as_deref(), Some("Hello"));
//! assert!(Lexer::skip(&mut lexer, "{", false).unwrap());
//!
//! for expected in ["string", "name", "=", "1", ";"] {
//!     assert_eq!(lexer.next_token().unwrap().as_deref(), Some(expected));
//! }
//! let line = lexer.line();
//! assert_eq!(lexer.cmnt(Some(line)).unwrap().as_deref(), Some("Who to greet."));
//! ```
//!
//! # Module Structure
//!
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`unescape`](mod@unescape) - Escape sequence decoding
//! - [`config`] - Session options
//! - [`error`] - Error types
//!
//! # Tokens
//!
//! A token is either one delimiter character or the longest run of
//! characters containing no delimiter. The delimiters are whitespace and
//! `{ } = ; : [ ] , ' " ( ) < >`.
//!
//! Quoted literals come out as three tokens: the opening quote, the body with
//! escapes decoded, and the closing quote. Adjacent literals therefore show
//! up as `"`, body, `"`, `"`, body, `"`, which lets the parser join them.
//!
//! # Comments
//!
//! `///` and `/** */` comments are documentation comments. The most recent
//! one is held until the parser asks for it with [`Lexer::cmnt`]:
//!
//! - `cmnt(None)` returns it when it ended on the line above the current
//!   line (a leading comment).
//! - `cmnt(Some(line))` returns it when it is a `///` comment that ended on
//!   `line` (a trailing comment).
//!
//! All other comments are skipped.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
#[cfg(test)]
mod edge_cases;
pub mod error;
pub mod lexer;
pub mod unescape;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{LexError, Result};
pub use lexer::{CommentKind, DocComment, Lexer};
pub use unescape::unescape;
