//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, scanning loop and delimiter classification
//! - `comment` - Comment skipping and documentation comment capture
//! - `string` - Quoted literal reassembly
//! - `lookahead` - Peek, pushback, `skip` and comment attribution

mod comment;
mod core;
mod lookahead;
mod string;

pub use self::comment::{CommentKind, DocComment};
pub use self::core::Lexer;
