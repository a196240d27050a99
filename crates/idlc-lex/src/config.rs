//! Lexer configuration.
//!
//! Both switches default to off, which gives the stock tokenizer behavior.

/// Options for a lexing session.
///
/// # Examples
///
/// ```
/// use idlc_lex::{Lexer, LexerConfig};
///
/// // Default configuration: only `///` and `/**` are doc comments
/// let lexer = Lexer::new("message Foo {}");
///
/// // Capture every comment as documentation
/// let config = LexerConfig {
///     alternate_comment_mode: true,
///     ..Default::default()
/// };
/// let lexer = Lexer::with_config("// Foo\nmessage Foo {}", config);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerConfig {
    /// Treat every comment as a documentation comment.
    ///
    /// Plain `//` and `/*` comments are captured in addition to `///` and
    /// `/**`. A `//` comment that starts its own line also absorbs the `//`
    /// lines directly below it, so a run of line comments becomes one
    /// captured comment ending on the last line of the run.
    ///
    /// Default: false
    pub alternate_comment_mode: bool,

    /// Count newlines inside quoted literals.
    ///
    /// When off, a literal spanning several lines leaves the line counter
    /// where the opening quote was, so every line reported after it is
    /// short by the number of newlines the literal contained.
    ///
    /// Default: false
    pub track_string_newlines: bool,
}

impl LexerConfig {
    /// Configuration with alternate comment mode switched on.
    pub fn alternate_comments() -> Self {
        Self {
            alternate_comment_mode: true,
            ..Self::default()
        }
    }
}
