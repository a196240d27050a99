//! Comment handling.
//!
//! Comments never produce tokens. Documentation comments (`///` and `/**`,
//! or every comment in alternate comment mode) are normalized and stored in
//! the lexer's single comment slot; everything else is skipped.

use std::fmt;

use crate::error::{LexError, Result};
use crate::Lexer;

/// Which comment form a captured documentation comment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `///` line comment (`//` in alternate comment mode).
    Line,
    /// `/** */` block comment (`/* */` in alternate comment mode).
    Block,
}

impl CommentKind {
    /// The marker character that introduced the comment: `/` or `*`.
    pub fn marker(self) -> char {
        match self {
            CommentKind::Line => '/',
            CommentKind::Block => '*',
        }
    }
}

impl fmt::Display for CommentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentKind::Line => f.write_str("line"),
            CommentKind::Block => f.write_str("block"),
        }
    }
}

/// A captured documentation comment waiting to be attributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocComment {
    /// Form of the comment.
    pub kind: CommentKind,
    /// Normalized text.
    pub text: String,
    /// Line the comment ends on.
    pub line: u32,
}

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// Returns false once the end of input is reached, true when the cursor
    /// rests on the first character of a token.
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> Result<bool> {
        // U+FEFF is not whitespace, so a byte order mark is dropped by hand
        if self.cursor.position() == 0 && self.cursor.remaining().starts_with('\u{FEFF}') {
            self.cursor.advance();
        }

        loop {
            if self.cursor.is_at_end() {
                return Ok(false);
            }

            let c = self.cursor.current_char();
            if c.is_whitespace() {
                self.cursor.advance();
                continue;
            }

            if c == '/' {
                match self.cursor.peek_char(1) {
                    '/' => {
                        self.line_comment();
                        continue;
                    },
                    '*' => {
                        self.block_comment()?;
                        continue;
                    },
                    _ => {},
                }
            }

            return Ok(true);
        }
    }

    /// Consumes a line comment, including its line terminator.
    fn line_comment(&mut self) {
        let alternate = self.config.alternate_comment_mode;
        let own_line = self.cursor.at_line_start();

        self.cursor.advance_n(2);
        let is_doc = alternate || self.cursor.current_char() == '/';
        if is_doc && !alternate {
            self.cursor.advance();
        }

        let mut lines = vec![self.rest_of_line()];
        let mut end_line = self.cursor.line();
        self.cursor.consume_line_end();

        if alternate && own_line {
            while let Some(body) = self.continued_line_comment() {
                lines.push(body);
                end_line = self.cursor.line();
                self.cursor.consume_line_end();
            }
        }

        if is_doc {
            self.set_comment(CommentKind::Line, &lines.join("\n"), end_line);
        }
    }

    /// Consumes the `//` comment on the line the cursor starts, if there is one.
    ///
    /// Returns the comment body and leaves the cursor on its line terminator.
    /// Otherwise the cursor is left where it was.
    fn continued_line_comment(&mut self) -> Option<&'a str> {
        if self.cursor.is_at_end() {
            return None;
        }

        let snapshot = self.cursor.snapshot();
        while matches!(self.cursor.current_char(), ' ' | '\t') {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '/' && self.cursor.peek_char(1) == '/' {
            self.cursor.advance_n(2);
            Some(self.rest_of_line())
        } else {
            self.cursor.restore(snapshot);
            None
        }
    }

    /// Scans up to, not over, the next `\n` and returns what was crossed.
    fn rest_of_line(&mut self) -> &'a str {
        let start = self.cursor.position();
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
        self.cursor.slice_from(start)
    }

    /// Consumes a block comment through its closing `*/`.
    fn block_comment(&mut self) -> Result<()> {
        let alternate = self.config.alternate_comment_mode;

        self.cursor.advance_n(2);
        // `/**/` is an empty plain comment, its second star belongs to the close
        let is_doc = alternate
            || (self.cursor.current_char() == '*' && self.cursor.peek_char(1) != '/');
        if is_doc && !alternate {
            self.cursor.advance();
        }

        let start = self.cursor.position();
        loop {
            if self.cursor.is_at_end() {
                let line = self.cursor.line();
                log::debug!("block comment still open at end of input (line {})", line);
                self.terminate();
                return Err(LexError::IllegalComment { line });
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                break;
            }
            self.cursor.advance();
        }

        let body = self.cursor.slice_from(start);
        self.cursor.advance_n(2);

        if is_doc {
            self.set_comment(CommentKind::Block, body, self.cursor.line());
        }
        Ok(())
    }

    /// Stores a documentation comment, replacing any uncollected one.
    fn set_comment(&mut self, kind: CommentKind, body: &str, line: u32) {
        let text = normalize_comment(body, self.config.alternate_comment_mode);
        log::debug!("captured {} doc comment ending on line {}", kind, line);
        self.comment = Some(DocComment { kind, text, line });
    }
}

/// Strips comment decoration from every line of `body` and trims the result.
pub(crate) fn normalize_comment(body: &str, alternate: bool) -> String {
    body.split('\n')
        .map(|line| strip_decoration(line, alternate).trim())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Removes the leading `* ` / `// ` style decoration of one comment line.
fn strip_decoration(line: &str, alternate: bool) -> &str {
    if alternate {
        let rest = line.trim_start();
        let rest = rest.strip_prefix('*').unwrap_or(rest);
        return rest.trim_start_matches('/');
    }

    let indented = line.trim_start_matches(' ');
    let rest = indented.trim_start_matches(|c| c == '*' || c == '/');
    if rest.len() == indented.len() {
        line
    } else {
        rest.trim_start_matches(' ')
    }
}
