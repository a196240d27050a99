//! Lookahead and comment attribution.
//!
//! The parser-facing half of the lexer: one-token peek, pushback, expected
//! token checks and the documentation comment lookup.

use std::borrow::Cow;

use crate::error::{LexError, Result};
use crate::lexer::comment::{CommentKind, DocComment};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Returns the next token without consuming it.
    ///
    /// Repeated peeks return the same token and scan at most once.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::Lexer;
    ///
    /// let mut lexer = Lexer::new("syntax = \"proto3\";");
    /// assert_eq!(lexer.peek().unwrap().as_deref(), Some("syntax"));
    /// assert_eq!(lexer.peek().unwrap().as_deref(), Some("syntax"));
    /// assert_eq!(lexer.next_token().unwrap().as_deref(), Some("syntax"));
    /// ```
    pub fn peek(&mut self) -> Result<Option<Cow<'a, str>>> {
        if self.stack.is_empty() {
            // Reading a literal body queues the closing quote, which must stay behind it
            match self.next_token()? {
                Some(token) => self.stack.push_front(token),
                None => return Ok(None),
            }
        }
        Ok(self.stack.front().cloned())
    }

    /// Queues a token to be returned ahead of anything not yet scanned.
    ///
    /// Pushed tokens come back in the order they were pushed.
    pub fn push(&mut self, token: impl Into<Cow<'a, str>>) {
        self.stack.push_back(token.into());
    }

    /// Consumes the next token if it equals `expected`.
    ///
    /// Returns true when the token was consumed. On a mismatch an optional
    /// skip returns false and leaves the token in place.
    ///
    /// # Errors
    ///
    /// [`LexError::UnexpectedToken`] on a mismatch when `optional` is false,
    /// ending the session. Scanning errors from the peek are passed through.
    pub fn skip(&mut self, expected: &str, optional: bool) -> Result<bool> {
        let actual = self.peek()?;
        if actual.as_deref() == Some(expected) {
            self.next_token()?;
            return Ok(true);
        }

        if optional {
            return Ok(false);
        }

        let error = LexError::UnexpectedToken {
            actual: actual.map(Cow::into_owned),
            expected: expected.to_string(),
            line: self.line(),
        };
        log::debug!("{}", error);
        self.terminate();
        Err(error)
    }

    /// Looks up the captured documentation comment.
    ///
    /// Without `trailing_line`, returns the comment if it ended on the line
    /// right above the current one: a leading comment for the token about to
    /// be parsed.
    ///
    /// With `trailing_line`, returns the comment if it is a line comment that
    /// ended on `trailing_line`: a trailing comment for the token just
    /// consumed on that line. If nothing with text has been captured yet the lexer
    /// peeks first, so a comment further along the same line gets read.
    ///
    /// A returned comment is removed from the slot and never returned again.
    pub fn cmnt(&mut self, trailing_line: Option<u32>) -> Result<Option<String>> {
        match trailing_line {
            None => Ok(self.leading_comment()),
            Some(trailing_line) => {
                // An empty capture counts as nothing captured
                if self.comment.as_ref().map_or(true, |c| c.text.is_empty()) {
                    self.peek()?;
                }
                Ok(self.take_comment(|c| c.line == trailing_line && c.kind == CommentKind::Line))
            },
        }
    }

    /// Leading documentation comment for the upcoming token.
    ///
    /// Same as `cmnt(None)`, which never scans and so cannot fail.
    pub fn leading_comment(&mut self) -> Option<String> {
        let line = self.line();
        self.take_comment(|c| c.line + 1 == line)
    }

    /// Trailing documentation comment for a token consumed on `line`.
    pub fn trailing_comment(&mut self, line: u32) -> Result<Option<String>> {
        self.cmnt(Some(line))
    }

    /// The captured documentation comment not yet handed out, if any.
    ///
    /// Unlike [`Lexer::cmnt`] this applies no line rule and leaves the slot
    /// as it is.
    pub fn pending_comment(&self) -> Option<&DocComment> {
        self.comment.as_ref()
    }

    /// Empties the comment slot if its comment is accepted and has text.
    fn take_comment(&mut self, accept: impl FnOnce(&DocComment) -> bool) -> Option<String> {
        let accepted = self
            .comment
            .as_ref()
            .is_some_and(|c| !c.text.is_empty() && accept(c));
        if !accepted {
            return None;
        }

        let text = self.comment.take().map(|c| c.text);
        log::debug!("attributed doc comment {:?}", text);
        text
    }
}
