//! Quoted literal reassembly.
//!
//! After an opening quote token the lexer reads the literal body up to the
//! first unescaped quote of the same kind, decodes it, and queues the quote
//! again so the caller sees `quote, body, quote`.

use std::borrow::Cow;

use crate::error::{LexError, Result};
use crate::unescape::unescape;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Reads the body of a literal opened by `delim`.
    ///
    /// The cursor sits right after the opening quote. A backslash protects
    /// the character after it, so `\"` never closes a `"` literal. Any other
    /// character, including `\n`, is part of the body.
    ///
    /// # Returns
    ///
    /// The decoded body. The closing quote is consumed and `delim` is queued
    /// as the following token.
    pub(crate) fn read_string(&mut self, delim: char) -> Result<Cow<'a, str>> {
        let rest = self.cursor.remaining();

        let mut escaped = false;
        let mut close = None;
        for (i, c) in rest.char_indices() {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == delim {
                close = Some(i);
                break;
            }
        }

        let Some(len) = close else {
            let line = self.cursor.line();
            log::debug!("{} literal never closed (line {})", delim, line);
            self.terminate();
            return Err(LexError::IllegalString { line });
        };

        let body = &rest[..len];
        if self.config.track_string_newlines {
            self.cursor.advance_bytes(len + 1);
        } else {
            self.cursor.advance_bytes_untracked(len + 1);
        }

        self.stack.push_back(Cow::Borrowed(quote_str(delim)));
        self.string_delim = None;

        log::trace!("literal body {:?} on line {}", body, self.cursor.line());
        Ok(unescape(body))
    }
}

/// The token text for a quote character.
fn quote_str(delim: char) -> &'static str {
    if delim == '\'' {
        "'"
    } else {
        "\""
    }
}
