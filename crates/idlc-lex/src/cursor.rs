//! Character cursor for traversing schema source.
//!
//! This module provides the `Cursor` struct which maintains the scan offset
//! and the 1-based line counter for one lexing session. It handles UTF-8
//! encoded text and counts a line for every `\n` it moves across, unless the
//! caller explicitly asks it to move without counting.

/// A cursor for traversing source text character by character.
///
/// # Example
///
/// ```
/// use idlc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("syntax = \"proto3\";");
///
/// assert_eq!(cursor.current_char(), 's');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'y');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source.
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character starting `offset` bytes past the current position.
    ///
    /// Only meaningful when the current character is ASCII or `offset` is 0,
    /// which is how the lexer uses it (looking past `/` and `*`).
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("/*");
    /// assert_eq!(cursor.peek_char(0), '/');
    /// assert_eq!(cursor.peek_char(1), '*');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Advances the cursor to the next character, counting a line on `\n`.
    ///
    /// Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        // Fast path for ASCII (most common)
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
            }
            return;
        }

        // Slow path for UTF-8 multi-byte characters
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances the cursor by the given number of characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Moves forward `count` bytes, counting the newlines crossed.
    ///
    /// `count` must land on a character boundary.
    pub fn advance_bytes(&mut self, count: usize) {
        let end = (self.position + count).min(self.source.len());
        let crossed = self.source.as_bytes()[self.position..end]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();

        self.line += crossed as u32;
        self.position = end;
    }

    /// Moves forward `count` bytes without touching the line counter.
    ///
    /// `count` must land on a character boundary.
    pub fn advance_bytes_untracked(&mut self, count: usize) {
        self.position = (self.position + count).min(self.source.len());
    }

    /// Consumes the line terminator the cursor is sitting on.
    ///
    /// At end of input there is nothing to consume, but the line still counts
    /// as ended and the counter moves on.
    pub fn consume_line_end(&mut self) {
        if self.is_at_end() {
            self.line += 1;
        } else {
            self.advance();
        }
    }

    /// Moves to the end of the source. The line counter is left alone.
    pub fn exhaust(&mut self) {
        self.position = self.source.len();
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns true if only spaces and tabs precede the cursor on its line.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a;\n  // note");
    /// assert!(cursor.at_line_start());
    /// cursor.advance();
    /// assert!(!cursor.at_line_start());
    /// cursor.advance_n(4);
    /// assert!(cursor.at_line_start());
    /// ```
    pub fn at_line_start(&self) -> bool {
        self.source[..self.position]
            .rsplit('\n')
            .next()
            .unwrap_or_default()
            .chars()
            .all(|c| c == ' ' || c == '\t')
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from `start` to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("message Foo");
    /// let start = cursor.position();
    /// cursor.advance_n(7);
    /// assert_eq!(cursor.slice_from(start), "message");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Creates a snapshot of the current cursor state.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
}
