//! Escape sequence decoding for quoted literal bodies.

use std::borrow::Cow;

/// Decodes the backslash escapes in a string literal body.
///
/// | Escape | Result |
/// |--------|--------|
/// | `\0`   | NUL    |
/// | `\r`   | CR     |
/// | `\n`   | LF     |
/// | `\t`   | TAB    |
/// | `\\`   | `\`    |
/// | `\"`   | `"`    |
/// | `\'`   | `'`    |
///
/// Any other escaped character is dropped together with its backslash, so
/// `\q` decodes to nothing rather than to `q`. A lone backslash at the very
/// end of the body has nothing to escape and is kept.
///
/// Bodies without a backslash are returned borrowed.
///
/// # Example
///
/// ```
/// use idlc_lex::unescape;
///
/// assert_eq!(unescape(r"a\tb"), "a\tb");
/// assert_eq!(unescape(r"a\qb"), "ab");
/// assert_eq!(unescape(r"tail\"), "tail\\");
/// ```
pub fn unescape(body: &str) -> Cow<'_, str> {
    if !body.contains('\\') {
        return Cow::Borrowed(body);
    }

    let mut decoded = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }

        match chars.next() {
            Some(escaped) => {
                if let Some(value) = decode_escape(escaped) {
                    decoded.push(value);
                }
            },
            None => decoded.push('\\'),
        }
    }

    Cow::Owned(decoded)
}

/// Maps the character after a backslash to its value, `None` for unknown escapes.
fn decode_escape(c: char) -> Option<char> {
    match c {
        '0' => Some('\0'),
        'r' => Some('\r'),
        'n' => Some('\n'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}
