//! Byte cursor over source text.
//!
//! Low-level positioned access with `memchr` fast paths for the scanner.
//! Positions are byte offsets; reads past the end return `0`, which no
//! token pattern matches, so every scan loop terminates at EOF naturally.

use memchr::{memchr, memchr2};

/// Byte cursor with lookahead.
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Cursor { src, pos: 0 }
    }

    /// The full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.src
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        u32::try_from(self.pos).unwrap_or(u32::MAX)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Current byte, or `0` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.src.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// Byte at `offset` past the current position, or `0` past the end.
    #[inline]
    pub fn peek(&self, offset: usize) -> u8 {
        self.src.as_bytes().get(self.pos + offset).copied().unwrap_or(0)
    }

    /// Current character decoded as UTF-8, or `None` at EOF.
    /// Only needed for non-ASCII identifier characters.
    pub fn current_char(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    /// Advance one byte.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.src.len() {
            self.pos += 1;
        }
    }

    /// Advance `n` bytes (clamped to the end).
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.src.len());
    }

    /// Advance past the current character (multi-byte aware).
    pub fn advance_char(&mut self) {
        if let Some(c) = self.current_char() {
            self.pos += c.len_utf8();
        }
    }

    /// Consume bytes while `pred` holds.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Consume up to (not including) the next `\n`, or to EOF.
    pub fn eat_until_newline(&mut self) {
        match memchr(b'\n', &self.src.as_bytes()[self.pos..]) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
    }

    /// Consume up to and including the next `*/`. Returns `false` when the
    /// comment runs to EOF unterminated.
    pub fn eat_block_comment_body(&mut self) -> bool {
        let bytes = self.src.as_bytes();
        while let Some(offset) = memchr(b'*', &bytes[self.pos..]) {
            self.pos += offset + 1;
            if self.current() == b'/' {
                self.pos += 1;
                return true;
            }
        }
        self.pos = self.src.len();
        false
    }

    /// Distance to the next byte that could end or interrupt a string
    /// fragment (`"`, `\`, or `\n`), from the current position.
    pub fn find_fragment_boundary(&self, include_newline: bool) -> usize {
        let rest = &self.src.as_bytes()[self.pos..];
        let quote_or_escape = memchr2(b'"', b'\\', rest);
        if include_newline {
            let newline = memchr(b'\n', rest);
            match (quote_or_escape, newline) {
                (Some(a), Some(b)) => a.min(b),
                (Some(a), None) => a,
                (None, Some(b)) => b,
                (None, None) => rest.len(),
            }
        } else {
            quote_or_escape.unwrap_or(rest.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_navigation() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.current(), b'a');
        assert_eq!(cursor.peek(1), b'b');
        assert_eq!(cursor.peek(9), 0);
        cursor.advance();
        assert_eq!(cursor.pos(), 1);
        cursor.advance_n(10);
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), 0);
    }

    #[test]
    fn test_eat_while() {
        let mut cursor = Cursor::new("aaab");
        cursor.eat_while(|b| b == b'a');
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.current(), b'b');
    }

    #[test]
    fn test_eat_until_newline() {
        let mut cursor = Cursor::new("// comment\nnext");
        cursor.eat_until_newline();
        assert_eq!(cursor.current(), b'\n');

        let mut cursor = Cursor::new("// eof comment");
        cursor.eat_until_newline();
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_block_comment_body() {
        let mut cursor = Cursor::new("* body **/rest");
        assert!(cursor.eat_block_comment_body());
        assert_eq!(cursor.current(), b'r');

        let mut cursor = Cursor::new("* never ends");
        assert!(!cursor.eat_block_comment_body());
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_fragment_boundary() {
        let cursor = Cursor::new(r#"abc\n""#);
        assert_eq!(cursor.find_fragment_boundary(true), 3);

        let cursor = Cursor::new("ab\ncd\"");
        assert_eq!(cursor.find_fragment_boundary(true), 2);
        assert_eq!(cursor.find_fragment_boundary(false), 5);
    }

    #[test]
    fn test_unicode_char() {
        let mut cursor = Cursor::new("héllo");
        cursor.advance();
        assert_eq!(cursor.current_char(), Some('é'));
        cursor.advance_char();
        assert_eq!(cursor.current(), b'l');
    }
}
