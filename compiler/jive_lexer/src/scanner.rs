//! Hand-written scanner with interpolation mode stack.
//!
//! Dispatches on the first byte of each token. String literals and text
//! blocks are lexed as structured token runs (`StringStart`, fragments,
//! escapes, interpolation splices, `StringEnd`) so the parser can build
//! literal nodes with full nested expressions inside `\{...}` splices. A
//! mode stack tracks how deep we are in strings-inside-splices; each
//! interpolation level additionally counts raw braces so the closing `}` of
//! the splice is recognized only at its own top level.
//!
//! Error conditions become `TokenKind::Error` tokens plus a diagnostic;
//! scanning always continues, and token spans always tile the source.

use jive_diagnostic::{Diagnostic, ErrorCode};
use jive_syntax::{Span, Token, TokenKind};

use crate::cursor::Cursor;
use crate::keywords;

/// Where the scanner currently is, innermost last.
#[derive(Debug)]
enum Mode {
    /// Inside `"..."`.
    String,
    /// Inside `"""..."""`.
    TextBlock,
    /// Inside a `\{...}` splice; counts nested raw braces.
    Interpolation { brace_depth: u32 },
}

pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
    modes: Vec<Mode>,
    pub(crate) errors: Vec<Diagnostic>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            modes: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn error(&mut self, code: ErrorCode, span: Span) {
        self.errors.push(Diagnostic::error(code).with_label(span, "here"));
    }

    fn token(&self, start: u32, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(start, self.cursor.pos()))
    }

    /// Produce the next token, or `None` at end of input.
    pub(crate) fn next_token(&mut self) -> Option<Token> {
        match self.modes.last() {
            Some(Mode::String) => self.string_part(false),
            Some(Mode::TextBlock) => self.string_part(true),
            _ => self.normal_token(),
        }
    }

    // ─── String bodies ──────────────────────────────────────────────────

    fn string_part(&mut self, text_block: bool) -> Option<Token> {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            let code = if text_block { ErrorCode::E0002 } else { ErrorCode::E0001 };
            self.error(code, Span::point(start));
            self.modes.pop();
            return self.next_token();
        }
        match self.cursor.current() {
            b'"' if text_block => {
                if self.cursor.peek(1) == b'"' && self.cursor.peek(2) == b'"' {
                    self.cursor.advance_n(3);
                    self.modes.pop();
                    Some(self.token(start, TokenKind::TextBlockEnd))
                } else {
                    // Raw quote mid-body: part of a fragment.
                    self.fragment(start, text_block)
                }
            }
            b'"' => {
                self.cursor.advance();
                self.modes.pop();
                Some(self.token(start, TokenKind::StringEnd))
            }
            b'\n' if !text_block => {
                // Raw newline terminates a single-line string.
                self.error(ErrorCode::E0001, Span::point(start));
                self.modes.pop();
                self.next_token()
            }
            b'\\' => Some(self.escape_or_splice(start)),
            _ => self.fragment(start, text_block),
        }
    }

    /// Literal fragment: maximal run up to the next escape, splice, or
    /// terminator. In text blocks, lone quotes and newlines stay inside.
    fn fragment(&mut self, start: u32, text_block: bool) -> Option<Token> {
        loop {
            self.cursor.advance_n(self.cursor.find_fragment_boundary(!text_block));
            if text_block && self.cursor.current() == b'"' {
                if self.cursor.peek(1) == b'"' && self.cursor.peek(2) == b'"' {
                    break;
                }
                self.cursor.advance();
                continue;
            }
            break;
        }
        debug_assert!(self.cursor.pos() > start, "empty string fragment");
        Some(self.token(start, TokenKind::StringFragment))
    }

    /// `\` inside a string body: interpolation splice opener or escape
    /// sequence.
    fn escape_or_splice(&mut self, start: u32) -> Token {
        if self.cursor.peek(1) == b'{' {
            self.cursor.advance_n(2);
            self.modes.push(Mode::Interpolation { brace_depth: 0 });
            return self.token(start, TokenKind::InterpolationStart);
        }
        let (len, valid) = self.escape_len();
        self.cursor.advance_n(len);
        if valid {
            self.token(start, TokenKind::EscapeSequence)
        } else {
            let token = self.token(start, TokenKind::Error);
            self.error(ErrorCode::E0005, token.span);
            token
        }
    }

    /// Length and validity of the escape at the cursor (`current() == '\'`).
    ///
    /// Shapes: single-character escapes, octal (1-3 digits), `\xHH`,
    /// `\uHHHH`, `\u{H...}`.
    fn escape_len(&self) -> (usize, bool) {
        let is_hex = |b: u8| b.is_ascii_hexdigit();
        match self.cursor.peek(1) {
            b'b' | b's' | b't' | b'n' | b'f' | b'r' | b'"' | b'\'' | b'\\' => (2, true),
            b'0'..=b'7' => {
                let mut len = 2;
                while len < 4 && matches!(self.cursor.peek(len), b'0'..=b'7') {
                    len += 1;
                }
                (len, true)
            }
            b'x' => {
                if is_hex(self.cursor.peek(2)) && is_hex(self.cursor.peek(3)) {
                    (4, true)
                } else {
                    (2, false)
                }
            }
            b'u' => {
                if self.cursor.peek(2) == b'{' {
                    let mut len = 3;
                    while is_hex(self.cursor.peek(len)) {
                        len += 1;
                    }
                    if len > 3 && self.cursor.peek(len) == b'}' {
                        (len + 1, true)
                    } else {
                        (len, false)
                    }
                } else if (2..6).all(|i| is_hex(self.cursor.peek(i))) {
                    (6, true)
                } else {
                    (2, false)
                }
            }
            0 => (1, false),
            _ => (2, false),
        }
    }

    // ─── Normal tokens ──────────────────────────────────────────────────

    fn normal_token(&mut self) -> Option<Token> {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            if self.modes.pop().is_some() {
                // Unterminated splice; enclosing string is unterminated too.
                self.error(ErrorCode::E0008, Span::point(start));
                return self.next_token();
            }
            return None;
        }
        let token = match self.cursor.current() {
            b' ' | b'\t' | b'\r' | b'\n' => {
                self.cursor.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
                self.token(start, TokenKind::Whitespace)
            }
            b'/' => self.slash(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' => self.ident_or_keyword(start),
            b'0'..=b'9' => self.number(start),
            b'"' => {
                if self.cursor.peek(1) == b'"' && self.cursor.peek(2) == b'"' {
                    self.cursor.advance_n(3);
                    self.modes.push(Mode::TextBlock);
                    self.token(start, TokenKind::TextBlockStart)
                } else {
                    self.cursor.advance();
                    self.modes.push(Mode::String);
                    self.token(start, TokenKind::StringStart)
                }
            }
            b'\'' => self.char_literal(start),
            b'.' => self.dot(start),
            b'{' => {
                if let Some(Mode::Interpolation { brace_depth }) = self.modes.last_mut() {
                    *brace_depth += 1;
                }
                self.single(start, TokenKind::LBrace)
            }
            b'}' => match self.modes.last_mut() {
                Some(Mode::Interpolation { brace_depth: 0 }) => {
                    self.cursor.advance();
                    self.modes.pop();
                    self.token(start, TokenKind::InterpolationEnd)
                }
                Some(Mode::Interpolation { brace_depth }) => {
                    *brace_depth -= 1;
                    self.single(start, TokenKind::RBrace)
                }
                _ => self.single(start, TokenKind::RBrace),
            },
            b'(' => self.single(start, TokenKind::LParen),
            b')' => self.single(start, TokenKind::RParen),
            b'[' => self.single(start, TokenKind::LBracket),
            b']' => self.single(start, TokenKind::RBracket),
            b';' => self.single(start, TokenKind::Semicolon),
            b',' => self.single(start, TokenKind::Comma),
            b'@' => self.single(start, TokenKind::At),
            b'~' => self.single(start, TokenKind::Tilde),
            b'?' => self.single(start, TokenKind::Question),
            b':' => self.one_or_two(start, b':', TokenKind::Colon, TokenKind::ColonColon),
            b'=' => self.one_or_two(start, b'=', TokenKind::Eq, TokenKind::EqEq),
            b'!' => self.one_or_two(start, b'=', TokenKind::Bang, TokenKind::NotEq),
            b'^' => self.one_or_two(start, b'=', TokenKind::Caret, TokenKind::CaretEq),
            b'%' => self.one_or_two(start, b'=', TokenKind::Percent, TokenKind::PercentEq),
            b'*' => self.one_or_two(start, b'=', TokenKind::Star, TokenKind::StarEq),
            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'&' => self.amp(start),
            b'|' => self.pipe(start),
            b'<' => self.less(start),
            // Always a single token; the parser glues `>` runs.
            b'>' => self.single(start, TokenKind::Gt),
            _ => {
                if self.cursor.current_char().is_some_and(unicode_ident::is_xid_start) {
                    self.ident_or_keyword(start)
                } else {
                    self.cursor.advance_char();
                    let token = self.token(start, TokenKind::Error);
                    self.error(ErrorCode::E0006, token.span);
                    token
                }
            }
        };
        Some(token)
    }

    fn single(&mut self, start: u32, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.token(start, kind)
    }

    /// One-byte token, or a two-byte token when `second` follows.
    fn one_or_two(&mut self, start: u32, second: u8, one: TokenKind, two: TokenKind) -> Token {
        self.cursor.advance();
        if self.cursor.current() == second {
            self.cursor.advance();
            self.token(start, two)
        } else {
            self.token(start, one)
        }
    }

    fn plus(&mut self, start: u32) -> Token {
        self.cursor.advance();
        match self.cursor.current() {
            b'+' => self.single(start, TokenKind::PlusPlus),
            b'=' => self.single(start, TokenKind::PlusEq),
            _ => self.token(start, TokenKind::Plus),
        }
    }

    fn minus(&mut self, start: u32) -> Token {
        self.cursor.advance();
        match self.cursor.current() {
            b'-' => self.single(start, TokenKind::MinusMinus),
            b'=' => self.single(start, TokenKind::MinusEq),
            b'>' => self.single(start, TokenKind::Arrow),
            _ => self.token(start, TokenKind::Minus),
        }
    }

    fn amp(&mut self, start: u32) -> Token {
        self.cursor.advance();
        match self.cursor.current() {
            b'&' => self.single(start, TokenKind::AmpAmp),
            b'=' => self.single(start, TokenKind::AmpEq),
            _ => self.token(start, TokenKind::Amp),
        }
    }

    fn pipe(&mut self, start: u32) -> Token {
        self.cursor.advance();
        match self.cursor.current() {
            b'|' => self.single(start, TokenKind::PipePipe),
            b'=' => self.single(start, TokenKind::PipeEq),
            _ => self.token(start, TokenKind::Pipe),
        }
    }

    fn less(&mut self, start: u32) -> Token {
        self.cursor.advance();
        match self.cursor.current() {
            b'=' => self.single(start, TokenKind::LtEq),
            b'<' => {
                self.cursor.advance();
                if self.cursor.current() == b'=' {
                    self.single(start, TokenKind::ShlEq)
                } else {
                    self.token(start, TokenKind::Shl)
                }
            }
            _ => self.token(start, TokenKind::Lt),
        }
    }

    fn slash(&mut self, start: u32) -> Token {
        self.cursor.advance();
        match self.cursor.current() {
            b'/' => {
                self.cursor.eat_until_newline();
                self.token(start, TokenKind::LineComment)
            }
            b'*' => {
                self.cursor.advance();
                if self.cursor.eat_block_comment_body() {
                    self.token(start, TokenKind::BlockComment)
                } else {
                    let token = self.token(start, TokenKind::BlockComment);
                    self.error(ErrorCode::E0004, token.span);
                    token
                }
            }
            b'=' => self.single(start, TokenKind::SlashEq),
            _ => self.token(start, TokenKind::Slash),
        }
    }

    fn dot(&mut self, start: u32) -> Token {
        if self.cursor.peek(1).is_ascii_digit() {
            return self.number(start);
        }
        self.cursor.advance();
        if self.cursor.current() == b'.' && self.cursor.peek(1) == b'.' {
            self.cursor.advance_n(2);
            self.token(start, TokenKind::Ellipsis)
        } else {
            self.token(start, TokenKind::Dot)
        }
    }

    // ─── Identifiers ────────────────────────────────────────────────────

    fn ident_or_keyword(&mut self, start: u32) -> Token {
        self.eat_ident();

        // `non-sealed` is one keyword token when the full spelling is
        // present at a word boundary.
        if self.slice(start) == "non" && self.cursor.current() == b'-' {
            let rest_matches = (0..7).all(|i| self.cursor.peek(1 + i) == b"sealed"[i]);
            if rest_matches && !self.is_ident_continue_at(8) {
                self.cursor.advance_n(8);
                return self.token(start, TokenKind::NonSealed);
            }
        }

        let text = self.slice(start);
        if text == "_" {
            return self.token(start, TokenKind::Underscore);
        }
        match keywords::reserved(text) {
            Some(kind) => self.token(start, kind),
            None => self.token(start, TokenKind::Ident),
        }
    }

    fn eat_ident(&mut self) {
        loop {
            let b = self.cursor.current();
            if b.is_ascii_alphanumeric() || b == b'_' || b == b'$' {
                self.cursor.advance();
            } else if !b.is_ascii()
                && self.cursor.current_char().is_some_and(unicode_ident::is_xid_continue)
            {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
    }

    fn is_ident_continue_at(&self, offset: usize) -> bool {
        let b = self.cursor.peek(offset);
        if b.is_ascii() {
            return b.is_ascii_alphanumeric() || b == b'_' || b == b'$';
        }
        let rest = &self.cursor.source()[self.cursor.pos() as usize + offset..];
        rest.chars().next().is_some_and(unicode_ident::is_xid_continue)
    }

    fn slice(&self, start: u32) -> &str {
        // Scanner positions are always char boundaries within the source.
        &self.cursor.source()[start as usize..self.cursor.pos() as usize]
    }

    // ─── Numbers ────────────────────────────────────────────────────────

    fn number(&mut self, start: u32) -> Token {
        if self.cursor.current() == b'.' {
            // `.5` form: dot-digits.
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
            self.exponent_and_suffix();
            return self.token(start, TokenKind::DecimalFloatLiteral);
        }

        if self.cursor.current() == b'0' {
            match self.cursor.peek(1) {
                b'x' | b'X' => return self.radix_literal(start, 16),
                b'b' | b'B' => return self.radix_literal(start, 2),
                b'o' | b'O' => return self.radix_literal(start, 8),
                b'0'..=b'7' | b'_' => {
                    // Legacy leading-zero octal, unless it turns out to be a
                    // decimal float like `01.5`.
                    if !self.is_decimal_float_ahead() {
                        self.cursor.advance();
                        self.cursor.eat_while(|b| matches!(b, b'0'..=b'7' | b'_'));
                        self.int_suffix();
                        return self.token(start, TokenKind::OctalIntLiteral);
                    }
                }
                _ => {}
            }
        }

        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
        let mut float = false;

        if self.cursor.current() == b'.' && !self.followed_by_ident_start(1) {
            float = true;
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
        }
        float |= self.exponent_and_suffix();

        if float {
            self.token(start, TokenKind::DecimalFloatLiteral)
        } else {
            self.int_suffix();
            self.token(start, TokenKind::DecimalIntLiteral)
        }
    }

    /// Hex/binary/octal literal with prefix, digit groups, optional
    /// suffix. Hex may continue into a hex float (`.` digits and/or a
    /// mandatory `p` binary exponent).
    fn radix_literal(&mut self, start: u32, radix: u32) -> Token {
        self.cursor.advance_n(2); // prefix
        let digit = |b: u8| char::from(b).is_digit(radix) || b == b'_';
        let had_digits = digit(self.cursor.current());
        self.cursor.eat_while(digit);

        if radix == 16 {
            let dot = self.cursor.current() == b'.'
                && char::from(self.cursor.peek(1)).is_ascii_hexdigit();
            if dot {
                self.cursor.advance();
                self.cursor.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
            }
            if matches!(self.cursor.current(), b'p' | b'P') {
                self.cursor.advance();
                if matches!(self.cursor.current(), b'+' | b'-') {
                    self.cursor.advance();
                }
                let had_exp = self.cursor.current().is_ascii_digit();
                self.cursor.eat_while(|b| b.is_ascii_digit());
                if matches!(self.cursor.current(), b'f' | b'F' | b'd' | b'D') {
                    self.cursor.advance();
                }
                if !had_digits || !had_exp {
                    let token = self.token(start, TokenKind::Error);
                    self.error(ErrorCode::E0007, token.span);
                    return token;
                }
                return self.token(start, TokenKind::HexFloatLiteral);
            }
            if dot {
                // Hex float needs the binary exponent.
                let token = self.token(start, TokenKind::Error);
                self.error(ErrorCode::E0007, token.span);
                return token;
            }
        }

        if !had_digits {
            let token = self.token(start, TokenKind::Error);
            self.error(ErrorCode::E0007, token.span);
            return token;
        }
        self.int_suffix();
        self.token(
            start,
            match radix {
                16 => TokenKind::HexIntLiteral,
                8 => TokenKind::OctalIntLiteral,
                _ => TokenKind::BinaryIntLiteral,
            },
        )
    }

    /// Consume `e`-exponent and/or float suffix if present. Returns `true`
    /// when either made this a float literal.
    fn exponent_and_suffix(&mut self) -> bool {
        let mut float = false;
        if matches!(self.cursor.current(), b'e' | b'E')
            && (self.cursor.peek(1).is_ascii_digit()
                || matches!(self.cursor.peek(1), b'+' | b'-') && self.cursor.peek(2).is_ascii_digit())
        {
            float = true;
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
        }
        if matches!(self.cursor.current(), b'f' | b'F' | b'd' | b'D') {
            float = true;
            self.cursor.advance();
        }
        float
    }

    fn int_suffix(&mut self) {
        if matches!(self.cursor.current(), b'l' | b'L') {
            self.cursor.advance();
        }
    }

    /// Lookahead: does the digit run starting here end in `.`/`e`/suffix,
    /// making it a decimal float despite a leading zero?
    fn is_decimal_float_ahead(&self) -> bool {
        let mut i = 0;
        while self.cursor.peek(i).is_ascii_digit() || self.cursor.peek(i) == b'_' {
            i += 1;
        }
        matches!(self.cursor.peek(i), b'.' | b'e' | b'E' | b'f' | b'F' | b'd' | b'D')
    }

    fn followed_by_ident_start(&self, offset: usize) -> bool {
        let b = self.cursor.peek(offset);
        b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E' | b'f' | b'F' | b'd' | b'D')
            || b == b'_'
            || b == b'$'
    }

    // ─── Character literals ─────────────────────────────────────────────

    fn char_literal(&mut self, start: u32) -> Token {
        self.cursor.advance(); // opening quote
        let mut body_len = 0usize;
        loop {
            match self.cursor.current() {
                b'\'' => {
                    self.cursor.advance();
                    if body_len == 0 {
                        let token = self.token(start, TokenKind::Error);
                        self.error(ErrorCode::E0003, token.span);
                        return token;
                    }
                    return self.token(start, TokenKind::CharLiteral);
                }
                b'\n' | 0 => {
                    let token = self.token(start, TokenKind::Error);
                    self.error(ErrorCode::E0003, token.span);
                    return token;
                }
                b'\\' => {
                    let (len, valid) = self.escape_len();
                    if !valid {
                        let escape_start = self.cursor.pos();
                        self.cursor.advance_n(len);
                        self.error(
                            ErrorCode::E0005,
                            Span::new(escape_start, self.cursor.pos()),
                        );
                    } else {
                        self.cursor.advance_n(len);
                    }
                    body_len += 1;
                }
                _ => {
                    self.cursor.advance_char();
                    body_len += 1;
                }
            }
        }
    }
}
