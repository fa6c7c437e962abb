//! Lexer for the Jive front end.
//!
//! Produces a [`TokenList`] whose spans tile the source exactly, trivia
//! included, plus diagnostics for malformed input. Lexing never fails: every
//! byte of input lands in some token, with `TokenKind::Error` covering
//! anything unrecognizable.
//!
//! String literals and text blocks are emitted as structured token runs so
//! the parser can represent `\{...}` interpolation splices as real
//! expression subtrees:
//!
//! ```text
//! "sum=\{a + b}"
//! ```
//!
//! lexes as `StringStart`, `StringFragment`, `InterpolationStart`, `Ident`,
//! `Whitespace`, `Plus`, `Whitespace`, `Ident`, `InterpolationEnd`,
//! `StringEnd`.

mod cursor;
mod keywords;
mod scanner;

pub use keywords::{is_contextual, reserved, CONTEXTUAL};

use jive_diagnostic::Diagnostic;
use jive_syntax::{Span, Token, TokenKind, TokenList};

use crate::scanner::Scanner;

/// Output of [`lex`]: the token list (terminated by `Eof`) and any lexical
/// diagnostics.
pub struct LexedSource {
    pub tokens: TokenList,
    pub errors: Vec<Diagnostic>,
}

impl LexedSource {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Tokenize `source` completely.
pub fn lex(source: &str) -> LexedSource {
    let mut scanner = Scanner::new(source);
    let mut tokens = TokenList::new();
    while let Some(token) = scanner.next_token() {
        tokens.push(token);
    }
    let end = u32::try_from(source.len()).unwrap_or(u32::MAX);
    tokens.push(Token::new(TokenKind::Eof, Span::point(end)));
    LexedSource { tokens, errors: scanner.errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jive_diagnostic::ErrorCode;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).tokens.iter().map(|t| t.kind).collect()
    }

    /// Like `kinds` but with trivia and the trailing `Eof` stripped.
    fn sig_kinds(source: &str) -> Vec<TokenKind> {
        lex(source)
            .tokens
            .iter()
            .map(|t| t.kind)
            .filter(|k| !k.is_trivia() && *k != TokenKind::Eof)
            .collect()
    }

    fn assert_tiles(source: &str) {
        let lexed = lex(source);
        let mut pos = 0u32;
        for token in lexed.tokens.iter() {
            assert_eq!(token.span.start, pos, "gap before {:?} in {source:?}", token.kind);
            pos = token.span.end;
        }
        assert_eq!(pos as usize, source.len(), "tokens do not cover {source:?}");
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            sig_kinds("class Foo extends Bar"),
            vec![TokenKind::Class, TokenKind::Ident, TokenKind::Extends, TokenKind::Ident],
        );
        // Contextual keywords are plain identifiers to the lexer.
        assert_eq!(
            sig_kinds("record sealed yield var"),
            vec![TokenKind::Ident; 4],
        );
        assert_eq!(sig_kinds("true false null"), vec![
            TokenKind::True,
            TokenKind::False,
            TokenKind::Null,
        ]);
        assert_eq!(sig_kinds("_"), vec![TokenKind::Underscore]);
        assert_eq!(sig_kinds("_x $y über"), vec![TokenKind::Ident; 3]);
    }

    #[test]
    fn test_identifier_continue_is_xid() {
        // Combining marks continue an identifier.
        let lexed = lex("cafe\u{301}x caf\u{e9}");
        assert_eq!(
            lexed.tokens.iter().map(|t| t.kind).filter(|k| !k.is_trivia()).collect::<Vec<_>>(),
            vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Eof],
        );
        assert!(!lexed.has_errors());
        // Superscript digits are not XID_Continue.
        let lexed = lex("x\u{b2}");
        assert_eq!(lexed.tokens[0].kind, TokenKind::Ident);
        assert_eq!(lexed.tokens[0].span.end, 1);
        assert_eq!(lexed.tokens[1].kind, TokenKind::Error);
        // The `non-sealed` boundary check decodes past ASCII too.
        assert_eq!(
            sig_kinds("non-sealed\u{301}"),
            vec![TokenKind::Ident, TokenKind::Minus, TokenKind::Ident],
        );
    }

    #[test]
    fn test_non_sealed() {
        assert_eq!(sig_kinds("non-sealed class"), vec![TokenKind::NonSealed, TokenKind::Class]);
        // Not at a word boundary: ordinary tokens.
        assert_eq!(
            sig_kinds("non-sealedX"),
            vec![TokenKind::Ident, TokenKind::Minus, TokenKind::Ident],
        );
        assert_eq!(
            sig_kinds("nonX-sealed"),
            vec![TokenKind::Ident, TokenKind::Minus, TokenKind::Ident],
        );
        assert_eq!(sig_kinds("non - sealed"), vec![
            TokenKind::Ident,
            TokenKind::Minus,
            TokenKind::Ident,
        ]);
    }

    #[test]
    fn test_integer_literals() {
        assert_eq!(sig_kinds("0 42 1_000_000 9L 9l"), vec![TokenKind::DecimalIntLiteral; 5]);
        assert_eq!(sig_kinds("0x1F 0Xcafe_babe 0xFFL"), vec![TokenKind::HexIntLiteral; 3]);
        assert_eq!(sig_kinds("0b1010 0B11_00L"), vec![TokenKind::BinaryIntLiteral; 2]);
        assert_eq!(sig_kinds("0o777 0755 0_17L"), vec![TokenKind::OctalIntLiteral; 3]);
    }

    #[test]
    fn test_float_literals() {
        assert_eq!(
            sig_kinds("1.5 .5 2. 1e10 1.5e-3 3f 3.0d 1_0.5F"),
            vec![TokenKind::DecimalFloatLiteral; 8],
        );
        assert_eq!(sig_kinds("0x1.8p1 0xAp-2f"), vec![TokenKind::HexFloatLiteral; 2]);
        // Leading zero plus a fraction is decimal, not octal.
        assert_eq!(sig_kinds("01.5"), vec![TokenKind::DecimalFloatLiteral]);
    }

    #[test]
    fn test_number_then_member_access_stays_split() {
        // `1..2` style input: dot not followed by a digit ends the number.
        assert_eq!(
            sig_kinds("a[1].length"),
            vec![
                TokenKind::Ident,
                TokenKind::LBracket,
                TokenKind::DecimalIntLiteral,
                TokenKind::RBracket,
                TokenKind::Dot,
                TokenKind::Ident,
            ],
        );
    }

    #[test]
    fn test_malformed_numbers() {
        let lexed = lex("0x");
        assert_eq!(lexed.tokens[0].kind, TokenKind::Error);
        assert_eq!(lexed.errors[0].code, ErrorCode::E0007);
        // Hex float without a binary exponent.
        let lexed = lex("0x1.8");
        assert_eq!(lexed.tokens[0].kind, TokenKind::Error);
        assert_eq!(lexed.errors[0].code, ErrorCode::E0007);
    }

    #[test]
    fn test_char_literals() {
        assert_eq!(sig_kinds(r"'a' '\n' '\u0041' '\'' '\\'"), vec![TokenKind::CharLiteral; 5]);
        let lexed = lex("'a");
        assert_eq!(lexed.tokens[0].kind, TokenKind::Error);
        assert_eq!(lexed.errors[0].code, ErrorCode::E0003);
        let lexed = lex("''");
        assert_eq!(lexed.errors[0].code, ErrorCode::E0003);
    }

    #[test]
    fn test_simple_string() {
        assert_eq!(kinds(r#""hi""#), vec![
            TokenKind::StringStart,
            TokenKind::StringFragment,
            TokenKind::StringEnd,
            TokenKind::Eof,
        ]);
        assert_eq!(kinds(r#""""#), vec![
            TokenKind::StringStart,
            TokenKind::StringEnd,
            TokenKind::Eof,
        ]);
        assert_eq!(kinds(r#""a\nb""#), vec![
            TokenKind::StringStart,
            TokenKind::StringFragment,
            TokenKind::EscapeSequence,
            TokenKind::StringFragment,
            TokenKind::StringEnd,
            TokenKind::Eof,
        ]);
    }

    #[test]
    fn test_string_interpolation() {
        assert_eq!(kinds(r#""sum=\{a + b}""#), vec![
            TokenKind::StringStart,
            TokenKind::StringFragment,
            TokenKind::InterpolationStart,
            TokenKind::Ident,
            TokenKind::Whitespace,
            TokenKind::Plus,
            TokenKind::Whitespace,
            TokenKind::Ident,
            TokenKind::InterpolationEnd,
            TokenKind::StringEnd,
            TokenKind::Eof,
        ]);
    }

    #[test]
    fn test_interpolation_brace_counting() {
        // Braces of a lambda inside the splice do not close it.
        assert_eq!(sig_kinds(r#""\{f(() -> { g(); })}""#), vec![
            TokenKind::StringStart,
            TokenKind::InterpolationStart,
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Arrow,
            TokenKind::LBrace,
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Semicolon,
            TokenKind::RBrace,
            TokenKind::RParen,
            TokenKind::InterpolationEnd,
            TokenKind::StringEnd,
        ]);
    }

    #[test]
    fn test_nested_string_in_interpolation() {
        assert_eq!(sig_kinds(r#""a\{f("x")}b""#), vec![
            TokenKind::StringStart,
            TokenKind::StringFragment,
            TokenKind::InterpolationStart,
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::StringStart,
            TokenKind::StringFragment,
            TokenKind::StringEnd,
            TokenKind::RParen,
            TokenKind::InterpolationEnd,
            TokenKind::StringFragment,
            TokenKind::StringEnd,
        ]);
    }

    #[test]
    fn test_text_block() {
        let source = "\"\"\"\nline \"quoted\"\nmore\n\"\"\"";
        assert_eq!(kinds(source), vec![
            TokenKind::TextBlockStart,
            TokenKind::StringFragment,
            TokenKind::TextBlockEnd,
            TokenKind::Eof,
        ]);
        assert_tiles(source);
    }

    #[test]
    fn test_text_block_with_splice() {
        let source = "\"\"\"\nv=\\{x}\n\"\"\"";
        assert_eq!(kinds(source), vec![
            TokenKind::TextBlockStart,
            TokenKind::StringFragment,
            TokenKind::InterpolationStart,
            TokenKind::Ident,
            TokenKind::InterpolationEnd,
            TokenKind::StringFragment,
            TokenKind::TextBlockEnd,
            TokenKind::Eof,
        ]);
    }

    #[test]
    fn test_unterminated_strings() {
        let lexed = lex("\"abc");
        assert_eq!(lexed.errors[0].code, ErrorCode::E0001);
        let lexed = lex("\"abc\nx");
        assert_eq!(lexed.errors[0].code, ErrorCode::E0001);
        // Lexing resumes after the stray newline.
        assert!(lexed.tokens.iter().any(|t| t.kind == TokenKind::Ident));
        let lexed = lex("\"\"\"\nabc");
        assert_eq!(lexed.errors[0].code, ErrorCode::E0002);
        let lexed = lex("\"a\\{1 + ");
        assert!(lexed.errors.iter().any(|e| e.code == ErrorCode::E0008));
    }

    #[test]
    fn test_invalid_escape() {
        let lexed = lex(r#""a\q""#);
        assert_eq!(lexed.errors[0].code, ErrorCode::E0005);
        assert!(lexed.tokens.iter().any(|t| t.kind == TokenKind::Error));
        // The string still closes.
        assert!(lexed.tokens.iter().any(|t| t.kind == TokenKind::StringEnd));
    }

    #[test]
    fn test_comments() {
        assert_eq!(kinds("a // rest\nb"), vec![
            TokenKind::Ident,
            TokenKind::Whitespace,
            TokenKind::LineComment,
            TokenKind::Whitespace,
            TokenKind::Ident,
            TokenKind::Eof,
        ]);
        assert_eq!(kinds("/* x\ny */z"), vec![
            TokenKind::BlockComment,
            TokenKind::Ident,
            TokenKind::Eof,
        ]);
        let lexed = lex("/* never");
        assert_eq!(lexed.errors[0].code, ErrorCode::E0004);
    }

    #[test]
    fn test_operators() {
        assert_eq!(sig_kinds("a <<= b << c <= d < e"), vec![
            TokenKind::Ident,
            TokenKind::ShlEq,
            TokenKind::Ident,
            TokenKind::Shl,
            TokenKind::Ident,
            TokenKind::LtEq,
            TokenKind::Ident,
            TokenKind::Lt,
            TokenKind::Ident,
        ]);
        assert_eq!(sig_kinds("x -> y::z"), vec![
            TokenKind::Ident,
            TokenKind::Arrow,
            TokenKind::Ident,
            TokenKind::ColonColon,
            TokenKind::Ident,
        ]);
        assert_eq!(sig_kinds("i++ + ++j"), vec![
            TokenKind::Ident,
            TokenKind::PlusPlus,
            TokenKind::Plus,
            TokenKind::PlusPlus,
            TokenKind::Ident,
        ]);
        assert_eq!(sig_kinds("f(int... xs)"), vec![
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::Int,
            TokenKind::Ellipsis,
            TokenKind::Ident,
            TokenKind::RParen,
        ]);
    }

    #[test]
    fn test_greater_than_never_glued() {
        // The parser reassembles shifts from adjacent `>` tokens.
        assert_eq!(sig_kinds("a >> b >>> c >= d >>= e"), vec![
            TokenKind::Ident,
            TokenKind::Gt,
            TokenKind::Gt,
            TokenKind::Ident,
            TokenKind::Gt,
            TokenKind::Gt,
            TokenKind::Gt,
            TokenKind::Ident,
            TokenKind::Gt,
            TokenKind::Eq,
            TokenKind::Ident,
            TokenKind::Gt,
            TokenKind::Gt,
            TokenKind::Eq,
            TokenKind::Ident,
        ]);
        assert_eq!(sig_kinds("List<List<String>>"), vec![
            TokenKind::Ident,
            TokenKind::Lt,
            TokenKind::Ident,
            TokenKind::Lt,
            TokenKind::Ident,
            TokenKind::Gt,
            TokenKind::Gt,
        ]);
    }

    #[test]
    fn test_stray_character() {
        let lexed = lex("a # b");
        assert_eq!(lexed.errors[0].code, ErrorCode::E0006);
        assert_tiles("a # b");
    }

    #[test]
    fn test_tiling_on_tricky_inputs() {
        for source in [
            "class Point { int x = 0; }",
            r#""a\{ "\{y}" }c""#,
            "\"\"\"\n\"\" not the end\n\"\"\"",
            "0x1.fp3 'x' \\ @Anno",
            "\"open\n\"second",
            "non-sealed interface I permits A {}",
        ] {
            assert_tiles(source);
        }
    }

    proptest! {
        /// Token spans tile arbitrary input exactly, malformed or not.
        #[test]
        fn prop_tokens_tile_source(source in "\\PC*") {
            assert_tiles(&source);
        }

        #[test]
        fn prop_ascii_soup_tiles(source in "[a-zA-Z0-9_$ \\t\\n\"'\\\\{}<>=+./*-]{0,64}") {
            assert_tiles(&source);
        }
    }
}
