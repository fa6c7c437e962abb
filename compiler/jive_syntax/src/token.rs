//! Token types for the Jive lexer.
//!
//! Tokens are pure (kind, span) pairs: literal text is always recovered by
//! slicing the source with the span, which is what makes the output tree
//! lossless. `TokenKind` is a fieldless enum so a dense `u8` tag array can
//! mirror the token list for single-byte discriminant checks.

use super::Span;
use std::fmt;

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Slice this token's text out of the source it was lexed from.
    #[inline]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.to_range()]
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds for Jive.
///
/// Contextual keywords (`module`, `record`, `sealed`, `yield`, ...) are *not*
/// listed here: they lex as `Ident` and are reclassified by the parser at the
/// positions where the keyword reading applies.
///
/// All discriminants fit in `0..128` so parser recovery sets can use a `u128`
/// bitset.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // Special
    Eof,
    /// No lexical pattern matched (also unterminated literals).
    Error,

    // Trivia (level 0; excluded from the logical grammar)
    Whitespace,
    LineComment,
    BlockComment,

    /// Identifier, including contextual keywords.
    Ident,

    // Literals
    DecimalIntLiteral,
    HexIntLiteral,
    OctalIntLiteral,
    BinaryIntLiteral,
    DecimalFloatLiteral,
    HexFloatLiteral,
    CharLiteral,

    // String literal structure. A string literal is a sequence:
    //   StringStart (Fragment | Escape | splice)* StringEnd
    // where a splice is InterpolationStart <tokens> InterpolationEnd.
    StringStart,
    StringEnd,
    TextBlockStart,
    TextBlockEnd,
    StringFragment,
    EscapeSequence,
    /// `\{` opening an interpolation splice.
    InterpolationStart,
    /// `}` closing an interpolation splice (brace-depth tracked).
    InterpolationEnd,

    // Reserved keywords
    Abstract,
    Assert,
    Boolean,
    Break,
    Byte,
    Case,
    Catch,
    Char,
    Class,
    Const,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Enum,
    Extends,
    Final,
    Finally,
    Float,
    For,
    Goto,
    If,
    Implements,
    Import,
    Instanceof,
    Int,
    Interface,
    Long,
    Native,
    New,
    NonSealed,
    Package,
    Private,
    Protected,
    Public,
    Return,
    Short,
    Static,
    Strictfp,
    Super,
    Switch,
    Synchronized,
    This,
    Throw,
    Throws,
    Transient,
    Try,
    Void,
    Volatile,
    While,
    True,
    False,
    Null,
    /// Bare `_` (discard pattern / unnamed variable).
    Underscore,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Dot,
    /// `...`
    Ellipsis,
    At,
    /// `::`
    ColonColon,
    Colon,
    Question,
    /// `->`
    Arrow,

    // Assignment operators. `>>=` and `>>>=` do not appear here: `>` is
    // always lexed as a single token and the parser glues adjacent runs.
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    AmpEq,
    PipeEq,
    CaretEq,
    PercentEq,
    ShlEq,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    /// Always a single `>`; shift and `>=` forms are glued by the parser.
    Gt,

    // Logical / update
    AmpAmp,
    PipePipe,
    PlusPlus,
    MinusMinus,

    // Arithmetic / bitwise
    Plus,
    Minus,
    Star,
    Slash,
    Amp,
    Pipe,
    Caret,
    Percent,
    /// `<<`
    Shl,

    Bang,
    Tilde,
}

impl TokenKind {
    /// Total number of token kinds. Bitsets over kinds rely on this.
    pub const COUNT: usize = TokenKind::Tilde as usize + 1;

    /// Dense discriminant index, usable as a bit position in a `u128`.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Trivia tokens may appear between any two tokens and never alter
    /// tree shape.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    /// Trivia check on a bare discriminant tag, for dense tag arrays.
    pub const fn tag_is_trivia(tag: u8) -> bool {
        tag >= TokenKind::Whitespace as u8 && tag <= TokenKind::BlockComment as u8
    }

    /// True for every keyword reserved in all positions.
    pub const fn is_reserved_keyword(self) -> bool {
        (self as u8) >= (TokenKind::Abstract as u8) && (self as u8) <= (TokenKind::Underscore as u8)
    }

    /// True for integer and floating-point literal tokens.
    #[inline]
    pub const fn is_numeric_literal(self) -> bool {
        matches!(
            self,
            TokenKind::DecimalIntLiteral
                | TokenKind::HexIntLiteral
                | TokenKind::OctalIntLiteral
                | TokenKind::BinaryIntLiteral
                | TokenKind::DecimalFloatLiteral
                | TokenKind::HexFloatLiteral
        )
    }

    /// True for primitive type keywords.
    #[inline]
    pub const fn is_primitive_type(self) -> bool {
        matches!(
            self,
            TokenKind::Boolean
                | TokenKind::Byte
                | TokenKind::Short
                | TokenKind::Int
                | TokenKind::Long
                | TokenKind::Char
                | TokenKind::Float
                | TokenKind::Double
        )
    }

    /// Human-readable name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of file",
            TokenKind::Error => "invalid token",
            TokenKind::Whitespace => "whitespace",
            TokenKind::LineComment => "line comment",
            TokenKind::BlockComment => "block comment",
            TokenKind::Ident => "identifier",
            TokenKind::DecimalIntLiteral => "integer literal",
            TokenKind::HexIntLiteral => "hex integer literal",
            TokenKind::OctalIntLiteral => "octal integer literal",
            TokenKind::BinaryIntLiteral => "binary integer literal",
            TokenKind::DecimalFloatLiteral => "float literal",
            TokenKind::HexFloatLiteral => "hex float literal",
            TokenKind::CharLiteral => "character literal",
            TokenKind::StringStart => "`\"`",
            TokenKind::StringEnd => "`\"`",
            TokenKind::TextBlockStart => "`\"\"\"`",
            TokenKind::TextBlockEnd => "`\"\"\"`",
            TokenKind::StringFragment => "string text",
            TokenKind::EscapeSequence => "escape sequence",
            TokenKind::InterpolationStart => "`\\{`",
            TokenKind::InterpolationEnd => "`}`",
            TokenKind::Abstract => "`abstract`",
            TokenKind::Assert => "`assert`",
            TokenKind::Boolean => "`boolean`",
            TokenKind::Break => "`break`",
            TokenKind::Byte => "`byte`",
            TokenKind::Case => "`case`",
            TokenKind::Catch => "`catch`",
            TokenKind::Char => "`char`",
            TokenKind::Class => "`class`",
            TokenKind::Const => "`const`",
            TokenKind::Continue => "`continue`",
            TokenKind::Default => "`default`",
            TokenKind::Do => "`do`",
            TokenKind::Double => "`double`",
            TokenKind::Else => "`else`",
            TokenKind::Enum => "`enum`",
            TokenKind::Extends => "`extends`",
            TokenKind::Final => "`final`",
            TokenKind::Finally => "`finally`",
            TokenKind::Float => "`float`",
            TokenKind::For => "`for`",
            TokenKind::Goto => "`goto`",
            TokenKind::If => "`if`",
            TokenKind::Implements => "`implements`",
            TokenKind::Import => "`import`",
            TokenKind::Instanceof => "`instanceof`",
            TokenKind::Int => "`int`",
            TokenKind::Interface => "`interface`",
            TokenKind::Long => "`long`",
            TokenKind::Native => "`native`",
            TokenKind::New => "`new`",
            TokenKind::NonSealed => "`non-sealed`",
            TokenKind::Package => "`package`",
            TokenKind::Private => "`private`",
            TokenKind::Protected => "`protected`",
            TokenKind::Public => "`public`",
            TokenKind::Return => "`return`",
            TokenKind::Short => "`short`",
            TokenKind::Static => "`static`",
            TokenKind::Strictfp => "`strictfp`",
            TokenKind::Super => "`super`",
            TokenKind::Switch => "`switch`",
            TokenKind::Synchronized => "`synchronized`",
            TokenKind::This => "`this`",
            TokenKind::Throw => "`throw`",
            TokenKind::Throws => "`throws`",
            TokenKind::Transient => "`transient`",
            TokenKind::Try => "`try`",
            TokenKind::Void => "`void`",
            TokenKind::Volatile => "`volatile`",
            TokenKind::While => "`while`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Null => "`null`",
            TokenKind::Underscore => "`_`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::Ellipsis => "`...`",
            TokenKind::At => "`@`",
            TokenKind::ColonColon => "`::`",
            TokenKind::Colon => "`:`",
            TokenKind::Question => "`?`",
            TokenKind::Arrow => "`->`",
            TokenKind::Eq => "`=`",
            TokenKind::PlusEq => "`+=`",
            TokenKind::MinusEq => "`-=`",
            TokenKind::StarEq => "`*=`",
            TokenKind::SlashEq => "`/=`",
            TokenKind::AmpEq => "`&=`",
            TokenKind::PipeEq => "`|=`",
            TokenKind::CaretEq => "`^=`",
            TokenKind::PercentEq => "`%=`",
            TokenKind::ShlEq => "`<<=`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::Lt => "`<`",
            TokenKind::LtEq => "`<=`",
            TokenKind::Gt => "`>`",
            TokenKind::AmpAmp => "`&&`",
            TokenKind::PipePipe => "`||`",
            TokenKind::PlusPlus => "`++`",
            TokenKind::MinusMinus => "`--`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Amp => "`&`",
            TokenKind::Pipe => "`|`",
            TokenKind::Caret => "`^`",
            TokenKind::Percent => "`%`",
            TokenKind::Shl => "`<<`",
            TokenKind::Bang => "`!`",
            TokenKind::Tilde => "`~`",
        }
    }
}

/// A lexed token stream with a parallel dense tag array.
///
/// The tag array lets the parser test discriminants with a single byte load
/// instead of reading the full token. The last token is always `Eof`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
    tags: Vec<u8>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            tags: Vec::with_capacity(capacity),
        }
    }

    /// Append a token, keeping the tag array in sync.
    pub fn push(&mut self, token: Token) {
        self.tags.push(token.kind.discriminant_index());
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Dense array of discriminant tags, parallel to the token array.
    #[inline]
    pub fn tags(&self) -> &[u8] {
        &self.tags
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminants_fit_bitset() {
        // Recovery sets are u128 bitsets over discriminant indices.
        assert!(TokenKind::COUNT <= 128, "token kinds exceed u128 bitset");
        assert_eq!(TokenKind::Tilde.discriminant_index() as usize + 1, TokenKind::COUNT);
    }

    #[test]
    fn test_trivia_classification() {
        assert!(TokenKind::Whitespace.is_trivia());
        assert!(TokenKind::LineComment.is_trivia());
        assert!(TokenKind::BlockComment.is_trivia());
        assert!(!TokenKind::Ident.is_trivia());
        assert!(!TokenKind::Eof.is_trivia());
    }

    #[test]
    fn test_keyword_range() {
        assert!(TokenKind::Abstract.is_reserved_keyword());
        assert!(TokenKind::While.is_reserved_keyword());
        assert!(TokenKind::Underscore.is_reserved_keyword());
        assert!(TokenKind::NonSealed.is_reserved_keyword());
        assert!(!TokenKind::Ident.is_reserved_keyword());
        assert!(!TokenKind::LParen.is_reserved_keyword());
    }

    #[test]
    fn test_primitive_types() {
        for kind in [
            TokenKind::Boolean,
            TokenKind::Byte,
            TokenKind::Short,
            TokenKind::Int,
            TokenKind::Long,
            TokenKind::Char,
            TokenKind::Float,
            TokenKind::Double,
        ] {
            assert!(kind.is_primitive_type(), "{kind:?}");
        }
        assert!(!TokenKind::Void.is_primitive_type());
    }

    #[test]
    fn test_token_list_tags_parallel() {
        let mut list = TokenList::new();
        list.push(Token::new(TokenKind::Ident, Span::new(0, 3)));
        list.push(Token::new(TokenKind::Eof, Span::point(3)));

        assert_eq!(list.len(), 2);
        assert_eq!(list.tags().len(), 2);
        assert_eq!(list.tags()[0], TokenKind::Ident.discriminant_index());
        assert_eq!(list.tags()[1], TokenKind::Eof.discriminant_index());
    }

    #[test]
    fn test_token_text() {
        let source = "foo bar";
        let token = Token::new(TokenKind::Ident, Span::new(4, 7));
        assert_eq!(token.text(source), "bar");
    }
}
