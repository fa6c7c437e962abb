//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption. The cursor
//! walks the raw token list (trivia included) but exposes significant-token
//! lookahead, since grammar decisions never depend on trivia. Trivia between
//! the cursor and the next significant token is flushed into the tree by the
//! parser, not here.
//!
//! Includes a `tags` slice for fast O(1) discriminant checks without
//! matching on the full `TokenKind`.

use jive_syntax::{Span, Token, TokenKind, TokenList};

/// A `>`-run operator reassembled from adjacent single `>` tokens.
///
/// The lexer always emits `>` alone so that `List<List<String>>` closes two
/// type argument lists; in expression position the parser glues maximal
/// adjacent runs back into one operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GluedOp {
    /// `>=`, two tokens.
    Ge,
    /// `>>`, two tokens.
    Shr,
    /// `>>>`, three tokens.
    Ushr,
    /// `>>=`, three tokens.
    ShrAssign,
    /// `>>>=`, four tokens.
    UshrAssign,
}

impl GluedOp {
    /// Number of lexer tokens the operator spans.
    pub const fn token_count(self) -> usize {
        match self {
            GluedOp::Ge | GluedOp::Shr => 2,
            GluedOp::Ushr | GluedOp::ShrAssign => 3,
            GluedOp::UshrAssign => 4,
        }
    }

    pub const fn is_assignment(self) -> bool {
        matches!(self, GluedOp::ShrAssign | GluedOp::UshrAssign)
    }
}

/// Cursor over the token stream.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    /// Dense array of discriminant tags, parallel to `tokens`.
    tags: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        debug_assert!(!tokens.is_empty(), "token list must end with Eof");
        Cursor { tokens, tags: tokens.tags(), pos: 0 }
    }

    /// Raw position, used for snapshots and progress checks.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Restore a position captured by [`Cursor::pos`].
    pub fn set_pos(&mut self, pos: usize) {
        debug_assert!(pos <= self.tokens.len());
        self.pos = pos;
    }

    /// Raw token at the cursor, trivia included.
    #[inline]
    pub fn raw_current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    #[inline]
    pub fn raw_at_trivia(&self) -> bool {
        self.raw_current().kind.is_trivia()
    }

    /// Advance one raw token.
    #[inline]
    pub fn raw_advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Index of the `n`th significant (non-trivia) token at or after the
    /// cursor. Saturates at the trailing `Eof`.
    fn sig_index(&self, n: usize) -> usize {
        let mut i = self.pos;
        let mut remaining = n;
        let last = self.tokens.len() - 1;
        while i < last {
            if !TokenKind::tag_is_trivia(self.tags[i]) {
                if remaining == 0 {
                    return i;
                }
                remaining -= 1;
            }
            i += 1;
        }
        last
    }

    /// Current significant token.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.sig_index(0)]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Significant lookahead: token kind `n` significant tokens ahead.
    #[inline]
    pub fn nth_kind(&self, n: usize) -> TokenKind {
        self.tokens[self.sig_index(n)].kind
    }

    #[inline]
    pub fn nth_token(&self, n: usize) -> &Token {
        &self.tokens[self.sig_index(n)]
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn nth_check(&self, n: usize, kind: TokenKind) -> bool {
        self.nth_kind(n) == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Glue a `>`-run at the current significant token, longest match first.
    ///
    /// Only span-adjacent raw tokens participate: `> >` (with whitespace) is
    /// two relational operators, never a shift.
    pub fn glued_gt_op(&self) -> Option<GluedOp> {
        let i = self.sig_index(0);
        if self.tags[i] != TokenKind::Gt.discriminant_index() {
            return None;
        }
        let adj = |a: usize, b: usize| {
            b < self.tokens.len() && self.tokens[a].span.end == self.tokens[b].span.start
        };
        let kind_at = |j: usize| self.tokens.get(j).map(|t| t.kind);
        if adj(i, i + 1) && kind_at(i + 1) == Some(TokenKind::Gt) {
            if adj(i + 1, i + 2) && kind_at(i + 2) == Some(TokenKind::Gt) {
                if adj(i + 2, i + 3) && kind_at(i + 3) == Some(TokenKind::Eq) {
                    return Some(GluedOp::UshrAssign);
                }
                return Some(GluedOp::Ushr);
            }
            if adj(i + 1, i + 2) && kind_at(i + 2) == Some(TokenKind::Eq) {
                return Some(GluedOp::ShrAssign);
            }
            return Some(GluedOp::Shr);
        }
        if adj(i, i + 1) && kind_at(i + 1) == Some(TokenKind::Eq) {
            return Some(GluedOp::Ge);
        }
        None
    }
}
