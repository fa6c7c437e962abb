//! Error recovery for the parser.
//!
//! Provides token sets and synchronization for continuing parsing after
//! errors. Uses bitset-based O(1) membership testing.

use jive_syntax::TokenKind;

/// A set of token kinds using bitset representation for O(1) membership
/// testing.
///
/// Each bit in the u128 corresponds to a `TokenKind` discriminant index;
/// `TokenKind::COUNT` stays under 128 so one word covers every variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single token kind.
    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u128 << kind.discriminant_index())
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

// Pre-defined token sets for common recovery scenarios, computed at compile
// time.

/// Reserved keywords that can begin a declaration.
pub const DECL_START: TokenSet = TokenSet::new()
    .with(TokenKind::Abstract)
    .with(TokenKind::Class)
    .with(TokenKind::Enum)
    .with(TokenKind::Final)
    .with(TokenKind::Import)
    .with(TokenKind::Interface)
    .with(TokenKind::Native)
    .with(TokenKind::NonSealed)
    .with(TokenKind::Package)
    .with(TokenKind::Private)
    .with(TokenKind::Protected)
    .with(TokenKind::Public)
    .with(TokenKind::Static)
    .with(TokenKind::Strictfp)
    .with(TokenKind::Synchronized)
    .with(TokenKind::Transient)
    .with(TokenKind::Volatile)
    .with(TokenKind::At);

/// Recovery set for statement boundaries: tokens that plausibly begin the
/// next statement, plus the closers of enclosing constructs.
pub const STMT_RECOVERY: TokenSet = DECL_START
    .with(TokenKind::Assert)
    .with(TokenKind::Break)
    .with(TokenKind::Continue)
    .with(TokenKind::Do)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::Return)
    .with(TokenKind::Semicolon)
    .with(TokenKind::Switch)
    .with(TokenKind::Throw)
    .with(TokenKind::Try)
    .with(TokenKind::While)
    .with(TokenKind::LBrace)
    .with(TokenKind::RBrace)
    .with(TokenKind::Eof);

/// Recovery set for class/interface member boundaries. Includes the tokens
/// that can begin a member's type so a garbled member does not swallow the
/// next one.
pub const MEMBER_RECOVERY: TokenSet = DECL_START
    .with(TokenKind::Semicolon)
    .with(TokenKind::RBrace)
    .with(TokenKind::Void)
    .with(TokenKind::Boolean)
    .with(TokenKind::Byte)
    .with(TokenKind::Short)
    .with(TokenKind::Int)
    .with(TokenKind::Long)
    .with(TokenKind::Char)
    .with(TokenKind::Float)
    .with(TokenKind::Double)
    .with(TokenKind::Ident)
    .with(TokenKind::Lt)
    .with(TokenKind::Eof);

/// Recovery set inside parenthesized or bracketed lists.
pub const LIST_RECOVERY: TokenSet = TokenSet::new()
    .with(TokenKind::Comma)
    .with(TokenKind::RParen)
    .with(TokenKind::RBracket)
    .with(TokenKind::RBrace)
    .with(TokenKind::Semicolon)
    .with(TokenKind::Eof);

/// Recovery set for switch bodies: next label or closing brace.
pub const SWITCH_RECOVERY: TokenSet = TokenSet::new()
    .with(TokenKind::Case)
    .with(TokenKind::Default)
    .with(TokenKind::RBrace)
    .with(TokenKind::Eof);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let set = TokenSet::new();
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
        assert!(!set.contains(TokenKind::Class));
    }

    #[test]
    fn test_single_and_with() {
        let set = TokenSet::single(TokenKind::Class).with(TokenKind::Interface);
        assert_eq!(set.count(), 2);
        assert!(set.contains(TokenKind::Class));
        assert!(set.contains(TokenKind::Interface));
        assert!(!set.contains(TokenKind::Enum));
    }

    #[test]
    fn test_union() {
        let a = TokenSet::single(TokenKind::Semicolon);
        let b = TokenSet::single(TokenKind::RBrace);
        let u = a.union(b);
        assert!(u.contains(TokenKind::Semicolon));
        assert!(u.contains(TokenKind::RBrace));
        assert_eq!(u.count(), 2);
    }

    #[test]
    fn test_predefined_sets() {
        assert!(STMT_RECOVERY.contains(TokenKind::If));
        assert!(STMT_RECOVERY.contains(TokenKind::Eof));
        assert!(STMT_RECOVERY.contains(TokenKind::Class));
        assert!(!STMT_RECOVERY.contains(TokenKind::Plus));
        assert!(MEMBER_RECOVERY.contains(TokenKind::Void));
        assert!(LIST_RECOVERY.contains(TokenKind::Comma));
        assert!(SWITCH_RECOVERY.contains(TokenKind::Case));
    }
}
