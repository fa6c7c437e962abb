//! Operator precedence levels.
//!
//! The level table is the single source of truth for binary/unary binding
//! strength: the expression parser climbs it, and it is exported as data for
//! anything that compiles the grammar into tables. Level 0 is reserved for
//! trivia and never competes for operator binding.

use crate::TokenKind;

/// Associativity of a precedence level.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Assoc {
    Left,
    Right,
    None,
}

/// Precedence levels, low to high binding strength.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(u8)]
pub enum Prec {
    /// Reserved for trivia; never used by operators.
    Comment = 0,
    Assignment = 1,
    /// Declarations and annotation element values share this level.
    Declaration = 2,
    Ternary = 3,
    LogicalOr = 4,
    LogicalAnd = 5,
    BitwiseOr = 6,
    BitwiseXor = 7,
    BitwiseAnd = 8,
    Equality = 9,
    /// Relational operators and generic-argument `<` share this level.
    Relational = 10,
    Shift = 11,
    Additive = 12,
    Multiplicative = 13,
    /// Casts and object creation share this level.
    Cast = 14,
    Unary = 15,
    /// Array access, member access, and parenthesized expressions.
    Postfix = 16,
    ClassLiteral = 17,
}

impl Prec {
    /// Numeric binding strength.
    #[inline]
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Associativity of this level.
    pub const fn assoc(self) -> Assoc {
        match self {
            Prec::Assignment | Prec::Ternary => Assoc::Right,
            Prec::Comment | Prec::Declaration | Prec::Cast | Prec::Unary | Prec::ClassLiteral => {
                Assoc::None
            }
            _ => Assoc::Left,
        }
    }
}

/// One row of the binary operator table.
#[derive(Copy, Clone, Debug)]
pub struct BinaryOp {
    pub token: TokenKind,
    pub prec: Prec,
}

/// Binary operators by token kind, excluding the glued `>`-run operators
/// (`>` `>=` `>>` `>>>`), which the parser recognizes by span adjacency and
/// binds at [`Prec::Relational`] / [`Prec::Shift`].
pub const BINARY_OPS: &[BinaryOp] = &[
    BinaryOp { token: TokenKind::PipePipe, prec: Prec::LogicalOr },
    BinaryOp { token: TokenKind::AmpAmp, prec: Prec::LogicalAnd },
    BinaryOp { token: TokenKind::Pipe, prec: Prec::BitwiseOr },
    BinaryOp { token: TokenKind::Caret, prec: Prec::BitwiseXor },
    BinaryOp { token: TokenKind::Amp, prec: Prec::BitwiseAnd },
    BinaryOp { token: TokenKind::EqEq, prec: Prec::Equality },
    BinaryOp { token: TokenKind::NotEq, prec: Prec::Equality },
    BinaryOp { token: TokenKind::Lt, prec: Prec::Relational },
    BinaryOp { token: TokenKind::LtEq, prec: Prec::Relational },
    BinaryOp { token: TokenKind::Shl, prec: Prec::Shift },
    BinaryOp { token: TokenKind::Plus, prec: Prec::Additive },
    BinaryOp { token: TokenKind::Minus, prec: Prec::Additive },
    BinaryOp { token: TokenKind::Star, prec: Prec::Multiplicative },
    BinaryOp { token: TokenKind::Slash, prec: Prec::Multiplicative },
    BinaryOp { token: TokenKind::Percent, prec: Prec::Multiplicative },
];

/// Look up the binary precedence of a token, if it is a binary operator.
pub fn binary_prec(token: TokenKind) -> Option<Prec> {
    BINARY_OPS
        .iter()
        .find(|op| op.token == token)
        .map(|op| op.prec)
}

/// Assignment operator tokens (all bind at [`Prec::Assignment`],
/// right-associative). `>>=`/`>>>=` are glued from `>` runs by the parser.
pub const ASSIGNMENT_OPS: &[TokenKind] = &[
    TokenKind::Eq,
    TokenKind::PlusEq,
    TokenKind::MinusEq,
    TokenKind::StarEq,
    TokenKind::SlashEq,
    TokenKind::AmpEq,
    TokenKind::PipeEq,
    TokenKind::CaretEq,
    TokenKind::PercentEq,
    TokenKind::ShlEq,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_totally_ordered() {
        assert!(Prec::Comment < Prec::Assignment);
        assert!(Prec::Assignment < Prec::Ternary);
        assert!(Prec::LogicalOr < Prec::LogicalAnd);
        assert!(Prec::Equality < Prec::Relational);
        assert!(Prec::Relational < Prec::Shift);
        assert!(Prec::Additive < Prec::Multiplicative);
        assert!(Prec::Multiplicative < Prec::Cast);
        assert!(Prec::Unary < Prec::Postfix);
        assert!(Prec::Postfix < Prec::ClassLiteral);
        assert_eq!(Prec::Comment.level(), 0);
        assert_eq!(Prec::ClassLiteral.level(), 17);
    }

    #[test]
    fn test_assoc() {
        assert_eq!(Prec::Assignment.assoc(), Assoc::Right);
        assert_eq!(Prec::Ternary.assoc(), Assoc::Right);
        assert_eq!(Prec::Additive.assoc(), Assoc::Left);
        assert_eq!(Prec::Relational.assoc(), Assoc::Left);
        assert_eq!(Prec::Cast.assoc(), Assoc::None);
    }

    #[test]
    fn test_binary_lookup() {
        assert_eq!(binary_prec(TokenKind::Star), Some(Prec::Multiplicative));
        assert_eq!(binary_prec(TokenKind::Plus), Some(Prec::Additive));
        assert_eq!(binary_prec(TokenKind::Eq), None);
        // `>` is never in the table; the parser glues it.
        assert_eq!(binary_prec(TokenKind::Gt), None);
    }

    #[test]
    fn test_comment_level_has_no_operators() {
        assert!(BINARY_OPS.iter().all(|op| op.prec != Prec::Comment));
    }
}
