//! Pattern grammar: type patterns, record patterns, and `_` discards.
//!
//! Patterns appear after `instanceof` and in `case` labels. All pattern
//! entry points are speculative (`bool` returns) because both positions are
//! ambiguous with plain types or expressions until the pattern shape is
//! confirmed.

use jive_syntax::{Field, SyntaxKind, TokenKind};

use crate::Parser;

impl Parser<'_> {
    /// Parse one pattern. Returns `false` (with partial output; callers
    /// speculate) when the input is not pattern-shaped.
    pub(crate) fn pattern(&mut self) -> bool {
        if self.at(TokenKind::Underscore) {
            self.start_node(SyntaxKind::UnderscorePattern);
            self.bump();
            self.finish_node();
            return true;
        }
        let cp = self.checkpoint();
        if self.at(TokenKind::Final) {
            self.start_node(SyntaxKind::Modifiers);
            self.bump();
            self.finish_node();
        }
        if !self.type_() {
            return false;
        }
        if self.at(TokenKind::Ident) {
            self.start_node_at(cp, SyntaxKind::TypePattern);
            self.label_last(Field::Type);
            self.field(Field::Name);
            self.bump();
            self.finish_node();
            true
        } else if self.at(TokenKind::LParen) {
            self.start_node_at(cp, SyntaxKind::RecordPattern);
            self.label_last(Field::Type);
            let ok = self.record_pattern_body();
            self.finish_node();
            ok
        } else {
            false
        }
    }

    fn record_pattern_body(&mut self) -> bool {
        self.start_node(SyntaxKind::RecordPatternBody);
        self.bump(); // (
        let mut ok = true;
        if !self.at(TokenKind::RParen) {
            loop {
                self.start_node(SyntaxKind::RecordPatternComponent);
                let component_ok = self.pattern();
                self.finish_node();
                if !component_ok {
                    ok = false;
                    break;
                }
                if self.at(TokenKind::Comma) {
                    self.bump();
                } else {
                    break;
                }
            }
        }
        if ok {
            ok = self.at(TokenKind::RParen);
            if ok {
                self.bump();
            }
        }
        self.finish_node();
        ok
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use jive_syntax::SyntaxKind;

    #[test]
    fn test_instanceof_type_pattern() {
        let result = parse("boolean b = o instanceof String s;");
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert!(result.tree.find(SyntaxKind::TypePattern).is_some());
    }

    #[test]
    fn test_record_pattern_with_nesting() {
        let result = parse("boolean b = o instanceof Line(Point(int x, int y), Point end);");
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert!(result.tree.find(SyntaxKind::RecordPattern).is_some());
        assert_eq!(result.tree.find_all(SyntaxKind::TypePattern).len(), 3);
    }

    #[test]
    fn test_plain_instanceof_still_type() {
        let result = parse("boolean b = o instanceof String;");
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert!(result.tree.find(SyntaxKind::TypePattern).is_none());
    }
}
