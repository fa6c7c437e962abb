//! Type grammar.
//!
//! Types are parsed structurally: a simple type (primitive, identifier,
//! scoped, or generic), optionally wrapped by array dimensions and leading
//! annotations. Type productions return `bool` instead of recording hard
//! errors so callers can use them speculatively; committed call sites
//! translate `false` into a diagnostic themselves.
//!
//! Inside type context `<` always opens type arguments; the closing `>` is
//! a single token by construction, so `List<List<String>>` needs no angle
//! splitting here.

use jive_diagnostic::ErrorCode;
use jive_syntax::{Field, SyntaxKind, TokenKind};

use crate::Parser;

impl Parser<'_> {
    /// Full type: optional leading annotations, then an unannotated type.
    pub(crate) fn type_(&mut self) -> bool {
        if self.at(TokenKind::At) && !self.nth_at(1, TokenKind::Interface) {
            let cp = self.checkpoint();
            while self.at(TokenKind::At) && !self.nth_at(1, TokenKind::Interface) {
                self.annotation();
            }
            self.start_node_at(cp, SyntaxKind::AnnotatedType);
            let ok = self.unannotated_type();
            self.finish_node();
            ok
        } else {
            self.unannotated_type()
        }
    }

    /// Simple type plus any `[]` dimensions.
    pub(crate) fn unannotated_type(&mut self) -> bool {
        let cp = self.checkpoint();
        if !self.simple_type() {
            return false;
        }
        if self.at_empty_dimension() {
            self.start_node_at(cp, SyntaxKind::ArrayType);
            self.label_last(Field::Element);
            self.field(Field::Dimensions);
            self.dimensions();
            self.finish_node();
        }
        true
    }

    /// `[` of a `[]` pair (possibly annotated) with no index expression.
    /// Dimension annotations may carry qualified names and argument lists,
    /// so the annotated case scans the whole annotation run speculatively.
    pub(crate) fn at_empty_dimension(&mut self) -> bool {
        if self.at(TokenKind::LBracket) {
            return self.nth_at(1, TokenKind::RBracket);
        }
        if !self.at(TokenKind::At) || self.nth_at(1, TokenKind::Interface) {
            return false;
        }
        self.look_ahead(|p| {
            while p.at(TokenKind::At) && !p.nth_at(1, TokenKind::Interface) {
                p.annotation();
            }
            p.at(TokenKind::LBracket) && p.nth_at(1, TokenKind::RBracket)
        })
    }

    /// One `Dimensions` node covering every consecutive `[]` pair.
    pub(crate) fn dimensions(&mut self) {
        self.start_node(SyntaxKind::Dimensions);
        while self.at_empty_dimension() {
            while self.at(TokenKind::At) {
                self.annotation();
            }
            self.bump(); // [
            self.expect(TokenKind::RBracket, ErrorCode::E1005);
        }
        self.finish_node();
    }

    /// Primitive, `void`, or a (possibly scoped/generic) named type.
    pub(crate) fn simple_type(&mut self) -> bool {
        match self.current() {
            TokenKind::Void => {
                self.start_node(SyntaxKind::VoidType);
                self.bump();
                self.finish_node();
                true
            }
            TokenKind::Boolean => {
                self.start_node(SyntaxKind::BooleanType);
                self.bump();
                self.finish_node();
                true
            }
            TokenKind::Float | TokenKind::Double => {
                self.start_node(SyntaxKind::FloatingPointType);
                self.bump();
                self.finish_node();
                true
            }
            TokenKind::Byte
            | TokenKind::Short
            | TokenKind::Int
            | TokenKind::Long
            | TokenKind::Char => {
                self.start_node(SyntaxKind::IntegralType);
                self.bump();
                self.finish_node();
                true
            }
            TokenKind::Ident => self.named_type(),
            _ => false,
        }
    }

    /// `a`, `a.b.c`, `a<T>`, `a<T>.b<U>`, with scoping and generic
    /// applications interleaved.
    fn named_type(&mut self) -> bool {
        let cp = self.checkpoint();
        self.start_node(SyntaxKind::TypeIdentifier);
        self.bump();
        self.finish_node();
        loop {
            if self.at(TokenKind::Lt) {
                self.start_node_at(cp, SyntaxKind::GenericType);
                self.field(Field::TypeArguments);
                let ok = self.type_arguments();
                self.finish_node();
                if !ok {
                    return false;
                }
            } else if self.at(TokenKind::Dot) && self.nth_at(1, TokenKind::Ident) {
                self.start_node_at(cp, SyntaxKind::ScopedTypeIdentifier);
                self.label_last(Field::Scope);
                self.bump(); // .
                self.field(Field::Name);
                self.start_node(SyntaxKind::TypeIdentifier);
                self.bump();
                self.finish_node();
                self.finish_node();
            } else {
                return true;
            }
        }
    }

    /// `<>`, or `<` (type | wildcard) (`,` ...)* `>`.
    pub(crate) fn type_arguments(&mut self) -> bool {
        self.start_node(SyntaxKind::TypeArguments);
        self.bump(); // <
        let mut ok = true;
        if !self.at(TokenKind::Gt) {
            loop {
                if self.at(TokenKind::Question) {
                    self.wildcard();
                } else if !self.type_() {
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
            ok = self.at(TokenKind::Gt);
            if ok {
                self.bump();
            }
        }
        self.finish_node();
        ok
    }

    /// `?`, `? extends T`, `? super T`.
    fn wildcard(&mut self) {
        self.start_node(SyntaxKind::Wildcard);
        self.bump(); // ?
        if self.at(TokenKind::Extends) || self.at(TokenKind::Super) {
            self.bump();
            if !self.type_() {
                self.error(ErrorCode::E1004, "expected a bound type after wildcard keyword");
            }
        }
        self.finish_node();
    }

    /// `<` T (`extends` bound (`&` bound)*)? `,` ... `>` on declarations.
    pub(crate) fn type_parameters(&mut self) {
        self.start_node(SyntaxKind::TypeParameters);
        self.bump(); // <
        loop {
            if self.at(TokenKind::Ident) || self.at(TokenKind::At) {
                self.start_node(SyntaxKind::TypeParameter);
                while self.at(TokenKind::At) {
                    self.annotation();
                }
                self.field(Field::Name);
                self.expect(TokenKind::Ident, ErrorCode::E1003);
                if self.at(TokenKind::Extends) {
                    self.start_node(SyntaxKind::TypeBound);
                    self.bump();
                    if !self.type_() {
                        self.error(ErrorCode::E1004, "expected a type bound");
                    }
                    while self.at(TokenKind::Amp) {
                        self.bump();
                        if !self.type_() {
                            self.error(ErrorCode::E1004, "expected a type bound");
                            break;
                        }
                    }
                    self.finish_node();
                }
                self.finish_node();
            } else {
                self.error(ErrorCode::E1003, "expected a type parameter name");
            }
            if self.at(TokenKind::Comma) {
                self.bump();
            } else {
                break;
            }
        }
        self.expect(TokenKind::Gt, ErrorCode::E1005);
        self.finish_node();
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use jive_syntax::SyntaxKind;

    fn type_of_local(source: &str) -> String {
        let result = parse(source);
        assert!(!result.has_errors(), "errors in {source:?}: {:?}", result.errors);
        result.tree.dump()
    }

    #[test]
    fn test_nested_generic_closes_without_shift() {
        let dump = type_of_local("List<List<String>> xs = null;");
        assert!(dump.contains("GenericType"), "{dump}");
        let result = parse("Map<String, List<Integer>> m;");
        assert!(!result.has_errors());
        assert_eq!(result.tree.find_all(SyntaxKind::GenericType).len(), 2);
    }

    #[test]
    fn test_array_and_scoped_types() {
        let result = parse("int[][] grid;");
        assert!(!result.has_errors());
        assert!(result.tree.find(SyntaxKind::ArrayType).is_some());
        let result = parse("java.util.List items;");
        assert!(!result.has_errors());
        assert!(result.tree.find(SyntaxKind::ScopedTypeIdentifier).is_some());
    }

    #[test]
    fn test_annotated_dimensions() {
        let result = parse("class A { int @Foo(1) [] x; int @a.b.Foo [] y; int @A @B [] z; }");
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert_eq!(result.tree.find_all(SyntaxKind::ArrayType).len(), 3);
        assert!(result.tree.find(SyntaxKind::Annotation).is_some());
        assert!(result.tree.find(SyntaxKind::MarkerAnnotation).is_some());
    }

    #[test]
    fn test_wildcards() {
        let result = parse("List<? extends Number> xs; List<? super T> ys; List<?> zs;");
        assert!(!result.has_errors());
        assert_eq!(result.tree.find_all(SyntaxKind::Wildcard).len(), 3);
    }
}
