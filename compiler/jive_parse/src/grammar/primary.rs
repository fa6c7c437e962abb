//! Primary expressions: literals, names, creation, parenthesized groups,
//! and string literals with interpolation splices.
//!
//! String literals arrive from the lexer as structured token runs; the
//! splice expressions inside `\{...}` are parsed here as full expression
//! subtrees under `StringInterpolation` nodes, so `"sum=\{a + b}"` contains
//! a real `BinaryExpression`.

use jive_diagnostic::ErrorCode;
use jive_syntax::{Field, SyntaxKind, TokenKind};

use crate::grammar::expr::EXPR_START;
use crate::recovery::{self, TokenSet};
use crate::{ErrorContext, Parser};

/// Recovery for a failed primary: list separators/closers plus the string
/// structure tokens, so a bad splice never swallows its terminator.
const PRIMARY_RECOVERY: TokenSet = recovery::LIST_RECOVERY
    .with(TokenKind::InterpolationEnd)
    .with(TokenKind::StringEnd)
    .with(TokenKind::TextBlockEnd);

impl Parser<'_> {
    pub(crate) fn primary(&mut self) {
        match self.current() {
            TokenKind::DecimalIntLiteral => self.literal(SyntaxKind::DecimalIntegerLiteral),
            TokenKind::HexIntLiteral => self.literal(SyntaxKind::HexIntegerLiteral),
            TokenKind::OctalIntLiteral => self.literal(SyntaxKind::OctalIntegerLiteral),
            TokenKind::BinaryIntLiteral => self.literal(SyntaxKind::BinaryIntegerLiteral),
            TokenKind::DecimalFloatLiteral => {
                self.literal(SyntaxKind::DecimalFloatingPointLiteral);
            }
            TokenKind::HexFloatLiteral => self.literal(SyntaxKind::HexFloatingPointLiteral),
            TokenKind::True | TokenKind::False => self.literal(SyntaxKind::BooleanLiteral),
            TokenKind::Null => self.literal(SyntaxKind::NullLiteral),
            TokenKind::CharLiteral => self.literal(SyntaxKind::CharacterLiteral),
            TokenKind::StringStart => {
                self.string_literal_like(SyntaxKind::StringLiteral, TokenKind::StringEnd);
            }
            TokenKind::TextBlockStart => {
                self.string_literal_like(SyntaxKind::TextBlock, TokenKind::TextBlockEnd);
            }
            TokenKind::This => self.literal(SyntaxKind::This),
            TokenKind::Super => self.literal(SyntaxKind::Super),
            TokenKind::New => self.creation_expression(),
            TokenKind::Switch => self.switch_expression(),
            TokenKind::LParen => {
                self.start_node(SyntaxKind::ParenthesizedExpression);
                self.bump();
                self.expression();
                self.expect(TokenKind::RParen, ErrorCode::E1005);
                self.finish_node();
            }
            TokenKind::Ident if self.nth_at(1, TokenKind::LParen) => {
                self.start_node(SyntaxKind::MethodInvocation);
                self.field(Field::Name);
                self.start_node(SyntaxKind::Identifier);
                self.bump();
                self.finish_node();
                self.field(Field::Arguments);
                self.argument_list();
                self.finish_node();
            }
            TokenKind::Ident | TokenKind::Underscore => {
                self.start_node(SyntaxKind::Identifier);
                self.bump();
                self.finish_node();
            }
            TokenKind::Void => {
                // `void.class`.
                self.start_node(SyntaxKind::VoidType);
                self.bump();
                self.finish_node();
            }
            kind if kind.is_primitive_type() => {
                // `int.class`, `int[].class`; the postfix loop wraps the
                // `.class` (and `[]`) selectors into a ClassLiteral.
                let handled = self.simple_type();
                debug_assert!(handled);
            }
            _ => {
                let found = self.current().name();
                self.error_recover(
                    ErrorCode::E1002,
                    format!("expected an expression, found {found}"),
                    PRIMARY_RECOVERY,
                );
            }
        }
    }

    /// Single-token literal (or `this`/`super`) wrapped in its node kind.
    fn literal(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.finish_node();
    }

    /// `"..."` or `"""..."""` body: fragments, escapes, and `\{expr}`
    /// splices until the matching end token.
    fn string_literal_like(&mut self, kind: SyntaxKind, end: TokenKind) {
        self.start_node(kind);
        self.bump(); // opening quote token
        loop {
            match self.current() {
                k if k == end => {
                    self.bump();
                    break;
                }
                TokenKind::StringFragment | TokenKind::EscapeSequence | TokenKind::Error => {
                    self.bump();
                }
                TokenKind::InterpolationStart => {
                    self.start_node(SyntaxKind::StringInterpolation);
                    self.bump();
                    self.with_context(ErrorContext::StringInterpolation, Self::expression);
                    self.expect(TokenKind::InterpolationEnd, ErrorCode::E1005);
                    self.finish_node();
                }
                // Unterminated literal: the lexer already reported it.
                _ => break,
            }
        }
        self.finish_node();
    }

    /// `new` expression: object creation or array creation, decided by the
    /// bracket following the type.
    fn creation_expression(&mut self) {
        let cp = self.checkpoint();
        self.bump(); // new
        if self.at(TokenKind::Lt) {
            self.field(Field::TypeArguments);
            self.type_arguments();
        }
        self.field(Field::Type);
        if !self.simple_type() {
            self.error_recover(
                ErrorCode::E1004,
                "expected a type after `new`",
                PRIMARY_RECOVERY,
            );
        }
        if self.at(TokenKind::LBracket) {
            self.start_node_at(cp, SyntaxKind::ArrayCreationExpression);
            while self.at(TokenKind::LBracket) {
                if self.nth_at(1, TokenKind::RBracket) {
                    self.field(Field::Dimensions);
                    self.dimensions();
                    break;
                }
                self.start_node(SyntaxKind::DimensionsExpr);
                self.bump(); // [
                self.expression();
                self.expect(TokenKind::RBracket, ErrorCode::E1005);
                self.finish_node();
            }
            if self.at(TokenKind::LBrace) {
                self.field(Field::Value);
                self.array_initializer();
            }
            self.finish_node();
        } else {
            self.start_node_at(cp, SyntaxKind::ObjectCreationExpression);
            self.field(Field::Arguments);
            self.argument_list();
            if self.at(TokenKind::LBrace) {
                self.class_body();
            }
            self.finish_node();
        }
    }

    /// Tail of a qualified creation (`outer.new Inner(...)`); the wrapping
    /// node is already open and the cursor sits on `new`.
    pub(crate) fn creation_tail(&mut self) {
        self.bump(); // new
        if self.at(TokenKind::Lt) {
            self.field(Field::TypeArguments);
            self.type_arguments();
        }
        self.field(Field::Type);
        if !self.simple_type() {
            self.error(ErrorCode::E1004, "expected a type after `new`");
        }
        self.field(Field::Arguments);
        self.argument_list();
        if self.at(TokenKind::LBrace) {
            self.class_body();
        }
    }

    /// `( expr, ... )`.
    pub(crate) fn argument_list(&mut self) {
        self.start_node(SyntaxKind::ArgumentList);
        if !self.expect(TokenKind::LParen, ErrorCode::E1001) {
            self.finish_node();
            return;
        }
        if !self.at(TokenKind::RParen) {
            loop {
                self.expression();
                if self.at(TokenKind::Comma) {
                    self.bump();
                } else {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, ErrorCode::E1005);
        self.finish_node();
    }

    /// `{ e1, e2, ... }` with nesting and optional trailing comma.
    pub(crate) fn array_initializer(&mut self) {
        self.start_node(SyntaxKind::ArrayInitializer);
        self.bump(); // {
        while !self.at(TokenKind::RBrace) && !self.at_end() {
            let before = self.token_pos();
            if self.at(TokenKind::LBrace) {
                self.array_initializer();
            } else if self.at_set(EXPR_START) {
                self.expression();
            } else {
                self.error_recover(
                    ErrorCode::E1002,
                    "expected an array element",
                    recovery::LIST_RECOVERY,
                );
            }
            if self.at(TokenKind::Comma) {
                self.bump();
            }
            self.force_progress(before);
        }
        self.expect(TokenKind::RBrace, ErrorCode::E1005);
        self.finish_node();
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use jive_syntax::{Field, SyntaxKind};

    #[test]
    fn test_interpolation_holds_expression_tree() {
        let result = parse(r#"String s = "sum=\{1 + 2}";"#);
        assert!(!result.has_errors(), "{:?}", result.errors);
        let splice = result
            .tree
            .find(SyntaxKind::StringInterpolation)
            .unwrap_or_else(|| panic!("no splice"));
        let inner: Vec<_> = result.tree.child_nodes(splice).collect();
        assert_eq!(inner.len(), 1);
        assert_eq!(result.tree.kind(inner[0]), SyntaxKind::BinaryExpression);
    }

    #[test]
    fn test_text_block_with_raw_quote_and_splice() {
        let source = "String s = \"\"\"\nsay \"hi\" to \\{name}\n\"\"\";";
        let result = parse(source);
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert!(result.tree.find(SyntaxKind::TextBlock).is_some());
        assert!(result.tree.find(SyntaxKind::StringInterpolation).is_some());
    }

    #[test]
    fn test_nested_interpolation() {
        let result = parse(r#"String s = "a\{f("inner \{x}")}b";"#);
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert_eq!(result.tree.find_all(SyntaxKind::StringInterpolation).len(), 2);
        assert_eq!(result.tree.find_all(SyntaxKind::StringLiteral).len(), 2);
    }

    #[test]
    fn test_object_and_array_creation() {
        let result = parse("Object o = new Foo<String>(1, 2); int[] a = new int[3]; int[][] b = new int[2][];");
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert!(result.tree.find(SyntaxKind::ObjectCreationExpression).is_some());
        assert_eq!(result.tree.find_all(SyntaxKind::ArrayCreationExpression).len(), 2);
    }

    #[test]
    fn test_anonymous_class_body() {
        let result = parse("Runnable r = new Runnable() { public void run() {} };");
        assert!(!result.has_errors(), "{:?}", result.errors);
        let creation = result
            .tree
            .find(SyntaxKind::ObjectCreationExpression)
            .unwrap_or_else(|| panic!("no creation"));
        assert!(result
            .tree
            .child_nodes(creation)
            .any(|n| result.tree.kind(n) == SyntaxKind::ClassBody));
    }

    #[test]
    fn test_array_initializer() {
        let result = parse("int[][] t = {{1, 2}, {3, 4},};");
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert_eq!(result.tree.find_all(SyntaxKind::ArrayInitializer).len(), 3);
    }

    #[test]
    fn test_qualified_creation() {
        let result = parse("Inner i = outer.new Inner(x);");
        assert!(!result.has_errors(), "{:?}", result.errors);
        let creation = result
            .tree
            .find(SyntaxKind::ObjectCreationExpression)
            .unwrap_or_else(|| panic!("no creation"));
        assert!(result.tree.child_by_field(creation, Field::Arguments).is_some());
    }
}
