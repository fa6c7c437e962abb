//! Expression grammar: precedence climbing over the operator table.
//!
//! The climb wraps the already-parsed left operand retroactively via
//! builder checkpoints, so `a + b * c` builds `(a + (b * c))` without
//! re-parsing. `>`-run operators (`>>` `>>>` `>=` `>>=` `>>>=`) are glued
//! from adjacent `>` tokens at this level only; type contexts always see
//! single `>` tokens.
//!
//! Casts are speculative: `(T)` commits as a cast only when the target
//! shape or the following token rules out a parenthesized expression.

use jive_diagnostic::ErrorCode;
use jive_syntax::precedence::{binary_prec, Assoc, Prec, ASSIGNMENT_OPS};
use jive_syntax::{Field, SyntaxKind, TokenKind};

use crate::cursor::GluedOp;
use crate::recovery::TokenSet;
use crate::{ErrorContext, Parser};

/// Tokens that can begin an expression.
pub(crate) const EXPR_START: TokenSet = TokenSet::new()
    .with(TokenKind::Ident)
    .with(TokenKind::DecimalIntLiteral)
    .with(TokenKind::HexIntLiteral)
    .with(TokenKind::OctalIntLiteral)
    .with(TokenKind::BinaryIntLiteral)
    .with(TokenKind::DecimalFloatLiteral)
    .with(TokenKind::HexFloatLiteral)
    .with(TokenKind::CharLiteral)
    .with(TokenKind::StringStart)
    .with(TokenKind::TextBlockStart)
    .with(TokenKind::True)
    .with(TokenKind::False)
    .with(TokenKind::Null)
    .with(TokenKind::This)
    .with(TokenKind::Super)
    .with(TokenKind::New)
    .with(TokenKind::Switch)
    .with(TokenKind::LParen)
    .with(TokenKind::Bang)
    .with(TokenKind::Tilde)
    .with(TokenKind::Plus)
    .with(TokenKind::Minus)
    .with(TokenKind::PlusPlus)
    .with(TokenKind::MinusMinus)
    .with(TokenKind::Boolean)
    .with(TokenKind::Byte)
    .with(TokenKind::Short)
    .with(TokenKind::Int)
    .with(TokenKind::Long)
    .with(TokenKind::Char)
    .with(TokenKind::Float)
    .with(TokenKind::Double)
    .with(TokenKind::Void);

/// Follow set that commits a speculative cast when the target is a plain
/// (possibly scoped) name. Leading `+`/`-`/`++`/`--` stay binary operators
/// for those targets, matching the parenthesized reading.
const WEAK_CAST_FOLLOW: TokenSet = TokenSet::new()
    .with(TokenKind::Ident)
    .with(TokenKind::DecimalIntLiteral)
    .with(TokenKind::HexIntLiteral)
    .with(TokenKind::OctalIntLiteral)
    .with(TokenKind::BinaryIntLiteral)
    .with(TokenKind::DecimalFloatLiteral)
    .with(TokenKind::HexFloatLiteral)
    .with(TokenKind::CharLiteral)
    .with(TokenKind::StringStart)
    .with(TokenKind::TextBlockStart)
    .with(TokenKind::True)
    .with(TokenKind::False)
    .with(TokenKind::Null)
    .with(TokenKind::This)
    .with(TokenKind::Super)
    .with(TokenKind::New)
    .with(TokenKind::Switch)
    .with(TokenKind::LParen)
    .with(TokenKind::Bang)
    .with(TokenKind::Tilde);

/// An operator the climb can consume next.
enum OpInfo {
    Binary(Prec, usize),
    Assign(usize),
}

impl Parser<'_> {
    pub(crate) fn expression(&mut self) {
        self.with_context(ErrorContext::Expression, |p| {
            p.expr_prec(Prec::Assignment.level());
        });
    }

    /// Climb operators with binding strength at least `min`.
    fn expr_prec(&mut self, min: u8) {
        let cp = self.checkpoint();
        self.unary_expression();
        loop {
            if self.at(TokenKind::Question) && Prec::Ternary.level() >= min {
                self.start_node_at(cp, SyntaxKind::TernaryExpression);
                self.label_last(Field::Condition);
                self.bump(); // ?
                self.field(Field::Consequence);
                self.expression();
                self.expect(TokenKind::Colon, ErrorCode::E1001);
                self.field(Field::Alternative);
                // Right associative: same level reenters.
                self.expr_prec(Prec::Ternary.level());
                self.finish_node();
                continue;
            }
            if self.at(TokenKind::Instanceof) && Prec::Relational.level() >= min {
                self.instanceof_tail(cp);
                continue;
            }
            match self.peek_operator() {
                Some(OpInfo::Assign(tokens)) if Prec::Assignment.level() >= min => {
                    self.start_node_at(cp, SyntaxKind::AssignmentExpression);
                    self.label_last(Field::Left);
                    self.field(Field::Operator);
                    self.bump_n(tokens);
                    self.field(Field::Right);
                    self.expr_prec(Prec::Assignment.level());
                    self.finish_node();
                }
                Some(OpInfo::Binary(prec, tokens)) if prec.level() >= min => {
                    let next_min = match prec.assoc() {
                        Assoc::Left => prec.level() + 1,
                        _ => prec.level(),
                    };
                    self.start_node_at(cp, SyntaxKind::BinaryExpression);
                    self.label_last(Field::Left);
                    self.field(Field::Operator);
                    self.bump_n(tokens);
                    self.field(Field::Right);
                    self.expr_prec(next_min);
                    self.finish_node();
                }
                _ => break,
            }
        }
    }

    /// Operator at the cursor, with the token count it spans. `>`-runs are
    /// resolved here, longest adjacent match first.
    fn peek_operator(&self) -> Option<OpInfo> {
        if let Some(glued) = self.glued_gt_op() {
            return Some(match glued {
                GluedOp::Ge => OpInfo::Binary(Prec::Relational, 2),
                GluedOp::Shr => OpInfo::Binary(Prec::Shift, 2),
                GluedOp::Ushr => OpInfo::Binary(Prec::Shift, 3),
                GluedOp::ShrAssign => OpInfo::Assign(3),
                GluedOp::UshrAssign => OpInfo::Assign(4),
            });
        }
        let kind = self.current();
        if kind == TokenKind::Gt {
            return Some(OpInfo::Binary(Prec::Relational, 1));
        }
        if ASSIGNMENT_OPS.contains(&kind) {
            return Some(OpInfo::Assign(1));
        }
        binary_prec(kind).map(|prec| OpInfo::Binary(prec, 1))
    }

    /// `left instanceof [final] (pattern | type)`.
    fn instanceof_tail(&mut self, cp: jive_syntax::Checkpoint) {
        self.start_node_at(cp, SyntaxKind::InstanceofExpression);
        self.label_last(Field::Left);
        self.bump(); // instanceof
        if self.at(TokenKind::Final) {
            self.bump();
        }
        let is_pattern = self.try_parse(|p| {
            p.field(Field::Pattern);
            p.pattern()
        });
        if !is_pattern {
            self.field(Field::Right);
            if !self.type_() {
                self.error(ErrorCode::E1004, "expected a type or pattern after `instanceof`");
            }
        }
        self.finish_node();
    }

    /// Prefix operators, casts, lambdas; falls through to postfix.
    pub(crate) fn unary_expression(&mut self) {
        match self.current() {
            TokenKind::Plus | TokenKind::Minus | TokenKind::Bang | TokenKind::Tilde => {
                self.start_node(SyntaxKind::UnaryExpression);
                self.field(Field::Operator);
                self.bump();
                self.field(Field::Operand);
                self.unary_expression();
                self.finish_node();
            }
            TokenKind::PlusPlus | TokenKind::MinusMinus => {
                self.start_node(SyntaxKind::UpdateExpression);
                self.bump();
                self.field(Field::Operand);
                self.unary_expression();
                self.finish_node();
            }
            TokenKind::LParen => {
                if self.at_lambda_start() {
                    self.lambda_expression();
                } else if self.try_parse(Self::cast_expression) {
                    // committed
                } else {
                    self.postfix_expression();
                }
            }
            TokenKind::Ident if self.nth_at(1, TokenKind::Arrow) => self.lambda_expression(),
            _ => self.postfix_expression(),
        }
    }

    /// Speculative `( type ) operand`. Returns `false` to fall back to a
    /// parenthesized expression.
    fn cast_expression(&mut self) -> bool {
        let strong_target = self.cast_target_is_strong();
        let cp = self.checkpoint();
        self.bump(); // (
        self.field(Field::Type);
        if !self.type_() {
            return false;
        }
        let mut intersection = false;
        while self.at(TokenKind::Amp) {
            self.bump();
            if !self.type_() {
                return false;
            }
            intersection = true;
        }
        if !self.at(TokenKind::RParen) {
            return false;
        }
        self.bump(); // )
        let committed = if strong_target || intersection {
            self.at_set(EXPR_START)
        } else {
            self.at_set(WEAK_CAST_FOLLOW) || self.at_lambda_operand()
        };
        if !committed {
            return false;
        }
        self.start_node_at(cp, SyntaxKind::CastExpression);
        self.field(Field::Value);
        self.unary_expression();
        self.finish_node();
        true
    }

    /// Token scan inside `( ... )`: generic arguments, array brackets,
    /// annotations, or primitive keywords make the cast reading the only
    /// possible one.
    fn cast_target_is_strong(&self) -> bool {
        let mut n = 1;
        while n < 64 {
            match self.nth(n) {
                TokenKind::RParen | TokenKind::Eof => return false,
                TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::LBracket
                | TokenKind::At
                | TokenKind::Question
                | TokenKind::Amp
                | TokenKind::Extends
                | TokenKind::Super => return true,
                kind if kind.is_primitive_type() => return true,
                _ => n += 1,
            }
        }
        false
    }

    /// `(Runnable) () -> ...` and `(Fn) x -> ...` after a weak cast target.
    fn at_lambda_operand(&self) -> bool {
        self.at(TokenKind::Ident) && self.nth_at(1, TokenKind::Arrow) || self.at_lambda_start()
    }

    /// Bounded scan: `(` ... matching `)` directly followed by `->`.
    pub(crate) fn at_lambda_start(&self) -> bool {
        if !self.at(TokenKind::LParen) {
            return false;
        }
        let mut depth = 1usize;
        let mut n = 1usize;
        while n < 256 {
            match self.nth(n) {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        return self.nth_at(n + 1, TokenKind::Arrow);
                    }
                }
                TokenKind::Eof => return false,
                _ => {}
            }
            n += 1;
        }
        false
    }

    /// `x -> e`, `(a, b) -> e`, `(T a) -> { ... }`, `() -> e`.
    pub(crate) fn lambda_expression(&mut self) {
        self.start_node(SyntaxKind::LambdaExpression);
        self.field(Field::Parameters);
        if self.at(TokenKind::Ident) {
            self.start_node(SyntaxKind::Identifier);
            self.bump();
            self.finish_node();
        } else if self.at_inferred_parameters() {
            self.start_node(SyntaxKind::InferredParameters);
            self.bump(); // (
            while self.at(TokenKind::Ident) {
                self.start_node(SyntaxKind::Identifier);
                self.bump();
                self.finish_node();
                if self.at(TokenKind::Comma) {
                    self.bump();
                }
            }
            self.expect(TokenKind::RParen, ErrorCode::E1005);
            self.finish_node();
        } else {
            self.formal_parameters();
        }
        self.expect(TokenKind::Arrow, ErrorCode::E1001);
        self.field(Field::Body);
        if self.at(TokenKind::LBrace) {
            self.block();
        } else {
            self.expression();
        }
        self.finish_node();
    }

    /// `( Ident (, Ident)* )` with nothing typed.
    fn at_inferred_parameters(&self) -> bool {
        if !self.at(TokenKind::LParen) || !self.nth_at(1, TokenKind::Ident) {
            return false;
        }
        let mut n = 1;
        while n < 256 {
            if !self.nth_at(n, TokenKind::Ident) {
                return false;
            }
            match self.nth(n + 1) {
                TokenKind::Comma => n += 2,
                TokenKind::RParen => return true,
                _ => return false,
            }
        }
        false
    }

    /// Primary expression followed by selector chains: member access,
    /// invocation, indexing, method references, postfix update, class
    /// literals.
    pub(crate) fn postfix_expression(&mut self) {
        let cp = self.checkpoint();
        self.primary();
        loop {
            match self.current() {
                TokenKind::Dot if self.nth_at(1, TokenKind::Class) => {
                    self.start_node_at(cp, SyntaxKind::ClassLiteral);
                    self.bump(); // .
                    self.bump(); // class
                    self.finish_node();
                }
                TokenKind::Dot if self.nth_at(1, TokenKind::New) => {
                    // Qualified creation: `outer.new Inner(...)`.
                    self.start_node_at(cp, SyntaxKind::ObjectCreationExpression);
                    self.bump(); // .
                    self.creation_tail();
                    self.finish_node();
                }
                TokenKind::Dot
                    if self.nth_at(1, TokenKind::Lt)
                        || self.nth_at(1, TokenKind::Ident) && self.nth_at(2, TokenKind::LParen) =>
                {
                    self.start_node_at(cp, SyntaxKind::MethodInvocation);
                    self.label_last(Field::Object);
                    self.bump(); // .
                    if self.at(TokenKind::Lt) {
                        self.field(Field::TypeArguments);
                        self.type_arguments();
                    }
                    self.field(Field::Name);
                    self.start_node(SyntaxKind::Identifier);
                    self.expect(TokenKind::Ident, ErrorCode::E1003);
                    self.finish_node();
                    self.field(Field::Arguments);
                    self.argument_list();
                    self.finish_node();
                }
                TokenKind::Dot => {
                    self.start_node_at(cp, SyntaxKind::FieldAccess);
                    self.label_last(Field::Object);
                    self.bump(); // .
                    self.field(Field::Field);
                    match self.current() {
                        TokenKind::This => {
                            self.start_node(SyntaxKind::This);
                            self.bump();
                            self.finish_node();
                        }
                        TokenKind::Super => {
                            self.start_node(SyntaxKind::Super);
                            self.bump();
                            self.finish_node();
                        }
                        _ => {
                            self.start_node(SyntaxKind::Identifier);
                            self.expect(TokenKind::Ident, ErrorCode::E1003);
                            self.finish_node();
                        }
                    }
                    self.finish_node();
                }
                TokenKind::LBracket if self.nth_at(1, TokenKind::RBracket) => {
                    // Array class literal: `Foo[].class`.
                    self.start_node_at(cp, SyntaxKind::ClassLiteral);
                    self.dimensions();
                    self.expect(TokenKind::Dot, ErrorCode::E1001);
                    self.expect(TokenKind::Class, ErrorCode::E1001);
                    self.finish_node();
                }
                TokenKind::LBracket => {
                    self.start_node_at(cp, SyntaxKind::ArrayAccess);
                    self.label_last(Field::Array);
                    self.bump(); // [
                    self.field(Field::Index);
                    self.expression();
                    self.expect(TokenKind::RBracket, ErrorCode::E1005);
                    self.finish_node();
                }
                TokenKind::ColonColon => {
                    self.start_node_at(cp, SyntaxKind::MethodReference);
                    self.bump(); // ::
                    if self.at(TokenKind::Lt) {
                        self.field(Field::TypeArguments);
                        self.type_arguments();
                    }
                    if self.at(TokenKind::New) {
                        self.bump();
                    } else {
                        self.field(Field::Name);
                        self.start_node(SyntaxKind::Identifier);
                        self.expect(TokenKind::Ident, ErrorCode::E1003);
                        self.finish_node();
                    }
                    self.finish_node();
                }
                TokenKind::PlusPlus | TokenKind::MinusMinus => {
                    self.start_node_at(cp, SyntaxKind::UpdateExpression);
                    self.label_last(Field::Operand);
                    self.bump();
                    self.finish_node();
                }
                _ => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use jive_syntax::SyntaxKind;
    use pretty_assertions::assert_eq;

    fn expr_dump(expr: &str) -> String {
        let source = format!("x = {expr};");
        let result = parse(&source);
        assert!(!result.has_errors(), "errors in {expr:?}: {:?}", result.errors);
        let assignment = result
            .tree
            .find(SyntaxKind::AssignmentExpression)
            .unwrap_or_else(|| panic!("no assignment in {expr:?}"));
        let right = result
            .tree
            .child_by_field(assignment, jive_syntax::Field::Right)
            .unwrap_or_else(|| panic!("no right side in {expr:?}"));
        match right {
            jive_syntax::Child::Node(n) => result.tree.dump_from(n),
            jive_syntax::Child::Token(_) => panic!("right side is a bare token"),
        }
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        let dump = expr_dump("a + b * c");
        assert_eq!(
            dump,
            "(BinaryExpression left: (Identifier) right: (BinaryExpression left: (Identifier) right: (Identifier)))"
        );
    }

    #[test]
    fn test_subtraction_left_associative() {
        let dump = expr_dump("a - b - c");
        assert_eq!(
            dump,
            "(BinaryExpression left: (BinaryExpression left: (Identifier) right: (Identifier)) right: (Identifier))"
        );
    }

    #[test]
    fn test_ternary_right_associative() {
        let dump = expr_dump("a ? b : c ? d : e");
        assert!(
            dump.starts_with("(TernaryExpression condition: (Identifier)"),
            "{dump}"
        );
        assert!(dump.contains("alternative: (TernaryExpression"), "{dump}");
    }

    #[test]
    fn test_assignment_right_associative() {
        let result = parse("a = b = c;");
        assert!(!result.has_errors());
        let outer = result.tree.find(SyntaxKind::AssignmentExpression);
        assert!(outer.is_some());
        assert_eq!(result.tree.find_all(SyntaxKind::AssignmentExpression).len(), 2);
    }

    #[test]
    fn test_shift_operators_glue() {
        for expr in ["a >> b", "a >>> b", "a >>= b", "a >>>= b", "a >= b"] {
            let source = format!("x = ({expr});");
            let result = parse(&source);
            assert!(!result.has_errors(), "{expr}: {:?}", result.errors);
        }
        // Spaced `>` stays relational: `a > (b > c)` never parses as shift.
        let result = parse("x = a > b;");
        assert!(!result.has_errors());
        assert!(result.tree.find(SyntaxKind::BinaryExpression).is_some());
    }

    #[test]
    fn test_cast_vs_parenthesized() {
        let result = parse("x = (Foo) bar;");
        assert!(!result.has_errors());
        assert!(result.tree.find(SyntaxKind::CastExpression).is_some());

        let result = parse("x = (bar);");
        assert!(!result.has_errors());
        assert!(result.tree.find(SyntaxKind::CastExpression).is_none());
        assert!(result.tree.find(SyntaxKind::ParenthesizedExpression).is_some());

        // `(name) + x` is addition, `(int) + x` is a cast of unary plus.
        let result = parse("x = (bar) + y;");
        assert!(!result.has_errors());
        assert!(result.tree.find(SyntaxKind::CastExpression).is_none());
        let result = parse("x = (int) + y;");
        assert!(!result.has_errors());
        assert!(result.tree.find(SyntaxKind::CastExpression).is_some());
    }

    #[test]
    fn test_generic_method_call_not_relational() {
        let result = parse("x = foo.<String>bar(y);");
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert!(result.tree.find(SyntaxKind::MethodInvocation).is_some());
        assert!(result.tree.find(SyntaxKind::TypeArguments).is_some());
    }

    #[test]
    fn test_postfix_chain() {
        let result = parse("x = a.b[i].c(d).e++;");
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert!(result.tree.find(SyntaxKind::ArrayAccess).is_some());
        assert!(result.tree.find(SyntaxKind::MethodInvocation).is_some());
        assert!(result.tree.find(SyntaxKind::FieldAccess).is_some());
        assert!(result.tree.find(SyntaxKind::UpdateExpression).is_some());
    }

    #[test]
    fn test_method_reference_and_class_literal() {
        let result = parse("x = String::valueOf; y = Foo.class; z = int.class;");
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert!(result.tree.find(SyntaxKind::MethodReference).is_some());
        assert_eq!(result.tree.find_all(SyntaxKind::ClassLiteral).len(), 2);
    }

    #[test]
    fn test_lambdas() {
        let result = parse("f = x -> x + 1; g = (a, b) -> a; h = () -> { return 1; };");
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert_eq!(result.tree.find_all(SyntaxKind::LambdaExpression).len(), 3);
        assert!(result.tree.find(SyntaxKind::InferredParameters).is_some());
    }
}
