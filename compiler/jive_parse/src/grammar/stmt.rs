//! Statement grammar.
//!
//! The two hard calls at statement level are local-variable-declaration
//! versus expression-statement (resolved by speculating a declaration and
//! requiring it to reach `;`) and basic versus enhanced `for` (resolved by
//! scanning the header for a `:` after a type-and-name prefix). Switch
//! bodies are shared between expression and statement position; the colon
//! and arrow label styles may not mix within one block.

use jive_diagnostic::ErrorCode;
use jive_syntax::{Field, SyntaxKind, TokenKind};

use crate::grammar::expr::EXPR_START;
use crate::recovery;
use crate::{ErrorContext, Parser};

impl Parser<'_> {
    pub(crate) fn statement(&mut self) {
        match self.current() {
            TokenKind::Semicolon => {
                self.start_node(SyntaxKind::EmptyStatement);
                self.bump();
                self.finish_node();
            }
            TokenKind::LBrace => self.block(),
            TokenKind::If => self.if_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::Do => self.do_statement(),
            TokenKind::For => self.for_statement(),
            TokenKind::Assert => self.assert_statement(),
            TokenKind::Break | TokenKind::Continue => self.break_or_continue(),
            TokenKind::Return => self.return_statement(),
            TokenKind::Throw => self.throw_statement(),
            TokenKind::Try => self.try_statement(),
            TokenKind::Switch => self.switch_expression(),
            TokenKind::Synchronized if self.nth_at(1, TokenKind::LParen) => {
                self.synchronized_statement();
            }
            TokenKind::This | TokenKind::Super if self.nth_at(1, TokenKind::LParen) => {
                self.explicit_constructor_invocation();
            }
            TokenKind::Class | TokenKind::Interface | TokenKind::Enum => self.declaration(),
            TokenKind::At if self.nth_at(1, TokenKind::Interface) => self.declaration(),
            TokenKind::Ident if self.nth_at(1, TokenKind::Colon) => self.labeled_statement(),
            TokenKind::Ident if self.at_yield_statement() => self.yield_statement(),
            _ if self.at_qualified_constructor_invocation() => {
                self.explicit_constructor_invocation();
            }
            _ if self.at_type_declaration() => self.declaration(),
            _ if recovery::DECL_START.contains(self.current()) || self.at_set(EXPR_START) => {
                self.local_declaration_or_expression();
            }
            _ => {
                let found = self.current().name();
                self.error_recover(
                    ErrorCode::E1006,
                    format!("expected a statement, found {found}"),
                    recovery::STMT_RECOVERY,
                );
            }
        }
    }

    pub(crate) fn block(&mut self) {
        self.start_node(SyntaxKind::Block);
        self.expect(TokenKind::LBrace, ErrorCode::E1001);
        while !self.at(TokenKind::RBrace) && !self.at_end() {
            let before = self.token_pos();
            self.with_context(ErrorContext::Statement, Self::statement);
            self.force_progress(before);
        }
        self.expect(TokenKind::RBrace, ErrorCode::E1005);
        self.finish_node();
    }

    /// Declaration speculation: modifiers then a type then declarators
    /// reaching `;` commits a local variable; anything else replays as an
    /// expression statement.
    fn local_declaration_or_expression(&mut self) {
        if self.local_variable_declaration() {
            return;
        }
        self.start_node(SyntaxKind::ExpressionStatement);
        self.expression();
        self.expect(TokenKind::Semicolon, ErrorCode::E1001);
        self.finish_node();
    }

    /// Builds a `LocalVariableDeclaration` (including the trailing `;`), or
    /// restores and returns `false` when the input is not declaration-shaped.
    pub(crate) fn local_variable_declaration(&mut self) -> bool {
        self.try_parse(|p| {
            let cp = p.checkpoint();
            p.modifiers();
            p.field(Field::Type);
            if !p.type_() {
                return false;
            }
            if !p.at(TokenKind::Ident) && !p.at(TokenKind::Underscore) {
                return false;
            }
            loop {
                if !p.variable_declarator() {
                    return false;
                }
                if p.at(TokenKind::Comma) {
                    p.bump();
                } else {
                    break;
                }
            }
            if !p.at(TokenKind::Semicolon) {
                return false;
            }
            p.start_node_at(cp, SyntaxKind::LocalVariableDeclaration);
            p.bump(); // ;
            p.finish_node();
            true
        })
    }

    /// `name [dims] [= value]`. Shared by locals, fields, and constants.
    pub(crate) fn variable_declarator(&mut self) -> bool {
        if !self.at(TokenKind::Ident) && !self.at(TokenKind::Underscore) {
            return false;
        }
        self.start_node(SyntaxKind::VariableDeclarator);
        self.field(Field::Name);
        self.bump();
        if self.at_empty_dimension() {
            self.field(Field::Dimensions);
            self.dimensions();
        }
        if self.at(TokenKind::Eq) {
            self.bump();
            self.field(Field::Value);
            if self.at(TokenKind::LBrace) {
                self.array_initializer();
            } else {
                self.expression();
            }
        }
        self.finish_node();
        true
    }

    /// `( expr )` condition wrapper used by if/while/do/switch/synchronized.
    fn paren_expression(&mut self) {
        self.start_node(SyntaxKind::ParenthesizedExpression);
        self.expect(TokenKind::LParen, ErrorCode::E1001);
        self.expression();
        self.expect(TokenKind::RParen, ErrorCode::E1005);
        self.finish_node();
    }

    fn if_statement(&mut self) {
        self.start_node(SyntaxKind::IfStatement);
        self.bump(); // if
        self.field(Field::Condition);
        self.paren_expression();
        self.field(Field::Consequence);
        self.statement();
        if self.at(TokenKind::Else) {
            self.bump();
            self.field(Field::Alternative);
            self.statement();
        }
        self.finish_node();
    }

    fn while_statement(&mut self) {
        self.start_node(SyntaxKind::WhileStatement);
        self.bump(); // while
        self.field(Field::Condition);
        self.paren_expression();
        self.field(Field::Body);
        self.statement();
        self.finish_node();
    }

    fn do_statement(&mut self) {
        self.start_node(SyntaxKind::DoStatement);
        self.bump(); // do
        self.field(Field::Body);
        self.statement();
        self.expect(TokenKind::While, ErrorCode::E1001);
        self.field(Field::Condition);
        self.paren_expression();
        self.expect(TokenKind::Semicolon, ErrorCode::E1001);
        self.finish_node();
    }

    fn for_statement(&mut self) {
        self.with_context(ErrorContext::ForStatement, |p| {
            let cp = p.checkpoint();
            p.bump(); // for
            p.expect(TokenKind::LParen, ErrorCode::E1001);
            if p.at_enhanced_for_header() {
                p.start_node_at(cp, SyntaxKind::EnhancedForStatement);
                p.modifiers();
                p.field(Field::Type);
                if !p.type_() {
                    p.error(ErrorCode::E1004, "expected a type in for-each header");
                }
                p.field(Field::Name);
                if p.at(TokenKind::Ident) || p.at(TokenKind::Underscore) {
                    p.bump();
                } else {
                    p.error(ErrorCode::E1003, "expected a variable name");
                }
                if p.at_empty_dimension() {
                    p.field(Field::Dimensions);
                    p.dimensions();
                }
                p.expect(TokenKind::Colon, ErrorCode::E1001);
                p.field(Field::Value);
                p.expression();
            } else {
                p.start_node_at(cp, SyntaxKind::ForStatement);
                if p.at(TokenKind::Semicolon) {
                    p.bump();
                } else {
                    p.field(Field::Init);
                    if !p.local_variable_declaration() {
                        p.expression();
                        while p.at(TokenKind::Comma) {
                            p.bump();
                            p.field(Field::Init);
                            p.expression();
                        }
                        p.expect(TokenKind::Semicolon, ErrorCode::E1001);
                    }
                }
                if !p.at(TokenKind::Semicolon) {
                    p.field(Field::Condition);
                    p.expression();
                }
                p.expect(TokenKind::Semicolon, ErrorCode::E1001);
                if !p.at(TokenKind::RParen) {
                    p.field(Field::Update);
                    p.expression();
                    while p.at(TokenKind::Comma) {
                        p.bump();
                        p.field(Field::Update);
                        p.expression();
                    }
                }
            }
            p.expect(TokenKind::RParen, ErrorCode::E1005);
            p.field(Field::Body);
            p.statement();
            p.finish_node();
        });
    }

    /// After `for (`: modifiers, a type, a name, optional dims, then `:`.
    fn at_enhanced_for_header(&mut self) -> bool {
        self.look_ahead(|p| {
            p.modifiers();
            if !p.type_() {
                return false;
            }
            if !p.at(TokenKind::Ident) && !p.at(TokenKind::Underscore) {
                return false;
            }
            p.bump();
            if p.at_empty_dimension() {
                p.dimensions();
            }
            p.at(TokenKind::Colon)
        })
    }

    fn assert_statement(&mut self) {
        self.start_node(SyntaxKind::AssertStatement);
        self.bump(); // assert
        self.field(Field::Condition);
        self.expression();
        if self.at(TokenKind::Colon) {
            self.bump();
            self.field(Field::Value);
            self.expression();
        }
        self.expect(TokenKind::Semicolon, ErrorCode::E1001);
        self.finish_node();
    }

    fn break_or_continue(&mut self) {
        let kind = if self.at(TokenKind::Break) {
            SyntaxKind::BreakStatement
        } else {
            SyntaxKind::ContinueStatement
        };
        self.start_node(kind);
        self.bump();
        if self.at(TokenKind::Ident) {
            self.field(Field::Label);
            self.start_node(SyntaxKind::Identifier);
            self.bump();
            self.finish_node();
        }
        self.expect(TokenKind::Semicolon, ErrorCode::E1001);
        self.finish_node();
    }

    fn return_statement(&mut self) {
        self.start_node(SyntaxKind::ReturnStatement);
        self.bump(); // return
        if !self.at(TokenKind::Semicolon) {
            self.field(Field::Value);
            self.expression();
        }
        self.expect(TokenKind::Semicolon, ErrorCode::E1001);
        self.finish_node();
    }

    fn throw_statement(&mut self) {
        self.start_node(SyntaxKind::ThrowStatement);
        self.bump(); // throw
        self.field(Field::Value);
        self.expression();
        self.expect(TokenKind::Semicolon, ErrorCode::E1001);
        self.finish_node();
    }

    fn synchronized_statement(&mut self) {
        self.start_node(SyntaxKind::SynchronizedStatement);
        self.bump(); // synchronized
        self.paren_expression();
        self.field(Field::Body);
        self.block();
        self.finish_node();
    }

    fn labeled_statement(&mut self) {
        self.start_node(SyntaxKind::LabeledStatement);
        self.field(Field::Label);
        self.start_node(SyntaxKind::Identifier);
        self.bump();
        self.finish_node();
        self.bump(); // :
        self.field(Field::Body);
        self.statement();
        self.finish_node();
    }

    /// Contextual `yield`: a statement only when followed by something that
    /// starts an expression. `yield = 5`, `yield.run()`, `yield++` keep the
    /// identifier reading.
    fn at_yield_statement(&self) -> bool {
        if !self.at_contextual("yield") {
            return false;
        }
        let next = self.nth(1);
        EXPR_START.contains(next)
            && !matches!(next, TokenKind::PlusPlus | TokenKind::MinusMinus)
    }

    fn yield_statement(&mut self) {
        self.start_node(SyntaxKind::YieldStatement);
        self.bump(); // yield
        self.field(Field::Value);
        self.expression();
        self.expect(TokenKind::Semicolon, ErrorCode::E1001);
        self.finish_node();
    }

    /// `this(...)`, `super(...)`, or `a.b.super(...)` in statement position.
    fn at_qualified_constructor_invocation(&self) -> bool {
        if !self.at(TokenKind::Ident) {
            return false;
        }
        let mut n = 0;
        while n < 64 && self.nth_at(n, TokenKind::Ident) && self.nth_at(n + 1, TokenKind::Dot) {
            n += 2;
        }
        n > 0 && self.nth_at(n, TokenKind::Super) && self.nth_at(n + 1, TokenKind::LParen)
    }

    fn explicit_constructor_invocation(&mut self) {
        self.start_node(SyntaxKind::ExplicitConstructorInvocation);
        while self.at(TokenKind::Ident) {
            self.field(Field::Object);
            self.start_node(SyntaxKind::Identifier);
            self.bump();
            self.finish_node();
            self.expect(TokenKind::Dot, ErrorCode::E1001);
        }
        self.field(Field::Constructor);
        match self.current() {
            TokenKind::This => {
                self.start_node(SyntaxKind::This);
                self.bump();
                self.finish_node();
            }
            _ => {
                self.start_node(SyntaxKind::Super);
                self.expect(TokenKind::Super, ErrorCode::E1001);
                self.finish_node();
            }
        }
        self.field(Field::Arguments);
        self.argument_list();
        self.expect(TokenKind::Semicolon, ErrorCode::E1001);
        self.finish_node();
    }

    // ─── try ────────────────────────────────────────────────────────────

    fn try_statement(&mut self) {
        self.with_context(ErrorContext::TryStatement, |p| {
            let cp = p.checkpoint();
            p.bump(); // try
            let with_resources = p.at(TokenKind::LParen);
            if with_resources {
                p.field(Field::Resources);
                p.resource_specification();
            }
            p.start_node_at(
                cp,
                if with_resources {
                    SyntaxKind::TryWithResourcesStatement
                } else {
                    SyntaxKind::TryStatement
                },
            );
            p.field(Field::Body);
            p.block();
            let mut handled = with_resources;
            while p.at(TokenKind::Catch) {
                handled = true;
                p.catch_clause();
            }
            if p.at(TokenKind::Finally) {
                handled = true;
                p.start_node(SyntaxKind::FinallyClause);
                p.bump();
                p.block();
                p.finish_node();
            }
            if !handled {
                p.error(
                    ErrorCode::E1012,
                    "`try` needs a `catch` clause, a `finally` clause, or resources",
                );
            }
            p.finish_node();
        });
    }

    fn resource_specification(&mut self) {
        self.start_node(SyntaxKind::ResourceSpecification);
        self.bump(); // (
        while !self.at(TokenKind::RParen) && !self.at_end() {
            let before = self.token_pos();
            self.resource();
            if self.at(TokenKind::Semicolon) {
                self.bump();
            } else {
                break;
            }
            self.force_progress(before);
        }
        self.expect(TokenKind::RParen, ErrorCode::E1005);
        self.finish_node();
    }

    /// `[modifiers] type name = expr`, or an existing variable reference.
    fn resource(&mut self) {
        self.start_node(SyntaxKind::Resource);
        let declared = self.try_parse(|p| {
            p.modifiers();
            p.field(Field::Type);
            if !p.type_() {
                return false;
            }
            if !p.at(TokenKind::Ident) && !p.at(TokenKind::Underscore) {
                return false;
            }
            p.field(Field::Name);
            p.bump();
            if !p.at(TokenKind::Eq) {
                return false;
            }
            p.bump();
            p.field(Field::Value);
            p.expression();
            true
        });
        if !declared {
            self.expression();
        }
        self.finish_node();
    }

    fn catch_clause(&mut self) {
        self.start_node(SyntaxKind::CatchClause);
        self.bump(); // catch
        self.expect(TokenKind::LParen, ErrorCode::E1001);
        self.start_node(SyntaxKind::CatchFormalParameter);
        self.modifiers();
        self.start_node(SyntaxKind::CatchType);
        if !self.type_() {
            self.error(ErrorCode::E1004, "expected an exception type");
        }
        while self.at(TokenKind::Pipe) {
            self.bump();
            if !self.type_() {
                self.error(ErrorCode::E1004, "expected an exception type");
                break;
            }
        }
        self.finish_node();
        self.field(Field::Name);
        if self.at(TokenKind::Ident) || self.at(TokenKind::Underscore) {
            self.bump();
        } else {
            self.error(ErrorCode::E1003, "expected an exception variable name");
        }
        self.finish_node();
        self.expect(TokenKind::RParen, ErrorCode::E1005);
        self.field(Field::Body);
        self.block();
        self.finish_node();
    }

    // ─── switch ─────────────────────────────────────────────────────────

    /// `switch (subject) { ... }`. One surface grammar serves expression
    /// and statement position.
    pub(crate) fn switch_expression(&mut self) {
        self.start_node(SyntaxKind::SwitchExpression);
        self.bump(); // switch
        self.field(Field::Condition);
        self.paren_expression();
        self.field(Field::Body);
        self.switch_block();
        self.finish_node();
    }

    fn switch_block(&mut self) {
        self.with_context(ErrorContext::SwitchBlock, |p| {
            p.start_node(SyntaxKind::SwitchBlock);
            p.expect(TokenKind::LBrace, ErrorCode::E1001);
            // true = arrow rules, false = colon groups; fixed by the first
            // label, mixing reported once.
            let mut arrow_style: Option<bool> = None;
            let mut mix_reported = false;
            while !p.at(TokenKind::RBrace) && !p.at_end() {
                let before = p.token_pos();
                if p.at(TokenKind::Case) || p.at(TokenKind::Default) {
                    let cp = p.checkpoint();
                    p.switch_label();
                    let is_arrow = p.at(TokenKind::Arrow);
                    match arrow_style {
                        None => arrow_style = Some(is_arrow),
                        Some(style) if style != is_arrow && !mix_reported => {
                            mix_reported = true;
                            p.error(
                                ErrorCode::E1008,
                                "cannot mix `->` rules and `:` groups in one switch block",
                            );
                        }
                        _ => {}
                    }
                    if is_arrow {
                        p.switch_rule(cp);
                    } else {
                        p.switch_group(cp);
                    }
                } else {
                    p.error_recover(
                        ErrorCode::E1001,
                        "expected `case`, `default`, or `}`",
                        recovery::SWITCH_RECOVERY,
                    );
                }
                p.force_progress(before);
            }
            p.expect(TokenKind::RBrace, ErrorCode::E1005);
            p.finish_node();
        });
    }

    /// `label -> (expr ; | block | throw)`, wrapped around the parsed label.
    fn switch_rule(&mut self, cp: jive_syntax::Checkpoint) {
        self.start_node_at(cp, SyntaxKind::SwitchRule);
        self.bump(); // ->
        self.field(Field::Body);
        match self.current() {
            TokenKind::LBrace => self.block(),
            TokenKind::Throw => self.throw_statement(),
            _ => {
                self.start_node(SyntaxKind::ExpressionStatement);
                self.expression();
                self.expect(TokenKind::Semicolon, ErrorCode::E1001);
                self.finish_node();
            }
        }
        self.finish_node();
    }

    /// `label : (label :)* statement*`, wrapped around the first label.
    fn switch_group(&mut self, cp: jive_syntax::Checkpoint) {
        self.start_node_at(cp, SyntaxKind::SwitchBlockStatementGroup);
        self.expect(TokenKind::Colon, ErrorCode::E1001);
        while self.at(TokenKind::Case) || self.at(TokenKind::Default) {
            self.switch_label();
            self.expect(TokenKind::Colon, ErrorCode::E1001);
        }
        while !self.at_set(recovery::SWITCH_RECOVERY) && !self.at_end() {
            let before = self.token_pos();
            self.statement();
            self.force_progress(before);
        }
        self.finish_node();
    }

    /// `default`, or `case` elements separated by commas with an optional
    /// trailing `when` guard. Elements prefer the pattern reading when the
    /// pattern is followed by a label terminator.
    fn switch_label(&mut self) {
        self.start_node(SyntaxKind::SwitchLabel);
        if self.at(TokenKind::Default) {
            self.bump();
        } else {
            self.bump(); // case
            loop {
                self.case_element();
                if self.at(TokenKind::Comma) {
                    self.bump();
                } else {
                    break;
                }
            }
            if self.at_contextual("when") {
                self.start_node(SyntaxKind::Guard);
                self.bump(); // when
                self.field(Field::Condition);
                self.expression();
                self.finish_node();
            }
        }
        self.finish_node();
    }

    fn case_element(&mut self) {
        // `case null, default` keeps the bare keyword.
        if self.at(TokenKind::Default) {
            self.bump();
            return;
        }
        let is_pattern = self.try_parse(|p| {
            if !p.pattern() {
                return false;
            }
            matches!(
                p.current(),
                TokenKind::Arrow | TokenKind::Colon | TokenKind::Comma
            ) || p.at_contextual("when")
        });
        if !is_pattern {
            self.expression();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use jive_diagnostic::ErrorCode;
    use jive_syntax::SyntaxKind;

    fn ok(source: &str) -> crate::ParseResult {
        let result = parse(source);
        assert!(!result.has_errors(), "errors in {source:?}: {:?}", result.errors);
        result
    }

    #[test]
    fn test_local_declaration_vs_expression_statement() {
        let result = ok("int x = 5; x = 6; a.b.C d; f(x);");
        assert_eq!(result.tree.find_all(SyntaxKind::LocalVariableDeclaration).len(), 2);
        assert_eq!(result.tree.find_all(SyntaxKind::ExpressionStatement).len(), 2);
    }

    #[test]
    fn test_var_and_multiple_declarators() {
        let result = ok("var xs = f(); int a = 1, b[] = {2}, c;");
        assert_eq!(result.tree.find_all(SyntaxKind::VariableDeclarator).len(), 4);
    }

    #[test]
    fn test_if_else_chain() {
        let result = ok("if (a) f(); else if (b) { g(); } else h();");
        assert_eq!(result.tree.find_all(SyntaxKind::IfStatement).len(), 2);
    }

    #[test]
    fn test_basic_and_enhanced_for() {
        let result = ok("for (int i = 0; i < n; i++) f(i); for (final String s : items) g(s);");
        assert!(result.tree.find(SyntaxKind::ForStatement).is_some());
        assert!(result.tree.find(SyntaxKind::EnhancedForStatement).is_some());
    }

    #[test]
    fn test_for_with_expression_init_and_empty_clauses() {
        ok("for (i = 0, j = n; ; i++, j--) { if (i >= j) break; }");
        ok("for (;;) break;");
    }

    #[test]
    fn test_while_do_labeled() {
        let result = ok("outer: while (a) { do { continue outer; } while (b); }");
        assert!(result.tree.find(SyntaxKind::LabeledStatement).is_some());
        assert!(result.tree.find(SyntaxKind::DoStatement).is_some());
    }

    #[test]
    fn test_try_catch_finally_and_resources() {
        let result = ok(
            "try { f(); } catch (A | B e) { g(); } finally { h(); } \
             try (var in = open(); out) { use(in); }",
        );
        assert!(result.tree.find(SyntaxKind::TryStatement).is_some());
        assert!(result.tree.find(SyntaxKind::TryWithResourcesStatement).is_some());
        assert_eq!(result.tree.find_all(SyntaxKind::Resource).len(), 2);
    }

    #[test]
    fn test_bare_try_is_an_error() {
        let result = parse("try { f(); }");
        assert!(result.errors.iter().any(|e| e.code == ErrorCode::E1012));
    }

    #[test]
    fn test_switch_arrow_rules() {
        let result = ok(
            "int r = switch (x) { case 1, 2 -> a; case String s when s.isEmpty() -> b; default -> { yield c; } };",
        );
        assert_eq!(result.tree.find_all(SyntaxKind::SwitchRule).len(), 3);
        assert!(result.tree.find(SyntaxKind::Guard).is_some());
        assert!(result.tree.find(SyntaxKind::YieldStatement).is_some());
        assert!(result.tree.find(SyntaxKind::TypePattern).is_some());
    }

    #[test]
    fn test_switch_colon_groups() {
        let result = ok("switch (x) { case 1: case 2: f(); break; default: g(); }");
        assert_eq!(result.tree.find_all(SyntaxKind::SwitchBlockStatementGroup).len(), 2);
        assert!(result.tree.find(SyntaxKind::SwitchRule).is_none());
    }

    #[test]
    fn test_switch_style_mixing_reported_once() {
        let result = parse("switch (x) { case 1 -> f(); case 2: g(); case 3: h(); }");
        let mixes: Vec<_> =
            result.errors.iter().filter(|e| e.code == ErrorCode::E1008).collect();
        assert_eq!(mixes.len(), 1);
    }

    #[test]
    fn test_yield_identifier_stays_expression() {
        let result = ok("yield = 5; yield.run(); yield++;");
        assert!(result.tree.find(SyntaxKind::YieldStatement).is_none());
        assert_eq!(result.tree.find_all(SyntaxKind::ExpressionStatement).len(), 3);
    }

    #[test]
    fn test_explicit_constructor_invocation() {
        let result = ok("this(1, 2); super(x); Outer.super(y);");
        assert_eq!(
            result.tree.find_all(SyntaxKind::ExplicitConstructorInvocation).len(),
            3
        );
    }

    #[test]
    fn test_assert_return_throw_synchronized() {
        let result = ok(
            "assert x > 0 : \"bad\"; synchronized (lock) { return v; } throw new E();",
        );
        assert!(result.tree.find(SyntaxKind::AssertStatement).is_some());
        assert!(result.tree.find(SyntaxKind::SynchronizedStatement).is_some());
        assert!(result.tree.find(SyntaxKind::ReturnStatement).is_some());
        assert!(result.tree.find(SyntaxKind::ThrowStatement).is_some());
    }

    #[test]
    fn test_recovery_yields_error_node_and_continues() {
        let result = parse("int x = ; int y = 2;");
        assert!(result.has_errors());
        assert!(result.tree.find(SyntaxKind::Error).is_some());
        assert!(!result.tree.find_all(SyntaxKind::VariableDeclarator).is_empty());
    }
}
