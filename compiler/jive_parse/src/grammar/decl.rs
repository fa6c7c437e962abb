//! Declaration grammar: compilation-unit items, type declarations, members,
//! modifiers, and annotations.
//!
//! The contextual keywords live here. `record`, `sealed`, `module`, `open`,
//! `permits`, and the module-directive words lex as plain identifiers and
//! are reclassified from their position: `record Point(int x)` opens a
//! record declaration while `int record = 5;` keeps `record` as a variable
//! name.

use jive_diagnostic::ErrorCode;
use jive_syntax::{Checkpoint, Field, SyntaxKind, TokenKind};

use crate::recovery::{self, TokenSet};
use crate::{ErrorContext, Parser};

/// Recovery inside a module body: next directive word is an identifier, so
/// sync on the structural tokens only.
const MODULE_RECOVERY: TokenSet = TokenSet::new()
    .with(TokenKind::Semicolon)
    .with(TokenKind::RBrace)
    .with(TokenKind::Eof);

impl Parser<'_> {
    // ─── Compilation unit items ─────────────────────────────────────────

    pub(crate) fn at_annotated_package(&mut self) -> bool {
        if !self.at(TokenKind::At) || self.nth_at(1, TokenKind::Interface) {
            return false;
        }
        self.look_ahead(|p| {
            while p.at(TokenKind::At) && !p.nth_at(1, TokenKind::Interface) {
                p.annotation();
            }
            p.at(TokenKind::Package)
        })
    }

    pub(crate) fn package_declaration(&mut self) {
        self.with_context(ErrorContext::PackageDeclaration, |p| {
            p.start_node(SyntaxKind::PackageDeclaration);
            while p.at(TokenKind::At) && !p.nth_at(1, TokenKind::Interface) {
                p.annotation();
            }
            p.expect(TokenKind::Package, ErrorCode::E1001);
            p.scoped_identifier();
            p.expect(TokenKind::Semicolon, ErrorCode::E1001);
            p.finish_node();
        });
    }

    pub(crate) fn import_declaration(&mut self) {
        self.with_context(ErrorContext::ImportDeclaration, |p| {
            p.start_node(SyntaxKind::ImportDeclaration);
            p.bump(); // import
            if p.at(TokenKind::Static) {
                p.bump();
            }
            p.scoped_identifier();
            if p.at(TokenKind::Dot) && p.nth_at(1, TokenKind::Star) {
                p.bump(); // .
                p.start_node(SyntaxKind::Asterisk);
                p.bump(); // *
                p.finish_node();
            }
            p.expect(TokenKind::Semicolon, ErrorCode::E1001);
            p.finish_node();
        });
    }

    /// `a.b.c` name chain; used for packages, imports, module names, and
    /// annotation names.
    pub(crate) fn scoped_identifier(&mut self) {
        let cp = self.checkpoint();
        self.start_node(SyntaxKind::Identifier);
        self.expect(TokenKind::Ident, ErrorCode::E1003);
        self.finish_node();
        while self.at(TokenKind::Dot) && self.nth_at(1, TokenKind::Ident) {
            self.start_node_at(cp, SyntaxKind::ScopedIdentifier);
            self.label_last(Field::Scope);
            self.bump(); // .
            self.field(Field::Name);
            self.start_node(SyntaxKind::Identifier);
            self.bump();
            self.finish_node();
            self.finish_node();
        }
    }

    // ─── Modules ────────────────────────────────────────────────────────

    pub(crate) fn at_module_declaration(&mut self) -> bool {
        if self.at_contextual("module") && self.nth_at(1, TokenKind::Ident)
            || self.at_contextual("open") && self.nth_contextual(1, "module")
        {
            return true;
        }
        if !self.at(TokenKind::At) || self.nth_at(1, TokenKind::Interface) {
            return false;
        }
        self.look_ahead(|p| {
            while p.at(TokenKind::At) && !p.nth_at(1, TokenKind::Interface) {
                p.annotation();
            }
            p.at_contextual("module") && p.nth_at(1, TokenKind::Ident)
                || p.at_contextual("open") && p.nth_contextual(1, "module")
        })
    }

    pub(crate) fn module_declaration(&mut self) {
        self.with_context(ErrorContext::ModuleDeclaration, |p| {
            p.start_node(SyntaxKind::ModuleDeclaration);
            while p.at(TokenKind::At) && !p.nth_at(1, TokenKind::Interface) {
                p.annotation();
            }
            if p.at_contextual("open") {
                p.bump();
            }
            p.bump(); // module
            p.field(Field::Name);
            p.scoped_identifier();
            p.field(Field::Body);
            p.module_body();
            p.finish_node();
        });
    }

    fn module_body(&mut self) {
        self.start_node(SyntaxKind::ModuleBody);
        self.expect(TokenKind::LBrace, ErrorCode::E1001);
        while !self.at(TokenKind::RBrace) && !self.at_end() {
            let before = self.token_pos();
            self.module_directive();
            self.force_progress(before);
        }
        self.expect(TokenKind::RBrace, ErrorCode::E1005);
        self.finish_node();
    }

    fn module_directive(&mut self) {
        if self.at_contextual("requires") {
            self.start_node(SyntaxKind::RequiresModuleDirective);
            self.bump();
            // `requires transitive;` names a module called transitive; the
            // modifier reading needs a name after it.
            while (self.at_contextual("transitive") || self.at(TokenKind::Static))
                && self.nth_at(1, TokenKind::Ident)
            {
                self.bump();
            }
            self.field(Field::Module);
            self.scoped_identifier();
            self.expect(TokenKind::Semicolon, ErrorCode::E1001);
            self.finish_node();
        } else if self.at_contextual("exports") || self.at_contextual("opens") {
            let kind = if self.at_contextual("exports") {
                SyntaxKind::ExportsModuleDirective
            } else {
                SyntaxKind::OpensModuleDirective
            };
            self.start_node(kind);
            self.bump();
            self.scoped_identifier();
            if self.at_contextual("to") {
                self.bump();
                self.scoped_identifier();
                while self.at(TokenKind::Comma) {
                    self.bump();
                    self.scoped_identifier();
                }
            }
            self.expect(TokenKind::Semicolon, ErrorCode::E1001);
            self.finish_node();
        } else if self.at_contextual("uses") {
            self.start_node(SyntaxKind::UsesModuleDirective);
            self.bump();
            self.scoped_identifier();
            self.expect(TokenKind::Semicolon, ErrorCode::E1001);
            self.finish_node();
        } else if self.at_contextual("provides") {
            self.start_node(SyntaxKind::ProvidesModuleDirective);
            self.bump();
            self.scoped_identifier();
            if self.at_contextual("with") {
                self.bump();
                self.scoped_identifier();
                while self.at(TokenKind::Comma) {
                    self.bump();
                    self.scoped_identifier();
                }
            } else {
                self.error(ErrorCode::E1011, "`provides` needs a `with` implementation list");
            }
            self.expect(TokenKind::Semicolon, ErrorCode::E1001);
            self.finish_node();
        } else {
            let found = self.current().name();
            self.error_recover(
                ErrorCode::E1011,
                format!("expected a module directive, found {found}"),
                MODULE_RECOVERY,
            );
            if self.at(TokenKind::Semicolon) {
                self.bump();
            }
        }
    }

    // ─── Modifiers and annotations ──────────────────────────────────────

    /// Modifier run, annotations included. Emits a `Modifiers` node only
    /// when at least one is present, so the production is safe in lookahead.
    pub(crate) fn modifiers(&mut self) {
        if !self.at_modifier() {
            return;
        }
        self.start_node(SyntaxKind::Modifiers);
        while self.at_modifier() {
            if self.at(TokenKind::At) {
                self.annotation();
            } else {
                // Reserved modifier keyword or contextual `sealed`.
                self.bump();
            }
        }
        self.finish_node();
    }

    fn at_modifier(&self) -> bool {
        match self.current() {
            TokenKind::Public
            | TokenKind::Protected
            | TokenKind::Private
            | TokenKind::Abstract
            | TokenKind::Static
            | TokenKind::Final
            | TokenKind::Strictfp
            | TokenKind::Native
            | TokenKind::Synchronized
            | TokenKind::Transient
            | TokenKind::Volatile
            | TokenKind::Default
            | TokenKind::NonSealed => true,
            TokenKind::At => !self.nth_at(1, TokenKind::Interface),
            TokenKind::Ident => self.at_sealed_modifier(),
            _ => false,
        }
    }

    /// `sealed` counts as a modifier only when a type declaration follows;
    /// anywhere else it stays an ordinary name.
    fn at_sealed_modifier(&self) -> bool {
        if !self.at_contextual("sealed") {
            return false;
        }
        match self.nth(1) {
            TokenKind::Class
            | TokenKind::Interface
            | TokenKind::Enum
            | TokenKind::Abstract
            | TokenKind::Static
            | TokenKind::Final
            | TokenKind::Public
            | TokenKind::Protected
            | TokenKind::Private
            | TokenKind::Strictfp
            | TokenKind::NonSealed
            | TokenKind::At => true,
            TokenKind::Ident => self.nth_contextual(1, "record"),
            _ => false,
        }
    }

    /// `@Name` or `@Name(args)`.
    pub(crate) fn annotation(&mut self) {
        let cp = self.checkpoint();
        self.bump(); // @
        self.field(Field::Name);
        self.scoped_identifier();
        if self.at(TokenKind::LParen) {
            self.start_node_at(cp, SyntaxKind::Annotation);
            self.field(Field::Arguments);
            self.annotation_argument_list();
        } else {
            self.start_node_at(cp, SyntaxKind::MarkerAnnotation);
        }
        self.finish_node();
    }

    fn annotation_argument_list(&mut self) {
        self.with_context(ErrorContext::AnnotationArguments, |p| {
            p.start_node(SyntaxKind::AnnotationArgumentList);
            p.bump(); // (
            if !p.at(TokenKind::RParen) {
                loop {
                    if p.at(TokenKind::Ident) && p.nth_at(1, TokenKind::Eq) {
                        p.start_node(SyntaxKind::ElementValuePair);
                        p.field(Field::Key);
                        p.start_node(SyntaxKind::Identifier);
                        p.bump();
                        p.finish_node();
                        p.bump(); // =
                        p.field(Field::Value);
                        p.element_value();
                        p.finish_node();
                    } else {
                        p.element_value();
                    }
                    if p.at(TokenKind::Comma) {
                        p.bump();
                    } else {
                        break;
                    }
                }
            }
            p.expect(TokenKind::RParen, ErrorCode::E1005);
            p.finish_node();
        });
    }

    fn element_value(&mut self) {
        match self.current() {
            TokenKind::LBrace => {
                self.start_node(SyntaxKind::ElementValueArrayInitializer);
                self.bump();
                while !self.at(TokenKind::RBrace) && !self.at_end() {
                    let before = self.token_pos();
                    self.element_value();
                    if self.at(TokenKind::Comma) {
                        self.bump();
                    }
                    self.force_progress(before);
                }
                self.expect(TokenKind::RBrace, ErrorCode::E1005);
                self.finish_node();
            }
            TokenKind::At => self.annotation(),
            _ => self.expression(),
        }
    }

    // ─── Type declarations ──────────────────────────────────────────────

    /// Statement/program position starts a type declaration here: a keyword,
    /// a contextual `record`/`sealed` reading, or modifiers leading to one.
    pub(crate) fn at_type_declaration(&mut self) -> bool {
        match self.current() {
            TokenKind::Class | TokenKind::Interface | TokenKind::Enum | TokenKind::NonSealed => {
                true
            }
            TokenKind::At if self.nth_at(1, TokenKind::Interface) => true,
            TokenKind::Ident => self.at_record_declaration() || self.at_sealed_modifier(),
            kind if recovery::DECL_START.contains(kind) => self.look_ahead(|p| {
                p.modifiers();
                matches!(
                    p.current(),
                    TokenKind::Class | TokenKind::Interface | TokenKind::Enum
                ) || p.at(TokenKind::At) && p.nth_at(1, TokenKind::Interface)
                    || p.at_record_declaration()
            }),
            _ => false,
        }
    }

    /// `record Name(` or `record Name<`: the declaration reading. A plain
    /// `record` identifier (`int record = 5;`) never matches.
    pub(crate) fn at_record_declaration(&self) -> bool {
        self.at_contextual("record")
            && self.nth_at(1, TokenKind::Ident)
            && (self.nth_at(2, TokenKind::LParen) || self.nth_at(2, TokenKind::Lt))
    }

    pub(crate) fn declaration(&mut self) {
        self.with_context(ErrorContext::TypeDeclaration, |p| {
            match p.current() {
                TokenKind::Package => return p.package_declaration(),
                TokenKind::Import => return p.import_declaration(),
                _ => {}
            }
            let cp = p.checkpoint();
            p.modifiers();
            p.type_declaration_after_modifiers(cp);
        });
    }

    fn type_declaration_after_modifiers(&mut self, cp: Checkpoint) {
        match self.current() {
            TokenKind::Class => self.class_declaration(cp),
            TokenKind::Interface => self.interface_declaration(cp),
            TokenKind::Enum => self.enum_declaration(cp),
            TokenKind::At if self.nth_at(1, TokenKind::Interface) => {
                self.annotation_type_declaration(cp);
            }
            TokenKind::Ident if self.at_record_declaration() => self.record_declaration(cp),
            _ => {
                let found = self.current().name();
                self.error_recover(
                    ErrorCode::E1007,
                    format!("expected a type declaration, found {found}"),
                    recovery::STMT_RECOVERY,
                );
            }
        }
    }

    fn class_declaration(&mut self, cp: Checkpoint) {
        self.start_node_at(cp, SyntaxKind::ClassDeclaration);
        self.bump(); // class
        self.field(Field::Name);
        self.expect(TokenKind::Ident, ErrorCode::E1003);
        if self.at(TokenKind::Lt) {
            self.field(Field::TypeParameters);
            self.type_parameters();
        }
        if self.at(TokenKind::Extends) {
            self.start_node(SyntaxKind::Superclass);
            self.bump();
            if !self.type_() {
                self.error(ErrorCode::E1004, "expected a superclass type");
            }
            self.finish_node();
        }
        if self.at(TokenKind::Implements) {
            self.super_interfaces();
        }
        if self.at_contextual("permits") {
            self.permits_clause();
        }
        self.field(Field::Body);
        self.class_body();
        self.finish_node();
    }

    fn interface_declaration(&mut self, cp: Checkpoint) {
        self.start_node_at(cp, SyntaxKind::InterfaceDeclaration);
        self.bump(); // interface
        self.field(Field::Name);
        self.expect(TokenKind::Ident, ErrorCode::E1003);
        if self.at(TokenKind::Lt) {
            self.field(Field::TypeParameters);
            self.type_parameters();
        }
        if self.at(TokenKind::Extends) {
            self.start_node(SyntaxKind::ExtendsInterfaces);
            self.bump();
            self.type_list();
            self.finish_node();
        }
        if self.at_contextual("permits") {
            self.permits_clause();
        }
        self.field(Field::Body);
        self.type_body(SyntaxKind::InterfaceBody);
        self.finish_node();
    }

    fn record_declaration(&mut self, cp: Checkpoint) {
        self.start_node_at(cp, SyntaxKind::RecordDeclaration);
        self.bump(); // record
        self.field(Field::Name);
        self.expect(TokenKind::Ident, ErrorCode::E1003);
        if self.at(TokenKind::Lt) {
            self.field(Field::TypeParameters);
            self.type_parameters();
        }
        self.field(Field::Parameters);
        self.formal_parameters();
        if self.at(TokenKind::Implements) {
            self.super_interfaces();
        }
        self.field(Field::Body);
        self.class_body();
        self.finish_node();
    }

    fn enum_declaration(&mut self, cp: Checkpoint) {
        self.start_node_at(cp, SyntaxKind::EnumDeclaration);
        self.bump(); // enum
        self.field(Field::Name);
        self.expect(TokenKind::Ident, ErrorCode::E1003);
        if self.at(TokenKind::Implements) {
            self.super_interfaces();
        }
        self.field(Field::Body);
        self.enum_body();
        self.finish_node();
    }

    fn annotation_type_declaration(&mut self, cp: Checkpoint) {
        self.start_node_at(cp, SyntaxKind::AnnotationTypeDeclaration);
        self.bump(); // @
        self.bump(); // interface
        self.field(Field::Name);
        self.expect(TokenKind::Ident, ErrorCode::E1003);
        self.field(Field::Body);
        self.type_body(SyntaxKind::AnnotationTypeBody);
        self.finish_node();
    }

    fn super_interfaces(&mut self) {
        self.start_node(SyntaxKind::SuperInterfaces);
        self.bump(); // implements
        self.type_list();
        self.finish_node();
    }

    fn permits_clause(&mut self) {
        self.start_node(SyntaxKind::Permits);
        self.bump(); // permits
        self.type_list();
        self.finish_node();
    }

    fn type_list(&mut self) {
        self.start_node(SyntaxKind::TypeList);
        loop {
            if !self.type_() {
                self.error(ErrorCode::E1004, "expected a type name");
                break;
            }
            if self.at(TokenKind::Comma) {
                self.bump();
            } else {
                break;
            }
        }
        self.finish_node();
    }

    // ─── Bodies and members ─────────────────────────────────────────────

    pub(crate) fn class_body(&mut self) {
        self.type_body(SyntaxKind::ClassBody);
    }

    fn type_body(&mut self, kind: SyntaxKind) {
        self.with_context(ErrorContext::ClassBody, |p| {
            p.start_node(kind);
            p.expect(TokenKind::LBrace, ErrorCode::E1001);
            while !p.at(TokenKind::RBrace) && !p.at_end() {
                let before = p.token_pos();
                p.member(kind);
                p.force_progress(before);
            }
            p.expect(TokenKind::RBrace, ErrorCode::E1005);
            p.finish_node();
        });
    }

    fn member(&mut self, body: SyntaxKind) {
        match self.current() {
            // Stray `;` members are legal and kept as anonymous tokens.
            TokenKind::Semicolon => self.bump(),
            TokenKind::Static if self.nth_at(1, TokenKind::LBrace) => {
                self.start_node(SyntaxKind::StaticInitializer);
                self.bump();
                self.block();
                self.finish_node();
            }
            TokenKind::LBrace => self.block(),
            _ => self.member_declaration(body),
        }
    }

    fn member_declaration(&mut self, body: SyntaxKind) {
        self.with_context(ErrorContext::MemberDeclaration, |p| {
            let cp = p.checkpoint();
            p.modifiers();
            match p.current() {
                TokenKind::Class | TokenKind::Interface | TokenKind::Enum => {
                    return p.type_declaration_after_modifiers(cp);
                }
                TokenKind::At if p.nth_at(1, TokenKind::Interface) => {
                    return p.type_declaration_after_modifiers(cp);
                }
                TokenKind::Ident if p.at_record_declaration() => {
                    return p.type_declaration_after_modifiers(cp);
                }
                _ => {}
            }
            if p.at(TokenKind::Lt) {
                p.field(Field::TypeParameters);
                p.type_parameters();
            }
            if p.at(TokenKind::Ident) && p.nth_at(1, TokenKind::LParen) {
                return p.constructor_declaration(cp);
            }
            if p.at(TokenKind::Ident) && p.nth_at(1, TokenKind::LBrace) {
                return p.compact_constructor_declaration(cp);
            }
            p.field(Field::Type);
            if !p.type_() {
                let found = p.current().name();
                p.error_recover(
                    ErrorCode::E1007,
                    format!("expected a member declaration, found {found}"),
                    recovery::MEMBER_RECOVERY,
                );
                if p.at(TokenKind::Semicolon) {
                    p.bump();
                }
                return;
            }
            if p.at(TokenKind::Ident) && p.nth_at(1, TokenKind::LParen) {
                p.method_declaration(cp, body);
            } else {
                p.field_declaration(cp, body);
            }
        });
    }

    fn constructor_declaration(&mut self, cp: Checkpoint) {
        self.start_node_at(cp, SyntaxKind::ConstructorDeclaration);
        self.field(Field::Name);
        self.bump(); // name
        self.field(Field::Parameters);
        self.formal_parameters();
        if self.at(TokenKind::Throws) {
            self.throws_clause();
        }
        self.field(Field::Body);
        self.constructor_body();
        self.finish_node();
    }

    fn compact_constructor_declaration(&mut self, cp: Checkpoint) {
        self.start_node_at(cp, SyntaxKind::CompactConstructorDeclaration);
        self.field(Field::Name);
        self.bump(); // name
        self.field(Field::Body);
        self.block();
        self.finish_node();
    }

    fn constructor_body(&mut self) {
        self.start_node(SyntaxKind::ConstructorBody);
        self.expect(TokenKind::LBrace, ErrorCode::E1001);
        while !self.at(TokenKind::RBrace) && !self.at_end() {
            let before = self.token_pos();
            self.statement();
            self.force_progress(before);
        }
        self.expect(TokenKind::RBrace, ErrorCode::E1005);
        self.finish_node();
    }

    /// Method, or annotation-type element in an `@interface` body.
    fn method_declaration(&mut self, cp: Checkpoint, body: SyntaxKind) {
        let kind = if body == SyntaxKind::AnnotationTypeBody {
            SyntaxKind::AnnotationTypeElementDeclaration
        } else {
            SyntaxKind::MethodDeclaration
        };
        self.start_node_at(cp, kind);
        self.field(Field::Name);
        self.bump(); // name
        self.field(Field::Parameters);
        self.formal_parameters();
        if self.at_empty_dimension() {
            self.field(Field::Dimensions);
            self.dimensions();
        }
        if self.at(TokenKind::Throws) {
            self.throws_clause();
        }
        if kind == SyntaxKind::AnnotationTypeElementDeclaration {
            if self.at(TokenKind::Default) {
                self.start_node(SyntaxKind::DefaultValue);
                self.bump();
                self.field(Field::Value);
                self.element_value();
                self.finish_node();
            }
            self.expect(TokenKind::Semicolon, ErrorCode::E1001);
        } else if self.at(TokenKind::LBrace) {
            self.field(Field::Body);
            self.block();
        } else {
            self.expect(TokenKind::Semicolon, ErrorCode::E1001);
        }
        self.finish_node();
    }

    fn field_declaration(&mut self, cp: Checkpoint, body: SyntaxKind) {
        let kind = if body == SyntaxKind::InterfaceBody {
            SyntaxKind::ConstantDeclaration
        } else {
            SyntaxKind::FieldDeclaration
        };
        self.start_node_at(cp, kind);
        loop {
            self.field(Field::Declarator);
            if !self.variable_declarator() {
                self.error(ErrorCode::E1003, "expected a field name");
                break;
            }
            if self.at(TokenKind::Comma) {
                self.bump();
            } else {
                break;
            }
        }
        self.expect(TokenKind::Semicolon, ErrorCode::E1001);
        self.finish_node();
    }

    fn enum_body(&mut self) {
        self.start_node(SyntaxKind::EnumBody);
        self.expect(TokenKind::LBrace, ErrorCode::E1001);
        loop {
            if !self.at(TokenKind::Ident)
                && !(self.at(TokenKind::At) && !self.nth_at(1, TokenKind::Interface))
            {
                break;
            }
            self.enum_constant();
            if self.at(TokenKind::Comma) {
                self.bump();
            } else {
                break;
            }
        }
        if self.at(TokenKind::Semicolon) {
            self.start_node(SyntaxKind::EnumBodyDeclarations);
            self.bump();
            while !self.at(TokenKind::RBrace) && !self.at_end() {
                let before = self.token_pos();
                self.member(SyntaxKind::ClassBody);
                self.force_progress(before);
            }
            self.finish_node();
        }
        self.expect(TokenKind::RBrace, ErrorCode::E1005);
        self.finish_node();
    }

    fn enum_constant(&mut self) {
        self.start_node(SyntaxKind::EnumConstant);
        while self.at(TokenKind::At) && !self.nth_at(1, TokenKind::Interface) {
            self.annotation();
        }
        self.field(Field::Name);
        self.expect(TokenKind::Ident, ErrorCode::E1003);
        if self.at(TokenKind::LParen) {
            self.field(Field::Arguments);
            self.argument_list();
        }
        if self.at(TokenKind::LBrace) {
            self.field(Field::Body);
            self.class_body();
        }
        self.finish_node();
    }

    // ─── Parameters ─────────────────────────────────────────────────────

    pub(crate) fn formal_parameters(&mut self) {
        self.with_context(ErrorContext::FormalParameters, |p| {
            p.start_node(SyntaxKind::FormalParameters);
            p.expect(TokenKind::LParen, ErrorCode::E1001);
            if !p.at(TokenKind::RParen) {
                loop {
                    p.formal_parameter();
                    if p.at(TokenKind::Comma) {
                        p.bump();
                    } else {
                        break;
                    }
                }
            }
            p.expect(TokenKind::RParen, ErrorCode::E1005);
            p.finish_node();
        });
    }

    fn formal_parameter(&mut self) {
        let cp = self.checkpoint();
        self.modifiers();
        self.field(Field::Type);
        if !self.type_() {
            self.error_recover(
                ErrorCode::E1004,
                "expected a parameter type",
                recovery::LIST_RECOVERY,
            );
            return;
        }
        if self.at(TokenKind::This)
            || self.at(TokenKind::Ident)
                && self.nth_at(1, TokenKind::Dot)
                && self.nth_at(2, TokenKind::This)
        {
            self.start_node_at(cp, SyntaxKind::ReceiverParameter);
            if self.at(TokenKind::Ident) {
                self.start_node(SyntaxKind::Identifier);
                self.bump();
                self.finish_node();
                self.bump(); // .
            }
            self.bump(); // this
            self.finish_node();
        } else if self.at(TokenKind::Ellipsis) {
            self.start_node_at(cp, SyntaxKind::SpreadParameter);
            self.bump(); // ...
            self.field(Field::Name);
            if self.at(TokenKind::Ident) || self.at(TokenKind::Underscore) {
                self.bump();
            } else {
                self.error(ErrorCode::E1003, "expected a parameter name");
            }
            self.finish_node();
        } else {
            self.start_node_at(cp, SyntaxKind::FormalParameter);
            self.field(Field::Name);
            if self.at(TokenKind::Ident) || self.at(TokenKind::Underscore) {
                self.bump();
            } else {
                self.error(ErrorCode::E1003, "expected a parameter name");
            }
            if self.at_empty_dimension() {
                self.field(Field::Dimensions);
                self.dimensions();
            }
            self.finish_node();
        }
    }

    fn throws_clause(&mut self) {
        self.start_node(SyntaxKind::Throws);
        self.bump(); // throws
        loop {
            if !self.type_() {
                self.error(ErrorCode::E1004, "expected an exception type");
                break;
            }
            if self.at(TokenKind::Comma) {
                self.bump();
            } else {
                break;
            }
        }
        self.finish_node();
    }
}
