//! Node kinds and supertype groupings for the syntax tree.
//!
//! `SyntaxKind` is the closed set of concrete tree-node tags. A small set of
//! abstract [`Supertype`] categories groups related kinds so consumers can
//! match on the category without enumerating every concrete kind. Every kind
//! belongs to at most one supertype; `grammar::check_grammar` in `jive_parse`
//! verifies the mapping stays total and non-overlapping.

use std::fmt;

/// Concrete node kinds produced by the parser.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum SyntaxKind {
    /// Root node: ordered sequence of top-level statements/declarations.
    Program,
    /// Wraps a span no production matched. Parsing continues around it.
    Error,

    // ─── Literals ───────────────────────────────────────────────────────
    DecimalIntegerLiteral,
    HexIntegerLiteral,
    OctalIntegerLiteral,
    BinaryIntegerLiteral,
    DecimalFloatingPointLiteral,
    HexFloatingPointLiteral,
    BooleanLiteral,
    CharacterLiteral,
    /// `"..."` with optional `\{expr}` interpolation children.
    StringLiteral,
    /// `"""..."""` with raw quotes/newlines and interpolation children.
    TextBlock,
    NullLiteral,
    /// One `\{ expression }` splice inside a string literal or text block.
    StringInterpolation,

    // ─── Expressions ────────────────────────────────────────────────────
    AssignmentExpression,
    BinaryExpression,
    InstanceofExpression,
    LambdaExpression,
    TernaryExpression,
    UpdateExpression,
    UnaryExpression,
    CastExpression,
    /// Shared surface grammar for switch in expression and statement position.
    SwitchExpression,

    // ─── Primary expressions ────────────────────────────────────────────
    Identifier,
    ClassLiteral,
    ObjectCreationExpression,
    FieldAccess,
    ArrayAccess,
    MethodInvocation,
    MethodReference,
    ArrayCreationExpression,
    ParenthesizedExpression,
    This,
    Super,

    // Expression support
    ArgumentList,
    TypeArguments,
    Dimensions,
    DimensionsExpr,
    ArrayInitializer,
    /// `(a, b)` untyped lambda parameter list.
    InferredParameters,
    SwitchBlock,
    SwitchBlockStatementGroup,
    SwitchRule,
    SwitchLabel,
    /// `when <expr>` guard on a case label.
    Guard,

    // ─── Statements ─────────────────────────────────────────────────────
    Block,
    ExpressionStatement,
    LabeledStatement,
    IfStatement,
    WhileStatement,
    DoStatement,
    ForStatement,
    EnhancedForStatement,
    AssertStatement,
    BreakStatement,
    ContinueStatement,
    ReturnStatement,
    YieldStatement,
    ThrowStatement,
    SynchronizedStatement,
    TryStatement,
    TryWithResourcesStatement,
    LocalVariableDeclaration,
    EmptyStatement,
    ExplicitConstructorInvocation,

    // Statement support
    CatchClause,
    CatchFormalParameter,
    CatchType,
    FinallyClause,
    ResourceSpecification,
    Resource,
    VariableDeclarator,

    // ─── Declarations ───────────────────────────────────────────────────
    ModuleDeclaration,
    PackageDeclaration,
    ImportDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    RecordDeclaration,
    EnumDeclaration,
    AnnotationTypeDeclaration,

    // Member declarations
    FieldDeclaration,
    ConstantDeclaration,
    MethodDeclaration,
    ConstructorDeclaration,
    CompactConstructorDeclaration,
    AnnotationTypeElementDeclaration,
    StaticInitializer,

    // Module directives
    ModuleBody,
    RequiresModuleDirective,
    ExportsModuleDirective,
    OpensModuleDirective,
    UsesModuleDirective,
    ProvidesModuleDirective,

    // Declaration support
    /// `*` in an on-demand import.
    Asterisk,
    ClassBody,
    InterfaceBody,
    EnumBody,
    EnumConstant,
    EnumBodyDeclarations,
    AnnotationTypeBody,
    ConstructorBody,
    Modifiers,
    Annotation,
    MarkerAnnotation,
    AnnotationArgumentList,
    ElementValuePair,
    ElementValueArrayInitializer,
    TypeParameters,
    TypeParameter,
    TypeBound,
    Superclass,
    SuperInterfaces,
    ExtendsInterfaces,
    Permits,
    TypeList,
    FormalParameters,
    FormalParameter,
    ReceiverParameter,
    SpreadParameter,
    Throws,
    DefaultValue,

    // ─── Types ──────────────────────────────────────────────────────────
    VoidType,
    IntegralType,
    FloatingPointType,
    BooleanType,
    TypeIdentifier,
    ScopedTypeIdentifier,
    GenericType,
    ArrayType,
    AnnotatedType,
    Wildcard,
    /// Dotted name in package/module position (`a.b.c`).
    ScopedIdentifier,

    // ─── Patterns ───────────────────────────────────────────────────────
    TypePattern,
    RecordPattern,
    RecordPatternBody,
    RecordPatternComponent,
    UnderscorePattern,
}

/// Abstract categories for pattern-matching convenience.
///
/// Each concrete [`SyntaxKind`] belongs to at most one supertype.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Supertype {
    Expression,
    Declaration,
    Statement,
    PrimaryExpression,
    Literal,
    Type,
    SimpleType,
    UnannotatedType,
    ModuleDirective,
}

impl Supertype {
    pub const ALL: [Supertype; 9] = [
        Supertype::Expression,
        Supertype::Declaration,
        Supertype::Statement,
        Supertype::PrimaryExpression,
        Supertype::Literal,
        Supertype::Type,
        Supertype::SimpleType,
        Supertype::UnannotatedType,
        Supertype::ModuleDirective,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Supertype::Expression => "expression",
            Supertype::Declaration => "declaration",
            Supertype::Statement => "statement",
            Supertype::PrimaryExpression => "primary_expression",
            Supertype::Literal => "literal",
            Supertype::Type => "type",
            Supertype::SimpleType => "simple_type",
            Supertype::UnannotatedType => "unannotated_type",
            Supertype::ModuleDirective => "module_directive",
        }
    }
}

impl fmt::Display for Supertype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl SyntaxKind {
    /// Every concrete kind, for exhaustive grammar audits.
    pub const ALL: &'static [SyntaxKind] = &[
        SyntaxKind::Program,
        SyntaxKind::Error,
        SyntaxKind::DecimalIntegerLiteral,
        SyntaxKind::HexIntegerLiteral,
        SyntaxKind::OctalIntegerLiteral,
        SyntaxKind::BinaryIntegerLiteral,
        SyntaxKind::DecimalFloatingPointLiteral,
        SyntaxKind::HexFloatingPointLiteral,
        SyntaxKind::BooleanLiteral,
        SyntaxKind::CharacterLiteral,
        SyntaxKind::StringLiteral,
        SyntaxKind::TextBlock,
        SyntaxKind::NullLiteral,
        SyntaxKind::StringInterpolation,
        SyntaxKind::AssignmentExpression,
        SyntaxKind::BinaryExpression,
        SyntaxKind::InstanceofExpression,
        SyntaxKind::LambdaExpression,
        SyntaxKind::TernaryExpression,
        SyntaxKind::UpdateExpression,
        SyntaxKind::UnaryExpression,
        SyntaxKind::CastExpression,
        SyntaxKind::SwitchExpression,
        SyntaxKind::Identifier,
        SyntaxKind::ClassLiteral,
        SyntaxKind::ObjectCreationExpression,
        SyntaxKind::FieldAccess,
        SyntaxKind::ArrayAccess,
        SyntaxKind::MethodInvocation,
        SyntaxKind::MethodReference,
        SyntaxKind::ArrayCreationExpression,
        SyntaxKind::ParenthesizedExpression,
        SyntaxKind::This,
        SyntaxKind::Super,
        SyntaxKind::ArgumentList,
        SyntaxKind::TypeArguments,
        SyntaxKind::Dimensions,
        SyntaxKind::DimensionsExpr,
        SyntaxKind::ArrayInitializer,
        SyntaxKind::InferredParameters,
        SyntaxKind::SwitchBlock,
        SyntaxKind::SwitchBlockStatementGroup,
        SyntaxKind::SwitchRule,
        SyntaxKind::SwitchLabel,
        SyntaxKind::Guard,
        SyntaxKind::Block,
        SyntaxKind::ExpressionStatement,
        SyntaxKind::LabeledStatement,
        SyntaxKind::IfStatement,
        SyntaxKind::WhileStatement,
        SyntaxKind::DoStatement,
        SyntaxKind::ForStatement,
        SyntaxKind::EnhancedForStatement,
        SyntaxKind::AssertStatement,
        SyntaxKind::BreakStatement,
        SyntaxKind::ContinueStatement,
        SyntaxKind::ReturnStatement,
        SyntaxKind::YieldStatement,
        SyntaxKind::ThrowStatement,
        SyntaxKind::SynchronizedStatement,
        SyntaxKind::TryStatement,
        SyntaxKind::TryWithResourcesStatement,
        SyntaxKind::LocalVariableDeclaration,
        SyntaxKind::EmptyStatement,
        SyntaxKind::ExplicitConstructorInvocation,
        SyntaxKind::CatchClause,
        SyntaxKind::CatchFormalParameter,
        SyntaxKind::CatchType,
        SyntaxKind::FinallyClause,
        SyntaxKind::ResourceSpecification,
        SyntaxKind::Resource,
        SyntaxKind::VariableDeclarator,
        SyntaxKind::ModuleDeclaration,
        SyntaxKind::PackageDeclaration,
        SyntaxKind::ImportDeclaration,
        SyntaxKind::ClassDeclaration,
        SyntaxKind::InterfaceDeclaration,
        SyntaxKind::RecordDeclaration,
        SyntaxKind::EnumDeclaration,
        SyntaxKind::AnnotationTypeDeclaration,
        SyntaxKind::FieldDeclaration,
        SyntaxKind::ConstantDeclaration,
        SyntaxKind::MethodDeclaration,
        SyntaxKind::ConstructorDeclaration,
        SyntaxKind::CompactConstructorDeclaration,
        SyntaxKind::AnnotationTypeElementDeclaration,
        SyntaxKind::StaticInitializer,
        SyntaxKind::ModuleBody,
        SyntaxKind::RequiresModuleDirective,
        SyntaxKind::ExportsModuleDirective,
        SyntaxKind::OpensModuleDirective,
        SyntaxKind::UsesModuleDirective,
        SyntaxKind::ProvidesModuleDirective,
        SyntaxKind::Asterisk,
        SyntaxKind::ClassBody,
        SyntaxKind::InterfaceBody,
        SyntaxKind::EnumBody,
        SyntaxKind::EnumConstant,
        SyntaxKind::EnumBodyDeclarations,
        SyntaxKind::AnnotationTypeBody,
        SyntaxKind::ConstructorBody,
        SyntaxKind::Modifiers,
        SyntaxKind::Annotation,
        SyntaxKind::MarkerAnnotation,
        SyntaxKind::AnnotationArgumentList,
        SyntaxKind::ElementValuePair,
        SyntaxKind::ElementValueArrayInitializer,
        SyntaxKind::TypeParameters,
        SyntaxKind::TypeParameter,
        SyntaxKind::TypeBound,
        SyntaxKind::Superclass,
        SyntaxKind::SuperInterfaces,
        SyntaxKind::ExtendsInterfaces,
        SyntaxKind::Permits,
        SyntaxKind::TypeList,
        SyntaxKind::FormalParameters,
        SyntaxKind::FormalParameter,
        SyntaxKind::ReceiverParameter,
        SyntaxKind::SpreadParameter,
        SyntaxKind::Throws,
        SyntaxKind::DefaultValue,
        SyntaxKind::VoidType,
        SyntaxKind::IntegralType,
        SyntaxKind::FloatingPointType,
        SyntaxKind::BooleanType,
        SyntaxKind::TypeIdentifier,
        SyntaxKind::ScopedTypeIdentifier,
        SyntaxKind::GenericType,
        SyntaxKind::ArrayType,
        SyntaxKind::AnnotatedType,
        SyntaxKind::Wildcard,
        SyntaxKind::ScopedIdentifier,
        SyntaxKind::TypePattern,
        SyntaxKind::RecordPattern,
        SyntaxKind::RecordPatternBody,
        SyntaxKind::RecordPatternComponent,
        SyntaxKind::UnderscorePattern,
    ];

    /// The supertype this kind belongs to, if any.
    pub const fn supertype(self) -> Option<Supertype> {
        use SyntaxKind as K;
        Some(match self {
            K::AssignmentExpression
            | K::BinaryExpression
            | K::InstanceofExpression
            | K::LambdaExpression
            | K::TernaryExpression
            | K::UpdateExpression
            | K::UnaryExpression
            | K::CastExpression
            | K::SwitchExpression => Supertype::Expression,

            K::Identifier
            | K::ClassLiteral
            | K::ObjectCreationExpression
            | K::FieldAccess
            | K::ArrayAccess
            | K::MethodInvocation
            | K::MethodReference
            | K::ArrayCreationExpression
            | K::ParenthesizedExpression
            | K::This => Supertype::PrimaryExpression,

            K::DecimalIntegerLiteral
            | K::HexIntegerLiteral
            | K::OctalIntegerLiteral
            | K::BinaryIntegerLiteral
            | K::DecimalFloatingPointLiteral
            | K::HexFloatingPointLiteral
            | K::BooleanLiteral
            | K::CharacterLiteral
            | K::StringLiteral
            | K::TextBlock
            | K::NullLiteral => Supertype::Literal,

            K::Block
            | K::ExpressionStatement
            | K::LabeledStatement
            | K::IfStatement
            | K::WhileStatement
            | K::DoStatement
            | K::ForStatement
            | K::EnhancedForStatement
            | K::AssertStatement
            | K::BreakStatement
            | K::ContinueStatement
            | K::ReturnStatement
            | K::YieldStatement
            | K::ThrowStatement
            | K::SynchronizedStatement
            | K::TryStatement
            | K::TryWithResourcesStatement
            | K::LocalVariableDeclaration
            | K::EmptyStatement
            | K::ExplicitConstructorInvocation => Supertype::Statement,

            K::ModuleDeclaration
            | K::PackageDeclaration
            | K::ImportDeclaration
            | K::ClassDeclaration
            | K::InterfaceDeclaration
            | K::RecordDeclaration
            | K::EnumDeclaration
            | K::AnnotationTypeDeclaration => Supertype::Declaration,

            K::RequiresModuleDirective
            | K::ExportsModuleDirective
            | K::OpensModuleDirective
            | K::UsesModuleDirective
            | K::ProvidesModuleDirective => Supertype::ModuleDirective,

            K::VoidType
            | K::IntegralType
            | K::FloatingPointType
            | K::BooleanType
            | K::TypeIdentifier
            | K::ScopedTypeIdentifier
            | K::GenericType => Supertype::SimpleType,

            K::ArrayType => Supertype::UnannotatedType,
            K::AnnotatedType => Supertype::Type,

            _ => return None,
        })
    }

    /// True for kinds valid in expression position (including primaries and
    /// literals, which carry their own supertype).
    pub const fn is_expression(self) -> bool {
        matches!(
            self.supertype(),
            Some(Supertype::Expression | Supertype::PrimaryExpression | Supertype::Literal)
        )
    }

    /// True for kinds valid in type position.
    pub const fn is_type(self) -> bool {
        matches!(
            self.supertype(),
            Some(Supertype::Type | Supertype::SimpleType | Supertype::UnannotatedType)
        )
    }

    pub const fn is_error(self) -> bool {
        matches!(self, SyntaxKind::Error)
    }
}
