//! Parse error types.
//!
//! Structured syntactic errors carrying an error code, location, and an
//! optional "while parsing X" context. Errors never abort the parse; the
//! grammar layer records them and recovers.

use jive_diagnostic::{Diagnostic, ErrorCode};
use jive_syntax::Span;

/// Context describing what was being parsed when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Program,
    ModuleDeclaration,
    PackageDeclaration,
    ImportDeclaration,
    TypeDeclaration,
    ClassBody,
    MemberDeclaration,
    FormalParameters,
    Statement,
    ForStatement,
    TryStatement,
    SwitchBlock,
    Expression,
    StringInterpolation,
    Type,
    TypeArguments,
    Pattern,
    AnnotationArguments,
}

impl ErrorContext {
    pub const fn describe(self) -> &'static str {
        match self {
            ErrorContext::Program => "a compilation unit",
            ErrorContext::ModuleDeclaration => "a module declaration",
            ErrorContext::PackageDeclaration => "a package declaration",
            ErrorContext::ImportDeclaration => "an import declaration",
            ErrorContext::TypeDeclaration => "a type declaration",
            ErrorContext::ClassBody => "a class body",
            ErrorContext::MemberDeclaration => "a member declaration",
            ErrorContext::FormalParameters => "a parameter list",
            ErrorContext::Statement => "a statement",
            ErrorContext::ForStatement => "a for statement",
            ErrorContext::TryStatement => "a try statement",
            ErrorContext::SwitchBlock => "a switch body",
            ErrorContext::Expression => "an expression",
            ErrorContext::StringInterpolation => "a string interpolation",
            ErrorContext::Type => "a type",
            ErrorContext::TypeArguments => "type arguments",
            ErrorContext::Pattern => "a pattern",
            ErrorContext::AnnotationArguments => "annotation arguments",
        }
    }
}

/// One syntactic error.
#[derive(Clone, Debug)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    pub context: Option<ErrorContext>,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError { code, message: message.into(), span, context: None }
    }

    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Lower to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, "here");
        if let Some(context) = self.context {
            diag = diag.with_note(format!("while parsing {}", context.describe()));
        }
        diag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jive_diagnostic::Severity;

    #[test]
    fn test_to_diagnostic_carries_context() {
        let err = ParseError::new(ErrorCode::E1001, "unexpected token", Span::new(3, 4))
            .with_context(ErrorContext::Expression);
        let diag = err.to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E1001);
        assert_eq!(diag.severity, Severity::Error);
        assert!(diag.notes.iter().any(|n| n.contains("an expression")));
    }
}
