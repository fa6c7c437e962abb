//! Structured diagnostics with labeled spans.

use std::fmt;

use jive_syntax::Span;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A span with an explanatory message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
        }
    }
}

/// A complete diagnostic: code, severity, message, labeled spans, notes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic with the code's default description.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: code.description().to_string(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn warning(code: ErrorCode) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            ..Diagnostic::error(code)
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message));
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Primary span: the first label's, or a dummy when unlabeled.
    pub fn primary_span(&self) -> Span {
        self.labels.first().map_or(Span::DUMMY, |l| l.span)
    }

    /// Render as a single line: `error[E1001]: unexpected token at 4..5`.
    pub fn render_line(&self) -> String {
        let mut out = format!("{}[{}]: {}", self.severity, self.code, self.message);
        if let Some(label) = self.labels.first() {
            out.push_str(&format!(" at {}", label.span));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_chain() {
        let diag = Diagnostic::error(ErrorCode::E1001)
            .with_message("unexpected `;`")
            .with_label(Span::new(4, 5), "here")
            .with_note("statements end at the matching brace");

        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.primary_span(), Span::new(4, 5));
        assert_eq!(diag.render_line(), "error[E1001]: unexpected `;` at 4..5");
        assert_eq!(diag.notes.len(), 1);
    }

    #[test]
    fn test_default_message() {
        let diag = Diagnostic::error(ErrorCode::E0001);
        assert_eq!(diag.message, "unterminated string literal");
        assert_eq!(diag.primary_span(), Span::DUMMY);
    }

    #[test]
    fn test_warning_severity() {
        let diag = Diagnostic::warning(ErrorCode::E0006);
        assert_eq!(diag.severity, Severity::Warning);
        assert!(diag.render_line().starts_with("warning[E0006]"));
    }
}
