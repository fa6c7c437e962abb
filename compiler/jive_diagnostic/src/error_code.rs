//! Error codes for front-end diagnostics.

use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexical errors
/// - E1xxx: Syntactic errors
/// - E9xxx: Grammar-authoring errors (build-time, never user-facing)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexical errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unterminated text block
    E0002,
    /// Unterminated character literal
    E0003,
    /// Unterminated block comment
    E0004,
    /// Invalid escape sequence
    E0005,
    /// Invalid character in source
    E0006,
    /// Malformed numeric literal
    E0007,
    /// Unterminated interpolation splice
    E0008,

    // Syntactic errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Expected identifier
    E1003,
    /// Expected type
    E1004,
    /// Unclosed delimiter
    E1005,
    /// Expected statement
    E1006,
    /// Expected declaration or member
    E1007,
    /// Switch block mixes colon-labeled groups and arrow rules
    E1008,
    /// Expected pattern
    E1009,
    /// Invalid modifier for this declaration
    E1010,
    /// Expected module directive
    E1011,
    /// try statement needs at least one catch or finally clause
    E1012,

    // Grammar-authoring errors (E9xxx)
    /// Structural ambiguity not covered by any conflict declaration
    E9001,
    /// Node kind claimed by more than one supertype
    E9002,
    /// Malformed conflict declaration
    E9003,
}

impl ErrorCode {
    /// Short description used when no custom message applies.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unterminated text block",
            ErrorCode::E0003 => "unterminated character literal",
            ErrorCode::E0004 => "unterminated block comment",
            ErrorCode::E0005 => "invalid escape sequence",
            ErrorCode::E0006 => "invalid character",
            ErrorCode::E0007 => "malformed numeric literal",
            ErrorCode::E0008 => "unterminated interpolation splice",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "expected identifier",
            ErrorCode::E1004 => "expected type",
            ErrorCode::E1005 => "unclosed delimiter",
            ErrorCode::E1006 => "expected statement",
            ErrorCode::E1007 => "expected declaration or member",
            ErrorCode::E1008 => "switch block mixes colon labels and arrow rules",
            ErrorCode::E1009 => "expected pattern",
            ErrorCode::E1010 => "invalid modifier",
            ErrorCode::E1011 => "expected module directive",
            ErrorCode::E1012 => "try statement needs a catch or finally clause",
            ErrorCode::E9001 => "ambiguity not covered by a conflict declaration",
            ErrorCode::E9002 => "node kind claimed by more than one supertype",
            ErrorCode::E9003 => "malformed conflict declaration",
        }
    }

    /// True for codes that indicate a defect in the grammar itself rather
    /// than in parsed input. These halt grammar compilation and are never
    /// produced while parsing.
    pub const fn is_grammar_defect(self) -> bool {
        matches!(self, ErrorCode::E9001 | ErrorCode::E9002 | ErrorCode::E9003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_code() {
        assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    }

    #[test]
    fn test_grammar_defect_classification() {
        assert!(ErrorCode::E9001.is_grammar_defect());
        assert!(!ErrorCode::E0001.is_grammar_defect());
        assert!(!ErrorCode::E1008.is_grammar_defect());
    }
}
