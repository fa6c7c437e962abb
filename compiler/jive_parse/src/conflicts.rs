//! Declared ambiguities and their resolutions.
//!
//! Every point where the grammar cannot decide between alternatives on the
//! current token alone is declared here, with the strategy the parser uses
//! to resolve it. The table is data, not behavior: the grammar functions
//! implement each resolution, and [`check_grammar`] audits the table (and
//! the supertype mapping) for authoring defects. Audit failures are E9xxx
//! codes and are the only fatal errors in the front end; they can never be
//! triggered by user source.

use jive_diagnostic::ErrorCode;
use jive_syntax::{Supertype, SyntaxKind};
use rustc_hash::FxHashSet;

/// How a declared ambiguity is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Both alternatives are parsed speculatively; the one with the higher
    /// weight wins when both succeed.
    DynamicPrecedence(i16),
    /// Bounded token lookahead decides before committing; the string names
    /// the deciding token pattern.
    Lookahead(&'static str),
    /// A contextual keyword is reclassified when the named spelling occurs
    /// in the position this conflict covers.
    Reclassify(&'static str),
}

/// One declared ambiguity between grammar alternatives.
#[derive(Clone, Copy, Debug)]
pub struct Conflict {
    pub name: &'static str,
    /// Node kinds the competing alternatives would produce.
    pub participants: &'static [SyntaxKind],
    pub resolution: Resolution,
}

/// The complete conflict table.
pub const CONFLICTS: &[Conflict] = &[
    Conflict {
        name: "cast-vs-parenthesized",
        participants: &[SyntaxKind::CastExpression, SyntaxKind::ParenthesizedExpression],
        resolution: Resolution::DynamicPrecedence(1),
    },
    Conflict {
        name: "generic-arguments-vs-relational",
        participants: &[SyntaxKind::TypeArguments, SyntaxKind::BinaryExpression],
        resolution: Resolution::Lookahead("`<` closed by a `>` over type-argument tokens"),
    },
    Conflict {
        name: "shift-vs-nested-generic-close",
        participants: &[SyntaxKind::BinaryExpression, SyntaxKind::TypeArguments],
        resolution: Resolution::Lookahead("adjacent `>` run glued only in expression position"),
    },
    Conflict {
        name: "local-variable-vs-expression-statement",
        participants: &[SyntaxKind::LocalVariableDeclaration, SyntaxKind::ExpressionStatement],
        resolution: Resolution::DynamicPrecedence(1),
    },
    Conflict {
        name: "lambda-vs-parenthesized",
        participants: &[SyntaxKind::LambdaExpression, SyntaxKind::ParenthesizedExpression],
        resolution: Resolution::Lookahead("matching `)` followed by `->`"),
    },
    Conflict {
        name: "enhanced-for-vs-basic-for",
        participants: &[SyntaxKind::EnhancedForStatement, SyntaxKind::ForStatement],
        resolution: Resolution::Lookahead("declaration header followed by `:`"),
    },
    Conflict {
        name: "case-pattern-vs-case-expression",
        participants: &[SyntaxKind::TypePattern, SyntaxKind::SwitchLabel],
        resolution: Resolution::DynamicPrecedence(1),
    },
    Conflict {
        name: "record-declaration-vs-identifier",
        participants: &[SyntaxKind::RecordDeclaration, SyntaxKind::ExpressionStatement],
        resolution: Resolution::Reclassify("record"),
    },
    Conflict {
        name: "yield-statement-vs-identifier",
        participants: &[SyntaxKind::YieldStatement, SyntaxKind::ExpressionStatement],
        resolution: Resolution::Reclassify("yield"),
    },
    Conflict {
        name: "sealed-modifier-vs-identifier",
        participants: &[SyntaxKind::Modifiers, SyntaxKind::ExpressionStatement],
        resolution: Resolution::Reclassify("sealed"),
    },
    Conflict {
        name: "module-declaration-vs-identifier",
        participants: &[SyntaxKind::ModuleDeclaration, SyntaxKind::ExpressionStatement],
        resolution: Resolution::Reclassify("module"),
    },
    Conflict {
        name: "when-guard-vs-identifier",
        participants: &[SyntaxKind::Guard, SyntaxKind::Identifier],
        resolution: Resolution::Reclassify("when"),
    },
    Conflict {
        name: "annotated-declaration-vs-annotated-local",
        participants: &[SyntaxKind::ClassDeclaration, SyntaxKind::LocalVariableDeclaration],
        resolution: Resolution::Lookahead("keyword after the modifier run"),
    },
    Conflict {
        name: "constructor-vs-method",
        participants: &[SyntaxKind::ConstructorDeclaration, SyntaxKind::MethodDeclaration],
        resolution: Resolution::Lookahead("identifier directly followed by `(`"),
    },
    Conflict {
        name: "modifiers-vs-annotated-type-vs-receiver",
        participants: &[
            SyntaxKind::Modifiers,
            SyntaxKind::AnnotatedType,
            SyntaxKind::ReceiverParameter,
        ],
        resolution: Resolution::Lookahead(
            "token after the annotation run: modifier keyword, type start, or `this`",
        ),
    },
    Conflict {
        name: "type-name-vs-expression-name",
        participants: &[SyntaxKind::ScopedTypeIdentifier, SyntaxKind::FieldAccess],
        resolution: Resolution::DynamicPrecedence(1),
    },
    Conflict {
        name: "argument-list-vs-record-pattern-body",
        participants: &[SyntaxKind::ArgumentList, SyntaxKind::RecordPatternBody],
        resolution: Resolution::DynamicPrecedence(1),
    },
    Conflict {
        name: "switch-statement-vs-switch-expression",
        participants: &[SyntaxKind::SwitchExpression, SyntaxKind::ExpressionStatement],
        resolution: Resolution::Lookahead("grammatical position of the `switch` keyword"),
    },
    Conflict {
        name: "diamond-vs-empty-generic",
        participants: &[SyntaxKind::TypeArguments, SyntaxKind::GenericType],
        resolution: Resolution::Lookahead("`<` immediately followed by `>`"),
    },
];

/// Ambiguities the grammar is known to contain. `check_grammar` reports
/// E9001 for any of these missing from [`CONFLICTS`].
const REQUIRED: &[&str] = &[
    "cast-vs-parenthesized",
    "generic-arguments-vs-relational",
    "local-variable-vs-expression-statement",
    "lambda-vs-parenthesized",
    "record-declaration-vs-identifier",
    "yield-statement-vs-identifier",
];

/// A grammar-authoring defect found by [`check_grammar`].
#[derive(Clone, Debug)]
pub struct GrammarError {
    pub code: ErrorCode,
    pub message: String,
}

impl GrammarError {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        GrammarError { code, message: message.into() }
    }
}

/// Audit the conflict table and supertype mapping.
///
/// Run from tests (and any future grammar-compilation step); a failure
/// means the grammar itself is wrong, not the input.
pub fn check_grammar() -> Result<(), Vec<GrammarError>> {
    let mut errors = Vec::new();

    // Supertype audit: membership categories must not overlap per kind.
    for &kind in SyntaxKind::ALL {
        let claims = [
            kind.is_expression(),
            kind.is_type(),
            matches!(kind.supertype(), Some(Supertype::Statement)),
            matches!(kind.supertype(), Some(Supertype::Declaration)),
            matches!(kind.supertype(), Some(Supertype::ModuleDirective)),
        ];
        if claims.iter().filter(|c| **c).count() > 1 {
            errors.push(GrammarError::new(
                ErrorCode::E9002,
                format!("{kind:?} belongs to more than one supertype category"),
            ));
        }
    }

    let mut names = FxHashSet::default();
    for conflict in CONFLICTS {
        if !names.insert(conflict.name) {
            errors.push(GrammarError::new(
                ErrorCode::E9003,
                format!("duplicate conflict declaration `{}`", conflict.name),
            ));
        }
        if conflict.participants.len() < 2 {
            errors.push(GrammarError::new(
                ErrorCode::E9003,
                format!("conflict `{}` declares fewer than two alternatives", conflict.name),
            ));
        }
        let mut seen = FxHashSet::default();
        for participant in conflict.participants {
            if !seen.insert(*participant) {
                errors.push(GrammarError::new(
                    ErrorCode::E9003,
                    format!("conflict `{}` repeats participant {participant:?}", conflict.name),
                ));
            }
        }
        match conflict.resolution {
            Resolution::DynamicPrecedence(0) => errors.push(GrammarError::new(
                ErrorCode::E9003,
                format!("conflict `{}` has zero dynamic precedence", conflict.name),
            )),
            Resolution::Lookahead(what) | Resolution::Reclassify(what) if what.is_empty() => {
                errors.push(GrammarError::new(
                    ErrorCode::E9003,
                    format!("conflict `{}` has an empty resolution", conflict.name),
                ));
            }
            _ => {}
        }
        if let Resolution::Reclassify(word) = conflict.resolution {
            if !jive_lexer::is_contextual(word) {
                errors.push(GrammarError::new(
                    ErrorCode::E9003,
                    format!(
                        "conflict `{}` reclassifies `{word}`, which is not a contextual keyword",
                        conflict.name
                    ),
                ));
            }
        }
    }

    for required in REQUIRED {
        if !names.contains(required) {
            errors.push(GrammarError::new(
                ErrorCode::E9001,
                format!("known ambiguity `{required}` has no conflict declaration"),
            ));
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_is_sound() {
        if let Err(errors) = check_grammar() {
            let rendered: Vec<String> =
                errors.iter().map(|e| format!("{}: {}", e.code, e.message)).collect();
            panic!("grammar audit failed:\n{}", rendered.join("\n"));
        }
    }

    #[test]
    fn test_grammar_errors_are_fatal_class() {
        assert!(ErrorCode::E9001.is_grammar_defect());
        assert!(ErrorCode::E9002.is_grammar_defect());
        assert!(ErrorCode::E9003.is_grammar_defect());
        assert!(!ErrorCode::E1001.is_grammar_defect());
    }

    #[test]
    fn test_every_required_ambiguity_declared() {
        let names: Vec<&str> = CONFLICTS.iter().map(|c| c.name).collect();
        for required in REQUIRED {
            assert!(names.contains(required), "missing declaration for {required}");
        }
    }
}
