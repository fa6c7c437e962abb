//! Keyword tables.
//!
//! Two tiers, per the reserved-identifier design:
//!
//! - **Reserved keywords** are keywords in every position and get their own
//!   token kind from the lexer.
//! - **Contextual keywords** (`module`, `record`, `sealed`, `yield`, ...)
//!   lex as plain [`TokenKind::Ident`]; the parser reclassifies them at the
//!   grammatical positions where the keyword reading applies. No lexer mode
//!   switching is involved.

use jive_syntax::TokenKind;

/// Look up a reserved keyword. Returns `None` for everything else,
/// including contextual keywords.
///
/// `non-sealed` is not here: it contains `-` and is matched directly by the
/// scanner at word boundaries.
pub fn reserved(word: &str) -> Option<TokenKind> {
    Some(match word {
        "abstract" => TokenKind::Abstract,
        "assert" => TokenKind::Assert,
        "boolean" => TokenKind::Boolean,
        "break" => TokenKind::Break,
        "byte" => TokenKind::Byte,
        "case" => TokenKind::Case,
        "catch" => TokenKind::Catch,
        "char" => TokenKind::Char,
        "class" => TokenKind::Class,
        "const" => TokenKind::Const,
        "continue" => TokenKind::Continue,
        "default" => TokenKind::Default,
        "do" => TokenKind::Do,
        "double" => TokenKind::Double,
        "else" => TokenKind::Else,
        "enum" => TokenKind::Enum,
        "extends" => TokenKind::Extends,
        "final" => TokenKind::Final,
        "finally" => TokenKind::Finally,
        "float" => TokenKind::Float,
        "for" => TokenKind::For,
        "goto" => TokenKind::Goto,
        "if" => TokenKind::If,
        "implements" => TokenKind::Implements,
        "import" => TokenKind::Import,
        "instanceof" => TokenKind::Instanceof,
        "int" => TokenKind::Int,
        "interface" => TokenKind::Interface,
        "long" => TokenKind::Long,
        "native" => TokenKind::Native,
        "new" => TokenKind::New,
        "package" => TokenKind::Package,
        "private" => TokenKind::Private,
        "protected" => TokenKind::Protected,
        "public" => TokenKind::Public,
        "return" => TokenKind::Return,
        "short" => TokenKind::Short,
        "static" => TokenKind::Static,
        "strictfp" => TokenKind::Strictfp,
        "super" => TokenKind::Super,
        "switch" => TokenKind::Switch,
        "synchronized" => TokenKind::Synchronized,
        "this" => TokenKind::This,
        "throw" => TokenKind::Throw,
        "throws" => TokenKind::Throws,
        "transient" => TokenKind::Transient,
        "try" => TokenKind::Try,
        "void" => TokenKind::Void,
        "volatile" => TokenKind::Volatile,
        "while" => TokenKind::While,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "null" => TokenKind::Null,
        _ => return None,
    })
}

/// Spellings that are keywords only in specific grammatical positions.
/// Everywhere else they are ordinary identifiers.
pub const CONTEXTUAL: &[&str] = &[
    "exports", "module", "open", "opens", "permits", "provides", "record", "requires", "sealed",
    "to", "transitive", "uses", "var", "when", "with", "yield",
];

/// True if `word` is a contextual keyword spelling.
pub fn is_contextual(word: &str) -> bool {
    CONTEXTUAL.binary_search(&word).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_lookup() {
        assert_eq!(reserved("class"), Some(TokenKind::Class));
        assert_eq!(reserved("instanceof"), Some(TokenKind::Instanceof));
        assert_eq!(reserved("true"), Some(TokenKind::True));
        assert_eq!(reserved("classy"), None);
        assert_eq!(reserved(""), None);
    }

    #[test]
    fn test_contextual_not_reserved() {
        for word in CONTEXTUAL {
            assert_eq!(reserved(word), None, "{word} must lex as identifier");
        }
    }

    #[test]
    fn test_contextual_sorted_for_binary_search() {
        let mut sorted = CONTEXTUAL.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, CONTEXTUAL);
    }

    #[test]
    fn test_is_contextual() {
        assert!(is_contextual("record"));
        assert!(is_contextual("yield"));
        assert!(is_contextual("module"));
        assert!(!is_contextual("class"));
        assert!(!is_contextual("banana"));
    }
}
