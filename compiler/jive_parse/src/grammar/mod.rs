//! Grammar productions, split by layer.
//!
//! Each submodule extends [`Parser`] with the productions for one slice of
//! the language. Entry is [`Parser::program`], which accepts any mix of
//! top-level declarations and statements and always produces a tree.

mod decl;
pub(crate) mod expr;
mod pattern;
mod primary;
mod stmt;
mod ty;

use jive_syntax::{SyntaxKind, TokenKind};

use crate::{ErrorContext, Parser};

impl Parser<'_> {
    /// Parse a whole compilation unit into a `Program` node. Trailing
    /// trivia and the end-of-file token land inside the root so the tree
    /// covers every source byte.
    pub(crate) fn program(&mut self) {
        self.start_node(SyntaxKind::Program);
        while !self.at_end() {
            let before = self.token_pos();
            self.top_level_item();
            self.force_progress(before);
        }
        self.flush_trivia();
        debug_assert!(self.cursor.raw_current().kind == TokenKind::Eof);
        self.builder.token(*self.cursor.raw_current());
        self.finish_node();
    }

    fn top_level_item(&mut self) {
        self.with_context(ErrorContext::Program, |p| {
            if p.at(TokenKind::Package) || p.at_annotated_package() {
                p.package_declaration();
            } else if p.at(TokenKind::Import) {
                p.import_declaration();
            } else if p.at_module_declaration() {
                p.module_declaration();
            } else {
                p.statement();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use jive_syntax::SyntaxKind;

    #[test]
    fn test_empty_source_is_just_program() {
        let result = parse("");
        assert!(!result.has_errors());
        assert_eq!(result.tree.kind(result.tree.root()), SyntaxKind::Program);
    }

    #[test]
    fn test_trivia_only_source_round_trips() {
        let source = "  // leading\n/* block */\n";
        let result = parse(source);
        assert!(!result.has_errors());
        assert_eq!(result.tree.reconstruct_text(), source);
    }

    #[test]
    fn test_full_compilation_unit() {
        let source = "package demo;\n\nimport java.util.List;\n\npublic class Main {\n    public static void main(String[] args) {\n        System.out.println(\"hi \\{args.length}\");\n    }\n}\n";
        let result = parse(source);
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert_eq!(result.tree.reconstruct_text(), source);
    }
}
