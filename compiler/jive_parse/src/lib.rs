//! Recursive descent parser for Jive.
//!
//! Produces a lossless [`SyntaxTree`]: every token of the input, trivia
//! included, appears in the tree, and concatenating tokens in order
//! reconstructs the source byte for byte. Grammar decisions are made over
//! significant tokens only; trivia is flushed into whatever node is open
//! when the next significant token is consumed.
//!
//! Disambiguation follows the declared conflict table in [`conflicts`]:
//! bounded lookahead and snapshot-based speculation, never unbounded
//! backtracking over committed nodes. Errors are recorded and recovered
//! from; parsing always yields a tree.

mod cursor;
mod error;
mod grammar;
mod recovery;

#[cfg(test)]
mod tests;

pub mod conflicts;

pub use cursor::{Cursor, GluedOp};
pub use error::{ErrorContext, ParseError};
pub use recovery::TokenSet;

use jive_diagnostic::{Diagnostic, ErrorCode};
use jive_syntax::{
    BuilderState, Checkpoint, Field, Span, SyntaxKind, SyntaxTree, TokenKind, TokenList,
    TreeBuilder,
};

/// Result of a parse: the tree plus all diagnostics (lexical and
/// syntactic). The tree is always present; errors surface as `Error` nodes
/// inside it.
pub struct ParseResult {
    pub tree: SyntaxTree,
    pub errors: Vec<Diagnostic>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse a complete compilation unit.
pub fn parse(source: &str) -> ParseResult {
    let lexed = jive_lexer::lex(source);
    tracing::debug!(bytes = source.len(), tokens = lexed.tokens.len(), "parsing");
    let mut parser = Parser::new(source, &lexed.tokens);
    parser.program();
    let (tree, parse_errors) = parser.into_tree();
    let mut errors = lexed.errors;
    errors.extend(parse_errors.iter().map(ParseError::to_diagnostic));
    ParseResult { tree, errors }
}

/// Everything needed to roll the parser back to an earlier point:
/// cursor position, builder contents, and recorded errors.
pub(crate) struct Snapshot {
    pos: usize,
    builder: BuilderState,
    errors_len: usize,
}

/// Parser state.
pub struct Parser<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
    builder: TreeBuilder,
    errors: Vec<ParseError>,
    context: Option<ErrorContext>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, tokens: &'a TokenList) -> Self {
        Parser {
            source,
            cursor: Cursor::new(tokens),
            builder: TreeBuilder::new(),
            errors: Vec::new(),
            context: None,
        }
    }

    fn into_tree(self) -> (SyntaxTree, Vec<ParseError>) {
        (self.builder.finish(self.source.to_string()), self.errors)
    }

    // ─── Token access ───────────────────────────────────────────────────

    #[inline]
    pub(crate) fn current(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    /// Source text of the current significant token.
    pub(crate) fn current_text(&self) -> &'a str {
        self.cursor.current().text(self.source)
    }

    #[inline]
    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    pub(crate) fn nth(&self, n: usize) -> TokenKind {
        self.cursor.nth_kind(n)
    }

    #[inline]
    pub(crate) fn nth_at(&self, n: usize, kind: TokenKind) -> bool {
        self.cursor.nth_check(n, kind)
    }

    pub(crate) fn at_set(&self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// Current token is the identifier spelling `word` (contextual keyword
    /// check).
    pub(crate) fn at_contextual(&self, word: &str) -> bool {
        self.at(TokenKind::Ident) && self.current_text() == word
    }

    pub(crate) fn nth_contextual(&self, n: usize, word: &str) -> bool {
        self.nth_at(n, TokenKind::Ident) && self.cursor.nth_token(n).text(self.source) == word
    }

    #[inline]
    pub(crate) fn at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    pub(crate) fn glued_gt_op(&self) -> Option<GluedOp> {
        self.cursor.glued_gt_op()
    }

    // ─── Tree construction ──────────────────────────────────────────────

    /// Move pending trivia into the current node. Called implicitly before
    /// every node start, checkpoint, and token bump so leaf node spans stay
    /// tight.
    fn flush_trivia(&mut self) {
        while self.cursor.raw_at_trivia() {
            self.builder.token(*self.cursor.raw_current());
            self.cursor.raw_advance();
        }
    }

    pub(crate) fn start_node(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.builder.start_node(kind);
    }

    pub(crate) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(crate) fn checkpoint(&mut self) -> Checkpoint {
        self.flush_trivia();
        self.builder.checkpoint()
    }

    pub(crate) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind);
    }

    /// Label the next child.
    pub(crate) fn field(&mut self, field: Field) {
        self.builder.field(field);
    }

    /// Label the already-built child that `start_node_at` just wrapped.
    pub(crate) fn label_last(&mut self, field: Field) {
        self.builder.label_last_node(field);
    }

    /// Consume the current significant token into the tree.
    pub(crate) fn bump(&mut self) {
        debug_assert!(!self.at_end(), "bump at end of input");
        self.flush_trivia();
        self.builder.token(*self.cursor.raw_current());
        self.cursor.raw_advance();
    }

    /// Consume `n` adjacent significant tokens (glued operator runs).
    pub(crate) fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    /// Bump the current token if it matches, else record an error.
    pub(crate) fn expect(&mut self, kind: TokenKind, code: ErrorCode) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            self.error(code, format!("expected {}, found {}", kind.name(), self.current().name()));
            false
        }
    }

    // ─── Errors and recovery ────────────────────────────────────────────

    pub(crate) fn error(&mut self, code: ErrorCode, message: impl Into<String>) {
        let mut err = ParseError::new(code, message, self.current_span());
        if let Some(context) = self.context {
            err = err.with_context(context);
        }
        self.errors.push(err);
    }

    /// Run `f` with an error context attached to everything it reports.
    pub(crate) fn with_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let previous = self.context.replace(context);
        let result = f(self);
        self.context = previous;
        result
    }

    /// Record an error, then skip to the recovery set inside an `Error`
    /// node. Consumes at least one token when not already at a recovery
    /// point, so callers always make progress.
    pub(crate) fn error_recover(
        &mut self,
        code: ErrorCode,
        message: impl Into<String>,
        recovery: TokenSet,
    ) {
        self.error(code, message);
        self.start_node(SyntaxKind::Error);
        let mut skipped = 0usize;
        while !self.at_end() && !self.at_set(recovery) {
            self.bump();
            skipped += 1;
        }
        // Recovery tokens stay for the caller; loops use `force_progress`
        // when an error consumed nothing.
        tracing::trace!(skipped, next = self.current().name(), "recovered");
        self.finish_node();
    }

    /// Raw cursor position, for loop progress checks.
    #[inline]
    pub(crate) fn token_pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Guarantee progress in a parse loop: when nothing was consumed since
    /// `before`, wrap the offending token in an `Error` node.
    pub(crate) fn force_progress(&mut self, before: usize) {
        if self.cursor.pos() == before && !self.at_end() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    // ─── Speculation ────────────────────────────────────────────────────

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            pos: self.cursor.pos(),
            builder: self.builder.state(),
            errors_len: self.errors.len(),
        }
    }

    pub(crate) fn restore(&mut self, snapshot: &Snapshot) {
        self.cursor.set_pos(snapshot.pos);
        self.builder.restore(&snapshot.builder);
        self.errors.truncate(snapshot.errors_len);
    }

    /// Attempt a parse; on `false` the parser state (cursor, tree, errors)
    /// is restored as if nothing happened.
    pub(crate) fn try_parse(&mut self, f: impl FnOnce(&mut Self) -> bool) -> bool {
        let snapshot = self.snapshot();
        if f(self) {
            true
        } else {
            self.restore(&snapshot);
            false
        }
    }

    /// Run a token-level predicate without consuming anything.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.snapshot();
        let result = f(self);
        self.restore(&snapshot);
        result
    }
}
