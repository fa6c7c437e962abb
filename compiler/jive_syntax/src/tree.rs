//! Lossless syntax tree and its builder.
//!
//! The tree owns the source text and every token the lexer produced,
//! including trivia. Nodes are arena-allocated and hold ordered children
//! (nodes or tokens) plus `(field, child)` labels for the semantically
//! distinct ones. Concatenating every token's text in tree order reproduces
//! the source bytes exactly.
//!
//! [`TreeBuilder`] is event-driven: `start_node`/`finish_node`/`token`, with
//! checkpoints for wrapping already-emitted children (precedence climbing)
//! and whole-state snapshots for speculative parsing.

use crate::{Field, Span, SyntaxKind, Token};
use std::fmt;

/// Index of a node in the tree arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NodeId(u32);

/// Index of a token in the tree's token array.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TokenId(u32);

/// One ordered child of a node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Child {
    Node(NodeId),
    Token(TokenId),
}

#[derive(Clone, Debug)]
struct NodeData {
    kind: SyntaxKind,
    span: Span,
    children: Vec<Child>,
    fields: Vec<(Field, Child)>,
}

/// The parse result: an immutable, per-parse-owned tree.
///
/// No node is shared across trees; child ownership is exclusive to the
/// parent. Immutable after construction, so concurrent readers need no
/// synchronization.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    source: String,
    tokens: Vec<Token>,
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl SyntaxTree {
    /// Root `Program` node.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn kind(&self, node: NodeId) -> SyntaxKind {
        self.nodes[node.0 as usize].kind
    }

    #[inline]
    pub fn span(&self, node: NodeId) -> Span {
        self.nodes[node.0 as usize].span
    }

    #[inline]
    pub fn children(&self, node: NodeId) -> &[Child] {
        &self.nodes[node.0 as usize].children
    }

    /// Labeled children of a node, in child order.
    #[inline]
    pub fn fields(&self, node: NodeId) -> &[(Field, Child)] {
        &self.nodes[node.0 as usize].fields
    }

    /// First child bound to `field`, if any.
    pub fn child_by_field(&self, node: NodeId, field: Field) -> Option<Child> {
        self.fields(node)
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, c)| *c)
    }

    /// All children bound to `field` (fields may bind more than one child,
    /// e.g. the glued `>>` operator tokens).
    pub fn children_by_field(&self, node: NodeId, field: Field) -> impl Iterator<Item = Child> + '_ {
        self.fields(node)
            .iter()
            .filter(move |(f, _)| *f == field)
            .map(|(_, c)| *c)
    }

    #[inline]
    pub fn token(&self, token: TokenId) -> &Token {
        &self.tokens[token.0 as usize]
    }

    pub fn token_text(&self, token: TokenId) -> &str {
        self.token(token).text(&self.source)
    }

    /// Source text covered by a node (includes interior trivia).
    pub fn node_text(&self, node: NodeId) -> &str {
        &self.source[self.span(node).to_range()]
    }

    /// Child nodes only (skipping tokens).
    pub fn child_nodes(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(node).iter().filter_map(|c| match c {
            Child::Node(id) => Some(*id),
            Child::Token(_) => None,
        })
    }

    /// Depth-first preorder traversal of all nodes from `node`.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            out.push(id);
            // Push in reverse so preorder pops left-to-right.
            for child in self.children(id).iter().rev() {
                if let Child::Node(n) = child {
                    stack.push(*n);
                }
            }
        }
        out
    }

    /// First descendant with the given kind, preorder.
    pub fn find(&self, kind: SyntaxKind) -> Option<NodeId> {
        self.descendants(self.root).into_iter().find(|n| self.kind(*n) == kind)
    }

    /// All descendants with the given kind, preorder.
    pub fn find_all(&self, kind: SyntaxKind) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|n| self.kind(*n) == kind)
            .collect()
    }

    /// True if any node in the tree is an error node.
    pub fn has_errors(&self) -> bool {
        self.nodes.iter().any(|n| n.kind.is_error())
    }

    /// Concatenation of every token's text in tree order.
    ///
    /// By construction this equals the source; exposed so tests can verify
    /// the round-trip invariant structurally rather than by assumption.
    pub fn reconstruct_text(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        self.collect_text(self.root, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        for child in self.children(node) {
            match child {
                Child::Token(t) => out.push_str(self.token_text(*t)),
                Child::Node(n) => self.collect_text(*n, out),
            }
        }
    }

    /// S-expression dump of the named structure, for tests and debugging.
    /// Trivia and anonymous punctuation are omitted; field labels are shown.
    pub fn dump(&self) -> String {
        self.dump_from(self.root)
    }

    /// S-expression dump rooted at an arbitrary node.
    pub fn dump_from(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.dump_node(node, None, &mut out);
        out
    }

    fn dump_node(&self, node: NodeId, label: Option<Field>, out: &mut String) {
        if !out.is_empty() {
            out.push(' ');
        }
        if let Some(field) = label {
            out.push_str(field.name());
            out.push_str(": ");
        }
        out.push('(');
        out.push_str(&format!("{:?}", self.kind(node)));
        for child in self.children(node) {
            if let Child::Node(n) = child {
                let label = self.fields(node).iter().find_map(|(f, c)| {
                    (*c == Child::Node(*n)).then_some(*f)
                });
                self.dump_node(*n, label, out);
            }
        }
        out.push(')');
    }
}

/// Position marker for retroactive node wrapping and state restore.
#[derive(Copy, Clone, Debug)]
pub struct Checkpoint {
    stack_depth: usize,
    children_len: usize,
    tokens_len: usize,
    nodes_len: usize,
}

/// Full builder state, captured for speculative parsing.
///
/// Restoring truncates everything emitted after the capture, including
/// nodes that were started but not finished.
#[derive(Clone, Debug)]
pub struct BuilderState {
    tokens_len: usize,
    nodes_len: usize,
    stack_lens: Vec<(usize, usize)>,
    pending_field: Option<Field>,
}

#[derive(Debug)]
struct PendingNode {
    kind: SyntaxKind,
    field_on_finish: Option<Field>,
    children: Vec<Child>,
    fields: Vec<(Field, Child)>,
}

/// Event-driven tree builder.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tokens: Vec<Token>,
    nodes: Vec<NodeData>,
    stack: Vec<PendingNode>,
    pending_field: Option<Field>,
    root: Option<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder::default()
    }

    /// Open a node. Children emitted until the matching `finish_node` belong
    /// to it.
    pub fn start_node(&mut self, kind: SyntaxKind) {
        let field_on_finish = self.pending_field.take();
        self.stack.push(PendingNode {
            kind,
            field_on_finish,
            children: Vec::new(),
            fields: Vec::new(),
        });
    }

    /// Mark the current position; `start_node_at` can later wrap everything
    /// emitted since into a new node.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            stack_depth: self.stack.len(),
            children_len: self.stack.last().map_or(0, |n| n.children.len()),
            tokens_len: self.tokens.len(),
            nodes_len: self.nodes.len(),
        }
    }

    /// Open a node *before* the children emitted since `checkpoint`,
    /// stealing them (and their field labels) as its leading children.
    ///
    /// # Panics
    /// Panics if nodes opened after the checkpoint are still unfinished.
    pub fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        assert_eq!(
            self.stack.len(),
            checkpoint.stack_depth,
            "checkpoint crosses an unfinished node"
        );
        let (stolen_children, stolen_fields) = match self.stack.last_mut() {
            Some(parent) => {
                let children = parent.children.split_off(checkpoint.children_len);
                let mut moved = Vec::new();
                parent.fields.retain(|(f, c)| {
                    if children.contains(c) {
                        moved.push((*f, *c));
                        false
                    } else {
                        true
                    }
                });
                (children, moved)
            }
            None => (Vec::new(), Vec::new()),
        };
        self.stack.push(PendingNode {
            kind,
            field_on_finish: None,
            children: stolen_children,
            fields: stolen_fields,
        });
    }

    /// Label the next child (token or node) with `field`.
    pub fn field(&mut self, field: Field) {
        self.pending_field = Some(field);
    }

    /// Label the most recent node child of the current node with `field`.
    ///
    /// Needed after `start_node_at`, where the stolen child is already in
    /// place: the operand of a binary expression is only known to be `left`
    /// once the wrapping node exists.
    pub fn label_last_node(&mut self, field: Field) {
        if let Some(top) = self.stack.last_mut() {
            if let Some(child) = top
                .children
                .iter()
                .rev()
                .find(|c| matches!(c, Child::Node(_)))
            {
                top.fields.push((field, *child));
            }
        }
    }

    /// Emit a token as a child of the current node.
    pub fn token(&mut self, token: Token) {
        let id = TokenId(u32::try_from(self.tokens.len()).unwrap_or(u32::MAX));
        self.tokens.push(token);
        let child = Child::Token(id);
        let field = self.pending_field.take();
        // Trivia is never labeled even if a field was pending.
        let field = if token.kind.is_trivia() {
            self.pending_field = field;
            None
        } else {
            field
        };
        if let Some(top) = self.stack.last_mut() {
            top.children.push(child);
            if let Some(f) = field {
                top.fields.push((f, child));
            }
        }
    }

    /// Close the current node, computing its span from its children.
    ///
    /// # Panics
    /// Panics if no node is open.
    pub fn finish_node(&mut self) {
        let Some(pending) = self.stack.pop() else {
            panic!("finish_node without start_node")
        };
        let span = self.span_of(&pending.children);
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(NodeData {
            kind: pending.kind,
            span,
            children: pending.children,
            fields: pending.fields,
        });
        let child = Child::Node(id);
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(child);
            if let Some(f) = pending.field_on_finish {
                parent.fields.push((f, child));
            }
        } else {
            self.root = Some(id);
        }
    }

    fn span_of(&self, children: &[Child]) -> Span {
        let child_span = |c: &Child| match c {
            Child::Token(t) => self.tokens[t.0 as usize].span,
            Child::Node(n) => self.nodes[n.0 as usize].span,
        };
        match (children.first(), children.last()) {
            (Some(first), Some(last)) => Span::new(child_span(first).start, child_span(last).end),
            _ => Span::DUMMY,
        }
    }

    /// Capture the full builder state for speculative parsing.
    pub fn state(&self) -> BuilderState {
        BuilderState {
            tokens_len: self.tokens.len(),
            nodes_len: self.nodes.len(),
            stack_lens: self
                .stack
                .iter()
                .map(|n| (n.children.len(), n.fields.len()))
                .collect(),
            pending_field: self.pending_field,
        }
    }

    /// Discard everything emitted since `state` was captured.
    pub fn restore(&mut self, state: &BuilderState) {
        self.stack.truncate(state.stack_lens.len());
        for (node, (children_len, fields_len)) in self.stack.iter_mut().zip(&state.stack_lens) {
            node.children.truncate(*children_len);
            node.fields.truncate(*fields_len);
        }
        self.tokens.truncate(state.tokens_len);
        self.nodes.truncate(state.nodes_len);
        // A label pending at capture time survives the rollback; one set
        // during the speculation is discarded with it.
        self.pending_field = state.pending_field;
    }

    /// Consume the builder, producing the tree.
    ///
    /// # Panics
    /// Panics if nodes are still open or no root was finished.
    pub fn finish(self, source: String) -> SyntaxTree {
        assert!(self.stack.is_empty(), "unfinished nodes at end of parse");
        let Some(root) = self.root else {
            panic!("no root node finished")
        };
        SyntaxTree {
            source,
            tokens: self.tokens,
            nodes: self.nodes,
            root,
        }
    }
}

impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenKind;
    use pretty_assertions::assert_eq;

    fn tok(kind: TokenKind, start: u32, end: u32) -> Token {
        Token::new(kind, Span::new(start, end))
    }

    /// Build a tree for "a + b" by hand.
    fn sample_tree() -> SyntaxTree {
        let source = "a + b".to_string();
        let mut b = TreeBuilder::new();
        b.start_node(SyntaxKind::Program);
        b.start_node(SyntaxKind::BinaryExpression);

        b.field(Field::Left);
        b.start_node(SyntaxKind::Identifier);
        b.token(tok(TokenKind::Ident, 0, 1));
        b.finish_node();

        b.token(tok(TokenKind::Whitespace, 1, 2));
        b.field(Field::Operator);
        b.token(tok(TokenKind::Plus, 2, 3));
        b.token(tok(TokenKind::Whitespace, 3, 4));

        b.field(Field::Right);
        b.start_node(SyntaxKind::Identifier);
        b.token(tok(TokenKind::Ident, 4, 5));
        b.finish_node();

        b.finish_node();
        b.finish_node();
        b.finish(source)
    }

    #[test]
    fn test_round_trip() {
        let tree = sample_tree();
        assert_eq!(tree.reconstruct_text(), "a + b");
    }

    #[test]
    fn test_fields() {
        let tree = sample_tree();
        let binary = tree.find(SyntaxKind::BinaryExpression).map_or_else(
            || panic!("missing binary expression"),
            |n| n,
        );
        let left = tree.child_by_field(binary, Field::Left);
        let right = tree.child_by_field(binary, Field::Right);
        assert!(matches!(left, Some(Child::Node(_))));
        assert!(matches!(right, Some(Child::Node(_))));
        let Some(Child::Node(left)) = left else { panic!() };
        assert_eq!(tree.node_text(left), "a");
        let op = tree.child_by_field(binary, Field::Operator);
        let Some(Child::Token(op)) = op else { panic!("operator not a token") };
        assert_eq!(tree.token_text(op), "+");
    }

    #[test]
    fn test_trivia_never_labeled() {
        let tree = sample_tree();
        let binary = tree.find(SyntaxKind::BinaryExpression).map_or_else(|| panic!(), |n| n);
        for (_, child) in tree.fields(binary) {
            if let Child::Token(t) = child {
                assert!(!tree.token(*t).kind.is_trivia());
            }
        }
    }

    #[test]
    fn test_node_span_covers_children() {
        let tree = sample_tree();
        let binary = tree.find(SyntaxKind::BinaryExpression).map_or_else(|| panic!(), |n| n);
        assert_eq!(tree.span(binary), Span::new(0, 5));
        assert_eq!(tree.node_text(binary), "a + b");
    }

    #[test]
    fn test_checkpoint_wrapping() {
        // Emit `a`, then wrap it into a binary expression after the fact,
        // the way precedence climbing does.
        let source = "a+b".to_string();
        let mut b = TreeBuilder::new();
        b.start_node(SyntaxKind::Program);

        let cp = b.checkpoint();
        b.field(Field::Left);
        b.start_node(SyntaxKind::Identifier);
        b.token(tok(TokenKind::Ident, 0, 1));
        b.finish_node();

        b.start_node_at(cp, SyntaxKind::BinaryExpression);
        b.field(Field::Operator);
        b.token(tok(TokenKind::Plus, 1, 2));
        b.field(Field::Right);
        b.start_node(SyntaxKind::Identifier);
        b.token(tok(TokenKind::Ident, 2, 3));
        b.finish_node();
        b.finish_node();

        b.finish_node();
        let tree = b.finish(source);

        let binary = tree.find(SyntaxKind::BinaryExpression).map_or_else(|| panic!(), |n| n);
        // The stolen identifier kept its field label.
        let Some(Child::Node(left)) = tree.child_by_field(binary, Field::Left) else {
            panic!("left not bound after wrap")
        };
        assert_eq!(tree.node_text(left), "a");
        assert_eq!(tree.reconstruct_text(), "a+b");
    }

    #[test]
    fn test_state_restore() {
        let mut b = TreeBuilder::new();
        b.start_node(SyntaxKind::Program);
        b.token(tok(TokenKind::Ident, 0, 1));

        let state = b.state();
        b.start_node(SyntaxKind::Error);
        b.token(tok(TokenKind::Plus, 1, 2));
        b.restore(&state);

        // Everything since the capture is gone, including the open node.
        b.token(tok(TokenKind::Semicolon, 1, 2));
        b.finish_node();
        let tree = b.finish("a;".to_string());
        assert_eq!(tree.reconstruct_text(), "a;");
        assert!(!tree.has_errors());
    }

    #[test]
    fn test_dump_shape() {
        let tree = sample_tree();
        assert_eq!(
            tree.dump(),
            "(Program (BinaryExpression left: (Identifier) right: (Identifier)))"
        );
    }
}
