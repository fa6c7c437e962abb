//! Shared syntax types for the Jive front end.
//!
//! Spans, tokens, node kinds with supertype groupings, field labels, the
//! lossless syntax tree with its builder, and the operator precedence table.

mod field;
mod kind;
pub mod precedence;
mod span;
mod token;
mod tree;

pub use field::Field;
pub use kind::{Supertype, SyntaxKind};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
pub use tree::{BuilderState, Checkpoint, Child, NodeId, SyntaxTree, TokenId, TreeBuilder};
