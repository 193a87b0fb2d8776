//! Concrete parse tree model consumed by segmentation and the linter.
//!
//! The grammar-driven parser is owned by the host. It describes its parse to
//! this crate through [`TreeBuilder`], producing a [`SyntaxTree`] whose nodes
//! carry a [`NodeKind`] tag, ordered children, and a parent link, and whose
//! tokens carry a [`TokenKind`], literal text, and source position.

pub mod builder;
pub mod kind;
mod lexer;
pub mod tree;

pub use builder::TreeBuilder;
pub use kind::{NodeKind, TokenKind};
pub use tree::{Child, Node, NodeId, SyntaxTree, Token};
