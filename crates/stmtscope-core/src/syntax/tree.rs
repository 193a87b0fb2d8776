//! Arena-backed concrete parse tree.
//!
//! Nodes and tokens are owned by [`SyntaxTree`]; [`Node`] is a cheap copyable
//! handle. Parent links are recorded once at construction and never change,
//! so upward walks need no reference counting.

use std::fmt;
use std::iter;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::kind::{NodeKind, TokenKind};
use crate::types::Span;

/// Stable index of a node inside its [`SyntaxTree`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position of the node in creation (pre-order) order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A terminal token with its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Literal source text (empty for end-of-input).
    pub text: String,
    /// Byte range in the source text.
    pub span: Span,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in characters).
    pub column: usize,
}

impl Token {
    /// Token length in characters, the unit columns are counted in.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Line and column just past the token's last character.
    ///
    /// Follows line breaks inside the token, so multi-line string literals
    /// end on their last line.
    pub fn end_line_column(&self) -> (usize, usize) {
        match self.text.rsplit_once('\n') {
            Some((head, tail)) => (
                self.line + 1 + head.matches('\n').count(),
                tail.chars().count() + 1,
            ),
            None => (self.line, self.column + self.char_len()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Element {
    Node(NodeId),
    Token(usize),
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<Element>,
}

/// A complete parse tree for one script. Node `0` is the root.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    pub(crate) source: String,
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) tokens: Vec<Token>,
}

impl SyntaxTree {
    /// The root node.
    pub fn root(&self) -> Node<'_> {
        Node {
            tree: self,
            id: NodeId(0),
        }
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        (id.index() < self.nodes.len()).then_some(Node { tree: self, id })
    }

    /// Source text the tokens were lexed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// All tokens in source order, end-of-input last.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Either kind of child a node can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Child<'t> {
    Node(Node<'t>),
    Token(&'t Token),
}

impl<'t> Child<'t> {
    pub fn as_node(self) -> Option<Node<'t>> {
        match self {
            Self::Node(node) => Some(node),
            Self::Token(_) => None,
        }
    }

    pub fn as_token(self) -> Option<&'t Token> {
        match self {
            Self::Node(_) => None,
            Self::Token(token) => Some(token),
        }
    }

    /// Rendered text: the token text, or the node's concatenated token texts.
    pub fn text(self) -> String {
        match self {
            Self::Node(node) => node.text(),
            Self::Token(token) => token.text.clone(),
        }
    }
}

/// Borrowed handle to a node of a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct Node<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .finish()
    }
}

impl<'t> Node<'t> {
    fn data(self) -> &'t NodeData {
        &self.tree.nodes[self.id.index()]
    }

    fn child_from(self, element: Element) -> Child<'t> {
        match element {
            Element::Node(id) => Child::Node(Node {
                tree: self.tree,
                id,
            }),
            Element::Token(index) => Child::Token(&self.tree.tokens[index]),
        }
    }

    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn tree(self) -> &'t SyntaxTree {
        self.tree
    }

    pub fn kind(self) -> NodeKind {
        self.data().kind
    }

    pub fn is(self, kind: NodeKind) -> bool {
        self.kind() == kind
    }

    pub fn parent(self) -> Option<Node<'t>> {
        self.data().parent.map(|id| Node {
            tree: self.tree,
            id,
        })
    }

    /// Strict ancestors, nearest first.
    pub fn ancestors(self) -> impl Iterator<Item = Node<'t>> {
        iter::successors(self.parent(), |node| node.parent())
    }

    /// Ordered children, nodes and tokens interleaved as in the source.
    pub fn children(self) -> impl DoubleEndedIterator<Item = Child<'t>> {
        self.data()
            .children
            .iter()
            .map(move |element| self.child_from(*element))
    }

    pub fn child_count(self) -> usize {
        self.data().children.len()
    }

    pub fn child(self, index: usize) -> Option<Child<'t>> {
        self.data()
            .children
            .get(index)
            .map(|element| self.child_from(*element))
    }

    pub fn last_child(self) -> Option<Child<'t>> {
        self.data()
            .children
            .last()
            .map(|element| self.child_from(*element))
    }

    pub fn child_nodes(self) -> impl Iterator<Item = Node<'t>> {
        self.children().filter_map(Child::as_node)
    }

    pub fn child_tokens(self) -> impl Iterator<Item = &'t Token> {
        self.children().filter_map(Child::as_token)
    }

    /// Direct children of the given kind.
    pub fn children_of(self, kind: NodeKind) -> impl Iterator<Item = Node<'t>> {
        self.child_nodes().filter(move |child| child.kind() == kind)
    }

    /// First direct child of the given kind.
    pub fn first_child_of(self, kind: NodeKind) -> Option<Node<'t>> {
        self.children_of(kind).next()
    }

    /// Direct token children that this node's kind treats as operands.
    pub fn operands(self) -> impl Iterator<Item = &'t Token> {
        let kinds = self.kind().operand_token_kinds();
        self.child_tokens()
            .filter(move |token| kinds.contains(&token.kind))
    }

    /// All tokens of the subtree in source order.
    pub fn tokens(self) -> Vec<&'t Token> {
        let mut tokens = Vec::new();
        self.collect_tokens(&mut tokens);
        tokens
    }

    fn collect_tokens(self, out: &mut Vec<&'t Token>) {
        for child in self.children() {
            match child {
                Child::Token(token) => out.push(token),
                Child::Node(node) => node.collect_tokens(out),
            }
        }
    }

    pub fn first_token(self) -> Option<&'t Token> {
        self.children().find_map(|child| match child {
            Child::Token(token) => Some(token),
            Child::Node(node) => node.first_token(),
        })
    }

    pub fn last_token(self) -> Option<&'t Token> {
        self.children().rev().find_map(|child| match child {
            Child::Token(token) => Some(token),
            Child::Node(node) => node.last_token(),
        })
    }

    /// Token texts concatenated without separators.
    pub fn text(self) -> String {
        self.tokens()
            .into_iter()
            .map(|token| token.text.as_str())
            .collect()
    }

    /// Byte range from the first to the last token, if the node has any.
    pub fn span(self) -> Option<Span> {
        let first = self.first_token()?;
        let last = self.last_token()?;
        Some(Span::new(first.span.start, last.span.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::builder::TreeBuilder;
    use crate::types::Dialect;

    fn sample() -> SyntaxTree {
        let mut builder = TreeBuilder::new("SELECT a.b FROM t", Dialect::Postgres).unwrap();
        builder.start_node(NodeKind::Root);
        builder.start_node(NodeKind::SimpleSelectPrimary);
        builder.bump().unwrap();
        builder.start_node(NodeKind::ColumnRef);
        builder.leaf(NodeKind::Colid).unwrap();
        builder.start_node(NodeKind::IndirectionEl);
        builder.bump_n(2).unwrap();
        builder.finish_node().unwrap();
        builder.finish_node().unwrap();
        builder.bump_n(2).unwrap();
        builder.finish_node().unwrap();
        builder.bump().unwrap();
        builder.finish_node().unwrap();
        builder.finish().unwrap()
    }

    #[test]
    fn text_concatenates_tokens_without_separators() {
        let tree = sample();
        assert_eq!(tree.root().text(), "SELECTa.bFROMt");
        let column = tree.root().child_nodes().next().unwrap().child_nodes().next().unwrap();
        assert_eq!(column.kind(), NodeKind::ColumnRef);
        assert_eq!(column.text(), "a.b");
        assert_eq!(column.span(), Some(Span::new(7, 10)));
    }

    #[test]
    fn parent_links_lead_back_to_root() {
        let tree = sample();
        let element = tree
            .root()
            .child_nodes()
            .flat_map(|select| select.child_nodes())
            .flat_map(|column| column.child_nodes())
            .find(|node| node.is(NodeKind::IndirectionEl))
            .unwrap();
        let kinds: Vec<_> = element.ancestors().map(Node::kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::ColumnRef,
                NodeKind::SimpleSelectPrimary,
                NodeKind::Root
            ]
        );
        assert!(tree.root().parent().is_none());
    }

    #[test]
    fn first_and_last_tokens_skip_into_children() {
        let tree = sample();
        let select = tree.root().first_child_of(NodeKind::SimpleSelectPrimary).unwrap();
        assert_eq!(select.first_token().unwrap().text, "SELECT");
        assert_eq!(select.last_token().unwrap().text, "t");
        assert_eq!(tree.root().last_token().unwrap().kind, TokenKind::Eof);
    }
}
