//! Incremental construction of a [`SyntaxTree`].
//!
//! The source is lexed once up front. A host then mirrors its parser's rule
//! entries and exits with [`TreeBuilder::start_node`] and
//! [`TreeBuilder::finish_node`], consuming tokens in source order in between.

use std::collections::VecDeque;

use serde::de::{value, Deserialize, IntoDeserializer};

use super::kind::{NodeKind, TokenKind};
use super::lexer::lex;
use super::tree::{Element, NodeData, NodeId, SyntaxTree, Token};
use crate::error::TreeError;
use crate::types::Dialect;

/// Leading words that mark a transaction statement in [`TreeBuilder::flat_script`].
const TRANSACTION_WORDS: &[&str] = &["BEGIN", "START", "COMMIT", "END", "ROLLBACK", "ABORT"];

pub struct TreeBuilder {
    source: String,
    pending: VecDeque<Token>,
    nodes: Vec<NodeData>,
    tokens: Vec<Token>,
    open: Vec<NodeId>,
    misuse: Option<TreeError>,
}

impl TreeBuilder {
    /// Lexes `source` and prepares an empty tree over it.
    pub fn new(source: impl Into<String>, dialect: Dialect) -> Result<Self, TreeError> {
        let source = source.into();
        let pending = lex(&source, dialect)?.into();
        Ok(Self {
            source,
            pending,
            nodes: Vec::new(),
            tokens: Vec::new(),
            open: Vec::new(),
            misuse: None,
        })
    }

    /// Opens a node as the last child of the currently open node.
    ///
    /// Starting a second root is recorded and reported by [`TreeBuilder::finish`].
    pub fn start_node(&mut self, kind: NodeKind) {
        let id = NodeId(self.nodes.len() as u32);
        let parent = self.open.last().copied();
        match parent {
            Some(parent) => self.nodes[parent.index()]
                .children
                .push(Element::Node(id)),
            None if !self.nodes.is_empty() => {
                self.misuse.get_or_insert(TreeError::MultipleRoots);
            }
            None => {}
        }
        self.nodes.push(NodeData {
            kind,
            parent,
            children: Vec::new(),
        });
        self.open.push(id);
    }

    /// Closes the most recently opened node.
    pub fn finish_node(&mut self) -> Result<NodeId, TreeError> {
        self.open.pop().ok_or(TreeError::NoOpenNode)
    }

    /// The next token to be consumed.
    pub fn peek(&self) -> Option<&Token> {
        self.pending.front()
    }

    /// Moves the next token into the currently open node.
    pub fn bump(&mut self) -> Result<(), TreeError> {
        let parent = *self.open.last().ok_or(TreeError::TokenOutsideNode)?;
        let token = self.pending.pop_front().ok_or(TreeError::UnexpectedEnd)?;
        let index = self.tokens.len();
        self.tokens.push(token);
        self.nodes[parent.index()]
            .children
            .push(Element::Token(index));
        Ok(())
    }

    pub fn bump_n(&mut self, count: usize) -> Result<(), TreeError> {
        for _ in 0..count {
            self.bump()?;
        }
        Ok(())
    }

    /// Consumes tokens up to, not including, the next token of `kind` or end-of-input.
    pub fn bump_until(&mut self, kind: TokenKind) -> Result<usize, TreeError> {
        let mut count = 0;
        while self
            .peek()
            .is_some_and(|token| token.kind != kind && token.kind != TokenKind::Eof)
        {
            self.bump()?;
            count += 1;
        }
        Ok(count)
    }

    /// Wraps the next token in a node of its own.
    pub fn leaf(&mut self, kind: NodeKind) -> Result<NodeId, TreeError> {
        self.start_node(kind);
        self.bump()?;
        self.finish_node()
    }

    /// Completes the tree; every node must be closed and every token consumed.
    pub fn finish(self) -> Result<SyntaxTree, TreeError> {
        if let Some(error) = self.misuse {
            return Err(error);
        }
        if !self.open.is_empty() {
            return Err(TreeError::UnclosedNodes {
                count: self.open.len(),
            });
        }
        if !self.pending.is_empty() {
            return Err(TreeError::UnconsumedTokens {
                count: self.pending.len(),
            });
        }
        if self.nodes.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        Ok(SyntaxTree {
            source: self.source,
            nodes: self.nodes,
            tokens: self.tokens,
        })
    }

    /// Builds a statement-level tree without a grammar.
    ///
    /// Every `;`-separated run of tokens becomes a [`NodeKind::Stmt`]; runs
    /// opening with a transaction word are additionally wrapped in a
    /// [`NodeKind::TransactionStmt`]. Terminators and end-of-input stay
    /// direct children of the root.
    pub fn flat_script(source: impl Into<String>, dialect: Dialect) -> Result<SyntaxTree, TreeError> {
        let mut builder = Self::new(source, dialect)?;
        builder.start_node(NodeKind::Root);

        loop {
            let Some(next) = builder.peek() else {
                break;
            };
            if matches!(next.kind, TokenKind::Semicolon | TokenKind::Eof) {
                builder.bump()?;
                continue;
            }

            let transaction = TRANSACTION_WORDS
                .iter()
                .any(|word| next.text.eq_ignore_ascii_case(word));
            builder.start_node(NodeKind::Stmt);
            if transaction {
                builder.start_node(NodeKind::TransactionStmt);
                builder.bump_until(TokenKind::Semicolon)?;
                builder.finish_node()?;
            } else {
                builder.bump_until(TokenKind::Semicolon)?;
            }
            builder.finish_node()?;
        }

        builder.finish_node()?;
        builder.finish()
    }

    /// Builds a tree from a compact outline of the parse.
    ///
    /// `(kind` opens a node (kinds in snake case), `)` closes it, `_` consumes
    /// one token, `_N` consumes `N` tokens and `..` consumes up to the next
    /// `;`. For example `(root (stmt ..) _ _)` over `"SELECT 1;"`.
    pub fn from_outline(
        source: impl Into<String>,
        dialect: Dialect,
        outline: &str,
    ) -> Result<SyntaxTree, TreeError> {
        let mut builder = Self::new(source, dialect)?;
        let spaced = outline.replace('(', " ( ").replace(')', " ) ");
        let mut words = spaced.split_whitespace();

        while let Some(word) = words.next() {
            match word {
                "(" => {
                    let name = words.next().ok_or_else(|| {
                        TreeError::Outline("missing node kind after `(`".to_string())
                    })?;
                    builder.start_node(parse_kind(name)?);
                }
                ")" => {
                    builder.finish_node()?;
                }
                "_" => builder.bump()?,
                ".." => {
                    builder.bump_until(TokenKind::Semicolon)?;
                }
                other => {
                    let count = other
                        .strip_prefix('_')
                        .and_then(|count| count.parse().ok())
                        .ok_or_else(|| TreeError::Outline(format!("unexpected `{other}`")))?;
                    builder.bump_n(count)?;
                }
            }
        }

        builder.finish()
    }
}

fn parse_kind(name: &str) -> Result<NodeKind, TreeError> {
    NodeKind::deserialize(IntoDeserializer::<value::Error>::into_deserializer(name))
        .map_err(|_| TreeError::Outline(format!("unknown node kind `{name}`")))
}
