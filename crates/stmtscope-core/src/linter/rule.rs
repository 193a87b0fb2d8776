//! Lint rule trait and context for tree-based linting.

use crate::syntax::{Node, SyntaxTree};
use crate::types::{Issue, Span};

/// Context provided to lint rules during analysis.
pub struct LintContext<'a> {
    /// The tree the statement belongs to.
    pub tree: &'a SyntaxTree,
    /// Zero-based index of the current statement in its segmentation.
    pub statement_index: usize,
}

impl<'a> LintContext<'a> {
    /// Returns the full script source.
    pub fn sql(&self) -> &'a str {
        self.tree.source()
    }

    /// Returns the source text covered by `node`, empty for token-less nodes.
    pub fn node_sql(&self, node: Node<'_>) -> &'a str {
        node.span()
            .and_then(|span| self.sql().get(span.start..span.end))
            .unwrap_or_default()
    }

    /// Byte span of `node`, for attaching to an issue.
    pub fn span_of(&self, node: Node<'_>) -> Option<Span> {
        node.span()
    }
}

/// A single lint rule that checks one statement of a segmented script.
pub trait LintRule: Send + Sync {
    /// Machine-readable rule code (e.g., "LINT_AM_001").
    fn code(&self) -> &'static str;

    /// Short human-readable name (e.g., "Ambiguous AND/OR").
    fn name(&self) -> &'static str;

    /// Longer description of what this rule checks.
    fn description(&self) -> &'static str;

    /// Check the statement rooted at `stmt` and return any issues found.
    fn check(&self, stmt: Node<'_>, ctx: &LintContext<'_>) -> Vec<Issue>;
}
