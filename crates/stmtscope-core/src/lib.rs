//! Statement segmentation and structural lint predicates over a concrete SQL
//! parse tree.
//!
//! A host builds a [`SyntaxTree`] with [`TreeBuilder`] (or uses
//! [`TreeBuilder::flat_script`] when it has no grammar), calls [`segment`] to
//! split the script and locate the statement under the caret, and runs the
//! [`Linter`] or the predicates in [`linter::helpers`] and
//! [`linter::expression`] on the statements it cares about.

pub mod error;
pub mod linter;
pub mod segmenter;
pub mod syntax;
pub mod types;

// Re-export main types and functions
pub use error::{SegmentError, TreeError};
pub use linter::config::LintConfig;
pub use linter::rule::{LintContext, LintRule};
pub use linter::Linter;
pub use segmenter::segment;
pub use syntax::{Child, Node, NodeId, NodeKind, SyntaxTree, Token, TokenKind, TreeBuilder};

// Re-export types explicitly
pub use types::{
    // Issue codes
    issue_codes,
    // Request types
    CaretPosition,
    Dialect,
    SegmentOptions,
    // Response types
    Issue,
    ParsedStatement,
    Segmentation,
    Severity,
    SourcePosition,
    Span,
    Warning,
    WarningKind,
};

// Test utilities (must be at end of file)
#[cfg(test)]
pub mod test_utils;
