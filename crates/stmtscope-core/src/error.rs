//! Error types for tree construction and segmentation.
//!
//! # Error Handling Strategy
//!
//! This crate uses two complementary error handling patterns:
//!
//! - [`TreeError`] and [`SegmentError`]: contract violations by the caller
//!   (a tree that cannot be built, a caret that is not 1-based). Returned as
//!   `Result` and stop the affected call.
//!
//! - [`crate::types::Warning`] and [`crate::types::Issue`]: findings about the
//!   SQL itself. These are accumulated and returned alongside a successful
//!   result. Optional grammar clauses that are missing are treated as absent,
//!   never as errors.

use thiserror::Error;

/// Errors raised while lexing a script or building its tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The tokenizer rejected the source text.
    #[error("lexer error: {0}")]
    Lexer(String),

    /// A token position could not be mapped back into the source text.
    #[error("token at line {line}, column {column} lies outside the source text")]
    TokenOutOfRange { line: usize, column: usize },

    /// A token was requested after the last one was consumed.
    #[error("no tokens left to consume")]
    UnexpectedEnd,

    /// A token was consumed while no node was open.
    #[error("token consumed outside of any node")]
    TokenOutsideNode,

    /// `finish_node` was called with no open node.
    #[error("no open node to finish")]
    NoOpenNode,

    /// A second root node was started.
    #[error("tree already has a root node")]
    MultipleRoots,

    /// The tree was finished while nodes were still open.
    #[error("{count} node(s) left open")]
    UnclosedNodes { count: usize },

    /// The tree was finished before every token was consumed.
    #[error("{count} token(s) left unconsumed")]
    UnconsumedTokens { count: usize },

    /// The tree was finished without any node.
    #[error("tree has no root node")]
    EmptyTree,

    /// A tree outline could not be read.
    #[error("invalid outline: {0}")]
    Outline(String),
}

/// Errors raised by [`crate::segment`] on invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// Caret lines and columns are 1-based.
    #[error("caret position {line}:{column} is not 1-based")]
    InvalidCaret { line: usize, column: usize },

    /// End-of-input closes the last statement but cannot separate statements.
    #[error("end-of-input cannot be used as the statement terminator")]
    EofTerminator,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_positions() {
        let error = TreeError::TokenOutOfRange { line: 3, column: 9 };
        assert_eq!(
            error.to_string(),
            "token at line 3, column 9 lies outside the source text"
        );

        let error = SegmentError::InvalidCaret { line: 0, column: 4 };
        assert_eq!(error.to_string(), "caret position 0:4 is not 1-based");
    }
}
