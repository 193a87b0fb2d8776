//! Segmentation result types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{SourcePosition, Span};
use crate::syntax::{NodeId, Token};

/// Structural warning detected while segmenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningKind {
    /// Identifier written in double quotes.
    DoubleQuotes,
    /// DISTINCT combined with GROUP BY in one query block.
    DistinctKeywordWithGroupByClause,
    /// Unqualified `SELECT *` over more than one table.
    SelectAllWithMultipleJoins,
}

/// A warning and the node it was raised on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub kind: WarningKind,
    pub node: NodeId,
}

/// One statement of a segmented script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedStatement {
    /// Position of the first token, unset until a token is consumed.
    pub start: Option<SourcePosition>,

    /// Exclusive end of the last token consumed.
    pub stop: Option<SourcePosition>,

    /// Reconstructed text, every token followed by the separator.
    pub text: String,

    /// Warnings in detection order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,

    /// First statement-level node entered while this statement was open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeId>,

    /// Every outermost statement-level node entered while this statement was
    /// open, in source order. More than one for transaction blocks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NodeId>,
}

impl ParsedStatement {
    /// True when no token was consumed into this statement.
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// Byte range covered by the statement's tokens.
    pub fn span(&self) -> Option<Span> {
        Some(Span::new(self.start?.offset, self.stop?.offset))
    }

    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|warning| warning.kind == kind)
    }

    pub(crate) fn add_warning(&mut self, kind: WarningKind, node: NodeId) {
        self.warnings.push(Warning { kind, node });
    }

    /// Grows the span to cover `token`.
    pub(crate) fn cover(&mut self, token: &Token) {
        self.start.get_or_insert(SourcePosition {
            offset: token.span.start,
            line: token.line,
            column: token.column,
        });
        let (line, column) = token.end_line_column();
        self.stop = Some(SourcePosition {
            offset: token.span.end,
            line,
            column,
        });
    }
}

/// Ordered statements of a script and the one enclosing the caret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Segmentation {
    /// Never empty; the last statement may hold no tokens.
    pub statements: Vec<ParsedStatement>,

    /// Index of the statement containing the caret, if any.
    pub enclosing_index: Option<usize>,
}

impl Segmentation {
    pub fn enclosing_statement(&self) -> Option<&ParsedStatement> {
        self.enclosing_index
            .and_then(|index| self.statements.get(index))
    }

    /// Statements that consumed at least one token.
    pub fn non_empty(&self) -> impl Iterator<Item = (usize, &ParsedStatement)> {
        self.statements
            .iter()
            .enumerate()
            .filter(|(_, statement)| !statement.is_empty())
    }
}
