//! Node and token classification for the concrete parse tree.
//!
//! The grammar itself lives with the host. This module only names the rules
//! and token classes that segmentation and the lint predicates look at;
//! every other grammar rule maps to [`NodeKind::Other`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Grammar rule tag carried by every interior node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Whole script: statement block followed by end-of-input.
    Root,
    /// Statement block; also the nested block of rule actions.
    StmtBlock,
    /// Terminator-separated statement list.
    StmtMulti,
    /// A single statement.
    Stmt,
    /// BEGIN / COMMIT / END / ROLLBACK and friends.
    TransactionStmt,
    InsertStmt,
    InsertRest,
    InsertColumnList,
    InsertColumnItem,
    /// Primary query block (`simple_select_pramary`): SELECT before set operations.
    SimpleSelectPrimary,
    DistinctClause,
    IntoClause,
    FromClause,
    FromList,
    TableRef,
    JoinType,
    WhereClause,
    GroupClause,
    GroupByList,
    GroupByItem,
    EmptyGroupingSet,
    HavingClause,
    OptTargetList,
    TargetList,
    /// Projection item with an optional alias.
    TargetLabel,
    /// Unqualified `*` projection item.
    TargetStar,
    SortbyList,
    Sortby,
    /// OR level of a boolean expression.
    AExprOr,
    /// AND level of a boolean expression.
    AExprAnd,
    /// Comparison (`=`, `<>`, `<`, ...).
    AExprCompare,
    AExprBetween,
    AExprIn,
    AExprUnaryNot,
    /// Atomic expression (`c_expr`): constant, column, call, parenthesized expression.
    CExpr,
    AexprConst,
    ColumnRef,
    /// Column identifier (`colid`).
    Colid,
    Identifier,
    Indirection,
    /// Member access / subscript element; flattened during reconstruction.
    IndirectionEl,
    FuncApplication,
    FuncName,
    FuncExpr,
    /// Call written without regular call syntax; canonicalized to `name(args)`.
    SugarCall,
    /// Node whose direct bracket and comma tokens are call delimiters.
    CallSyntax,
    SelectWithParens,
    /// Any rule nothing in this crate inspects.
    Other,
}

impl NodeKind {
    /// Token kinds that count as operands when they are direct children of
    /// a node of this kind.
    pub fn operand_token_kinds(self) -> &'static [TokenKind] {
        match self {
            Self::AExprCompare => &[TokenKind::Comparison],
            Self::AExprBetween => &[TokenKind::Between],
            Self::AExprIn => &[TokenKind::In],
            _ => &[],
        }
    }

    /// Returns true for projection items.
    pub fn is_target_element(self) -> bool {
        matches!(self, Self::TargetLabel | Self::TargetStar)
    }
}

/// Lexical class of a terminal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Keyword,
    Identifier,
    String,
    Number,
    /// `=`, `<>`, `!=`, `<`, `>`, `<=`, `>=`.
    Comparison,
    Operator,
    OpenParen,
    CloseParen,
    Comma,
    Period,
    Semicolon,
    Star,
    Between,
    In,
    And,
    Or,
    Not,
    Cross,
    Eof,
    Other,
}

impl TokenKind {
    /// Bracket and comma tokens, which are structural inside call syntax.
    pub fn is_call_delimiter(self) -> bool {
        matches!(self, Self::OpenParen | Self::CloseParen | Self::Comma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_operator_nodes_expose_operands() {
        assert_eq!(
            NodeKind::AExprCompare.operand_token_kinds(),
            &[TokenKind::Comparison]
        );
        assert_eq!(NodeKind::AExprIn.operand_token_kinds(), &[TokenKind::In]);
        assert!(NodeKind::AExprOr.operand_token_kinds().is_empty());
        assert!(NodeKind::CExpr.operand_token_kinds().is_empty());
    }

    #[test]
    fn kinds_serialize_in_snake_case() {
        let json = serde_json::to_string(&NodeKind::SimpleSelectPrimary).unwrap();
        assert_eq!(json, "\"simple_select_primary\"");
        let json = serde_json::to_string(&TokenKind::OpenParen).unwrap();
        assert_eq!(json, "\"open_paren\"");
    }
}
