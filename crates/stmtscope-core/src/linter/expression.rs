//! Predicates over boolean expressions and function calls.

use super::helpers::get_columns;
use super::search::{find_all, find_first, has_ancestor_of_kind, used_operands};
use crate::syntax::{Node, NodeKind, TokenKind};

/// Function names treated as aggregates by [`has_aggregate_function`].
pub const AGGREGATE_FUNCTIONS: &[&str] = &["sum", "avg", "min", "max", "count"];

/// Clause kinds that shadow a projection or sort list further up.
const CLAUSE_BOUNDARIES: &[NodeKind] = &[
    NodeKind::WhereClause,
    NodeKind::FromClause,
    NodeKind::IntoClause,
    NodeKind::HavingClause,
];

const NAMED_LISTS: &[NodeKind] = &[
    NodeKind::OptTargetList,
    NodeKind::TargetList,
    NodeKind::SortbyList,
];

pub fn has_aggregate_function(node: Node<'_>) -> bool {
    has_specific_aggregate_function(node, AGGREGATE_FUNCTIONS)
}

/// True when `node` or any node beneath it applies a function whose
/// lowercased name is in `names`.
pub fn has_specific_aggregate_function(node: Node<'_>, names: &[&str]) -> bool {
    let applies = node.is(NodeKind::FuncApplication)
        && node.first_child_of(NodeKind::FuncName).is_some_and(|name| {
            let name = name.text().to_lowercase();
            names.contains(&name.as_str())
        });

    applies
        || node
            .child_nodes()
            .any(|child| has_specific_aggregate_function(child, names))
}

/// True when an OR level mixes in AND operators without grouping parentheses.
///
/// Follows the chain of first nested OR levels below `node`.
pub fn has_and_or_expr_without_parens(node: Node<'_>) -> bool {
    let mut current = find_first(node, NodeKind::AExprOr);

    while let Some(or_expr) = current {
        let has_or = or_expr
            .child_tokens()
            .any(|token| token.kind == TokenKind::Or);
        let has_and = or_expr.children_of(NodeKind::AExprAnd).any(|and_expr| {
            and_expr
                .child_tokens()
                .any(|token| token.kind == TokenKind::And)
        });
        if has_or && has_and {
            return true;
        }
        current = find_first(or_expr, NodeKind::AExprOr);
    }

    false
}

/// True when the subtree opens with `(` and closes with `)`.
pub fn is_fully_parenthesized(node: Node<'_>) -> bool {
    node.first_token()
        .is_some_and(|token| token.kind == TokenKind::OpenParen)
        && node
            .last_token()
            .is_some_and(|token| token.kind == TokenKind::CloseParen)
}

/// Structural balance check between atomic expressions and operators.
///
/// Counts atomic expressions that are not fully parenthesized and not part of
/// a projection or sort list, plus IN operators, and compares that with twice
/// the operator count plus BETWEEN operators. The arithmetic is a fixed
/// heuristic; callers should treat the answer as such.
pub fn is_logical_expression(node: Node<'_>) -> bool {
    let operands = used_operands(node);
    let between = operands
        .iter()
        .filter(|token| token.kind == TokenKind::Between)
        .count();
    let in_count = operands
        .iter()
        .filter(|token| token.kind == TokenKind::In)
        .count();

    let atoms = find_all(node, NodeKind::CExpr)
        .into_iter()
        .filter(|atom| {
            !is_fully_parenthesized(*atom)
                && !has_ancestor_of_kind(*atom, CLAUSE_BOUNDARIES, NAMED_LISTS)
        })
        .count();

    atoms + in_count == operands.len() * 2 + between
}

/// True when the left side of an IN predicate lists a different number of
/// expressions than the subquery projects.
pub fn has_subquery_column_mismatch(in_expr: Node<'_>, subquery: Node<'_>) -> bool {
    if in_expr.child_count() <= 1 {
        return false;
    }

    let left = in_expr
        .first_child_of(NodeKind::AExprUnaryNot)
        .map_or(0, |left| {
            find_all(left, NodeKind::CExpr)
                .into_iter()
                .filter(|atom| !is_fully_parenthesized(*atom))
                .count()
        });

    left != get_columns(subquery).len()
}
