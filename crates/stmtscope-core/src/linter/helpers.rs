//! Clause and projection predicates over a primary query block.
//!
//! Optional clauses that are missing count as absent: predicates answer
//! `false`, `0` or an empty list instead of failing.

use std::collections::HashSet;

use super::search::{find_all, find_first};
use crate::syntax::{Child, Node, NodeKind, TokenKind};

/// Join type words that make a join outer.
const OUTER_JOIN_WORDS: &[&str] = &["full", "left", "right", "outer"];

/// Projection list of a query block.
///
/// `DISTINCT` blocks carry the target list directly, all others through
/// `opt_target_list`.
pub fn target_list<'t>(select: Node<'t>) -> Option<Node<'t>> {
    select
        .first_child_of(NodeKind::OptTargetList)
        .and_then(|opt| opt.first_child_of(NodeKind::TargetList))
        .or_else(|| select.first_child_of(NodeKind::TargetList))
}

/// Projection items of a query block, empty when there is no projection.
pub fn get_columns<'t>(select: Node<'t>) -> Vec<Node<'t>> {
    target_list(select)
        .map(|list| {
            list.child_nodes()
                .filter(|item| item.kind().is_target_element())
                .collect()
        })
        .unwrap_or_default()
}

pub fn has_select_star(select: Node<'_>) -> bool {
    get_columns(select)
        .first()
        .is_some_and(|item| item.is(NodeKind::TargetStar))
}

/// True when the first of `blocks` projects an unqualified `*`.
pub fn is_select_primary_select_star(blocks: &[Node<'_>]) -> bool {
    blocks.first().is_some_and(|block| has_select_star(*block))
}

pub fn has_text(node: Option<Node<'_>>) -> bool {
    node.is_some_and(|node| !node.text().is_empty())
}

pub fn has_group_by_clause(select: Node<'_>) -> bool {
    has_text(select.first_child_of(NodeKind::GroupClause))
}

pub fn has_distinct_clause(select: Node<'_>) -> bool {
    has_text(select.first_child_of(NodeKind::DistinctClause))
}

fn from_list<'t>(select: Node<'t>) -> Option<Node<'t>> {
    select
        .first_child_of(NodeKind::FromClause)
        .and_then(|from| from.first_child_of(NodeKind::FromList))
}

/// Number of table references in the FROM clause, joined tables included.
pub fn count_tables_in_from_clause(select: Node<'_>) -> usize {
    from_list(select).map_or(0, count_table_refs)
}

fn count_table_refs(node: Node<'_>) -> usize {
    node.children_of(NodeKind::TableRef)
        .map(|table| 1 + count_table_refs(table))
        .sum()
}

/// True when a top-level table reference joins with CROSS or an outer join type.
pub fn has_outer_join(select: Node<'_>) -> bool {
    let Some(list) = from_list(select) else {
        return false;
    };

    list.children_of(NodeKind::TableRef).any(|table| {
        table
            .child_tokens()
            .any(|token| token.kind == TokenKind::Cross)
            || table.children_of(NodeKind::JoinType).any(|join_type| {
                let text = join_type.text().to_lowercase();
                OUTER_JOIN_WORDS.iter().any(|word| text.contains(word))
            })
    })
}

pub fn count_grouping_terms(select: Node<'_>) -> usize {
    select
        .first_child_of(NodeKind::GroupClause)
        .and_then(|group| group.first_child_of(NodeKind::GroupByList))
        .map_or(0, |list| list.children_of(NodeKind::GroupByItem).count())
}

/// Number of columns named in an INSERT column list.
pub fn count_insert_columns(insert: Node<'_>) -> usize {
    insert
        .first_child_of(NodeKind::InsertRest)
        .and_then(|rest| rest.first_child_of(NodeKind::InsertColumnList))
        .map_or(0, |list| list.children_of(NodeKind::InsertColumnItem).count())
}

pub fn column_has_alias(item: Node<'_>) -> bool {
    item.child_count() > 1
}

/// Leading child of the item's first atomic expression, when that child is a node.
fn core_expression(item: Node<'_>) -> Option<Node<'_>> {
    find_first(item, NodeKind::CExpr)
        .and_then(|expr| expr.child(0))
        .and_then(Child::as_node)
}

/// Name a projection item shows up under in the result.
///
/// The alias when there is one, the trailing identifier of a plain column
/// reference, otherwise the item's own text.
pub fn column_display_name(item: Node<'_>) -> String {
    if column_has_alias(item) {
        return item.last_child().map(Child::text).unwrap_or_default();
    }

    core_expression(item)
        .filter(|core| core.is(NodeKind::ColumnRef))
        .and_then(|column| column.last_token())
        .map(|token| token.text.clone())
        .unwrap_or_else(|| item.text())
}

pub fn has_duplicate_columns(columns: &[Node<'_>]) -> bool {
    let mut seen = HashSet::new();
    columns
        .iter()
        .any(|item| !seen.insert(column_display_name(*item)))
}

/// True when an unaliased item is a bare constant or function call.
pub fn has_missing_column_alias(columns: &[Node<'_>]) -> bool {
    columns.iter().any(|item| {
        !column_has_alias(*item)
            && core_expression(*item)
                .is_some_and(|core| matches!(core.kind(), NodeKind::AexprConst | NodeKind::FuncExpr))
    })
}

/// Structural count of WHERE clauses beneath `node`.
pub fn count_where_clauses(node: Node<'_>) -> usize {
    find_all(node, NodeKind::WhereClause).len()
}

/// Textual count of subtrees and tokens that read exactly `where`.
///
/// Can disagree with [`count_where_clauses`] on trees with error-recovery
/// nodes. A matching subtree is counted once and not searched further.
pub fn count_wheres(node: Node<'_>) -> usize {
    if node.text().eq_ignore_ascii_case("where") {
        return 1;
    }
    node.children()
        .map(|child| match child {
            Child::Token(token) => usize::from(token.text.eq_ignore_ascii_case("where")),
            Child::Node(child) => count_wheres(child),
        })
        .sum()
}

/// `node` itself when it is a primary query block, else the first one beneath it.
pub fn find_select_primary(node: Node<'_>) -> Option<Node<'_>> {
    if node.is(NodeKind::SimpleSelectPrimary) {
        return Some(node);
    }
    find_first(node, NodeKind::SimpleSelectPrimary)
}

/// True when any sort key contains a constant.
pub fn has_constant_sort_key(sort_list: Node<'_>) -> bool {
    sort_list
        .children_of(NodeKind::Sortby)
        .any(|key| find_first(key, NodeKind::AexprConst).is_some())
}
