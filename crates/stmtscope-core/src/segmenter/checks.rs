//! Structural checks raised while segmenting.

use crate::linter::helpers::{count_tables_in_from_clause, has_select_star};
use crate::syntax::{Node, NodeKind};
use crate::types::{ParsedStatement, WarningKind};

/// Attaches warnings for `node` to the statement being built.
pub(super) fn check_node(node: Node<'_>, statement: &mut ParsedStatement) {
    match node.kind() {
        NodeKind::SimpleSelectPrimary => {
            if node.first_child_of(NodeKind::DistinctClause).is_some()
                && node.first_child_of(NodeKind::GroupClause).is_some()
            {
                statement.add_warning(WarningKind::DistinctKeywordWithGroupByClause, node.id());
            }
            if has_select_star(node) && count_tables_in_from_clause(node) > 1 {
                statement.add_warning(WarningKind::SelectAllWithMultipleJoins, node.id());
            }
        }
        NodeKind::Identifier => {
            if is_double_quoted(&node.text()) {
                statement.add_warning(WarningKind::DoubleQuotes, node.id());
            }
        }
        _ => {}
    }
}

fn is_double_quoted(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}
