//! LINT_AM_003: IN subquery column count.
//!
//! The left side of `IN (SELECT ...)` must list as many expressions as the
//! subquery projects.

use crate::linter::expression::has_subquery_column_mismatch;
use crate::linter::helpers::{find_select_primary, get_columns};
use crate::linter::rule::{LintContext, LintRule};
use crate::linter::search::find_all;
use crate::syntax::{Node, NodeKind};
use crate::types::{issue_codes, Issue};

pub struct SubqueryColumnMismatch;

impl LintRule for SubqueryColumnMismatch {
    fn code(&self) -> &'static str {
        issue_codes::LINT_AM_003
    }

    fn name(&self) -> &'static str {
        "IN subquery column count"
    }

    fn description(&self) -> &'static str {
        "An IN subquery must return as many columns as the expressions it is compared with."
    }

    fn check(&self, stmt: Node<'_>, ctx: &LintContext<'_>) -> Vec<Issue> {
        let mut issues = Vec::new();

        for in_expr in find_all(stmt, NodeKind::AExprIn) {
            let Some(subquery) = in_expr
                .first_child_of(NodeKind::SelectWithParens)
                .and_then(find_select_primary)
            else {
                continue;
            };

            if has_subquery_column_mismatch(in_expr, subquery) {
                let columns = get_columns(subquery).len();
                issues.push(
                    Issue::error(
                        issue_codes::LINT_AM_003,
                        format!(
                            "IN subquery returns {columns} column(s), which does not match the left-hand side."
                        ),
                    )
                    .with_optional_span(ctx.span_of(in_expr))
                    .with_statement(ctx.statement_index),
                );
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::search::find_first;
    use crate::test_utils::fixture_tree;
    use crate::types::Severity;

    fn run(fixture: &str) -> Vec<Issue> {
        let tree = fixture_tree(fixture);
        let stmt = find_first(tree.root(), NodeKind::Stmt).unwrap();
        SubqueryColumnMismatch.check(
            stmt,
            &LintContext {
                tree: &tree,
                statement_index: 0,
            },
        )
    }

    #[test]
    fn flags_two_columns_against_one_expression() {
        let issues = run("in_subquery_mismatch");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert!(issues[0].message.contains("2 column(s)"));
    }

    #[test]
    fn queries_without_in_are_ignored() {
        assert!(run("ambiguous_and_or").is_empty());
    }
}
