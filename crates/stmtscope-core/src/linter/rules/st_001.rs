//! LINT_ST_001: Aggregate without GROUP BY.
//!
//! Mixing aggregate and plain columns in one query block needs a GROUP BY
//! for the plain columns.

use crate::linter::expression::has_aggregate_function;
use crate::linter::helpers::{get_columns, has_group_by_clause};
use crate::linter::rule::{LintContext, LintRule};
use crate::linter::search::{find_all, find_first};
use crate::syntax::{Node, NodeKind};
use crate::types::{issue_codes, Issue};

pub struct AggregateWithoutGroupBy;

impl LintRule for AggregateWithoutGroupBy {
    fn code(&self) -> &'static str {
        issue_codes::LINT_ST_001
    }

    fn name(&self) -> &'static str {
        "Aggregate without GROUP BY"
    }

    fn description(&self) -> &'static str {
        "Aggregate and non-aggregate columns in one SELECT require a GROUP BY clause."
    }

    fn check(&self, stmt: Node<'_>, ctx: &LintContext<'_>) -> Vec<Issue> {
        find_all(stmt, NodeKind::SimpleSelectPrimary)
            .into_iter()
            .filter(|block| !has_group_by_clause(*block) && mixes_aggregates(*block))
            .map(|block| {
                Issue::warning(
                    issue_codes::LINT_ST_001,
                    "Aggregate and plain columns are mixed without GROUP BY.",
                )
                .with_optional_span(ctx.span_of(block))
                .with_statement(ctx.statement_index)
            })
            .collect()
    }
}

fn mixes_aggregates(block: Node<'_>) -> bool {
    let columns = get_columns(block);
    let aggregated = columns.iter().any(|column| has_aggregate_function(*column));
    let plain = columns.iter().any(|column| {
        !has_aggregate_function(*column)
            && (column.is(NodeKind::TargetStar)
                || find_first(*column, NodeKind::ColumnRef).is_some())
    });
    aggregated && plain
}
