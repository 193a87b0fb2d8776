//! LINT_AM_002: SELECT * with an outer join.
//!
//! With an outer or cross join, `*` expands to the columns of every joined
//! table, including NULL-extended ones, and silently changes shape when a
//! table gains a column.

use crate::linter::helpers::{has_outer_join, has_select_star};
use crate::linter::rule::{LintContext, LintRule};
use crate::linter::search::find_all;
use crate::syntax::{Node, NodeKind};
use crate::types::{issue_codes, Issue};

pub struct SelectStarWithOuterJoin;

impl LintRule for SelectStarWithOuterJoin {
    fn code(&self) -> &'static str {
        issue_codes::LINT_AM_002
    }

    fn name(&self) -> &'static str {
        "SELECT * with outer join"
    }

    fn description(&self) -> &'static str {
        "Queries with outer or cross joins should list their columns instead of using *."
    }

    fn check(&self, stmt: Node<'_>, ctx: &LintContext<'_>) -> Vec<Issue> {
        find_all(stmt, NodeKind::SimpleSelectPrimary)
            .into_iter()
            .filter(|block| has_select_star(*block) && has_outer_join(*block))
            .map(|block| {
                Issue::warning(
                    issue_codes::LINT_AM_002,
                    "SELECT * over an outer or cross join; list the columns explicitly.",
                )
                .with_optional_span(ctx.span_of(block))
                .with_statement(ctx.statement_index)
            })
            .collect()
    }
}
