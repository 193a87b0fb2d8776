//! LINT_CV_001: Constant sort key.
//!
//! `ORDER BY 1` sorts by column position, which breaks silently when the
//! projection changes; any other constant does not sort at all.

use crate::linter::helpers::has_constant_sort_key;
use crate::linter::rule::{LintContext, LintRule};
use crate::linter::search::find_all;
use crate::syntax::{Node, NodeKind};
use crate::types::{issue_codes, Issue};

pub struct ConstantSortKey;

impl LintRule for ConstantSortKey {
    fn code(&self) -> &'static str {
        issue_codes::LINT_CV_001
    }

    fn name(&self) -> &'static str {
        "Constant sort key"
    }

    fn description(&self) -> &'static str {
        "ORDER BY should name columns or expressions rather than constants."
    }

    fn check(&self, stmt: Node<'_>, ctx: &LintContext<'_>) -> Vec<Issue> {
        find_all(stmt, NodeKind::SortbyList)
            .into_iter()
            .filter(|list| has_constant_sort_key(*list))
            .map(|list| {
                Issue::info(
                    issue_codes::LINT_CV_001,
                    "ORDER BY uses a constant; sort by a named column instead.",
                )
                .with_optional_span(ctx.span_of(list))
                .with_statement(ctx.statement_index)
            })
            .collect()
    }
}
