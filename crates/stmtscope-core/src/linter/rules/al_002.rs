//! LINT_AL_002: Duplicate column names.
//!
//! Two projection items that resolve to the same name make the result
//! ambiguous for clients that address columns by name.

use crate::linter::helpers::{get_columns, has_duplicate_columns};
use crate::linter::rule::{LintContext, LintRule};
use crate::linter::search::find_all;
use crate::syntax::{Node, NodeKind};
use crate::types::{issue_codes, Issue};

pub struct DuplicateColumnNames;

impl LintRule for DuplicateColumnNames {
    fn code(&self) -> &'static str {
        issue_codes::LINT_AL_002
    }

    fn name(&self) -> &'static str {
        "Duplicate column names"
    }

    fn description(&self) -> &'static str {
        "Projected columns should have distinct names."
    }

    fn check(&self, stmt: Node<'_>, ctx: &LintContext<'_>) -> Vec<Issue> {
        find_all(stmt, NodeKind::SimpleSelectPrimary)
            .into_iter()
            .filter(|block| has_duplicate_columns(&get_columns(*block)))
            .map(|block| {
                Issue::warning(
                    issue_codes::LINT_AL_002,
                    "The same column name is projected more than once; alias one of them.",
                )
                .with_optional_span(ctx.span_of(block))
                .with_statement(ctx.statement_index)
            })
            .collect()
    }
}
