//! LINT_AL_001: Missing column alias.
//!
//! A constant or function call in the projection without an alias gets a
//! server-chosen column name.

use crate::linter::helpers::{get_columns, has_missing_column_alias};
use crate::linter::rule::{LintContext, LintRule};
use crate::linter::search::find_all;
use crate::syntax::{Node, NodeKind};
use crate::types::{issue_codes, Issue};

pub struct MissingColumnAlias;

impl LintRule for MissingColumnAlias {
    fn code(&self) -> &'static str {
        issue_codes::LINT_AL_001
    }

    fn name(&self) -> &'static str {
        "Missing column alias"
    }

    fn description(&self) -> &'static str {
        "Constant and function-call columns should have an explicit alias."
    }

    fn check(&self, stmt: Node<'_>, ctx: &LintContext<'_>) -> Vec<Issue> {
        find_all(stmt, NodeKind::SimpleSelectPrimary)
            .into_iter()
            .flat_map(get_columns)
            .filter(|column| has_missing_column_alias(&[*column]))
            .map(|column| {
                Issue::info(
                    issue_codes::LINT_AL_001,
                    format!("Column `{}` has no alias.", ctx.node_sql(column)),
                )
                .with_optional_span(ctx.span_of(column))
                .with_statement(ctx.statement_index)
            })
            .collect()
    }
}
