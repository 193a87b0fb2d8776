//! LINT_AM_001: Ambiguous AND/OR precedence.
//!
//! A WHERE or HAVING condition that mixes AND and OR at one level without
//! parentheses relies on operator precedence the reader may not expect.

use crate::linter::expression::has_and_or_expr_without_parens;
use crate::linter::rule::{LintContext, LintRule};
use crate::linter::search::find_all;
use crate::syntax::{Node, NodeKind};
use crate::types::{issue_codes, Issue};

pub struct AmbiguousAndOr;

impl LintRule for AmbiguousAndOr {
    fn code(&self) -> &'static str {
        issue_codes::LINT_AM_001
    }

    fn name(&self) -> &'static str {
        "Ambiguous AND/OR"
    }

    fn description(&self) -> &'static str {
        "Conditions mixing AND and OR should group their terms with parentheses."
    }

    fn check(&self, stmt: Node<'_>, ctx: &LintContext<'_>) -> Vec<Issue> {
        [NodeKind::WhereClause, NodeKind::HavingClause]
            .into_iter()
            .flat_map(|kind| find_all(stmt, kind))
            .filter(|clause| has_and_or_expr_without_parens(*clause))
            .map(|clause| {
                Issue::warning(
                    issue_codes::LINT_AM_001,
                    "AND and OR are mixed without parentheses; group the conditions explicitly.",
                )
                .with_optional_span(ctx.span_of(clause))
                .with_statement(ctx.statement_index)
            })
            .collect()
    }
}
