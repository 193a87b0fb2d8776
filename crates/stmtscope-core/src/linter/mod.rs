//! Tree-based SQL linter.
//!
//! The predicate library (`search`, `helpers`, `expression`) answers
//! structural questions about a subtree. Lint rules turn those answers into
//! [`Issue`]s with their own messages and severities; segmentation warnings
//! are separate and never pass through here.

pub mod config;
pub mod expression;
pub mod helpers;
pub mod rule;
pub mod rules;
pub mod search;

use config::LintConfig;
use rule::{LintContext, LintRule};

use crate::syntax::{Node, SyntaxTree};
use crate::types::{Issue, Segmentation, Severity};

/// The SQL linter, holding a set of rules and configuration.
pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
    config: LintConfig,
}

impl Linter {
    /// Creates a new linter with the given configuration.
    pub fn new(config: LintConfig) -> Self {
        Self {
            rules: rules::all_rules(),
            config,
        }
    }

    /// Returns true if linting is enabled.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Rules that will run under the current configuration.
    pub fn active_rules(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules
            .iter()
            .map(|rule| rule.as_ref())
            .filter(|rule| self.config.is_rule_enabled(rule.code()))
    }

    /// Checks a single statement against all enabled lint rules.
    pub fn check_statement(&self, stmt: Node<'_>, ctx: &LintContext<'_>) -> Vec<Issue> {
        normalize_issues(self.run_rules(stmt, ctx))
    }

    /// Checks every non-empty statement of a segmentation.
    ///
    /// Each statement is linted from all of its outermost statement nodes, so
    /// queries inside a transaction block are checked too. Statements without
    /// one are skipped.
    pub fn check_segmentation(&self, tree: &SyntaxTree, segmentation: &Segmentation) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (index, statement) in segmentation.non_empty() {
            let ctx = LintContext {
                tree,
                statement_index: index,
            };
            for stmt in statement.nodes.iter().filter_map(|id| tree.node(*id)) {
                issues.extend(self.run_rules(stmt, &ctx));
            }
        }

        normalize_issues(issues)
    }

    fn run_rules(&self, stmt: Node<'_>, ctx: &LintContext<'_>) -> Vec<Issue> {
        if !self.config.enabled {
            return Vec::new();
        }

        self.active_rules()
            .flat_map(|rule| rule.check(stmt, ctx))
            .collect()
    }
}

fn normalize_issues(mut issues: Vec<Issue>) -> Vec<Issue> {
    issues.sort_by(|left, right| issue_sort_key(left).cmp(&issue_sort_key(right)));
    issues.dedup_by(|left, right| {
        left.span.is_some()
            && left.statement_index == right.statement_index
            && left.span == right.span
            && left.code == right.code
            && left.message == right.message
    });
    issues
}

fn issue_sort_key(issue: &Issue) -> (usize, usize, usize, u8, &str, &str) {
    (
        issue.statement_index.unwrap_or(usize::MAX),
        issue.span.map_or(usize::MAX, |span| span.start),
        issue.span.map_or(usize::MAX, |span| span.end),
        severity_rank(issue.severity),
        issue.code.as_str(),
        issue.message.as_str(),
    )
}

const fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    }
}
