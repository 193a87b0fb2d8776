use rstest::rstest;
use stmtscope_core::{
    issue_codes, segment, CaretPosition, Issue, LintConfig, Linter, SegmentOptions, Severity,
    SyntaxTree,
};

mod common;
use common::{fixture, outlined};

fn run_lint(tree: &SyntaxTree, config: LintConfig) -> Vec<Issue> {
    let segmentation =
        segment(tree, CaretPosition::new(1, 1), &SegmentOptions::default()).unwrap();
    Linter::new(config).check_segmentation(tree, &segmentation)
}

fn codes(issues: &[Issue]) -> Vec<&str> {
    issues.iter().map(|issue| issue.code.as_str()).collect()
}

#[rstest]
#[case("star_left_join", &[issue_codes::LINT_AM_002])]
#[case("ambiguous_and_or", &[issue_codes::LINT_AM_001])]
#[case("in_subquery_mismatch", &[issue_codes::LINT_AM_003])]
#[case("unaliased_constants", &[issue_codes::LINT_AL_001, issue_codes::LINT_AL_001])]
#[case("duplicate_columns", &[issue_codes::LINT_AL_002])]
#[case("aggregate_without_group_by", &[issue_codes::LINT_ST_001, issue_codes::LINT_AL_001])]
#[case("order_by_constant", &[issue_codes::LINT_CV_001])]
#[case("clean_query", &[])]
fn fixtures_raise_expected_rules(#[case] name: &str, #[case] expected: &[&str]) {
    let tree = fixture(name);
    let issues = run_lint(&tree, LintConfig::default());

    assert_eq!(codes(&issues), expected, "fixture {name}: {issues:?}");
    assert!(issues
        .iter()
        .all(|issue| issue.statement_index == Some(0) && issue.span.is_some()));
}

#[test]
fn subquery_mismatch_is_an_error() {
    let tree = fixture("in_subquery_mismatch");
    let issues = run_lint(&tree, LintConfig::default());

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Error);
}

#[test]
fn issues_carry_their_statement_index() {
    let tree = outlined(
        "SELECT 1; SELECT * FROM a LEFT JOIN b ON a = b",
        "(root
           (stmt (simple_select_primary _ (opt_target_list (target_list (target_label (c_expr (aexpr_const _)))))))
           _
           (stmt (simple_select_primary _ (opt_target_list (target_list (target_star _)))
             (from_clause _ (from_list (table_ref (other _) (join_type _) _ (table_ref _) _ _3)))))
           _)",
    );
    let issues = run_lint(&tree, LintConfig::default());
    let located: Vec<(Option<usize>, &str)> = issues
        .iter()
        .map(|issue| (issue.statement_index, issue.code.as_str()))
        .collect();

    assert_eq!(
        located,
        vec![
            (Some(0), issue_codes::LINT_AL_001),
            (Some(1), issue_codes::LINT_AM_002),
        ]
    );
}

const MIXED_AGGREGATE: &str = "(stmt (simple_select_primary _
    (opt_target_list (target_list
      (target_label (c_expr (column_ref (colid _))))
      _
      (target_label (c_expr (func_expr (func_application (func_name _) _3))))))
    (from_clause _ (from_list (table_ref _)))))";

#[test]
fn statements_inside_transaction_blocks_are_linted() {
    let outline = format!(
        "(root {MIXED_AGGREGATE} _ (stmt (transaction_stmt _)) _ {MIXED_AGGREGATE} _ (stmt (transaction_stmt _)) _ _)"
    );
    let tree = outlined(
        "SELECT a, count(*) FROM t; BEGIN; SELECT a, count(*) FROM t; END;",
        &outline,
    );
    let segmentation =
        segment(&tree, CaretPosition::new(1, 1), &SegmentOptions::default()).unwrap();
    assert_eq!(segmentation.non_empty().count(), 2);

    let issues = Linter::new(LintConfig::default()).check_segmentation(&tree, &segmentation);
    let located: Vec<(Option<usize>, &str)> = issues
        .iter()
        .map(|issue| (issue.statement_index, issue.code.as_str()))
        .collect();

    assert_eq!(
        located,
        vec![
            (Some(0), issue_codes::LINT_ST_001),
            (Some(0), issue_codes::LINT_AL_001),
            (Some(1), issue_codes::LINT_ST_001),
            (Some(1), issue_codes::LINT_AL_001),
        ]
    );
}

#[test]
fn disabled_rules_are_skipped_across_statements() {
    let tree = fixture("unaliased_constants");
    let issues = run_lint(&tree, LintConfig::without_rules([issue_codes::LINT_AL_001]));

    assert!(issues.is_empty());
}

#[test]
fn disabling_linting_returns_no_issues() {
    let tree = fixture("duplicate_columns");
    let config = LintConfig {
        enabled: false,
        ..LintConfig::default()
    };

    assert!(run_lint(&tree, config).is_empty());
}
