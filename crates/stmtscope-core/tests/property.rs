use proptest::prelude::*;
use proptest::sample::Index;
use stmtscope_core::{segment, CaretPosition, Dialect, SegmentOptions, TreeBuilder};

const WORDS: &[&str] = &["SELECT", "FROM", "WHERE", "a", "b", "t", "1", "42", "'x'", "=", "*"];

fn statement() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..6).prop_map(|words| words.join(" "))
}

fn script() -> impl Strategy<Value = (Vec<String>, &'static str)> {
    (
        prop::collection::vec(statement(), 1..6),
        prop::sample::select(vec![" ", "\n", " \n  "]),
    )
}

fn render(statements: &[String], gap: &str) -> String {
    statements
        .iter()
        .map(|statement| format!("{statement};"))
        .collect::<Vec<_>>()
        .join(gap)
}

proptest! {
    #[test]
    fn one_statement_per_terminator_plus_a_trailing_one(
        (statements, gap) in script(),
    ) {
        let sql = render(&statements, gap);
        let tree = TreeBuilder::flat_script(sql, Dialect::Postgres).unwrap();
        let result = segment(&tree, CaretPosition::new(1, 1), &SegmentOptions::default()).unwrap();

        prop_assert_eq!(result.statements.len(), statements.len() + 1);
        prop_assert!(result.statements.last().is_some_and(|last| last.is_empty()));
        for (parsed, written) in result.statements.iter().zip(&statements) {
            prop_assert_eq!(&parsed.text, &format!("{written} "));
        }
    }

    #[test]
    fn statement_spans_are_ordered_and_disjoint(
        (statements, gap) in script(),
    ) {
        let sql = render(&statements, gap);
        let tree = TreeBuilder::flat_script(sql.clone(), Dialect::Postgres).unwrap();
        let result = segment(&tree, CaretPosition::new(1, 1), &SegmentOptions::default()).unwrap();

        let spans: Vec<_> = result.statements.iter().filter_map(|s| s.span()).collect();
        prop_assert_eq!(spans.len(), statements.len());
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end < pair[1].start, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
        for (span, written) in spans.iter().zip(&statements) {
            prop_assert_eq!(&sql[span.start..span.end], written.as_str());
        }
    }

    #[test]
    fn caret_at_a_statement_start_selects_that_statement(
        (statements, gap) in script(),
        pick in any::<Index>(),
    ) {
        let sql = render(&statements, gap);
        let tree = TreeBuilder::flat_script(sql, Dialect::Postgres).unwrap();
        let layout = segment(&tree, CaretPosition::new(1, 1), &SegmentOptions::default()).unwrap();

        let target = pick.index(statements.len());
        let start = layout.statements[target].start.unwrap();
        let caret = CaretPosition::new(start.line, start.column);
        let result = segment(&tree, caret, &SegmentOptions::default()).unwrap();

        prop_assert_eq!(result.enclosing_index, Some(target));
        prop_assert_eq!(&result.statements, &layout.statements);
    }

    #[test]
    fn segmenting_twice_gives_the_same_answer(
        (statements, gap) in script(),
        line in 1usize..8,
        column in 1usize..40,
    ) {
        let sql = render(&statements, gap);
        let tree = TreeBuilder::flat_script(sql, Dialect::Postgres).unwrap();
        let caret = CaretPosition::new(line, column);

        let first = segment(&tree, caret, &SegmentOptions::default()).unwrap();
        let second = segment(&tree, caret, &SegmentOptions::default()).unwrap();
        prop_assert_eq!(first, second);
    }
}
