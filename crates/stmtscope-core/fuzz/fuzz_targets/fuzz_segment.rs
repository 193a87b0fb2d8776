//! Fuzz target for segmentation and linting.
//!
//! Builds a flat statement tree over arbitrary SQL and checks that
//! `segment()` and the linter never panic, and that segmentation keeps its
//! ordering guarantees.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stmtscope_core::{segment, CaretPosition, Dialect, LintConfig, Linter, SegmentOptions, TreeBuilder};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    sql: String,
    dialect_idx: u8,
    caret_line: u8,
    caret_column: u8,
}

impl FuzzInput {
    fn dialect(&self) -> Dialect {
        match self.dialect_idx % 3 {
            0 => Dialect::Generic,
            1 => Dialect::Ansi,
            _ => Dialect::Postgres,
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    // Lexer errors are expected for arbitrary input.
    let Ok(tree) = TreeBuilder::flat_script(input.sql.as_str(), input.dialect()) else {
        return;
    };

    let caret = CaretPosition::new(
        usize::from(input.caret_line.max(1)),
        usize::from(input.caret_column.max(1)),
    );
    let Ok(result) = segment(&tree, caret, &SegmentOptions::default()) else {
        return;
    };

    assert!(!result.statements.is_empty());
    let spans: Vec<_> = result.statements.iter().filter_map(|s| s.span()).collect();
    assert!(spans.windows(2).all(|pair| pair[0].end <= pair[1].start));

    let _issues = Linter::new(LintConfig::default()).check_segmentation(&tree, &result);
});
