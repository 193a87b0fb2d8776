#![allow(dead_code)]

use std::path::PathBuf;

use stmtscope_core::{
    segment, CaretPosition, Dialect, SegmentOptions, Segmentation, SyntaxTree, TreeBuilder,
};

/// Statement-level tree over `sql`, one `stmt` node per `;`-separated run.
pub fn flat(sql: &str) -> SyntaxTree {
    TreeBuilder::flat_script(sql, Dialect::Postgres).expect("script should lex")
}

/// Tree over `sql` shaped by an outline.
pub fn outlined(sql: &str, outline: &str) -> SyntaxTree {
    TreeBuilder::from_outline(sql, Dialect::Postgres, outline).expect("outline should build")
}

/// Segments `tree` with the default options and the caret at `line`:`column`.
pub fn run(tree: &SyntaxTree, line: usize, column: usize) -> Segmentation {
    segment(tree, CaretPosition::new(line, column), &SegmentOptions::default())
        .expect("caret should be valid")
}

/// Statement texts in order, trailing separators included.
pub fn texts(result: &Segmentation) -> Vec<&str> {
    result
        .statements
        .iter()
        .map(|statement| statement.text.as_str())
        .collect()
}

fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("postgres")
        .join(file)
}

/// Builds the Postgres fixture `name` from its `.sql` and `.outline` files.
pub fn fixture(name: &str) -> SyntaxTree {
    let read = |file: String| {
        std::fs::read_to_string(fixture_path(&file))
            .unwrap_or_else(|e| panic!("Failed to load fixture {file}: {e}"))
    };
    let sql = read(format!("{name}.sql"));
    let outline = read(format!("{name}.outline"));
    TreeBuilder::from_outline(sql.trim_end(), Dialect::Postgres, &outline)
        .unwrap_or_else(|e| panic!("Failed to build fixture {name}: {e}"))
}
