//! Test utilities for loading SQL fixtures and their tree outlines.
//!
//! Every fixture is a pair under `tests/fixtures/<dialect>/`: `<name>.sql`
//! holds the script and `<name>.outline` the parse tree in
//! [`TreeBuilder::from_outline`] notation.

use std::path::PathBuf;

use crate::syntax::{SyntaxTree, TreeBuilder};
use crate::types::Dialect;

/// Get the path to the test fixtures directory
pub fn fixtures_dir() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(manifest_dir).join("tests").join("fixtures")
}

fn read_fixture(dialect: &str, file: &str) -> String {
    let path = fixtures_dir().join(dialect).join(file);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture {path:?}: {e}"))
}

/// Load a SQL fixture by dialect and name, without trailing whitespace.
pub fn load_sql_fixture(dialect: &str, name: &str) -> String {
    read_fixture(dialect, &format!("{name}.sql"))
        .trim_end()
        .to_string()
}

/// Build the tree of a Postgres fixture.
pub fn fixture_tree(name: &str) -> SyntaxTree {
    let sql = load_sql_fixture("postgres", name);
    let outline = read_fixture("postgres", &format!("{name}.outline"));
    TreeBuilder::from_outline(sql, Dialect::Postgres, &outline)
        .unwrap_or_else(|e| panic!("Failed to build fixture {name}: {e}"))
}

/// List all fixture names for a given dialect
pub fn list_fixtures(dialect: &str) -> Vec<String> {
    let dir = fixtures_dir().join(dialect);
    if !dir.exists() {
        return Vec::new();
    }

    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap()
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let name = entry.file_name().to_string_lossy().to_string();
            name.strip_suffix(".sql").map(str::to_string)
        })
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_dir_exists() {
        let dir = fixtures_dir();
        assert!(dir.exists(), "Fixtures directory should exist: {dir:?}");
    }

    #[test]
    fn test_every_postgres_fixture_builds() {
        let fixtures = list_fixtures("postgres");
        assert!(!fixtures.is_empty());
        for name in fixtures {
            let tree = fixture_tree(&name);
            assert_eq!(tree.source(), load_sql_fixture("postgres", &name));
        }
    }
}
