//! Fuzz target for tree construction.
//!
//! `TreeBuilder::from_outline` must reject malformed outlines with an error,
//! never a panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stmtscope_core::{Dialect, TreeBuilder};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    sql: String,
    outline: String,
}

fuzz_target!(|input: FuzzInput| {
    let _result = TreeBuilder::from_outline(input.sql, Dialect::Postgres, &input.outline);
});
