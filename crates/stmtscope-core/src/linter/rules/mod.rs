//! Lint rule implementations and registry.

use super::rule::LintRule;

pub mod al_001;
pub mod al_002;
pub mod am_001;
pub mod am_002;
pub mod am_003;
pub mod cv_001;
pub mod st_001;

/// Returns all available lint rules.
pub fn all_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(am_001::AmbiguousAndOr),
        Box::new(am_002::SelectStarWithOuterJoin),
        Box::new(am_003::SubqueryColumnMismatch),
        Box::new(al_001::MissingColumnAlias),
        Box::new(al_002::DuplicateColumnNames),
        Box::new(cv_001::ConstantSortKey),
        Box::new(st_001::AggregateWithoutGroupBy),
    ]
}
