//! Public request and response types.
//!
//! Options come in as [`SegmentOptions`] and [`Dialect`]; segmentation hands
//! back a [`Segmentation`] of [`ParsedStatement`]s, and the lint layer hands
//! back [`Issue`]s.

mod common;
mod request;
mod response;

// Re-export all public types
pub use common::{issue_codes, CaretPosition, Issue, Severity, SourcePosition, Span};
pub use request::{Dialect, SegmentOptions};
pub use response::{ParsedStatement, Segmentation, Warning, WarningKind};
