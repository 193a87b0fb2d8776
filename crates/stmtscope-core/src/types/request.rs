//! Caller-supplied configuration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::syntax::TokenKind;

/// SQL dialect used when lexing source text for tree construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Generic,
    Ansi,
    #[default]
    Postgres,
}

impl Dialect {
    pub fn to_sqlparser_dialect(&self) -> Box<dyn sqlparser::dialect::Dialect> {
        use sqlparser::dialect::{AnsiDialect, GenericDialect, PostgreSqlDialect};
        match self {
            Self::Generic => Box::new(GenericDialect {}),
            Self::Ansi => Box::new(AnsiDialect {}),
            Self::Postgres => Box::new(PostgreSqlDialect {}),
        }
    }
}

/// Options for [`crate::segment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SegmentOptions {
    /// Text appended after every reconstructed token (default: a single space).
    #[serde(default = "default_token_separator")]
    pub token_separator: String,

    /// Token kind that ends a statement (default: `semicolon`).
    #[serde(default = "default_terminator")]
    pub terminator: TokenKind,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            token_separator: default_token_separator(),
            terminator: default_terminator(),
        }
    }
}

fn default_token_separator() -> String {
    " ".to_string()
}

fn default_terminator() -> TokenKind {
    TokenKind::Semicolon
}
