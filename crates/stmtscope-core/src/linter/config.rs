//! Linter configuration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which lint rules run. Every rule is on unless listed in `disabled_rules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LintConfig {
    /// Master switch (default: true).
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Rule codes to skip, e.g. `["LINT_CV_001"]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled_rules: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            disabled_rules: Vec::new(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

impl LintConfig {
    /// Returns a config with the given rule codes switched off.
    pub fn without_rules<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: true,
            disabled_rules: codes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_rule_enabled(&self, code: &str) -> bool {
        self.enabled && !self.disabled_rules.iter().any(|disabled| disabled == code)
    }
}
