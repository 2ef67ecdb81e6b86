//! Rule configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the disposable rule.
///
/// The rule's identity (id, message, category, severity) is fixed and not
/// configurable; only its on/off state and the exclusion list extension
/// are.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuleConfig {
    /// Whether the rule runs at all. Default: true.
    pub enabled: Option<bool>,
    /// Additional excluded types as dotted `"Namespace.Type"` entries,
    /// appended to the compiled-in exclusion table at startup.
    #[serde(default)]
    pub extra_exclusions: Vec<String>,
}

impl RuleConfig {
    /// Returns whether the rule is enabled, defaulting to true.
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}
