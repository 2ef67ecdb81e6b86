//! Rule identity.

use super::Severity;

/// Fixed identity of a rule: id, human-readable title, category, default
/// severity, and whether the rule runs unless explicitly disabled.
///
/// Descriptors are `const`-constructible so a rule can carry its identity
/// as a static. The identity is not configurable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub enabled_by_default: bool,
}
