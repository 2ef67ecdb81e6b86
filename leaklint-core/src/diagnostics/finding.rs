//! The finding value handed to report sinks.

use serde::Serialize;

use crate::span::Span;

use super::{RuleDescriptor, Severity};

/// A single reported occurrence of a rule violation.
///
/// Findings are pure values: constructing one has no side effect, and the
/// same input always produces the same finding. Identical findings at the
/// same span are reported as many times as they occur; deduplication is
/// the consumer's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub rule_id: &'static str,
    pub message: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub span: Span,
}

impl Finding {
    /// Build a finding for `rule` at `span`, carrying the rule's fixed
    /// message, category, and severity.
    pub fn new(rule: &RuleDescriptor, span: Span) -> Self {
        Self {
            rule_id: rule.id,
            message: rule.title,
            category: rule.category,
            severity: rule.severity,
            span,
        }
    }
}
