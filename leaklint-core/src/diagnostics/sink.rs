//! Report sinks: the single outbound channel for findings.

use std::sync::{Mutex, PoisonError};

use super::Finding;

/// Outbound channel for findings.
///
/// Sinks must tolerate concurrent reports: the engine may analyze units in
/// parallel and hand findings from every worker to one shared sink.
pub trait ReportSink: Send + Sync {
    fn report(&self, finding: Finding);
}

/// Sink that stores findings in a mutex-guarded vec.
///
/// Used by tests and by `run_collect`-style conveniences. Report order is
/// traversal order within a single run; across parallel units the
/// interleaving is unspecified.
#[derive(Debug, Default)]
pub struct CollectingSink {
    findings: Mutex<Vec<Finding>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the collected findings, leaving the sink empty.
    pub fn take(&self) -> Vec<Finding> {
        let mut guard = self
            .findings
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *guard)
    }

    /// Number of findings currently held.
    pub fn len(&self) -> usize {
        self.findings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReportSink for CollectingSink {
    fn report(&self, finding: Finding) {
        self.findings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(finding);
    }
}

/// Sink that drops every finding.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn report(&self, _finding: Finding) {}
}

/// Sink that forwards findings to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn report(&self, finding: Finding) {
        tracing::warn!(
            rule = finding.rule_id,
            category = finding.category,
            line = finding.span.start.line,
            column = finding.span.start.column,
            "{}",
            finding.message,
        );
    }
}
