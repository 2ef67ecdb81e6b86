//! Tests for findings and report sinks.

use leaklint_core::diagnostics::{
    CollectingSink, Finding, NullSink, ReportSink, RuleDescriptor, Severity, TracingSink,
};
use leaklint_core::span::{Pos, Span};

const TEST_RULE: RuleDescriptor = RuleDescriptor {
    id: "TST0001",
    title: "Test finding.",
    category: "Testing",
    severity: Severity::Warning,
    enabled_by_default: true,
};

fn finding_at(line: u32) -> Finding {
    Finding::new(
        &TEST_RULE,
        Span::new(Pos::new(line, 1), Pos::new(line, 20)),
    )
}

/// T0-DIA-01: Test finding payload carries the rule's fixed identity
#[test]
fn test_finding_payload_integrity() {
    let finding = finding_at(12);
    assert_eq!(finding.rule_id, "TST0001");
    assert_eq!(finding.message, "Test finding.");
    assert_eq!(finding.category, "Testing");
    assert_eq!(finding.severity, Severity::Warning);
    assert_eq!(finding.span.start, Pos::new(12, 1));
    assert_eq!(finding.span.end, Pos::new(12, 20));
}

/// T0-DIA-02: Test CollectingSink preserves report order
#[test]
fn test_collecting_sink_preserves_order() {
    let sink = CollectingSink::new();
    sink.report(finding_at(3));
    sink.report(finding_at(1));
    sink.report(finding_at(7));

    assert_eq!(sink.len(), 3);
    let findings = sink.take();
    let lines: Vec<u32> = findings.iter().map(|f| f.span.start.line).collect();
    assert_eq!(lines, vec![3, 1, 7]);
}

/// T0-DIA-03: Test CollectingSink::take drains the sink
#[test]
fn test_collecting_sink_take_drains() {
    let sink = CollectingSink::new();
    sink.report(finding_at(1));
    assert!(!sink.is_empty());

    let first = sink.take();
    assert_eq!(first.len(), 1);
    assert!(sink.is_empty());
    assert!(sink.take().is_empty());
}

/// T0-DIA-04: Test NullSink and TracingSink accept findings without effect on callers
#[test]
fn test_null_and_tracing_sinks_accept_findings() {
    let null = NullSink;
    null.report(finding_at(1));

    let tracing_sink = TracingSink;
    tracing_sink.report(finding_at(2));
}

/// T0-DIA-05: Test sinks are Send + Sync
#[test]
fn test_sinks_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CollectingSink>();
    assert_send_sync::<NullSink>();
    assert_send_sync::<TracingSink>();
}

/// T0-DIA-06: Test concurrent reports from many threads are all collected
#[test]
fn test_concurrent_reports_all_collected() {
    use rayon::prelude::*;

    let sink = CollectingSink::new();
    (0u32..64).into_par_iter().for_each(|i| {
        sink.report(finding_at(i + 1));
    });

    assert_eq!(sink.len(), 64);
}

/// T0-DIA-07: Test identical findings are kept, not deduplicated
#[test]
fn test_duplicate_findings_kept() {
    let sink = CollectingSink::new();
    sink.report(finding_at(5));
    sink.report(finding_at(5));

    let findings = sink.take();
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0], findings[1]);
}

/// T0-DIA-08: Test finding JSON shape is stable
#[test]
fn test_finding_json_shape() {
    let finding = finding_at(4);
    let json = serde_json::to_value(&finding).unwrap();

    assert_eq!(json["rule_id"], "TST0001");
    assert_eq!(json["message"], "Test finding.");
    assert_eq!(json["category"], "Testing");
    assert_eq!(json["severity"], "warning");
    assert_eq!(json["span"]["start"]["line"], 4);
    assert_eq!(json["span"]["start"]["column"], 1);
}

/// T0-DIA-09: Test severity labels used by reporters
#[test]
fn test_severity_labels() {
    assert_eq!(Severity::Error.label(), "error");
    assert_eq!(Severity::Warning.label(), "warning");
    assert_eq!(Severity::Info.label(), "info");
    assert_eq!(Severity::Hint.label(), "hint");
}
