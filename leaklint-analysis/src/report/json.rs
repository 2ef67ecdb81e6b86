//! JSON reporter: structured JSON output.

use serde_json::json;

use leaklint_core::diagnostics::Finding;

use super::Reporter;

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, findings: &[Finding]) -> Result<String, String> {
        let entries: Vec<serde_json::Value> = findings
            .iter()
            .map(|f| {
                json!({
                    "rule_id": f.rule_id,
                    "message": f.message,
                    "category": f.category,
                    "severity": f.severity.label(),
                    "line": f.span.start.line,
                    "column": f.span.start.column,
                    "end_line": f.span.end.line,
                    "end_column": f.span.end.column,
                })
            })
            .collect();

        let output = json!({
            "version": "1",
            "total": findings.len(),
            "findings": entries,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaklint_core::diagnostics::Severity;
    use leaklint_core::span::{Pos, Span};

    #[test]
    fn report_shape_is_stable() {
        let finding = Finding {
            rule_id: "JLD0001",
            message: "Disposable object being constructed.",
            category: "Performance",
            severity: Severity::Warning,
            span: Span::new(Pos::new(3, 9), Pos::new(3, 31)),
        };

        let output = JsonReporter.generate(&[finding]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["version"], "1");
        assert_eq!(value["total"], 1);
        assert_eq!(value["findings"][0]["rule_id"], "JLD0001");
        assert_eq!(value["findings"][0]["severity"], "warning");
        assert_eq!(value["findings"][0]["line"], 3);
        assert_eq!(value["findings"][0]["end_column"], 31);
    }

    #[test]
    fn empty_report_serializes() {
        let output = JsonReporter.generate(&[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["total"], 0);
        assert!(value["findings"].as_array().unwrap().is_empty());
    }
}
