//! Console reporter: human-readable output with color codes.

use leaklint_core::diagnostics::{Finding, Severity};

use super::Reporter;

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn color_start(&self, severity: Severity) -> &'static str {
        if !self.use_color {
            return "";
        }
        match severity {
            Severity::Error => "\x1b[31m",   // red
            Severity::Warning => "\x1b[33m", // yellow
            Severity::Info => "\x1b[36m",    // cyan
            Severity::Hint => "\x1b[90m",    // gray
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, findings: &[Finding]) -> Result<String, String> {
        let mut output = String::new();

        output.push_str("╔══════════════════════════════════════════╗\n");
        output.push_str("║             Leaklint Findings            ║\n");
        output.push_str("╚══════════════════════════════════════════╝\n\n");

        for finding in findings {
            let cs = self.color_start(finding.severity);
            let ce = self.color_end();
            output.push_str(&format!(
                "  {}{}{}: {}:{}: {} [{}]\n",
                cs,
                finding.severity.label(),
                ce,
                finding.span.start.line,
                finding.span.start.column,
                finding.message,
                finding.rule_id,
            ));
        }

        if !findings.is_empty() {
            output.push('\n');
        }

        let total = findings.len();
        output.push_str(&format!("─── Summary: {total} finding(s) ───\n"));

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaklint_core::span::{Pos, Span};

    fn sample_finding() -> Finding {
        Finding {
            rule_id: "JLD0001",
            message: "Disposable object being constructed.",
            category: "Performance",
            severity: Severity::Warning,
            span: Span::point(Pos::new(4, 17)),
        }
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let reporter = ConsoleReporter::new(false);
        let output = reporter.generate(&[sample_finding()]).unwrap();
        assert!(!output.contains('\x1b'));
        assert!(output.contains("warning: 4:17: Disposable object being constructed. [JLD0001]"));
    }

    #[test]
    fn colored_output_wraps_the_label() {
        let reporter = ConsoleReporter::new(true);
        let output = reporter.generate(&[sample_finding()]).unwrap();
        assert!(output.contains("\x1b[33mwarning\x1b[0m"));
    }

    #[test]
    fn summary_counts_findings() {
        let reporter = ConsoleReporter::new(false);
        let output = reporter
            .generate(&[sample_finding(), sample_finding()])
            .unwrap();
        assert!(output.contains("Summary: 2 finding(s)"));
    }

    #[test]
    fn empty_report_still_has_header_and_summary() {
        let reporter = ConsoleReporter::new(false);
        let output = reporter.generate(&[]).unwrap();
        assert!(output.contains("Leaklint Findings"));
        assert!(output.contains("Summary: 0 finding(s)"));
    }
}
