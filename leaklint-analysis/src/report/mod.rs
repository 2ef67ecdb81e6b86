//! Reporters: output formats for analysis findings.
//!
//! 2 reporter formats: console, JSON.

pub mod console;
pub mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

use leaklint_core::diagnostics::Finding;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, findings: &[Finding]) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(console::ConsoleReporter::default())),
        "json" => Some(Box::new(json::JsonReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "json"]
}
