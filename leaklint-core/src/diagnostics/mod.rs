//! Findings and the outbound reporting channel.

pub mod descriptor;
pub mod finding;
pub mod severity;
pub mod sink;

pub use descriptor::RuleDescriptor;
pub use finding::Finding;
pub use severity::Severity;
pub use sink::{CollectingSink, NullSink, ReportSink, TracingSink};
