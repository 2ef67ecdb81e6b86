//! Core types, traits, errors, config, and diagnostics for the leaklint
//! analyzer.
//!
//! This crate carries no analysis logic. It defines the vocabulary shared
//! by the engine and its hosts: source positions, findings and report
//! sinks, typed errors, layered configuration, cooperative cancellation,
//! and tracing setup.

pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod span;
pub mod trace;
pub mod traits;

pub use config::LeaklintConfig;
pub use diagnostics::{Finding, ReportSink, RuleDescriptor, Severity};
pub use span::{Pos, Span};
pub use traits::cancellation::{Cancellable, CancellationToken, NeverCancelled};
