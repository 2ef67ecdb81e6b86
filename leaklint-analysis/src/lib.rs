//! Detection engine for leaklint.
//!
//! The contract: an expression that produces a disposable resource must be
//! visibly scoped for guaranteed release. The rule flags constructions and
//! calls whose static type carries the release capability, unless the
//! value is the resource binding of an enclosing scope guard.
//!
//! Layering:
//! - [`syntax`]: arena-backed tree the host hands to the engine;
//! - [`semantic`]: the injected type-resolution capability;
//! - [`classify`]: the disposable predicate with its exclusion table;
//! - [`rule`]: per-node dispatch and the guard-scope walk;
//! - [`engine`]: single-pass traversal driver, parallel across units;
//! - [`frontend`]: tree-sitter C# adapter with a declared-type binder;
//! - [`report`]: output formats over collected findings.

pub mod classify;
pub mod engine;
pub mod frontend;
pub mod report;
pub mod rule;
pub mod semantic;
pub mod syntax;

pub use engine::{AnalysisEngine, AnalysisUnit};
pub use rule::{DisposableRule, RuleContext, DISPOSABLE_RULE};
