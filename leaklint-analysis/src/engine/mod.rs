//! Traversal driver: single preorder pass dispatching registered kinds.
//!
//! The driver owns one rule instance and no per-run state: `run` may be
//! called concurrently on the same engine from any number of threads, and
//! `run_units` fans whole units out across the rayon pool. Nothing in here
//! blocks, suspends, or touches I/O.

use leaklint_core::config::RuleConfig;
use leaklint_core::diagnostics::{CollectingSink, Finding, ReportSink};
use leaklint_core::traits::cancellation::{Cancellable, NeverCancelled};
use rayon::prelude::*;

use crate::classify::{ExclusionList, TypeClassifier};
use crate::rule::{DisposableRule, RuleContext, REGISTERED_KINDS};
use crate::semantic::SemanticModel;
use crate::syntax::SyntaxTree;

/// One independently analyzable unit: a tree plus the semantic model that
/// answers for it.
#[derive(Clone, Copy)]
pub struct AnalysisUnit<'a> {
    pub tree: &'a SyntaxTree,
    pub semantics: &'a dyn SemanticModel,
}

impl<'a> AnalysisUnit<'a> {
    pub fn new(tree: &'a SyntaxTree, semantics: &'a dyn SemanticModel) -> Self {
        Self { tree, semantics }
    }
}

/// Analysis driver owning the rule instance.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    rule: DisposableRule,
    enabled: bool,
}

impl AnalysisEngine {
    /// Engine with the default rule configuration.
    pub fn new() -> Self {
        Self {
            rule: DisposableRule::new(),
            enabled: true,
        }
    }

    /// Engine honoring `config`: the rule toggle and the extra exclusion
    /// entries.
    pub fn with_config(config: &RuleConfig) -> Self {
        let exclusions = ExclusionList::with_extra(&config.extra_exclusions);
        Self {
            rule: DisposableRule::with_classifier(TypeClassifier::with_exclusions(exclusions)),
            enabled: config.effective_enabled(),
        }
    }

    /// Single preorder pass over `tree`, dispatching nodes of registered
    /// kinds to the rule. Findings go to `sink`; the pass stops early when
    /// `cancel` fires. Findings reported before the stop stand.
    pub fn run(
        &self,
        tree: &SyntaxTree,
        semantics: &dyn SemanticModel,
        sink: &dyn ReportSink,
        cancel: &dyn Cancellable,
    ) {
        if !self.enabled {
            tracing::debug!("rule disabled, skipping analysis");
            return;
        }
        let ctx = RuleContext {
            tree,
            semantics,
            sink,
            cancel,
        };
        let mut dispatched = 0usize;
        for node in tree.preorder() {
            if cancel.is_cancelled() {
                tracing::debug!(dispatched, "analysis cancelled");
                return;
            }
            if REGISTERED_KINDS.contains(&tree.kind(node)) {
                self.rule.visit(&ctx, node);
                dispatched += 1;
            }
        }
        tracing::debug!(nodes = tree.len(), dispatched, "analysis pass complete");
    }

    /// Run over one tree and return the findings in traversal order.
    pub fn run_collect(
        &self,
        tree: &SyntaxTree,
        semantics: &dyn SemanticModel,
    ) -> Vec<Finding> {
        let sink = CollectingSink::new();
        self.run(tree, semantics, &sink, &NeverCancelled);
        sink.take()
    }

    /// Analyze several units in parallel on the rayon pool, all findings
    /// into one shared sink. Units are independent; the interleaving of
    /// findings across units is unspecified.
    pub fn run_units(
        &self,
        units: &[AnalysisUnit<'_>],
        sink: &dyn ReportSink,
        cancel: &(dyn Cancellable + Sync),
    ) {
        units.par_iter().for_each(|unit| {
            if cancel.is_cancelled() {
                return;
            }
            self.run(unit.tree, unit.semantics, sink, cancel);
        });
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
