//! The disposable rule: per-node dispatch, classification, and reporting.

pub mod scope;

use leaklint_core::diagnostics::{Finding, ReportSink, RuleDescriptor, Severity};
use leaklint_core::traits::cancellation::Cancellable;

use crate::classify::TypeClassifier;
use crate::semantic::{SemanticModel, TypeDescriptor};
use crate::syntax::{NodeId, SyntaxKind, SyntaxTree};

/// Identity of the disposable rule. Fixed across versions.
pub const DISPOSABLE_RULE: RuleDescriptor = RuleDescriptor {
    id: "JLD0001",
    title: "Disposable object being constructed.",
    category: "Performance",
    severity: Severity::Warning,
    enabled_by_default: true,
};

/// Node kinds the rule subscribes to.
///
/// The declaration kinds are subscribed but currently inert: visiting them
/// produces no finding. Their initializer expressions are reached through
/// the construction and call kinds instead.
pub const REGISTERED_KINDS: &[SyntaxKind] = &[
    SyntaxKind::Construction,
    SyntaxKind::Call,
    SyntaxKind::VariableDeclaration,
    SyntaxKind::FieldDeclaration,
];

/// Everything a single `visit` call reads or writes.
pub struct RuleContext<'a> {
    pub tree: &'a SyntaxTree,
    pub semantics: &'a dyn SemanticModel,
    pub sink: &'a dyn ReportSink,
    pub cancel: &'a dyn Cancellable,
}

/// Flags expressions that produce a disposable resource outside a scope
/// guard.
///
/// The rule is stateless: `visit` reads the tree and the semantic model,
/// and its only effect is handing findings to the sink. One instance may
/// serve any number of concurrent traversals.
#[derive(Debug, Clone, Default)]
pub struct DisposableRule {
    classifier: TypeClassifier,
}

impl DisposableRule {
    /// Rule with the default exclusion list.
    pub fn new() -> Self {
        Self {
            classifier: TypeClassifier::new(),
        }
    }

    /// Rule with a caller-built classifier.
    pub fn with_classifier(classifier: TypeClassifier) -> Self {
        Self { classifier }
    }

    /// Visit one node of a registered kind.
    ///
    /// Unregistered kinds and the declaration kinds fall through without
    /// effect. Resolution failures are silent skips.
    pub fn visit(&self, ctx: &RuleContext<'_>, node: NodeId) {
        if ctx.cancel.is_cancelled() {
            return;
        }
        match ctx.tree.kind(node) {
            SyntaxKind::Construction => {
                let ty = ctx.semantics.construction_type(ctx.tree, node);
                self.check(ctx, node, ty);
            }
            SyntaxKind::Call => {
                let ty = ctx.semantics.call_return_type(ctx.tree, node);
                self.check(ctx, node, ty);
            }
            // Declaration kinds: subscribed, visited, no finding.
            SyntaxKind::VariableDeclaration | SyntaxKind::FieldDeclaration => {}
            _ => {}
        }
    }

    fn check(&self, ctx: &RuleContext<'_>, node: NodeId, ty: Option<&TypeDescriptor>) {
        if ty.is_none() {
            tracing::trace!(node = node.index(), "no resolved type, skipping");
            return;
        }
        if !self.classifier.is_disposable(ty) {
            return;
        }
        if scope::is_guarded(ctx.tree, node) {
            return;
        }
        ctx.sink
            .report(Finding::new(&DISPOSABLE_RULE, ctx.tree.span(node)));
    }
}
