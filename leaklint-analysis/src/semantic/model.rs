//! Semantic model trait and the bundled implementations.

use rustc_hash::FxHashMap;

use crate::syntax::{NodeId, SyntaxTree};

use super::TypeDescriptor;

/// Resolution capability supplied by the host.
///
/// `None` is the unresolved sentinel: the caller skips the node rather
/// than guessing. Implementations must be infallible, must not panic, and
/// must answer from already-computed information; the rule calls these on
/// the traversal hot path.
pub trait SemanticModel: Send + Sync {
    /// Static type produced by a construction expression.
    fn construction_type(&self, tree: &SyntaxTree, node: NodeId) -> Option<&TypeDescriptor>;

    /// Declared return type of the member a call expression resolves to.
    /// This is the signature's type, not the runtime type of the value.
    fn call_return_type(&self, tree: &SyntaxTree, node: NodeId) -> Option<&TypeDescriptor>;
}

/// Semantic model backed by per-node type attachments.
///
/// Produced by the frontend binder for parsed source and built by hand in
/// tests for synthetic trees. Nodes without an attachment resolve to
/// `None`.
#[derive(Debug, Clone, Default)]
pub struct TableSemantics {
    types: FxHashMap<NodeId, TypeDescriptor>,
}

impl TableSemantics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a resolved type to a node, replacing any previous attachment.
    pub fn attach(&mut self, node: NodeId, ty: TypeDescriptor) {
        self.types.insert(node, ty);
    }

    /// Number of nodes with an attachment.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl SemanticModel for TableSemantics {
    fn construction_type(&self, _tree: &SyntaxTree, node: NodeId) -> Option<&TypeDescriptor> {
        self.types.get(&node)
    }

    fn call_return_type(&self, _tree: &SyntaxTree, node: NodeId) -> Option<&TypeDescriptor> {
        self.types.get(&node)
    }
}

/// Semantic model that resolves nothing. Every node is unresolved, so the
/// rule never flags anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSemantics;

impl SemanticModel for NoSemantics {
    fn construction_type(&self, _tree: &SyntaxTree, _node: NodeId) -> Option<&TypeDescriptor> {
        None
    }

    fn call_return_type(&self, _tree: &SyntaxTree, _node: NodeId) -> Option<&TypeDescriptor> {
        None
    }
}
