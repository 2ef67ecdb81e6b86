//! Guard-scope resolution: is a node's value visibly bound for release?

use crate::syntax::{NodeId, SyntaxKind, SyntaxTree};

/// Walk the ancestor chain of `node` and decide at the first decisive
/// ancestor:
///
/// - an argument list means the value is consumed as a call input and is
///   never the guarded resource, even inside a guard: `false`;
/// - a scope guard guards `node` only when the walk arrived through the
///   guard's resource binding (its first child); arrival through the body
///   means the guard releases some other value: `false`;
/// - the root is reached: `false`.
///
/// The walk is lazy and allocation-free; the chain is never materialized
/// and nothing about it is cached between calls.
pub fn is_guarded(tree: &SyntaxTree, node: NodeId) -> bool {
    let mut came_from = node;
    for ancestor in tree.ancestors(node) {
        match tree.kind(ancestor) {
            SyntaxKind::ArgumentList => return false,
            SyntaxKind::ScopeGuard => {
                return tree.first_child(ancestor) == Some(came_from);
            }
            _ => came_from = ancestor,
        }
    }
    false
}
