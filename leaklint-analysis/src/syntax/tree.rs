//! The node arena, its builder, and lazy walks over it.

use leaklint_core::span::{Pos, Span};

use super::SyntaxKind;

/// Index of a node within its tree.
///
/// Ids are only meaningful against the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: SyntaxKind,
    span: Span,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena of syntax nodes with parent links and ordered children.
///
/// Built once by a frontend or a [`TreeBuilder`] and never mutated
/// afterwards. The root is always present; an empty build yields a bare
/// `SourceFile` root.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn kind(&self, id: NodeId) -> SyntaxKind {
        self.nodes[id.index()].kind
    }

    pub fn span(&self, id: NodeId) -> Span {
        self.nodes[id.index()].span
    }

    /// Parent of `id`, `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    /// Children of `id` in source order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].children.first().copied()
    }

    /// Lazy walk from the parent of `id` up to the root. The chain is
    /// never materialized.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Depth-first walk over the whole tree in source order, driven by an
    /// explicit stack rather than recursion.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![self.root()],
        }
    }

    /// Render the tree as an indented outline, one node per line. Debug
    /// aid; not part of any report format.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(self.root(), 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let span = self.span(id);
            out.push_str(&format!(
                "{}{} @ {}:{}\n",
                "  ".repeat(depth),
                self.kind(id).name(),
                span.start.line,
                span.start.column,
            ));
            for &child in self.children(id).iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        out
    }
}

/// Iterator over the ancestor chain of a node, nearest first.
pub struct Ancestors<'t> {
    tree: &'t SyntaxTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Iterator over all nodes in preorder.
pub struct Preorder<'t> {
    tree: &'t SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        for &child in self.tree.children(current).iter().rev() {
            self.stack.push(child);
        }
        Some(current)
    }
}

/// Push/pop builder for [`SyntaxTree`].
///
/// `open` starts a node as a child of the innermost open node, `close`
/// returns to its parent, `leaf` is open-then-close. The first opened node
/// becomes the root.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
    open: Vec<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, kind: SyntaxKind, span: Span) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let parent = self.open.last().copied();
        self.nodes.push(NodeData {
            kind,
            span,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        self.open.push(id);
        id
    }

    pub fn close(&mut self) {
        self.open.pop();
    }

    pub fn leaf(&mut self, kind: SyntaxKind, span: Span) -> NodeId {
        let id = self.open(kind, span);
        self.close();
        id
    }

    pub fn finish(mut self) -> SyntaxTree {
        if self.nodes.is_empty() {
            self.nodes.push(NodeData {
                kind: SyntaxKind::SourceFile,
                span: Span::point(Pos::new(1, 1)),
                parent: None,
                children: Vec::new(),
            });
        }
        SyntaxTree { nodes: self.nodes }
    }
}
