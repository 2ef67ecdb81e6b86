//! Syntactic shapes of tree nodes.

use serde::{Deserialize, Serialize};

/// Kind of a syntax node.
///
/// The set is deliberately small: the shapes the disposable rule
/// dispatches or decides on, the structural shapes needed for realistic
/// trees, and an `Other` catch-all so frontends never drop nodes they have
/// no mapping for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    // ---- Shapes the rule dispatches or decides on ----
    /// `new T(...)` and equivalent construction expressions.
    Construction,
    /// Call expressions, including member invocations.
    Call,
    /// A statement that binds a resource and guarantees its release at
    /// scope exit (`using (...) { ... }`).
    ScopeGuard,
    /// The argument list of a call or construction.
    ArgumentList,
    /// Local variable declaration.
    VariableDeclaration,
    /// Field declaration.
    FieldDeclaration,

    // ---- Structural shapes ----
    SourceFile,
    ClassDeclaration,
    MethodDeclaration,
    PropertyDeclaration,
    /// The resource binding of a scope guard (`using (HERE) ...`).
    Binding,
    Argument,
    Block,
    Identifier,

    /// Any shape the frontend has no mapping for. Children are kept.
    Other,
}

impl SyntaxKind {
    /// Display name used by `SyntaxTree::dump`.
    pub fn name(&self) -> &'static str {
        match self {
            SyntaxKind::Construction => "Construction",
            SyntaxKind::Call => "Call",
            SyntaxKind::ScopeGuard => "ScopeGuard",
            SyntaxKind::ArgumentList => "ArgumentList",
            SyntaxKind::VariableDeclaration => "VariableDeclaration",
            SyntaxKind::FieldDeclaration => "FieldDeclaration",
            SyntaxKind::SourceFile => "SourceFile",
            SyntaxKind::ClassDeclaration => "ClassDeclaration",
            SyntaxKind::MethodDeclaration => "MethodDeclaration",
            SyntaxKind::PropertyDeclaration => "PropertyDeclaration",
            SyntaxKind::Binding => "Binding",
            SyntaxKind::Argument => "Argument",
            SyntaxKind::Block => "Block",
            SyntaxKind::Identifier => "Identifier",
            SyntaxKind::Other => "Other",
        }
    }
}
