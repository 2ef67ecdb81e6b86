//! Arena-backed syntax trees.
//!
//! The engine does not parse anything itself: hosts (or the bundled
//! frontend) build a [`SyntaxTree`] and hand it over read-only. Trees are
//! immutable after construction, so shared references are safe across
//! threads.

pub mod kind;
pub mod tree;

pub use kind::SyntaxKind;
pub use tree::{Ancestors, NodeId, Preorder, SyntaxTree, TreeBuilder};
