//! The injected type-resolution capability.
//!
//! The engine never resolves types itself: a host supplies a
//! [`SemanticModel`] and the rule asks it per node. `None` answers mean
//! "unresolved" and make the rule skip the node; they are not errors.

pub mod model;
pub mod types;

pub use model::{NoSemantics, SemanticModel, TableSemantics};
pub use types::TypeDescriptor;
