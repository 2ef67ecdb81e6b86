//! Resolved-type values supplied by semantic models.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A resolved type: containing namespace, simple name, and the full
/// transitive set of implemented interface names.
///
/// Interface names are fully qualified (`"System.IDisposable"`). The set
/// must already include interfaces inherited through base types and base
/// interfaces; the classifier does not walk hierarchies itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub namespace: String,
    pub name: String,
    pub interfaces: SmallVec<[String; 4]>,
}

impl TypeDescriptor {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            interfaces: SmallVec::new(),
        }
    }

    /// Add an implemented interface (builder style).
    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// `Namespace.Name`.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    /// Whether the transitive interface set contains `interface`.
    /// Comparison is exact, case-sensitive.
    pub fn implements(&self, interface: &str) -> bool {
        self.interfaces.iter().any(|i| i == interface)
    }
}
