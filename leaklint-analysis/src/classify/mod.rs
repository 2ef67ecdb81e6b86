//! Disposable-type classification.
//!
//! A type is a disposable resource when its transitive interface set
//! carries the release capability, unless the `(namespace, name)` pair is
//! on the exclusion list. Exclusion is an override: it wins no matter what
//! the type implements, and it is checked first so excluded types never
//! pay for the interface scan.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::semantic::TypeDescriptor;

/// Fully qualified name of the release capability interface.
pub const DISPOSABLE_INTERFACE: &str = "System.IDisposable";

/// A `(namespace, simple name)` pair exempt from flagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionEntry {
    pub namespace: &'static str,
    pub name: &'static str,
}

/// Types exempt from flagging regardless of their interface set.
pub const DEFAULT_EXCLUSIONS: &[ExclusionEntry] = &[
    ExclusionEntry {
        namespace: "System.IO",
        name: "MemoryStream",
    },
    ExclusionEntry {
        namespace: "System.Threading.Tasks",
        name: "Task",
    },
];

/// Immutable exclusion list with allocation-free lookup.
///
/// Built once at startup from the default table plus optional config
/// entries, never mutated afterwards. Matching is exact and
/// case-sensitive on both components.
#[derive(Debug, Clone, Default)]
pub struct ExclusionList {
    by_namespace: FxHashMap<String, FxHashSet<String>>,
}

impl ExclusionList {
    /// The compiled-in default list.
    pub fn builtin() -> Self {
        let mut list = Self::default();
        for entry in DEFAULT_EXCLUSIONS {
            list.insert(entry.namespace, entry.name);
        }
        list
    }

    /// The default list extended with dotted `"Namespace.Type"` entries.
    /// Entries without a dot (or with an empty side) are skipped; config
    /// validation rejects them before they get here.
    pub fn with_extra(extra: &[String]) -> Self {
        let mut list = Self::builtin();
        for entry in extra {
            if let Some((namespace, name)) = entry.rsplit_once('.') {
                if !namespace.is_empty() && !name.is_empty() {
                    list.insert(namespace, name);
                }
            }
        }
        list
    }

    fn insert(&mut self, namespace: &str, name: &str) {
        self.by_namespace
            .entry(namespace.to_string())
            .or_default()
            .insert(name.to_string());
    }

    /// Whether `(namespace, name)` is excluded.
    pub fn contains(&self, namespace: &str, name: &str) -> bool {
        self.by_namespace
            .get(namespace)
            .is_some_and(|names| names.contains(name))
    }

    /// Total number of excluded type names.
    pub fn len(&self) -> usize {
        self.by_namespace.values().map(FxHashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_namespace.is_empty()
    }
}

/// The disposable predicate: exclusion override first, then capability
/// scan.
#[derive(Debug, Clone)]
pub struct TypeClassifier {
    exclusions: ExclusionList,
}

impl TypeClassifier {
    /// Classifier with the default exclusion list.
    pub fn new() -> Self {
        Self {
            exclusions: ExclusionList::builtin(),
        }
    }

    /// Classifier with a caller-built exclusion list.
    pub fn with_exclusions(exclusions: ExclusionList) -> Self {
        Self { exclusions }
    }

    /// Whether `ty` is a disposable resource worth flagging.
    ///
    /// `None` means resolution failed; unresolved types are never flagged.
    pub fn is_disposable(&self, ty: Option<&TypeDescriptor>) -> bool {
        let Some(ty) = ty else {
            return false;
        };
        if self.exclusions.contains(&ty.namespace, &ty.name) {
            return false;
        }
        ty.implements(DISPOSABLE_INTERFACE)
    }
}

impl Default for TypeClassifier {
    fn default() -> Self {
        Self::new()
    }
}
