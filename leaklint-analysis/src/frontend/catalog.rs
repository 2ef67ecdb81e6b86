//! Well-known framework types for the declared-type binder.

use rustc_hash::FxHashMap;

use crate::semantic::TypeDescriptor;

/// Catalog of framework types the binder resolves names against.
///
/// Keys are full names (`"System.IO.FileStream"`). Simple names resolve
/// through the set of namespaces a file imports.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: FxHashMap<String, TypeDescriptor>,
}

impl TypeCatalog {
    /// Catalog of common framework types, enough to bind the sources the
    /// analyzer is pointed at in tests and demos. Hosts with real semantic
    /// information register their own entries instead.
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        for ty in [
            disposable("System.IO", "FileStream"),
            disposable("System.IO", "MemoryStream"),
            disposable("System.IO", "StreamReader"),
            disposable("System.IO", "StreamWriter"),
            disposable("System.IO", "BinaryReader"),
            disposable("System.IO", "BinaryWriter"),
            disposable("System.Net.Sockets", "Socket"),
            disposable("System.Net.Sockets", "TcpClient"),
            disposable("System.Threading", "Timer"),
            disposable("System.Threading.Tasks", "Task"),
            TypeDescriptor::new("System", "Object"),
            TypeDescriptor::new("System", "String"),
            TypeDescriptor::new("System.Text", "StringBuilder"),
            TypeDescriptor::new("System.Collections.Generic", "List"),
        ] {
            catalog.register(ty);
        }
        catalog
    }

    /// Add or replace a catalog entry, keyed by its full name.
    pub fn register(&mut self, ty: TypeDescriptor) {
        self.types.insert(ty.full_name(), ty);
    }

    /// Resolve a type name against the imported namespaces.
    ///
    /// Dotted names are treated as fully qualified. Simple names are tried
    /// against each imported namespace in order; first hit wins.
    pub fn resolve(&self, name: &str, usings: &[String]) -> Option<&TypeDescriptor> {
        if name.contains('.') {
            return self.types.get(name);
        }
        usings
            .iter()
            .find_map(|namespace| self.types.get(&format!("{namespace}.{name}")))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

fn disposable(namespace: &str, name: &str) -> TypeDescriptor {
    TypeDescriptor::new(namespace, name).with_interface("System.IDisposable")
}
