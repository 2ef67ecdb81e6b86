//! Frontend configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the source-text frontend.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FrontendConfig {
    /// Maximum source input size in bytes. Default: 1 MiB.
    pub max_file_size: Option<u64>,
    /// Namespaces treated as imported in every file, ahead of the file's
    /// own import directives.
    #[serde(default)]
    pub implicit_usings: Vec<String>,
}

impl FrontendConfig {
    /// Returns the effective maximum input size, defaulting to 1 MiB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(1_048_576)
    }
}
