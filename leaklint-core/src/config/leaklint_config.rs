//! Top-level leaklint configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

use super::{FrontendConfig, RuleConfig};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Host overrides (applied via `apply_host_overrides`)
/// 2. Environment variables (`LEAKLINT_*`)
/// 3. Project config (`leaklint.toml` in project root)
/// 4. User config (`~/.leaklint/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LeaklintConfig {
    pub rule: RuleConfig,
    pub frontend: FrontendConfig,
}

/// Programmatic override arguments a host can apply on top of every other
/// layer.
#[derive(Debug, Clone, Default)]
pub struct HostOverrides {
    pub rule_enabled: Option<bool>,
    pub extra_exclusions: Option<Vec<String>>,
    pub max_file_size: Option<u64>,
}

impl LeaklintConfig {
    /// Load configuration with layered resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. Host overrides
    /// 2. Environment variables (`LEAKLINT_*`)
    /// 3. Project config (`leaklint.toml` in `root`)
    /// 4. User config (`~/.leaklint/config.toml`)
    /// 5. Compiled defaults
    pub fn load(
        root: &Path,
        host_overrides: Option<&HostOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(_) => {
                        // Non-parse errors from user config are warnings, not fatal.
                        // Continue with defaults.
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("leaklint.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): host overrides
        if let Some(host) = host_overrides {
            Self::apply_host_overrides(&mut config, host);
        }

        // Validate the final config
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &LeaklintConfig) -> Result<(), ConfigError> {
        if let Some(max_file_size) = config.frontend.max_file_size {
            if max_file_size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "frontend.max_file_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        for entry in &config.rule.extra_exclusions {
            let well_formed = entry
                .rsplit_once('.')
                .is_some_and(|(namespace, name)| !namespace.is_empty() && !name.is_empty());
            if !well_formed {
                return Err(ConfigError::ValidationFailed {
                    field: "rule.extra_exclusions".to_string(),
                    message: format!("'{entry}' is not a dotted Namespace.Type name"),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.leaklint/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut LeaklintConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: LeaklintConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` (or non-empty) value.
    fn merge(base: &mut LeaklintConfig, other: &LeaklintConfig) {
        // Rule
        if other.rule.enabled.is_some() {
            base.rule.enabled = other.rule.enabled;
        }
        if !other.rule.extra_exclusions.is_empty() {
            base.rule.extra_exclusions = other.rule.extra_exclusions.clone();
        }

        // Frontend
        if other.frontend.max_file_size.is_some() {
            base.frontend.max_file_size = other.frontend.max_file_size;
        }
        if !other.frontend.implicit_usings.is_empty() {
            base.frontend.implicit_usings = other.frontend.implicit_usings.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `LEAKLINT_RULE_ENABLED`, `LEAKLINT_FRONTEND_MAX_FILE_SIZE`, etc.
    fn apply_env_overrides(config: &mut LeaklintConfig) {
        if let Ok(val) = std::env::var("LEAKLINT_RULE_ENABLED") {
            if let Ok(v) = val.parse::<bool>() {
                config.rule.enabled = Some(v);
            }
        }
        if let Ok(val) = std::env::var("LEAKLINT_RULE_EXTRA_EXCLUSIONS") {
            let entries: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if !entries.is_empty() {
                config.rule.extra_exclusions = entries;
            }
        }
        if let Ok(val) = std::env::var("LEAKLINT_FRONTEND_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.frontend.max_file_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("LEAKLINT_FRONTEND_IMPLICIT_USINGS") {
            let namespaces: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if !namespaces.is_empty() {
                config.frontend.implicit_usings = namespaces;
            }
        }
    }

    /// Apply host overrides (highest priority).
    fn apply_host_overrides(config: &mut LeaklintConfig, host: &HostOverrides) {
        if let Some(v) = host.rule_enabled {
            config.rule.enabled = Some(v);
        }
        if let Some(ref v) = host.extra_exclusions {
            config.rule.extra_exclusions = v.clone();
        }
        if let Some(v) = host.max_file_size {
            config.frontend.max_file_size = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level leaklint config directory: `~/.leaklint/`.
fn dirs_path() -> Option<std::path::PathBuf> {
    home_dir().map(|h| h.join(".leaklint"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
