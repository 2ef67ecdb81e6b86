//! Configuration system for leaklint.
//! TOML-based, layered resolution: host > env > project > user > defaults.

pub mod frontend_config;
pub mod leaklint_config;
pub mod rule_config;

pub use frontend_config::FrontendConfig;
pub use leaklint_config::{HostOverrides, LeaklintConfig};
pub use rule_config::RuleConfig;
