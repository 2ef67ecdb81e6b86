//! Error handling for leaklint.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The rule core itself raises no errors: resolution failures and
//! malformed nodes degrade to under-reporting. Only the config and
//! frontend layers produce typed errors.

pub mod config_error;
pub mod error_code;
pub mod parse_error;

pub use config_error::ConfigError;
pub use error_code::LeaklintErrorCode;
pub use parse_error::ParseError;
