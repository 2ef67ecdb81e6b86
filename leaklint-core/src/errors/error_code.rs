//! Stable error codes exposed to hosts.

/// Maps each error to a stable, machine-readable code.
///
/// Codes are part of the host contract and never change between versions;
/// the display message may.
pub trait LeaklintErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_ERROR: &str = "LEAKLINT_CONFIG_ERROR";
pub const PARSE_ERROR: &str = "LEAKLINT_PARSE_ERROR";
