//! Frontend parse errors.

use super::error_code::{self, LeaklintErrorCode};

/// Errors raised by the source-text frontend.
///
/// A tree that parses with syntax errors is not one of these: the frontend
/// is error-tolerant and analyzes what it can. These cover the cases where
/// no tree exists at all.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to load the {language} grammar: {message}")]
    GrammarUnavailable { language: String, message: String },

    #[error("Parser produced no tree for {path}")]
    Unparseable { path: String },

    #[error("Input exceeds the configured size limit: {size} > {limit} bytes")]
    InputTooLarge { size: u64, limit: u64 },
}

impl LeaklintErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
