//! Error type for markup parsing and color resolution
//!
//! Malformed markup is never an error: unknown or unbalanced tags are
//! stripped by the parser. `CoreError` only covers contract violations of
//! the public helpers (for example feeding uppercase hex to
//! [`hex_to_int`](crate::color::hex_to_int)) and pattern setup failures.

use core::fmt;
use thiserror::Error;

/// Main error type for subtitle-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Markup pattern setup or tokenization failure
    #[error("Parse error: {0}")]
    Parse(String),

    /// Color literal violates the six lowercase hex digit contract
    #[error("Invalid color format: {0}")]
    InvalidColor(String),
}

impl CoreError {
    /// Create parse error from message
    pub fn parse<T: fmt::Display>(message: T) -> Self {
        Self::Parse(message.to_string())
    }

    /// Create color error from the offending literal
    pub fn invalid_color<T: fmt::Display>(literal: T) -> Self {
        Self::InvalidColor(format!(
            "'{literal}' (expected exactly six lowercase hex digits)"
        ))
    }
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, CoreError>;
