//! Utility types and helper functions

mod errors;

pub use errors::RenderError;

/// Convert a non-negative pixel extent to `u32`
pub(crate) fn extent(value: i32, what: &str) -> Result<u32, RenderError> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| RenderError::InvalidDimensions(format!("{what} must be positive, got {value}")))
}
