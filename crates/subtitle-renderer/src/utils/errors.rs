//! Error types for rendering

use subtitle_core::CoreError;
use thiserror::Error;

/// Rendering error types
#[derive(Error, Debug)]
pub enum RenderError {
    /// Geometry or canvas dimensions that cannot hold a subtitle
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Rejected construction-time configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Pixel buffer does not match the declared dimensions
    #[error("Invalid buffer size: expected {expected} bytes, got {actual}")]
    InvalidBufferSize {
        /// Expected size
        expected: usize,
        /// Actual size
        actual: usize,
    },

    /// Shaping error
    #[error("Text shaping failed: {0}")]
    ShapingError(String),

    /// Font lookup or parsing error
    #[error("Font error: {0}")]
    FontError(String),

    /// Drawing error
    #[error("Drawing failed: {0}")]
    DrawingError(String),

    /// Display collaborator failure
    #[error("Display error: {0}")]
    DisplayError(String),

    /// Core error from subtitle-core
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl RenderError {
    /// Check if the error only affects the current subtitle
    ///
    /// Recoverable errors leave the renderer usable for the next event.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ShapingError(_) | Self::DrawingError(_) | Self::InvalidBufferSize { .. }
        )
    }

    /// Check if error indicates missing resources
    pub fn is_resource_error(&self) -> bool {
        matches!(self, Self::FontError(_))
    }
}
