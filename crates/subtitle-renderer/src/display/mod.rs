//! Overlay display collaborators
//!
//! The renderer never talks to hardware directly. A [`OverlayDisplay`]
//! reports the screen size and creates the two overlay surfaces; each
//! [`OverlaySurface`] accepts finished pixel data or hides itself.

mod memory;

pub use memory::{MemoryDisplay, MemorySurface};

use crate::utils::RenderError;

/// Pixel layout of an overlay surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Four bytes per pixel, RGBA with premultiplied alpha
    Rgba8Premultiplied,
    /// One byte per pixel (alpha/luma)
    Alpha8,
}

impl PixelFormat {
    /// Bytes per pixel
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgba8Premultiplied => 4,
            Self::Alpha8 => 1,
        }
    }
}

/// Where and how an overlay surface is placed on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerPlacement {
    /// Compositor layer
    pub layer: i32,
    /// Pixel format of the data handed to the surface
    pub format: PixelFormat,
    /// Destination x on screen
    pub x: i32,
    /// Destination y on screen
    pub y: i32,
    /// Destination width on screen
    pub width: i32,
    /// Destination height on screen
    pub height: i32,
    /// Source buffer size when it differs from the destination (scaled)
    pub source: Option<(i32, i32)>,
}

impl LayerPlacement {
    /// Size of the buffers this surface accepts
    pub fn source_size(&self) -> (i32, i32) {
        self.source.unwrap_or((self.width, self.height))
    }

    /// Expected byte length of one image
    pub fn buffer_len(&self) -> usize {
        let (w, h) = self.source_size();
        let w = usize::try_from(w).unwrap_or(0);
        let h = usize::try_from(h).unwrap_or(0);
        w * h * self.format.bytes_per_pixel()
    }
}

/// One hardware overlay
pub trait OverlaySurface {
    /// Present `data` (laid out per the surface's placement) and show it
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DisplayError`] if the surface rejects the
    /// buffer.
    fn set_image_data(&mut self, data: &[u8]) -> Result<(), RenderError>;

    /// Hide the overlay
    fn hide_element(&mut self);
}

/// Source of screen size and overlay surfaces
pub trait OverlayDisplay {
    /// Surface type produced by this display
    type Surface: OverlaySurface;

    /// Screen size of `display` as `(width, height)`
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DisplayError`] if the display cannot be
    /// opened.
    fn screen_size(&mut self, display: u32) -> Result<(u32, u32), RenderError>;

    /// Create a surface at `placement`
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DisplayError`] if the layer cannot be created.
    fn create_surface(&mut self, placement: LayerPlacement) -> Result<Self::Surface, RenderError>;
}
