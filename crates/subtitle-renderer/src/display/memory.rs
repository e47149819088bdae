//! In-memory display for headless use and tests

use super::{LayerPlacement, OverlayDisplay, OverlaySurface};
use crate::utils::RenderError;

/// Display that hands out [`MemorySurface`]s for a fixed screen size
#[derive(Debug, Clone)]
pub struct MemoryDisplay {
    width: u32,
    height: u32,
    placements: Vec<LayerPlacement>,
}

impl MemoryDisplay {
    /// Create a display reporting `width x height`
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            placements: Vec::new(),
        }
    }

    /// Placements of every surface created so far
    pub fn placements(&self) -> &[LayerPlacement] {
        &self.placements
    }
}

impl OverlayDisplay for MemoryDisplay {
    type Surface = MemorySurface;

    fn screen_size(&mut self, _display: u32) -> Result<(u32, u32), RenderError> {
        Ok((self.width, self.height))
    }

    fn create_surface(&mut self, placement: LayerPlacement) -> Result<MemorySurface, RenderError> {
        self.placements.push(placement);
        Ok(MemorySurface::new(placement))
    }
}

/// Surface that keeps the last presented image
#[derive(Debug, Clone)]
pub struct MemorySurface {
    placement: LayerPlacement,
    image: Option<Vec<u8>>,
    visible: bool,
    updates: usize,
    hides: usize,
}

impl MemorySurface {
    /// Create a hidden surface
    pub fn new(placement: LayerPlacement) -> Self {
        Self {
            placement,
            image: None,
            visible: false,
            updates: 0,
            hides: 0,
        }
    }

    /// Placement the surface was created with
    pub fn placement(&self) -> &LayerPlacement {
        &self.placement
    }

    /// Last presented image, if any
    pub fn image(&self) -> Option<&[u8]> {
        self.image.as_deref()
    }

    /// Whether the surface is currently shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of successful `set_image_data` calls
    pub fn updates(&self) -> usize {
        self.updates
    }

    /// Number of `hide_element` calls
    pub fn hides(&self) -> usize {
        self.hides
    }
}

impl OverlaySurface for MemorySurface {
    fn set_image_data(&mut self, data: &[u8]) -> Result<(), RenderError> {
        let expected = self.placement.buffer_len();
        if data.len() != expected {
            return Err(RenderError::InvalidBufferSize {
                expected,
                actual: data.len(),
            });
        }
        self.image = Some(data.to_vec());
        self.visible = true;
        self.updates += 1;
        Ok(())
    }

    fn hide_element(&mut self) {
        self.visible = false;
        self.hides += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::PixelFormat;

    fn placement() -> LayerPlacement {
        LayerPlacement {
            layer: 1,
            format: PixelFormat::Alpha8,
            x: 0,
            y: 0,
            width: 8,
            height: 4,
            source: Some((4, 2)),
        }
    }

    #[test]
    fn accepts_matching_buffer() {
        let mut surface = MemorySurface::new(placement());
        surface.set_image_data(&[7; 8]).unwrap();
        assert!(surface.is_visible());
        assert_eq!(surface.image(), Some(&[7u8; 8][..]));
        assert_eq!(surface.updates(), 1);

        surface.hide_element();
        assert!(!surface.is_visible());
        assert_eq!(surface.hides(), 1);
    }

    #[test]
    fn rejects_wrong_size() {
        let mut surface = MemorySurface::new(placement());
        let err = surface.set_image_data(&[0; 32]).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidBufferSize { expected: 8, actual: 32 }
        ));
        assert!(!surface.is_visible());
    }

    #[test]
    fn display_records_placements() {
        let mut display = MemoryDisplay::new(1920, 1080);
        assert_eq!(display.screen_size(0).unwrap(), (1920, 1080));
        display.create_surface(placement()).unwrap();
        assert_eq!(display.placements().len(), 1);
    }
}
