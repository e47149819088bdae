//! Rasterizer seam between layout and pixel drawing
//!
//! The layout engine only decides *where* things go. Turning text into
//! glyphs and glyphs into coverage is delegated to a [`Rasterizer`], which
//! must provide normal, bold and italic faces at one pixel size.

#[cfg(feature = "software-backend")]
pub mod software;

#[cfg(feature = "software-backend")]
pub use software::SoftwareRasterizer;

use crate::config::Rgba;
use crate::utils::RenderError;
use subtitle_core::FontStyle;

/// A glyph placed at an absolute canvas position (baseline origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedGlyph {
    /// Glyph id in the face of the owning run
    pub id: u16,
    /// Canvas x of the glyph origin
    pub x: f32,
    /// Canvas y of the baseline
    pub y: f32,
}

/// Shaped text of one styled run
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRun {
    /// Face the glyph ids belong to
    pub style: FontStyle,
    /// Positioned glyphs in visual order
    pub glyphs: Vec<PositionedGlyph>,
    /// Total horizontal advance in pixels
    pub advance: f32,
}

impl GlyphRun {
    /// Shift every glyph horizontally
    pub fn translate_x(&mut self, dx: f32) {
        for glyph in &mut self.glyphs {
            glyph.x += dx;
        }
    }
}

/// Read access to a finished canvas
pub trait CanvasPixels {
    /// Width in pixels
    fn width(&self) -> u32;
    /// Height in pixels
    fn height(&self) -> u32;
    /// Pixel bytes, row-major
    fn data(&self) -> &[u8];
}

/// Glyph shaping and drawing backend
pub trait Rasterizer {
    /// Canvas type drawn into
    type Canvas: CanvasPixels;

    /// Scale all three faces to `pixels`
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::FontError`] if the size is unusable.
    fn set_font_size(&mut self, pixels: f32) -> Result<(), RenderError>;

    /// Allocate a transparent canvas
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidDimensions`] for unusable sizes.
    fn create_canvas(&mut self, width: u32, height: u32) -> Result<Self::Canvas, RenderError>;

    /// Shape `text` with its first glyph origin at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ShapingError`] when the text cannot be shaped.
    fn shape_text(
        &mut self,
        style: FontStyle,
        x: f32,
        y: f32,
        text: &str,
    ) -> Result<GlyphRun, RenderError>;

    /// Fill the glyph outlines of `run`
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DrawingError`] on backend failure.
    fn fill_glyphs(
        &mut self,
        canvas: &mut Self::Canvas,
        run: &GlyphRun,
        color: Rgba,
    ) -> Result<(), RenderError>;

    /// Stroke the glyph outlines of `run`
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DrawingError`] on backend failure.
    fn stroke_glyphs(
        &mut self,
        canvas: &mut Self::Canvas,
        run: &GlyphRun,
        color: Rgba,
        width: f32,
    ) -> Result<(), RenderError>;

    /// Fill an axis-aligned rectangle
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DrawingError`] on backend failure.
    fn fill_rect(
        &mut self,
        canvas: &mut Self::Canvas,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgba,
    ) -> Result<(), RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_moves_every_glyph() {
        let mut run = GlyphRun {
            style: FontStyle::Normal,
            glyphs: vec![
                PositionedGlyph { id: 1, x: 10.0, y: 5.0 },
                PositionedGlyph { id: 2, x: 20.0, y: 5.0 },
            ],
            advance: 20.0,
        };
        run.translate_x(-4.0);
        let xs: Vec<f32> = run.glyphs.iter().map(|g| g.x).collect();
        assert_eq!(xs, vec![6.0, 16.0]);
        assert!(run.glyphs.iter().all(|g| (g.y - 5.0).abs() < f32::EPSILON));
    }
}
