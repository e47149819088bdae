//! Canvas geometry for the text and bitmap overlays
//!
//! Everything is derived once from the screen size and the font-size ratio.
//! The arithmetic keeps the integer/float truncation of the legacy overlay
//! so pixel positions line up exactly:
//!
//! - `font_size = trunc(screen_height * ratio)`, `padding = font_size / 4`
//! - text canvas height is `max_lines * line_height + 5` rounded up to a
//!   multiple of 16, width is `screen_width - 100` rounded down to one
//! - the bitmap canvas assumes a 30px DVD font, with a 1.42 horizontal
//!   stretch for anamorphic subpictures

use crate::display::{LayerPlacement, PixelFormat};
use crate::utils::RenderError;

/// Canvas width is kept this far inside the screen
const SCREEN_OVERSHOOT_GUARD: i32 = 100;
/// Typical longest rendered line at ~59px font size
const ASSUMED_LONGEST_LINE: i32 = 1300;
/// Font size DVD subpictures are authored for
const LEGACY_FONT_SIZE: f32 = 30.0;
/// Horizontal stretch of the bitmap overlay
const HORIZONTAL_ASPECT: f64 = 1.42;

/// Fixed layout constants for both overlay canvases
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    /// Screen width in pixels
    pub screen_width: i32,
    /// Screen height in pixels
    pub screen_height: i32,
    /// Pixel font size
    pub font_size: i32,
    /// Padding around lines, a quarter of the font size
    pub padding: i32,
    /// `font_size + padding`
    pub line_height: i32,
    /// Text canvas width, a multiple of 16
    pub width: i32,
    /// Text canvas height, a multiple of 16
    pub height: i32,
    /// Horizontal screen offset of both overlays
    pub left_margin: i32,
    /// Vertical screen offset of both overlays
    pub top_margin: i32,
    /// Canvas-relative start of left-aligned lines
    pub left_aligned_margin: i32,
    /// Maximum number of lines laid out
    pub max_lines: usize,
    /// Text pixels per bitmap pixel, vertically
    pub vertical_scale: f32,
    /// Text pixels per bitmap pixel, horizontally
    pub horizontal_scale: f32,
    /// Bitmap canvas width
    pub scaled_width: i32,
    /// Bitmap canvas height
    pub scaled_height: i32,
    /// Bottom padding of the bitmap canvas
    pub scaled_padding: i32,
}

impl CanvasGeometry {
    /// Derive geometry from the screen size
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidDimensions`] when the screen is too
    /// small to hold a canvas of `max_lines` lines at this font size, and
    /// [`RenderError::InvalidConfig`] for a non-positive ratio or line count.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn compute(
        screen_width: u32,
        screen_height: u32,
        font_size_ratio: f32,
        max_lines: u32,
    ) -> Result<Self, RenderError> {
        if !(font_size_ratio > 0.0 && font_size_ratio.is_finite()) || max_lines == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "ratio {font_size_ratio} and line count {max_lines} must be positive"
            )));
        }
        let sw = i32::try_from(screen_width)
            .map_err(|_| RenderError::InvalidDimensions(format!("screen width {screen_width}")))?;
        let sh = i32::try_from(screen_height)
            .map_err(|_| RenderError::InvalidDimensions(format!("screen height {screen_height}")))?;
        let lines = i32::try_from(max_lines)
            .map_err(|_| RenderError::InvalidConfig(format!("line count {max_lines}")))?;

        let scaled_font = sh as f32 * font_size_ratio;
        let font_size = scaled_font as i32;
        if font_size <= 0 {
            return Err(RenderError::InvalidDimensions(format!(
                "font size rounds to {font_size} for screen height {sh}"
            )));
        }
        let padding = font_size / 4;
        let line_height = font_size
            .checked_add(padding)
            .ok_or_else(|| RenderError::InvalidDimensions(format!("font size {font_size} overflows")))?;

        let height = lines
            .checked_mul(line_height)
            .and_then(|h| h.checked_add(5 + 15))
            .map(|h| h & !15)
            .ok_or_else(|| RenderError::InvalidDimensions("canvas height overflows".to_string()))?;
        let width = (sw - SCREEN_OVERSHOOT_GUARD) & !15;
        if width <= 0 || height > sh {
            return Err(RenderError::InvalidDimensions(format!(
                "{lines} lines of {line_height}px need a {width}x{height} canvas on a {sw}x{sh} screen"
            )));
        }

        let left_margin = (sw - width) / 2;
        let top_margin = sh - height - line_height / 2;

        let mut left_aligned_margin = if sw > ASSUMED_LONGEST_LINE {
            (sw - ASSUMED_LONGEST_LINE) / 2
        } else if sw > sh {
            (sw - sh) / 2
        } else {
            0
        };
        if left_aligned_margin > left_margin {
            left_aligned_margin -= left_margin;
        }

        let vertical_scale = scaled_font / LEGACY_FONT_SIZE;
        let horizontal_scale = (f64::from(vertical_scale) * HORIZONTAL_ASPECT) as f32;
        let scaled_width = (width as f32 / horizontal_scale) as i32;
        let scaled_height = (height as f32 / vertical_scale) as i32;
        let scaled_padding = (padding as f32 / vertical_scale) as i32;
        if scaled_width <= 0 || scaled_height <= 0 {
            return Err(RenderError::InvalidDimensions(format!(
                "bitmap canvas collapses to {scaled_width}x{scaled_height}"
            )));
        }

        Ok(Self {
            screen_width: sw,
            screen_height: sh,
            font_size,
            padding,
            line_height,
            width,
            height,
            left_margin,
            top_margin,
            left_aligned_margin,
            max_lines: max_lines as usize,
            vertical_scale,
            horizontal_scale,
            scaled_width,
            scaled_height,
            scaled_padding,
        })
    }

    /// Map a text-canvas point into bitmap-canvas coordinates
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn to_bitmap_space(&self, x: i32, y: i32) -> (i32, i32) {
        (
            (x as f32 / self.horizontal_scale) as i32,
            (y as f32 / self.vertical_scale) as i32,
        )
    }

    /// Map a bitmap-canvas point into text-canvas coordinates
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn to_text_space(&self, x: i32, y: i32) -> (i32, i32) {
        (
            (x as f32 * self.horizontal_scale) as i32,
            (y as f32 * self.vertical_scale) as i32,
        )
    }

    /// Placement of the RGBA text overlay
    pub fn text_placement(&self, layer: i32) -> LayerPlacement {
        LayerPlacement {
            layer,
            format: PixelFormat::Rgba8Premultiplied,
            x: self.left_margin,
            y: self.top_margin,
            width: self.width,
            height: self.height,
            source: None,
        }
    }

    /// Placement of the single-channel bitmap overlay
    ///
    /// Same screen rectangle as the text overlay, sourced from the smaller
    /// scaled canvas.
    pub fn bitmap_placement(&self, layer: i32) -> LayerPlacement {
        LayerPlacement {
            layer,
            format: PixelFormat::Alpha8,
            x: self.left_margin,
            y: self.top_margin,
            width: self.width,
            height: self.height,
            source: Some((self.scaled_width, self.scaled_height)),
        }
    }
}
