//! Construction-time renderer configuration

use crate::utils::RenderError;
use subtitle_core::ColorRef;

/// Straight (non-premultiplied) RGBA color
pub type Rgba = [u8; 4];

/// Concrete colors behind the [`ColorRef`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    /// Text color when no color tag is active
    pub default_text: Rgba,
    /// Background box fill
    pub background: Rgba,
    /// Glyph outline
    pub outline: Rgba,
}

impl Palette {
    /// Resolve a color reference to RGBA
    pub fn resolve(&self, color: ColorRef) -> Rgba {
        match color {
            ColorRef::Inherit => self.default_text,
            ColorRef::BackgroundFill => self.background,
            ColorRef::Outline => self.outline,
            ColorRef::Explicit(_) => match color.components() {
                Some((r, g, b)) => [r, g, b, 255],
                None => self.default_text,
            },
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            default_text: [221, 221, 221, 255],
            background: [0, 0, 0, 128],
            outline: [0, 0, 0, 255],
        }
    }
}

/// Renderer configuration, fixed for the renderer's lifetime
///
/// Changing the screen resolution or any of these values requires building
/// a new renderer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RendererConfig {
    /// Display to query for the screen size
    pub display: u32,
    /// Overlay layer index for both surfaces
    pub layer: i32,
    /// Font size as a fraction of the screen height
    pub font_size_ratio: f32,
    /// Center lines horizontally instead of left-aligning them
    pub centered: bool,
    /// Draw a translucent box behind each line
    pub background_box: bool,
    /// Maximum number of lines shown at once
    pub max_lines: u32,
    /// Font family looked up by the software rasterizer
    pub font_family: String,
    /// Colors for default text, background boxes and outlines
    pub palette: Palette,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            display: 0,
            layer: 1,
            font_size_ratio: 0.055,
            centered: false,
            background_box: true,
            max_lines: 3,
            font_family: "FreeSans".to_string(),
            palette: Palette::default(),
        }
    }
}

impl RendererConfig {
    /// Set the display index
    #[must_use]
    pub fn with_display(mut self, display: u32) -> Self {
        self.display = display;
        self
    }

    /// Set the overlay layer
    #[must_use]
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// Set the font size ratio
    #[must_use]
    pub fn with_font_size_ratio(mut self, ratio: f32) -> Self {
        self.font_size_ratio = ratio;
        self
    }

    /// Enable or disable centered lines
    #[must_use]
    pub fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Enable or disable background boxes
    #[must_use]
    pub fn with_background_box(mut self, background_box: bool) -> Self {
        self.background_box = background_box;
        self
    }

    /// Set the visible line limit
    #[must_use]
    pub fn with_max_lines(mut self, max_lines: u32) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Set the font family
    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the palette
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Check values that would make geometry meaningless
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidConfig`] for a ratio outside `(0, 1]`
    /// or a zero line limit.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !(self.font_size_ratio > 0.0 && self.font_size_ratio <= 1.0) {
            return Err(RenderError::InvalidConfig(format!(
                "font size ratio must be in (0, 1], got {}",
                self.font_size_ratio
            )));
        }
        if self.max_lines == 0 {
            return Err(RenderError::InvalidConfig(
                "at least one subtitle line must be visible".to_string(),
            ));
        }
        Ok(())
    }
}
