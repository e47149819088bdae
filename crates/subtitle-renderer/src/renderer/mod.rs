//! Renderer that prepares one subtitle at a time and presents it
//!
//! The renderer owns two overlay surfaces covering the same screen
//! rectangle: an RGBA one for laid-out text and a single-channel one for
//! bitmap subtitles. At most one canvas is prepared at any time.
//!
//! ```text
//!   Empty --prepare(text)--> Text  --show()--> Empty
//!   Empty --prepare(image)-> Image --show()--> Empty
//!   any   --unprepare()----> Empty
//! ```

mod prepared;

pub use prepared::PreparedKind;

use crate::compositor::composite;
use crate::config::RendererConfig;
use crate::display::{OverlayDisplay, OverlaySurface};
use crate::geometry::CanvasGeometry;
use crate::layout::{layout, LayoutOptions};
use crate::rasterizer::{CanvasPixels, Rasterizer};
use crate::utils::RenderError;
use prepared::Prepared;
use subtitle_core::{Subtitle, SubtitleImage, TagParser};

/// Subtitle overlay renderer
pub struct SubtitleRenderer<R: Rasterizer, S: OverlaySurface> {
    geometry: CanvasGeometry,
    options: LayoutOptions,
    parser: TagParser,
    rasterizer: R,
    text_overlay: S,
    bitmap_overlay: S,
    prepared: Prepared<R::Canvas>,
}

impl<R: Rasterizer, S: OverlaySurface> SubtitleRenderer<R, S> {
    /// Build a renderer for the screen of `config.display`
    ///
    /// Geometry is fixed from here on; a resolution change needs a new
    /// renderer.
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration, a screen too small for the canvas,
    /// or when the display cannot create the overlay surfaces.
    #[allow(clippy::cast_precision_loss)]
    pub fn new<D>(config: &RendererConfig, display: &mut D, mut rasterizer: R) -> Result<Self, RenderError>
    where
        D: OverlayDisplay<Surface = S>,
    {
        config.validate()?;
        let (screen_width, screen_height) = display.screen_size(config.display)?;
        let geometry = CanvasGeometry::compute(
            screen_width,
            screen_height,
            config.font_size_ratio,
            config.max_lines,
        )?;
        log::debug!(
            "screen {screen_width}x{screen_height}: font {}px, canvas {}x{} at ({}, {}), bitmap {}x{}",
            geometry.font_size,
            geometry.width,
            geometry.height,
            geometry.left_margin,
            geometry.top_margin,
            geometry.scaled_width,
            geometry.scaled_height
        );

        rasterizer.set_font_size(geometry.font_size as f32)?;
        let parser = TagParser::new()?;
        let text_overlay = display.create_surface(geometry.text_placement(config.layer))?;
        let bitmap_overlay = display.create_surface(geometry.bitmap_placement(config.layer))?;

        Ok(Self {
            geometry,
            options: LayoutOptions::from(config),
            parser,
            rasterizer,
            text_overlay,
            bitmap_overlay,
            prepared: Prepared::Empty,
        })
    }

    /// Prepare either kind of subtitle
    ///
    /// Returns `Ok(false)` when a bitmap was rejected.
    ///
    /// # Errors
    ///
    /// Propagates rasterizer failures from text layout.
    pub fn prepare(&mut self, subtitle: &Subtitle) -> Result<bool, RenderError> {
        match subtitle {
            Subtitle::Text(lines) => self.prepare_lines(lines),
            Subtitle::Image(image) => self.prepare_image(image),
        }
    }

    /// Parse and lay out marked-up lines, most recent last
    ///
    /// # Errors
    ///
    /// Any rasterizer failure; the renderer is left with nothing prepared.
    pub fn prepare_lines<I, T>(&mut self, lines: I) -> Result<bool, RenderError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.unprepare();
        let formatted = self.parser.parse(lines);
        let text = layout(&formatted, &self.geometry, &self.options, &mut self.rasterizer)
            .map_err(|e| {
                log::warn!("text layout failed: {e}");
                e
            })?;
        self.prepared = Prepared::Text(text.into_canvas());
        Ok(true)
    }

    /// Center a bitmap subtitle on the scaled canvas
    ///
    /// Returns `Ok(false)` when the bitmap does not fit.
    ///
    /// # Errors
    ///
    /// Never fails today; the signature matches the other prepare calls.
    pub fn prepare_image(&mut self, image: &SubtitleImage) -> Result<bool, RenderError> {
        self.unprepare();
        match composite(image, &self.geometry) {
            Some(canvas) => {
                self.prepared = Prepared::Image(canvas);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Present the prepared canvas on its overlay and hide the other one
    ///
    /// Does nothing when nothing is prepared. The canvas is released either
    /// way.
    ///
    /// # Errors
    ///
    /// Propagates a surface rejecting the buffer.
    pub fn show(&mut self) -> Result<(), RenderError> {
        match std::mem::take(&mut self.prepared) {
            Prepared::Empty => Ok(()),
            Prepared::Image(canvas) => {
                self.text_overlay.hide_element();
                self.bitmap_overlay.set_image_data(canvas.data())
            }
            Prepared::Text(canvas) => {
                self.bitmap_overlay.hide_element();
                self.text_overlay.set_image_data(canvas.data())
            }
        }
    }

    /// Hide both overlays
    pub fn hide(&mut self) {
        self.text_overlay.hide_element();
        self.bitmap_overlay.hide_element();
    }

    /// Drop the prepared canvas, if any
    pub fn unprepare(&mut self) {
        self.prepared = Prepared::Empty;
    }

    /// Whether a canvas is waiting for [`show`](Self::show)
    pub fn is_prepared(&self) -> bool {
        self.prepared.kind().is_some()
    }

    /// Kind of the prepared canvas
    pub fn prepared_kind(&self) -> Option<PreparedKind> {
        self.prepared.kind()
    }

    /// Geometry derived at construction
    pub fn geometry(&self) -> &CanvasGeometry {
        &self.geometry
    }

    /// The RGBA text overlay
    pub fn text_overlay(&self) -> &S {
        &self.text_overlay
    }

    /// The single-channel bitmap overlay
    pub fn bitmap_overlay(&self) -> &S {
        &self.bitmap_overlay
    }
}

#[cfg(feature = "software-backend")]
impl<S: OverlaySurface> SubtitleRenderer<crate::rasterizer::SoftwareRasterizer, S> {
    /// Build a renderer drawing with system fonts
    ///
    /// # Errors
    ///
    /// See [`SubtitleRenderer::new`]; additionally fails when
    /// `config.font_family` has no usable face.
    pub fn with_system_fonts<D>(config: &RendererConfig, display: &mut D) -> Result<Self, RenderError>
    where
        D: OverlayDisplay<Surface = S>,
    {
        let rasterizer = crate::rasterizer::SoftwareRasterizer::from_system_fonts(&config.font_family)?;
        Self::new(config, display, rasterizer)
    }
}

impl<R: Rasterizer, S: OverlaySurface> Drop for SubtitleRenderer<R, S> {
    fn drop(&mut self) {
        self.unprepare();
        self.hide();
    }
}

impl<R: Rasterizer, S: OverlaySurface> std::fmt::Debug for SubtitleRenderer<R, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubtitleRenderer")
            .field("geometry", &self.geometry)
            .field("options", &self.options)
            .field("prepared", &self.prepared_kind())
            .finish_non_exhaustive()
    }
}
