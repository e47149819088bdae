//! Text layout onto the RGBA overlay canvas
//!
//! Lines are stacked bottom-up: the most recent line sits on the lowest
//! baseline and older lines move up by one line height each. Only the
//! last `max_lines` lines are drawn.
//!
//! Horizontal positions accumulate in whole pixels. Each run's advance is
//! added to the pen and truncated, so a line of many short runs can end a
//! few pixels earlier than the same text shaped in one piece.

use crate::config::{Palette, RendererConfig, Rgba};
use crate::geometry::CanvasGeometry;
use crate::rasterizer::{GlyphRun, Rasterizer};
use crate::utils::{extent, RenderError};
use smallvec::SmallVec;
use subtitle_core::{ColorRef, FormattedLine};

/// Stroke width of the glyph outline
pub const OUTLINE_WIDTH: f32 = 2.0;

/// Layout switches taken from [`RendererConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Center each line on the canvas
    pub centered: bool,
    /// Draw a translucent box behind each line
    pub background_box: bool,
    /// Colors for text, boxes and outlines
    pub palette: Palette,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            centered: false,
            background_box: true,
            palette: Palette::default(),
        }
    }
}

impl From<&RendererConfig> for LayoutOptions {
    fn from(config: &RendererConfig) -> Self {
        Self {
            centered: config.centered,
            background_box: config.background_box,
            palette: config.palette,
        }
    }
}

/// Where one input line ended up on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLayout {
    /// Index of the line in the input slice
    pub index: usize,
    /// Left edge of the line box
    pub x: i32,
    /// Baseline the glyphs were shaped on
    pub baseline_y: i32,
    /// Top edge of the line box
    pub box_y: i32,
    /// Text advance plus padding on both sides
    pub box_width: i32,
    /// `font_size + padding`
    pub box_height: i32,
    /// Summed (truncated) advance of all runs
    pub advance: i32,
}

/// A finished text canvas
#[derive(Debug)]
pub struct TextLayout<C> {
    canvas: C,
    lines: Vec<LineLayout>,
}

impl<C> TextLayout<C> {
    /// The drawn canvas
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Take ownership of the canvas
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Drawn lines in input order; lines without runs are absent
    pub fn lines(&self) -> &[LineLayout] {
        &self.lines
    }
}

/// Lay out and draw `lines` onto a fresh canvas
///
/// # Errors
///
/// Any rasterizer failure aborts the whole layout; the partially drawn
/// canvas is dropped and the error returned.
pub fn layout<R: Rasterizer>(
    lines: &[FormattedLine],
    geometry: &CanvasGeometry,
    options: &LayoutOptions,
    rasterizer: &mut R,
) -> Result<TextLayout<R::Canvas>, RenderError> {
    let width = extent(geometry.width, "canvas width")?;
    let height = extent(geometry.height, "canvas height")?;
    let mut canvas = rasterizer.create_canvas(width, height)?;

    let visible = lines.len().min(geometry.max_lines);
    let first = lines.len() - visible;
    if first > 0 {
        log::debug!("dropping {first} oldest of {} lines", lines.len());
    }

    let mut cursor_y = geometry.height - geometry.padding;
    let mut placed = Vec::with_capacity(visible);
    for (index, line) in lines.iter().enumerate().skip(first).rev() {
        if !line.is_empty() {
            let mut pen = LinePen {
                rasterizer: &mut *rasterizer,
                canvas: &mut canvas,
                geometry,
                options,
            };
            placed.push(pen.draw(index, line, cursor_y)?);
        }
        cursor_y -= geometry.font_size + geometry.padding;
    }
    placed.reverse();

    Ok(TextLayout {
        canvas,
        lines: placed,
    })
}

struct LinePen<'a, R: Rasterizer> {
    rasterizer: &'a mut R,
    canvas: &'a mut R::Canvas,
    geometry: &'a CanvasGeometry,
    options: &'a LayoutOptions,
}

impl<R: Rasterizer> LinePen<'_, R> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn draw(
        &mut self,
        index: usize,
        line: &FormattedLine,
        cursor_y: i32,
    ) -> Result<LineLayout, RenderError> {
        let geometry = self.geometry;
        let palette = &self.options.palette;
        let start_x = geometry.left_aligned_margin;
        let padding = geometry.padding;
        let baseline_y = cursor_y - padding / 4;

        let mut cursor_x = start_x;
        let mut box_width = 2 * padding;
        let mut shaped: SmallVec<[(GlyphRun, Rgba); 4]> = SmallVec::new();
        for run in line.runs() {
            let glyphs = self.rasterizer.shape_text(
                run.font_style,
                (cursor_x + padding) as f32,
                baseline_y as f32,
                &run.text,
            )?;
            cursor_x = (cursor_x as f32 + glyphs.advance) as i32;
            box_width = (box_width as f32 + glyphs.advance) as i32;
            shaped.push((glyphs, palette.resolve(run.color)));
        }

        let x = if self.options.centered {
            let x = geometry.width / 2 - box_width / 2;
            let dx = (x - start_x) as f32;
            for (glyphs, _) in &mut shaped {
                glyphs.translate_x(dx);
            }
            x
        } else {
            start_x
        };

        let box_y = cursor_y - geometry.font_size;
        let box_height = geometry.font_size + padding;
        if self.options.background_box && box_width > 0 {
            self.rasterizer.fill_rect(
                self.canvas,
                x as f32,
                box_y as f32,
                box_width as f32,
                box_height as f32,
                palette.resolve(ColorRef::BackgroundFill),
            )?;
        }

        for (glyphs, color) in &shaped {
            self.rasterizer.fill_glyphs(self.canvas, glyphs, *color)?;
        }
        let outline = palette.resolve(ColorRef::Outline);
        for (glyphs, _) in &shaped {
            self.rasterizer
                .stroke_glyphs(self.canvas, glyphs, outline, OUTLINE_WIDTH)?;
        }

        Ok(LineLayout {
            index,
            x,
            baseline_y,
            box_y,
            box_width,
            box_height,
            advance: cursor_x - start_x,
        })
    }
}
