//! CPU rasterizer built on rustybuzz shaping and tiny-skia paths
//!
//! Three faces (regular, bold, italic) are resolved once through fontdb
//! and kept as owned font data. Glyph outlines are built at the current
//! pixel size and cached per face and glyph id.

use super::{CanvasPixels, GlyphRun, PositionedGlyph, Rasterizer};
use crate::config::Rgba;
use crate::utils::RenderError;
use ahash::AHashMap;
use rustybuzz::UnicodeBuffer;
use subtitle_core::FontStyle;
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Font data for one face variant
#[derive(Debug, Clone)]
struct FaceData {
    data: Vec<u8>,
    index: u32,
    units_per_em: f32,
}

impl FaceData {
    fn new(data: Vec<u8>, index: u32) -> Result<Self, RenderError> {
        let face = ttf_parser::Face::parse(&data, index)
            .map_err(|e| RenderError::FontError(format!("unparseable face: {e}")))?;
        let units_per_em = f32::from(face.units_per_em());
        Ok(Self {
            data,
            index,
            units_per_em,
        })
    }
}

/// Software [`Rasterizer`] drawing into premultiplied RGBA [`Pixmap`]s
pub struct SoftwareRasterizer {
    faces: [FaceData; 3],
    font_size: f32,
    outlines: AHashMap<(FontStyle, u16), Option<Path>>,
}

impl std::fmt::Debug for SoftwareRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoftwareRasterizer")
            .field("font_size", &self.font_size)
            .field("cached_outlines", &self.outlines.len())
            .finish_non_exhaustive()
    }
}

impl SoftwareRasterizer {
    /// Resolve `family` among the installed system fonts
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::FontError`] when neither the family nor a
    /// sans-serif fallback is installed.
    pub fn from_system_fonts(family: &str) -> Result<Self, RenderError> {
        let mut database = fontdb::Database::new();
        database.load_system_fonts();
        Self::with_database(&database, family)
    }

    /// Resolve `family` in a caller-provided font database
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::FontError`] when a face cannot be found or
    /// parsed.
    pub fn with_database(database: &fontdb::Database, family: &str) -> Result<Self, RenderError> {
        let normal = load_face(database, family, FontStyle::Normal)?;
        let bold = load_face(database, family, FontStyle::Bold)?;
        let italic = load_face(database, family, FontStyle::Italic)?;
        Ok(Self::from_faces([normal, bold, italic]))
    }

    /// Use one font file for all three styles
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::FontError`] if the data is not a font.
    pub fn from_font_data(data: Vec<u8>) -> Result<Self, RenderError> {
        let face = FaceData::new(data, 0)?;
        Ok(Self::from_faces([face.clone(), face.clone(), face]))
    }

    fn from_faces(faces: [FaceData; 3]) -> Self {
        Self {
            faces,
            font_size: 16.0,
            outlines: AHashMap::new(),
        }
    }

    /// Current pixel size
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    fn cache_outlines(&mut self, run: &GlyphRun) {
        let face = &self.faces[run.style.index()];
        let scale = self.font_size / face.units_per_em;
        for glyph in &run.glyphs {
            self.outlines
                .entry((run.style, glyph.id))
                .or_insert_with(|| build_outline(face, glyph.id, scale));
        }
    }

    fn glyph_paths<'a>(&'a self, run: &'a GlyphRun) -> impl Iterator<Item = (&'a Path, Transform)> {
        run.glyphs.iter().filter_map(move |glyph| {
            self.outlines
                .get(&(run.style, glyph.id))
                .and_then(Option::as_ref)
                .map(|path| (path, Transform::from_translate(glyph.x, glyph.y)))
        })
    }
}

fn load_face(
    database: &fontdb::Database,
    family: &str,
    style: FontStyle,
) -> Result<FaceData, RenderError> {
    let query = fontdb::Query {
        families: &[fontdb::Family::Name(family), fontdb::Family::SansSerif],
        weight: if style == FontStyle::Bold {
            fontdb::Weight::BOLD
        } else {
            fontdb::Weight::NORMAL
        },
        stretch: fontdb::Stretch::Normal,
        style: if style == FontStyle::Italic {
            fontdb::Style::Italic
        } else {
            fontdb::Style::Normal
        },
    };
    let id = database
        .query(&query)
        .ok_or_else(|| RenderError::FontError(format!("no {style:?} face for '{family}'")))?;
    let (data, index) = database
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or_else(|| RenderError::FontError(format!("cannot read {style:?} face of '{family}'")))?;
    log::debug!("resolved {style:?} face of '{family}' ({} bytes)", data.len());
    FaceData::new(data, index)
}

/// Converts ttf-parser outlines to tiny-skia paths, flipping y
struct OutlineBuilder {
    builder: PathBuilder,
    scale: f32,
}

impl ttf_parser::OutlineBuilder for OutlineBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x * self.scale, -y * self.scale);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x * self.scale, -y * self.scale);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder
            .quad_to(x1 * self.scale, -y1 * self.scale, x * self.scale, -y * self.scale);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            x1 * self.scale,
            -y1 * self.scale,
            x2 * self.scale,
            -y2 * self.scale,
            x * self.scale,
            -y * self.scale,
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

/// Outline of one glyph at the origin; `None` for blank glyphs
fn build_outline(face: &FaceData, glyph: u16, scale: f32) -> Option<Path> {
    let parsed = ttf_parser::Face::parse(&face.data, face.index).ok()?;
    let mut builder = OutlineBuilder {
        builder: PathBuilder::new(),
        scale,
    };
    parsed.outline_glyph(ttf_parser::GlyphId(glyph), &mut builder)?;
    builder.builder.finish()
}

fn paint(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
    paint.anti_alias = true;
    paint
}

impl CanvasPixels for Pixmap {
    fn width(&self) -> u32 {
        Pixmap::width(self)
    }

    fn height(&self) -> u32 {
        Pixmap::height(self)
    }

    fn data(&self) -> &[u8] {
        Pixmap::data(self)
    }
}

impl Rasterizer for SoftwareRasterizer {
    type Canvas = Pixmap;

    fn set_font_size(&mut self, pixels: f32) -> Result<(), RenderError> {
        if !(pixels > 0.0 && pixels.is_finite()) {
            return Err(RenderError::FontError(format!("invalid pixel size {pixels}")));
        }
        if (pixels - self.font_size).abs() > f32::EPSILON {
            self.font_size = pixels;
            self.outlines.clear();
        }
        Ok(())
    }

    fn create_canvas(&mut self, width: u32, height: u32) -> Result<Pixmap, RenderError> {
        Pixmap::new(width, height)
            .ok_or_else(|| RenderError::InvalidDimensions(format!("canvas {width}x{height}")))
    }

    #[allow(clippy::cast_precision_loss)]
    fn shape_text(
        &mut self,
        style: FontStyle,
        x: f32,
        y: f32,
        text: &str,
    ) -> Result<GlyphRun, RenderError> {
        let face = &self.faces[style.index()];
        let rb_face = rustybuzz::Face::from_slice(&face.data, face.index)
            .ok_or_else(|| RenderError::ShapingError(format!("{style:?} face rejected")))?;

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        let output = rustybuzz::shape(&rb_face, &[], buffer);

        let scale = self.font_size / face.units_per_em;
        let mut pen = 0.0;
        let mut glyphs = Vec::with_capacity(output.len());
        for (info, pos) in output.glyph_infos().iter().zip(output.glyph_positions()) {
            let id = u16::try_from(info.glyph_id)
                .map_err(|_| RenderError::ShapingError(format!("glyph id {}", info.glyph_id)))?;
            glyphs.push(PositionedGlyph {
                id,
                x: x + pen + pos.x_offset as f32 * scale,
                y: y - pos.y_offset as f32 * scale,
            });
            pen += pos.x_advance as f32 * scale;
        }

        Ok(GlyphRun {
            style,
            glyphs,
            advance: pen,
        })
    }

    fn fill_glyphs(
        &mut self,
        canvas: &mut Pixmap,
        run: &GlyphRun,
        color: Rgba,
    ) -> Result<(), RenderError> {
        self.cache_outlines(run);
        let paint = paint(color);
        for (path, transform) in self.glyph_paths(run) {
            canvas.fill_path(path, &paint, FillRule::Winding, transform, None);
        }
        Ok(())
    }

    fn stroke_glyphs(
        &mut self,
        canvas: &mut Pixmap,
        run: &GlyphRun,
        color: Rgba,
        width: f32,
    ) -> Result<(), RenderError> {
        self.cache_outlines(run);
        let paint = paint(color);
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        for (path, transform) in self.glyph_paths(run) {
            canvas.stroke_path(path, &paint, &stroke, transform, None);
        }
        Ok(())
    }

    fn fill_rect(
        &mut self,
        canvas: &mut Pixmap,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgba,
    ) -> Result<(), RenderError> {
        let Some(rect) = Rect::from_xywh(x, y, width, height) else {
            return Err(RenderError::DrawingError(format!(
                "degenerate rectangle {width}x{height} at ({x}, {y})"
            )));
        };
        canvas.fill_rect(rect, &paint(color), Transform::identity(), None);
        Ok(())
    }
}
