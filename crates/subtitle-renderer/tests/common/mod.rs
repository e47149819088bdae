//! Shared test doubles: a recording rasterizer and a logging display

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use subtitle_renderer::{
    CanvasPixels, FontStyle, GlyphRun, LayerPlacement, OverlayDisplay, OverlaySurface,
    PositionedGlyph, Rasterizer, RenderError, Rgba,
};

/// Drawing call recorded on a [`RecordingCanvas`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgba,
    },
    Fill {
        text: String,
        first_x: f32,
        baseline: f32,
        color: Rgba,
    },
    Stroke {
        text: String,
        color: Rgba,
        width: f32,
    },
}

/// Canvas that keeps a zeroed RGBA buffer and a log of drawing calls
#[derive(Debug)]
pub struct RecordingCanvas {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<DrawOp>,
    bytes: Vec<u8>,
}

impl CanvasPixels for RecordingCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn data(&self) -> &[u8] {
        &self.bytes
    }
}

/// Rasterizer with a fixed advance per character
///
/// Glyph ids are the character's byte value so tests can read text back
/// from a run.
#[derive(Debug, Clone)]
pub struct RecordingRasterizer {
    pub advance: f32,
    pub fail_on: Option<String>,
    pub font_size: f32,
    pub shaped: Vec<(FontStyle, String, f32, f32)>,
}

impl RecordingRasterizer {
    pub fn new(advance: f32) -> Self {
        Self {
            advance,
            fail_on: None,
            font_size: 0.0,
            shaped: Vec::new(),
        }
    }

    pub fn failing_on(mut self, text: &str) -> Self {
        self.fail_on = Some(text.to_string());
        self
    }
}

pub fn text_of(run: &GlyphRun) -> String {
    run.glyphs.iter().map(|g| char::from(g.id as u8)).collect()
}

impl Rasterizer for RecordingRasterizer {
    type Canvas = RecordingCanvas;

    fn set_font_size(&mut self, pixels: f32) -> Result<(), RenderError> {
        self.font_size = pixels;
        Ok(())
    }

    fn create_canvas(&mut self, width: u32, height: u32) -> Result<RecordingCanvas, RenderError> {
        Ok(RecordingCanvas {
            width,
            height,
            ops: Vec::new(),
            bytes: vec![0; width as usize * height as usize * 4],
        })
    }

    fn shape_text(
        &mut self,
        style: FontStyle,
        x: f32,
        y: f32,
        text: &str,
    ) -> Result<GlyphRun, RenderError> {
        if self.fail_on.as_deref() == Some(text) {
            return Err(RenderError::ShapingError(format!("cannot shape '{text}'")));
        }
        self.shaped.push((style, text.to_string(), x, y));
        let glyphs = text
            .bytes()
            .enumerate()
            .map(|(i, b)| PositionedGlyph {
                id: u16::from(b),
                x: x + i as f32 * self.advance,
                y,
            })
            .collect();
        Ok(GlyphRun {
            style,
            glyphs,
            advance: text.len() as f32 * self.advance,
        })
    }

    fn fill_glyphs(
        &mut self,
        canvas: &mut RecordingCanvas,
        run: &GlyphRun,
        color: Rgba,
    ) -> Result<(), RenderError> {
        canvas.ops.push(DrawOp::Fill {
            text: text_of(run),
            first_x: run.glyphs.first().map_or(f32::NAN, |g| g.x),
            baseline: run.glyphs.first().map_or(f32::NAN, |g| g.y),
            color,
        });
        Ok(())
    }

    fn stroke_glyphs(
        &mut self,
        canvas: &mut RecordingCanvas,
        run: &GlyphRun,
        color: Rgba,
        width: f32,
    ) -> Result<(), RenderError> {
        canvas.ops.push(DrawOp::Stroke {
            text: text_of(run),
            color,
            width,
        });
        Ok(())
    }

    fn fill_rect(
        &mut self,
        canvas: &mut RecordingCanvas,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgba,
    ) -> Result<(), RenderError> {
        canvas.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            color,
        });
        Ok(())
    }
}

/// What happened to a [`LoggingSurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Shown { layer: &'static str, bytes: usize },
    Hidden { layer: &'static str },
}

pub type EventLog = Rc<RefCell<Vec<SurfaceEvent>>>;

/// Surface writing into a log shared with the test, so events stay
/// observable after the renderer is dropped
pub struct LoggingSurface {
    name: &'static str,
    log: EventLog,
}

impl OverlaySurface for LoggingSurface {
    fn set_image_data(&mut self, data: &[u8]) -> Result<(), RenderError> {
        self.log.borrow_mut().push(SurfaceEvent::Shown {
            layer: self.name,
            bytes: data.len(),
        });
        Ok(())
    }

    fn hide_element(&mut self) {
        self.log
            .borrow_mut()
            .push(SurfaceEvent::Hidden { layer: self.name });
    }
}

/// Display whose first surface is "text" and second is "bitmap"
pub struct LoggingDisplay {
    pub size: (u32, u32),
    pub log: EventLog,
    created: usize,
}

impl LoggingDisplay {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            log: EventLog::default(),
            created: 0,
        }
    }
}

impl OverlayDisplay for LoggingDisplay {
    type Surface = LoggingSurface;

    fn screen_size(&mut self, _display: u32) -> Result<(u32, u32), RenderError> {
        Ok(self.size)
    }

    fn create_surface(&mut self, _placement: LayerPlacement) -> Result<LoggingSurface, RenderError> {
        let name = if self.created == 0 { "text" } else { "bitmap" };
        self.created += 1;
        Ok(LoggingSurface {
            name,
            log: Rc::clone(&self.log),
        })
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
