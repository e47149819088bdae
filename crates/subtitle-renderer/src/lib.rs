//! Subtitle overlay renderer
//!
//! `subtitle-renderer` lays out marked-up subtitle lines onto an RGBA
//! overlay canvas sized from the screen resolution, and places bitmap
//! subtitles centered on a smaller single-channel canvas. Drawing goes
//! through a [`Rasterizer`]; the default software backend uses rustybuzz
//! and tiny-skia.
//!
//! ```rust
//! use subtitle_renderer::{CanvasGeometry, MemoryDisplay};
//!
//! let geometry = CanvasGeometry::compute(1920, 1080, 0.05, 2)?;
//! assert_eq!((geometry.width, geometry.height), (1808, 144));
//! # let _ = MemoryDisplay::new(1920, 1080);
//! # Ok::<(), subtitle_renderer::RenderError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod compositor;
pub mod config;
pub mod display;
pub mod geometry;
pub mod layout;
pub mod rasterizer;
pub mod renderer;
pub mod utils;

pub use compositor::{composite, ImageCanvas, Padding};
pub use config::{Palette, RendererConfig, Rgba};
pub use display::{
    LayerPlacement, MemoryDisplay, MemorySurface, OverlayDisplay, OverlaySurface, PixelFormat,
};
pub use geometry::CanvasGeometry;
pub use layout::{layout, LayoutOptions, LineLayout, TextLayout};
#[cfg(feature = "software-backend")]
pub use rasterizer::SoftwareRasterizer;
pub use rasterizer::{CanvasPixels, GlyphRun, PositionedGlyph, Rasterizer};
pub use renderer::{PreparedKind, SubtitleRenderer};
pub use utils::RenderError;

/// Re-export commonly used types from subtitle-core
pub use subtitle_core::{ColorRef, FontStyle, FormattedLine, StyledRun, Subtitle, SubtitleImage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
