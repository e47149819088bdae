//! Subtitle payloads handed to the renderer

/// Pre-rendered single-channel subtitle bitmap
///
/// Rows are `width` bytes long with no stride padding, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubtitleImage {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
    /// Alpha/luma bytes, row-major
    pub pixels: Vec<u8>,
}

impl SubtitleImage {
    /// Create an image from its declared size and pixel bytes
    pub fn new(width: i32, height: i32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Bytes required by the declared dimensions, `None` if negative
    pub fn expected_len(&self) -> Option<usize> {
        let w = usize::try_from(self.width).ok()?;
        let h = usize::try_from(self.height).ok()?;
        w.checked_mul(h)
    }

    /// Row `y`, if the buffer holds it
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let w = usize::try_from(self.width).ok()?;
        let start = y.checked_mul(w)?;
        self.pixels.get(start..start.checked_add(w)?)
    }
}

/// One subtitle event
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Subtitle {
    /// Marked-up text, one entry per display line, most recent last
    Text(Vec<String>),
    /// Pre-rendered bitmap (DVD/PGS style)
    Image(SubtitleImage),
}

impl Subtitle {
    /// Build a text subtitle from any string-like lines
    pub fn text<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Text(lines.into_iter().map(Into::into).collect())
    }

    /// Whether this is a bitmap subtitle
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image(_))
    }
}
