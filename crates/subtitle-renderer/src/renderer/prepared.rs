//! The canvas waiting to be shown

use crate::compositor::ImageCanvas;

/// Kind of canvas currently prepared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreparedKind {
    /// RGBA text canvas for the text overlay
    Text,
    /// Padded bitmap for the bitmap overlay
    Image,
}

/// Prepared canvas; replacing the value drops the previous canvas
#[derive(Debug)]
pub(crate) enum Prepared<C> {
    Empty,
    Text(C),
    Image(ImageCanvas),
}

impl<C> Default for Prepared<C> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<C> Prepared<C> {
    pub(crate) fn kind(&self) -> Option<PreparedKind> {
        match self {
            Self::Empty => None,
            Self::Text(_) => Some(PreparedKind::Text),
            Self::Image(_) => Some(PreparedKind::Image),
        }
    }
}
