//! Style state threaded through the lines of one subtitle event

use crate::color::ColorRef;

/// Font face variant used for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontStyle {
    /// Regular face
    #[default]
    Normal,
    /// Bold face
    Bold,
    /// Italic face
    Italic,
}

impl FontStyle {
    /// All variants, in rasterizer face order
    pub const ALL: [Self; 3] = [Self::Normal, Self::Bold, Self::Italic];

    /// Stable index for per-face tables
    pub const fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Bold => 1,
            Self::Italic => 2,
        }
    }
}

/// Bold/italic/color flags carried across lines
///
/// A tag left open on one line stays in effect for the following lines of
/// the same event, so the parser takes and returns this value explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParserState {
    /// `<b>` / `{\b1}` active
    pub bold: bool,
    /// `<i>` / `{\i1}` active
    pub italic: bool,
    /// Active font color, `Inherit` when none
    pub color: ColorRef,
}

impl ParserState {
    /// Face selected by the current flags; italic wins over bold
    pub const fn font_style(&self) -> FontStyle {
        if self.italic {
            FontStyle::Italic
        } else if self.bold {
            FontStyle::Bold
        } else {
            FontStyle::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn italic_takes_precedence() {
        let state = ParserState {
            bold: true,
            italic: true,
            color: ColorRef::Inherit,
        };
        assert_eq!(state.font_style(), FontStyle::Italic);
    }

    #[test]
    fn default_state_is_plain() {
        let state = ParserState::default();
        assert_eq!(state.font_style(), FontStyle::Normal);
        assert_eq!(state.color, ColorRef::Inherit);
    }

    #[test]
    fn face_indices_are_distinct() {
        let indices: Vec<usize> = FontStyle::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
