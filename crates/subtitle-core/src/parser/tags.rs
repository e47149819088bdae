//! Recognized markup tags and their effect on parser state

use super::state::ParserState;
use crate::color::ColorRef;

/// Classified markup token
///
/// Anything the classifier does not recognize becomes `Unknown` and is
/// dropped from the output without touching the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `<b>` or `{\b1}`
    BoldOn,
    /// `</b>` or `{\b0}`
    BoldOff,
    /// `<i>` or `{\i1}`
    ItalicOn,
    /// `</i>` or `{\i0}`
    ItalicOff,
    /// `</font>` or `{\c}`
    ColorReset,
    /// `<font ...>`; `None` when no usable color attribute was found
    FontColor(Option<u32>),
    /// `{\c&hBBGGRR&}` already converted to `0xRRGGBB`
    BraceColor(u32),
    /// Stripped without effect
    Unknown,
}

impl Tag {
    /// Classify tags that need no pattern matching
    ///
    /// `token` must already be lowercased. Returns `None` for `<font ...>`
    /// openers and brace escapes that still need attribute extraction.
    pub fn classify_simple(token: &str) -> Option<Self> {
        match token {
            "<b>" | "{\\b1}" => Some(Self::BoldOn),
            "</b>" | "{\\b0}" => Some(Self::BoldOff),
            "<i>" | "{\\i1}" => Some(Self::ItalicOn),
            "</i>" | "{\\i0}" => Some(Self::ItalicOff),
            "</font>" | "{\\c}" => Some(Self::ColorReset),
            _ => None,
        }
    }

    /// Apply the tag, returning the new state
    ///
    /// Closing tags only act when the matching flag is set, so unbalanced
    /// closers are no-ops.
    pub fn apply(self, mut state: ParserState) -> ParserState {
        match self {
            Self::BoldOn => state.bold = true,
            Self::BoldOff if state.bold => state.bold = false,
            Self::ItalicOn => state.italic = true,
            Self::ItalicOff if state.italic => state.italic = false,
            Self::ColorReset if state.color.is_explicit() => state.color = ColorRef::Inherit,
            Self::FontColor(Some(rgb)) | Self::BraceColor(rgb) => state.color = ColorRef::rgb(rgb),
            _ => {}
        }
        state
    }
}
