//! Parser output: styled runs grouped into lines

use super::state::FontStyle;
use crate::color::ColorRef;
use smallvec::SmallVec;

/// Contiguous text sharing one face and color
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyledRun {
    /// Tag-free text
    pub text: String,
    /// Face to shape with
    pub font_style: FontStyle,
    /// Fill color
    pub color: ColorRef,
}

impl StyledRun {
    /// Create a run
    pub fn new(text: impl Into<String>, font_style: FontStyle, color: ColorRef) -> Self {
        Self {
            text: text.into(),
            font_style,
            color,
        }
    }
}

/// Runs of one display line, in reading order
///
/// A line with no runs is still a line: it occupies a vertical slot when
/// laid out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormattedLine {
    runs: SmallVec<[StyledRun; 4]>,
}

impl FormattedLine {
    /// Create an empty line
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run
    pub fn push(&mut self, run: StyledRun) {
        self.runs.push(run);
    }

    /// Runs in reading order
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Number of runs
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether the line has no runs
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Concatenated text of all runs
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

impl FromIterator<StyledRun> for FormattedLine {
    fn from_iter<T: IntoIterator<Item = StyledRun>>(iter: T) -> Self {
        Self {
            runs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FormattedLine {
    type Item = &'a StyledRun;
    type IntoIter = core::slice::Iter<'a, StyledRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}
