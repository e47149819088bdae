//! Inline markup parser
//!
//! Turns pre-split subtitle lines carrying SRT-style HTML tags
//! (`<b>`, `<i>`, `<font color=...>`) and SSA-style brace escapes
//! (`{\b1}`, `{\i0}`, `{\c&hBBGGRR&}`) into [`StyledRun`]s.
//!
//! Every bracketed token is removed from the text, recognized or not. Style
//! state is threaded across the lines of an event, so
//!
//! ```rust
//! use subtitle_core::{FontStyle, TagParser};
//!
//! let parser = TagParser::new()?;
//! let lines = parser.parse(["<b>first", "second"]);
//! assert_eq!(lines[1].runs()[0].font_style, FontStyle::Bold);
//! # Ok::<(), subtitle_core::CoreError>(())
//! ```

mod run;
mod state;
mod tags;

pub use run::{FormattedLine, StyledRun};
pub use state::{FontStyle, ParserState};
pub use tags::Tag;

use crate::color::{bgr_groups_to_int, hex_to_int};
use crate::errors::{CoreError, Result};
use regex::Regex;

/// Any `<...>` tag or `{\...}` escape
const TAG_PATTERN: &str = r"(?i)(<[^>]*>|\{\\[^}]*\})";
/// Color attribute inside a lowercased `<font ...>` tag
const FONT_COLOR_PATTERN: &str = r#"color[ \t]*=[ \t"']*#?([a-f0-9]{6})"#;
/// Whole lowercased brace color escape, groups in blue/green/red order
const BRACE_COLOR_PATTERN: &str = r"^\{\\c&h([a-f0-9]{2})([a-f0-9]{2})([a-f0-9]{2})&\}$";

/// Compiled markup patterns
///
/// Build one per renderer and reuse it for every event.
#[derive(Debug, Clone)]
pub struct TagParser {
    tags: Regex,
    font_color: Regex,
    brace_color: Regex,
}

impl TagParser {
    /// Compile the markup patterns
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Parse`] if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            tags: Regex::new(TAG_PATTERN).map_err(CoreError::parse)?,
            font_color: Regex::new(FONT_COLOR_PATTERN).map_err(CoreError::parse)?,
            brace_color: Regex::new(BRACE_COLOR_PATTERN).map_err(CoreError::parse)?,
        })
    }

    /// Parse all lines of one event starting from the default state
    pub fn parse<I, S>(&self, lines: I) -> Vec<FormattedLine>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = ParserState::default();
        lines
            .into_iter()
            .map(|line| {
                let (formatted, next) = self.parse_line(line.as_ref(), state);
                state = next;
                formatted
            })
            .collect()
    }

    /// Parse one line given the state left by the previous line
    ///
    /// Each run captures the state in effect *before* the tag that ends it.
    pub fn parse_line(&self, line: &str, mut state: ParserState) -> (FormattedLine, ParserState) {
        let line = line.trim();
        let mut formatted = FormattedLine::new();
        let mut text_start = 0;

        for token in self.tags.find_iter(line) {
            if token.start() > text_start {
                formatted.push(StyledRun::new(
                    &line[text_start..token.start()],
                    state.font_style(),
                    state.color,
                ));
            }
            text_start = token.end();

            let tag = self.classify(&token.as_str().to_lowercase());
            if tag == Tag::Unknown {
                log::trace!("stripping unrecognized tag {:?}", token.as_str());
            }
            state = tag.apply(state);
        }

        if text_start < line.len() {
            formatted.push(StyledRun::new(
                &line[text_start..],
                state.font_style(),
                state.color,
            ));
        }

        (formatted, state)
    }

    /// Classify a lowercased token
    pub fn classify(&self, token: &str) -> Tag {
        if let Some(tag) = Tag::classify_simple(token) {
            return tag;
        }

        if let Some(attributes) = token.strip_prefix("<font") {
            let rgb = self
                .font_color
                .captures(attributes)
                .and_then(|caps| hex_to_int(&caps[1]).ok());
            return Tag::FontColor(rgb);
        }

        self.brace_color
            .captures(token)
            .and_then(|caps| bgr_groups_to_int(&caps[1], &caps[2], &caps[3]).ok())
            .map_or(Tag::Unknown, Tag::BraceColor)
    }
}
