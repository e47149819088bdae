//! # subtitle-core
//!
//! Markup parsing and color handling for subtitle overlays.
//!
//! Subtitle text arrives already split into display lines and may carry
//! SRT-style HTML tags or SSA-style brace escapes. [`TagParser`] strips all
//! of them, keeps the handful that matter for a plain overlay (bold,
//! italic, font color) and produces [`FormattedLine`]s of [`StyledRun`]s
//! ready for layout. Bitmap subtitles travel as [`SubtitleImage`].
//!
//! ```rust
//! use subtitle_core::{ColorRef, FontStyle, TagParser};
//!
//! let parser = TagParser::new()?;
//! let lines = parser.parse(["<b>Hello</b> {\\c&hff0000&}World{\\c}"]);
//! let runs = lines[0].runs();
//! assert_eq!(runs[0].font_style, FontStyle::Bold);
//! assert_eq!(runs[2].color, ColorRef::Explicit(0x0000ff));
//! # Ok::<(), subtitle_core::CoreError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod color;
pub mod errors;
pub mod parser;
pub mod subtitle;

pub use color::{hex_to_int, int_to_hex, ColorRef};
pub use errors::{CoreError, Result};
pub use parser::{FontStyle, FormattedLine, ParserState, StyledRun, Tag, TagParser};
pub use subtitle::{Subtitle, SubtitleImage};
