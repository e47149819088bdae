//! Color references and hex color conversion
//!
//! Markup carries colors in two notations: `<font color=#rrggbb>` and the
//! brace escape `{\c&hbbggrr&}`. Both end up as a 24-bit `0xRRGGBB` value
//! wrapped in [`ColorRef::Explicit`]. The remaining variants replace the
//! integer sentinels older renderers used, so explicit black (`0x000000`)
//! can never be mistaken for the outline color.

use crate::errors::{CoreError, Result};

/// Color attached to a styled run or drawing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorRef {
    /// No color tag active; the renderer's default text color applies
    #[default]
    Inherit,
    /// Translucent fill behind a line when background boxes are enabled
    BackgroundFill,
    /// Glyph outline color
    Outline,
    /// Explicit `0xRRGGBB` value from a color tag
    Explicit(u32),
}

impl ColorRef {
    /// Legacy integer code for `Inherit`
    pub const INHERIT_CODE: i32 = -1;
    /// Legacy integer code for `BackgroundFill`
    pub const BACKGROUND_CODE: i32 = -2;
    /// Legacy integer code for `Outline`
    pub const OUTLINE_CODE: i32 = 0;

    /// Build an explicit color, masking to 24 bits
    pub const fn rgb(value: u32) -> Self {
        Self::Explicit(value & 0x00FF_FFFF)
    }

    /// Whether a color tag is currently in effect
    pub const fn is_explicit(self) -> bool {
        matches!(self, Self::Explicit(_))
    }

    /// Split into `(r, g, b)` bytes for explicit colors
    pub const fn components(self) -> Option<(u8, u8, u8)> {
        match self {
            Self::Explicit(v) => Some((
                ((v >> 16) & 0xFF) as u8,
                ((v >> 8) & 0xFF) as u8,
                (v & 0xFF) as u8,
            )),
            _ => None,
        }
    }

    /// Integer code compatible with sentinel-based renderers
    ///
    /// Explicit black maps to `0` here, which collides with the outline
    /// code. Use this only for interop, never for comparisons.
    pub const fn legacy_code(self) -> i32 {
        match self {
            Self::Inherit => Self::INHERIT_CODE,
            Self::BackgroundFill => Self::BACKGROUND_CODE,
            Self::Outline => Self::OUTLINE_CODE,
            #[allow(clippy::cast_possible_wrap)]
            Self::Explicit(v) => (v & 0x00FF_FFFF) as i32,
        }
    }

    /// Inverse of [`legacy_code`](Self::legacy_code)
    ///
    /// `0` decodes to `Outline`; other negative codes are treated as
    /// `Inherit`.
    pub const fn from_legacy_code(code: i32) -> Self {
        match code {
            Self::BACKGROUND_CODE => Self::BackgroundFill,
            Self::OUTLINE_CODE => Self::Outline,
            #[allow(clippy::cast_sign_loss)]
            c if c > 0 => Self::rgb(c as u32),
            _ => Self::Inherit,
        }
    }
}

/// Parse six lowercase hex digits as a big-endian `0xRRGGBB` value
///
/// The tag grammar only ever captures `[a-f0-9]{6}` from lowercased markup,
/// so anything else is a caller bug and reported as
/// [`CoreError::InvalidColor`].
///
/// # Errors
///
/// Returns an error when `hex` is not exactly six characters from
/// `0-9a-f`.
pub fn hex_to_int(hex: &str) -> Result<u32> {
    let bytes = hex.as_bytes();
    if bytes.len() != 6 {
        return Err(CoreError::invalid_color(hex));
    }

    let mut value = 0u32;
    for &b in bytes {
        let digit = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            _ => return Err(CoreError::invalid_color(hex)),
        };
        value = (value << 4) | u32::from(digit);
    }
    Ok(value)
}

/// Format a color as six lowercase hex digits (`0xRRGGBB` → `"rrggbb"`)
///
/// Bits above the low 24 are ignored.
pub fn int_to_hex(value: u32) -> String {
    format!("{:06x}", value & 0x00FF_FFFF)
}

/// Combine the three groups of a `{\c&hBBGGRR&}` escape into `0xRRGGBB`
///
/// # Errors
///
/// Propagates [`hex_to_int`] failures for malformed groups.
pub fn bgr_groups_to_int(blue: &str, green: &str, red: &str) -> Result<u32> {
    let mut rgb = String::with_capacity(6);
    rgb.push_str(red);
    rgb.push_str(green);
    rgb.push_str(blue);
    hex_to_int(&rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_int_big_endian() {
        assert_eq!(hex_to_int("ff0000").unwrap(), 0xFF0000);
        assert_eq!(hex_to_int("00ff00").unwrap(), 0x00FF00);
        assert_eq!(hex_to_int("0000ff").unwrap(), 0x0000FF);
        assert_eq!(hex_to_int("a1b2c3").unwrap(), 0xA1B2C3);
        assert_eq!(hex_to_int("000000").unwrap(), 0);
    }

    #[test]
    fn hex_to_int_rejects_contract_violations() {
        assert!(hex_to_int("FF0000").is_err());
        assert!(hex_to_int("ff00").is_err());
        assert!(hex_to_int("ff00001").is_err());
        assert!(hex_to_int("gg0000").is_err());
        assert!(hex_to_int("").is_err());
    }

    #[test]
    fn int_to_hex_pads_and_masks() {
        assert_eq!(int_to_hex(0xFF), "0000ff");
        assert_eq!(int_to_hex(0x0012_3456), "123456");
        assert_eq!(int_to_hex(0xFF12_3456), "123456");
    }

    #[test]
    fn brace_groups_are_reversed() {
        assert_eq!(bgr_groups_to_int("ff", "00", "00").unwrap(), 0x0000FF);
        assert_eq!(bgr_groups_to_int("11", "22", "33").unwrap(), 0x332211);
    }

    #[test]
    fn legacy_codes() {
        assert_eq!(ColorRef::Inherit.legacy_code(), -1);
        assert_eq!(ColorRef::BackgroundFill.legacy_code(), -2);
        assert_eq!(ColorRef::Outline.legacy_code(), 0);
        assert_eq!(ColorRef::rgb(0x123456).legacy_code(), 0x123456);

        assert_eq!(ColorRef::from_legacy_code(-1), ColorRef::Inherit);
        assert_eq!(ColorRef::from_legacy_code(-2), ColorRef::BackgroundFill);
        assert_eq!(ColorRef::from_legacy_code(0), ColorRef::Outline);
        assert_eq!(ColorRef::from_legacy_code(0xABCDEF), ColorRef::rgb(0xABCDEF));
    }

    #[test]
    fn explicit_black_is_not_outline() {
        assert_ne!(ColorRef::rgb(0), ColorRef::Outline);
        assert_eq!(ColorRef::rgb(0).components(), Some((0, 0, 0)));
        assert_eq!(ColorRef::Outline.components(), None);
    }
}
