//! 8-bit sRGB color type and hex parsing.
//!
//! Catalog rows and match requests both carry colors as 8-bit-per-channel
//! sRGB, written as `#RRGGBB` hex strings. This module owns that boundary:
//! parsing is strict, so malformed input is rejected before any color math
//! or catalog lookup runs.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// A color in 8-bit sRGB, the storage and interchange format.
///
/// Perceptual work converts into [`Lab`](crate::Lab) via `Lab::from(rgb)`;
/// undertone screening derives [`Hsl`](crate::Hsl) the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new Rgb color from 8-bit channel values.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    /// Render as an uppercase `#RRGGBB` hex string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Accepts exactly six hex digits with an optional leading `#`.
    /// Leading and trailing whitespace is trimmed; parsing is
    /// case-insensitive. Three-digit shorthand is NOT accepted: catalog
    /// identity uses the full six-digit form, so `#12345` and `1234567`
    /// both fail with [`ParseColorError::InvalidLength`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_delta::Rgb;
    ///
    /// let blue: Rgb = "#4A90D9".parse().unwrap();
    /// assert_eq!((blue.r, blue.g, blue.b), (74, 144, 217));
    ///
    /// assert!("red".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // Hex digits are ASCII; the pair slices below index by byte
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength {
                found: s.chars().count(),
            });
        }
        if s.len() != 6 {
            return Err(ParseColorError::InvalidLength { found: s.len() });
        }

        let r = u8::from_str_radix(&s[0..2], 16)?;
        let g = u8::from_str_radix(&s[2..4], 16)?;
        let b = u8::from_str_radix(&s[4..6], 16)?;
        Ok(Self { r, g, b })
    }
}
