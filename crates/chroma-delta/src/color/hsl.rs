//! HSL color representation
//!
//! HSL is only used as a coarse screen: the undertone classifier needs
//! saturation (to separate achromatic from chromatic colors) and hue (as a
//! fallback when no measured Lab data exists). It is never used for ranking.

use super::rgb::Rgb;

/// A color in HSL, derived from sRGB channels.
///
/// # Components
///
/// - `h`: Hue in degrees, `0.0..360.0`. Undefined for achromatic colors
///   and reported as `0.0` by convention; callers must check
///   [`is_achromatic`](Hsl::is_achromatic) before bucketing by hue.
/// - `s`: Saturation as a percentage, `0.0..=100.0`
/// - `l`: Lightness as a percentage, `0.0..=100.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees (0.0..360.0), 0.0 when achromatic
    pub h: f64,
    /// Saturation in percent (0.0..=100.0)
    pub s: f64,
    /// Lightness in percent (0.0..=100.0)
    pub l: f64,
}

impl Hsl {
    /// Create a new Hsl color.
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// True when the color carries no hue at all (saturation exactly zero).
    ///
    /// The hue component of an achromatic color is meaningless and must not
    /// be fed into hue-bucket logic.
    #[inline]
    pub fn is_achromatic(self) -> bool {
        self.s == 0.0
    }
}

impl From<Rgb> for Hsl {
    /// Derive HSL from sRGB via the hexagonal max/min model.
    fn from(rgb: Rgb) -> Self {
        let r = rgb.r as f64 / 255.0;
        let g = rgb.g as f64 / 255.0;
        let b = rgb.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if rgb.r == rgb.g && rgb.g == rgb.b {
            // Achromatic: hue undefined, reported as 0
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let chroma = max - min;
        let s = chroma / (1.0 - (2.0 * l - 1.0).abs());

        // Hue sector: 60 degrees per edge of the RGB hexagon
        let h = if max == r {
            (g - b) / chroma
        } else if max == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };
        let h = (h * 60.0).rem_euclid(360.0);

        Hsl {
            h,
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}
