//! CIELAB perceptual color space
//!
//! CIELAB (CIE 1976 L*a*b*) is the color space the matching pipeline ranks
//! in: the CIEDE2000 difference formula is defined over Lab coordinates.
//! Conversion from sRGB goes through linear RGB and CIE XYZ under the D65
//! standard illuminant with the 2° observer.
//!
//! # References
//!
//! IEC 61966-2-1 (sRGB transfer function), CIE 15 (XYZ and L*a*b*).

use super::rgb::Rgb;

// D65 reference white
const XN: f64 = 0.95047;
const YN: f64 = 1.0;
const ZN: f64 = 1.08883;

// CIE f(t) linear-segment threshold (6/29)^3 and slope (1/3)(29/6)^2
const EPSILON: f64 = 0.008856;
const LINEAR_SLOPE: f64 = 7.787;

/// A color in CIELAB space.
///
/// All components are double precision: candidate sets are ranked on
/// differences well below 0.01 ΔE, and the catalog stores Lab values with
/// full precision.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis: typically -128.0 to 127.0
    pub a: f64,
    /// Blue-yellow axis: typically -128.0 to 127.0
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma magnitude `sqrt(a^2 + b^2)`, the distance from the neutral axis.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }
}

/// sRGB inverse transfer function (gamma decode) for one channel in 0..=1.
#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// CIE L*a*b* forward function with the linear segment below EPSILON.
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        LINEAR_SLOPE * t + 16.0 / 116.0
    }
}

impl From<Rgb> for Lab {
    /// Convert 8-bit sRGB to CIELAB (D65, 2° observer).
    ///
    /// The conversion is total and deterministic: every 24-bit sRGB value
    /// maps to exactly one Lab value, bit-identical across runs.
    ///
    /// # Example
    ///
    /// ```
    /// use chroma_delta::{Lab, Rgb};
    ///
    /// let white = Lab::from(Rgb::new(255, 255, 255));
    /// assert!((white.l - 100.0).abs() < 1e-3);
    /// assert!(white.a.abs() < 1e-3 && white.b.abs() < 1e-3);
    /// ```
    fn from(rgb: Rgb) -> Self {
        let r = srgb_to_linear(rgb.r as f64 / 255.0);
        let g = srgb_to_linear(rgb.g as f64 / 255.0);
        let b = srgb_to_linear(rgb.b as f64 / 255.0);

        // Linear sRGB to XYZ (D65)
        let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
        let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
        let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

        let fx = lab_f(x / XN);
        let fy = lab_f(y / YN);
        let fz = lab_f(z / ZN);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}
