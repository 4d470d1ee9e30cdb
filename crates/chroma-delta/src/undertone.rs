//! Undertone classification
//!
//! Paint undertones describe the secondary cast a color shows next to a
//! neutral reference: a white can lean golden, pink, or blue even though it
//! reads as "white" on its own. The classifier here is a heuristic over Lab
//! a/b measurements (preferred) with an HSL hue fallback for catalog rows
//! that carry no measured Lab data.
//!
//! The same classifier serves both the online query path and the offline
//! catalog sweep, so the two can never drift apart.

use std::fmt;

use crate::color::{Hsl, Rgb};

/// HSL saturation (percent) below which a color is treated as achromatic.
/// Near-neutrals get much tighter a/b thresholds: at 7% saturation a cast
/// of b=4 already reads clearly golden, while the same b on a saturated
/// color is noise. The comparison is strict: exactly 8.0 is chromatic.
const ACHROMATIC_SATURATION: f64 = 8.0;

/// The six undertone classes used across the catalog.
///
/// This is a closed set: every color classifies into exactly one variant,
/// and downstream code matches exhaustively instead of comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Undertone {
    Golden,
    Pink,
    Green,
    Blue,
    Violet,
    Balanced,
}

/// Coarse warm/cool/neutral grouping used for merchandising copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UndertoneFamily {
    Warm,
    Cool,
    Neutral,
}

impl Undertone {
    /// Classify a color's undertone.
    ///
    /// `lab_ab` carries measured Lab a/b components when the catalog has
    /// them; measured data always wins over the hue heuristic. Without Lab
    /// data, achromatic colors go straight to [`Undertone::Balanced`] (their
    /// hue is undefined and is never consulted) and chromatic colors fall
    /// back to hue buckets.
    ///
    /// # Example
    ///
    /// ```
    /// use chroma_delta::{Rgb, Undertone};
    ///
    /// // A warm beige whose measured a/b sit inside the balanced window
    /// let beige = Rgb::new(214, 201, 167);
    /// assert_eq!(
    ///     Undertone::classify(beige, Some((4.0, 10.0))),
    ///     Undertone::Balanced
    /// );
    /// ```
    pub fn classify(rgb: Rgb, lab_ab: Option<(f64, f64)>) -> Undertone {
        let hsl = Hsl::from(rgb);
        let achromatic = hsl.s < ACHROMATIC_SATURATION;

        if let Some((a, b)) = lab_ab {
            if achromatic {
                // Near-neutrals: small casts dominate, checked yellow-first
                if b > 3.0 {
                    Undertone::Golden
                } else if a > 2.0 {
                    Undertone::Pink
                } else if b < -2.0 {
                    Undertone::Blue
                } else if a < -2.0 {
                    Undertone::Green
                } else {
                    Undertone::Balanced
                }
            } else if a > 8.0 && b > 8.0 {
                Undertone::Golden
            } else if a > 8.0 {
                Undertone::Pink
            } else if a < -5.0 && b > 5.0 {
                Undertone::Green
            } else if a < -5.0 && b < -5.0 {
                Undertone::Blue
            } else if a > 3.0 && b < -3.0 {
                Undertone::Violet
            } else {
                Undertone::Balanced
            }
        } else if achromatic {
            // No measurement and no meaningful hue to fall back on
            Undertone::Balanced
        } else if (20.0..70.0).contains(&hsl.h) {
            Undertone::Golden
        } else if hsl.h >= 330.0 || hsl.h < 20.0 {
            Undertone::Pink
        } else if (70.0..160.0).contains(&hsl.h) {
            Undertone::Green
        } else if (200.0..270.0).contains(&hsl.h) {
            Undertone::Blue
        } else if (270.0..330.0).contains(&hsl.h) {
            Undertone::Violet
        } else {
            Undertone::Balanced
        }
    }

    /// The lowercase display label, as stored in search facets.
    pub fn as_label(self) -> &'static str {
        match self {
            Undertone::Golden => "golden",
            Undertone::Pink => "pink",
            Undertone::Green => "green",
            Undertone::Blue => "blue",
            Undertone::Violet => "violet",
            Undertone::Balanced => "balanced",
        }
    }

    /// Warm/cool/neutral grouping of this undertone.
    pub fn family(self) -> UndertoneFamily {
        match self {
            Undertone::Golden | Undertone::Pink => UndertoneFamily::Warm,
            Undertone::Green | Undertone::Blue | Undertone::Violet => UndertoneFamily::Cool,
            Undertone::Balanced => UndertoneFamily::Neutral,
        }
    }
}

impl fmt::Display for Undertone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl UndertoneFamily {
    /// The lowercase display label.
    pub fn as_label(self) -> &'static str {
        match self {
            UndertoneFamily::Warm => "warm",
            UndertoneFamily::Cool => "cool",
            UndertoneFamily::Neutral => "neutral",
        }
    }
}

impl fmt::Display for UndertoneFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}
