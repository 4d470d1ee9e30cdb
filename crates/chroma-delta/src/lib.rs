//! chroma-delta: perceptual color conversion and difference metrics
//!
//! This library is the pure color-science core of the paint matching
//! engine: sRGB decoding, CIELAB conversion, the CIEDE2000 difference
//! formula, and undertone classification. Everything here is synchronous,
//! deterministic, and free of I/O; the service layer above owns catalogs,
//! retrieval, and ranking policy.
//!
//! # Quick Start
//!
//! ```
//! use chroma_delta::{delta_e2000, Lab, Rgb};
//!
//! let input: Rgb = "#4A90D9".parse().unwrap();
//! let candidate: Rgb = "#5A8FD0".parse().unwrap();
//!
//! let de = delta_e2000(Lab::from(input), Lab::from(candidate));
//! assert!(de < 5.0, "visually close blues should score low");
//! ```
//!
//! # Color Spaces
//!
//! | Color Space | Key Property | Used For |
//! |-------------|--------------|----------|
//! | **sRGB** ([`Rgb`]) | Standard 8-bit encoding | Catalog storage, hex I/O |
//! | **CIELAB** ([`Lab`]) | Perceptually uniform axes | CIEDE2000 ranking |
//! | **HSL** ([`Hsl`]) | Cheap saturation/hue read | Undertone screening |
//!
//! All conversions run in `f64`. Candidate ranking separates colors that
//! differ by hundredths of a ΔE unit, and the catalog stores measured Lab
//! values at full precision; doing the pipeline in `f32` visibly reshuffles
//! near-ties at the top of a match list.
//!
//! # Why CIEDE2000
//!
//! Plain Euclidean distance in Lab (ΔE76) over-reports differences between
//! saturated colors and under-reports them near neutral, which is exactly
//! where paint matching lives: whites, creams, and grays separated by tiny
//! casts. CIEDE2000 weights lightness, chroma, and hue non-uniformly and
//! rotates the blue region, tracking panel observer data far better. The
//! implementation follows CIE 142-2001 and is validated against the
//! official Sharma test pairs in `domain_tests`.
//!
//! # Undertones
//!
//! [`Undertone`] is a closed six-variant classification (golden, pink,
//! green, blue, violet, balanced) driven by measured Lab a/b when present
//! and an HSL hue fallback otherwise. See [`Undertone::classify`] for the
//! precedence rules.

pub mod color;
pub mod diff;
pub mod error;
pub mod undertone;


pub use color::{Hsl, Lab, Rgb};
pub use diff::delta_e2000;
pub use error::ParseColorError;
pub use undertone::{Undertone, UndertoneFamily};
