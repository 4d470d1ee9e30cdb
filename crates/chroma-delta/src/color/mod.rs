//! Color types and conversion utilities
//!
//! Three representations, each with one job:
//!
//! - **Rgb**: 8-bit sRGB, the storage and interchange format. Use for I/O
//!   and hex parsing.
//! - **Lab**: CIELAB under D65, the space all perceptual ranking happens in.
//! - **Hsl**: coarse screen for the undertone classifier (saturation and
//!   hue fallback only).
//!
//! # Example
//!
//! ```
//! use chroma_delta::{Lab, Rgb};
//!
//! // Parse catalog input
//! let rgb: Rgb = "#4A90D9".parse().unwrap();
//!
//! // Convert once, rank many times
//! let lab = Lab::from(rgb);
//! assert!(lab.l > 0.0);
//! ```

mod hsl;
mod lab;
mod rgb;

pub use hsl::Hsl;
pub use lab::Lab;
pub use rgb::Rgb;
