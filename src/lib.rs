//! Paintmatch - perceptual paint color matching.
//!
//! Ranks brand catalog colors by CIEDE2000 distance to an input color.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;

pub use error::MatchError;
