//! Error types for color parsing.

use std::num::ParseIntError;

use thiserror::Error;

/// Error returned when a hex color string cannot be parsed.
///
/// Parsing rejects malformed input up front, before any conversion work
/// happens, so downstream code only ever sees well-formed channels.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    #[error("invalid hex color length: expected 6 digits, found {found}")]
    InvalidLength { found: usize },

    #[error("invalid hex digit: {0}")]
    InvalidDigit(#[from] ParseIntError),
}
