use crate::error::MatchError;
use chroma_delta::{Rgb, Undertone};

/// Classify the undertone of a hex color.
///
/// `lab_ab` carries measured Lab a/b values when the caller has them
/// (catalog records with imported measurements); classification falls
/// back to hue buckets without them.
pub fn undertone_for_hex(hex: &str, lab_ab: Option<(f64, f64)>) -> Result<Undertone, MatchError> {
    let rgb: Rgb = hex.parse()?;
    Ok(Undertone::classify(rgb, lab_ab))
}
