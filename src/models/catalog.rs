use chroma_delta::{Lab, Rgb};
use serde::{Deserialize, Serialize};

/// Paint brand a catalog color belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub slug: String,
}

impl Brand {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// One paint color as stored in the catalog.
///
/// RGB channels are always present. The Lab triple is a measured value
/// imported with the catalog where available; records without one are
/// ranked on Lab derived from their RGB.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogColor {
    pub id: i64,
    pub name: String,
    pub hex: String,
    pub slug: String,
    pub color_number: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default)]
    pub lab_l: Option<f64>,
    #[serde(default)]
    pub lab_a: Option<f64>,
    #[serde(default)]
    pub lab_b: Option<f64>,
    pub brand: Brand,
}

impl CatalogColor {
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Measured Lab value, present only when all three components are stored
    pub fn stored_lab(&self) -> Option<Lab> {
        match (self.lab_l, self.lab_a, self.lab_b) {
            (Some(l), Some(a), Some(b)) => Some(Lab::new(l, a, b)),
            _ => None,
        }
    }

    /// Measured a/b pair for undertone classification
    pub fn lab_ab(&self) -> Option<(f64, f64)> {
        match (self.lab_a, self.lab_b) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    /// Lab coordinates used for ranking: measured when complete, derived
    /// from RGB otherwise
    pub fn lab(&self) -> Lab {
        self.stored_lab().unwrap_or_else(|| Lab::from(self.rgb()))
    }
}

/// One ranked match returned to the caller
#[derive(Debug, Clone, Serialize)]
pub struct ColorMatch {
    pub id: i64,
    pub name: String,
    pub hex: String,
    pub slug: String,
    pub color_number: String,
    pub brand: Brand,
    /// CIEDE2000 distance to the input, rounded to two decimals
    pub delta_e: f64,
}

/// Matches for one input color of a palette request
#[derive(Debug, Clone, Serialize)]
pub struct PaletteMatch {
    pub input: String,
    pub matches: Vec<ColorMatch>,
}
