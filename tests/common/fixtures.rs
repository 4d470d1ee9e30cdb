//! Test fixtures and helpers.

use paintmatch::models::{Brand, CatalogColor, MatchConfig};
use paintmatch::services::{CandidateRetriever, ColorMatcher, InMemoryCatalog};
use std::sync::Arc;

/// Brand slugs used across the fixture catalog
pub mod brands {
    pub const SHERWIN: &str = "sherwin-williams";
    pub const BENJAMIN: &str = "benjamin-moore";
}

fn brand_for(slug: &str) -> Brand {
    let name = match slug {
        brands::SHERWIN => "Sherwin-Williams",
        brands::BENJAMIN => "Benjamin Moore",
        other => other,
    };
    Brand::new(name, slug)
}

/// Build a catalog record without stored Lab values
pub fn catalog_color(
    id: i64,
    name: &str,
    hex: &str,
    rgb: (u8, u8, u8),
    brand_slug: &str,
) -> CatalogColor {
    CatalogColor {
        id,
        name: name.to_string(),
        hex: hex.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        color_number: format!("PM {id:04}"),
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
        lab_l: None,
        lab_a: None,
        lab_b: None,
        brand: brand_for(brand_slug),
    }
}

/// Small two-brand catalog with known geometry: the blues cluster around
/// #4A90D9, the beige and gray sit in the neutral band, and the crimson
/// is isolated in its own corner
pub fn sample_catalog() -> Vec<CatalogColor> {
    vec![
        catalog_color(1, "Harbor Blue", "#4A90D9", (74, 144, 217), brands::SHERWIN),
        catalog_color(2, "Dover Sky", "#4A8FD8", (74, 143, 216), brands::SHERWIN),
        catalog_color(3, "Ocean Mist", "#5A9AD0", (90, 154, 208), brands::BENJAMIN),
        catalog_color(4, "Warm Beige", "#D6C9A7", (214, 201, 167), brands::BENJAMIN),
        catalog_color(5, "Mid Gray", "#808080", (128, 128, 128), brands::SHERWIN),
        catalog_color(6, "Crimson Red", "#DC143C", (220, 20, 60), brands::SHERWIN),
    ]
}

/// Run of near-identical grays for truncation and tie tests
pub fn gray_run(start: u8, count: u8) -> Vec<CatalogColor> {
    (0..count)
        .map(|i| {
            let v = start + i;
            catalog_color(
                100 + i as i64,
                &format!("Gray {v}"),
                &format!("#{v:02X}{v:02X}{v:02X}"),
                (v, v, v),
                brands::SHERWIN,
            )
        })
        .collect()
}

/// Assemble the full matching stack over an in-memory catalog
pub fn matcher_over(records: Vec<CatalogColor>, config: MatchConfig) -> ColorMatcher {
    let store = Arc::new(InMemoryCatalog::from_records(records));
    let retriever = CandidateRetriever::new(store, config.retrieval);
    ColorMatcher::new(retriever, config.ranking)
}
