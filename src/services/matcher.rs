use crate::error::MatchError;
use crate::models::{CatalogColor, ColorMatch, PaletteMatch, RankingConfig};
use chroma_delta::{delta_e2000, Lab, Rgb};
use futures_util::future::try_join_all;

use super::retriever::CandidateRetriever;

/// Ranks retrieved candidates and drives the whole match flow
pub struct ColorMatcher {
    retriever: CandidateRetriever,
    config: RankingConfig,
}

impl ColorMatcher {
    pub fn new(retriever: CandidateRetriever, config: RankingConfig) -> Self {
        Self { retriever, config }
    }

    /// Top-K perceptual matches for one hex color
    pub async fn find_matches(
        &self,
        hex: &str,
        brand: Option<&str>,
    ) -> Result<Vec<ColorMatch>, MatchError> {
        let rgb: Rgb = hex.parse()?;
        let input = Lab::from(rgb);

        let candidates = self.retriever.fetch(rgb, brand).await?;
        let matches = rank_candidates(input, &candidates, self.config.top_k);

        tracing::debug!(
            color = %rgb,
            candidates = candidates.len(),
            matches = matches.len(),
            "Ranked catalog matches"
        );

        Ok(matches)
    }

    /// Match a whole palette of hex colors concurrently.
    ///
    /// Every input is validated before any catalog work: one malformed
    /// color fails the batch with zero store queries. Output order mirrors
    /// input order.
    pub async fn match_palette(
        &self,
        inputs: &[String],
        brand: Option<&str>,
    ) -> Result<Vec<PaletteMatch>, MatchError> {
        for input in inputs {
            input.parse::<Rgb>()?;
        }

        let results = try_join_all(inputs.iter().map(|input| self.find_matches(input, brand)))
            .await?;

        Ok(inputs
            .iter()
            .zip(results)
            .map(|(input, matches)| PaletteMatch {
                input: input.clone(),
                matches,
            })
            .collect())
    }
}

/// Rank candidates by CIEDE2000 distance to `input`, ascending.
///
/// Distances are rounded to two decimals before the sort, so candidates
/// that round equal tie and keep their retrieval order. The rounding is
/// part of the ordering contract, not display formatting.
pub fn rank_candidates(input: Lab, candidates: &[CatalogColor], top_k: usize) -> Vec<ColorMatch> {
    let mut matches: Vec<ColorMatch> = candidates
        .iter()
        .map(|candidate| ColorMatch {
            id: candidate.id,
            name: candidate.name.clone(),
            hex: candidate.hex.clone(),
            slug: candidate.slug.clone(),
            color_number: candidate.color_number.clone(),
            brand: candidate.brand.clone(),
            delta_e: round2(delta_e2000(input, candidate.lab())),
        })
        .collect();

    matches.sort_by(|a, b| a.delta_e.total_cmp(&b.delta_e));
    matches.truncate(top_k);
    matches
}

/// Round to two decimal places, the precision deltaE is published at
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
