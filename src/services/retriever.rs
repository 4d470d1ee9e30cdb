use crate::error::MatchError;
use crate::models::{CatalogColor, RetrievalConfig};
use chroma_delta::Rgb;
use std::sync::Arc;

use super::catalog::{CatalogStore, RgbRange};

/// Two-step candidate retrieval around an input color.
///
/// A narrow range query runs first; when it returns fewer rows than the
/// configured minimum, one widened re-query replaces its result. Never
/// more than two store queries per fetch, and the widened result is used
/// as-is even when it is still thin.
pub struct CandidateRetriever {
    store: Arc<dyn CatalogStore>,
    config: RetrievalConfig,
}

impl CandidateRetriever {
    pub fn new(store: Arc<dyn CatalogStore>, config: RetrievalConfig) -> Self {
        Self { store, config }
    }

    /// Fetch ranking candidates near `rgb`. Store errors propagate
    /// unchanged; there is no retry.
    pub async fn fetch(
        &self,
        rgb: Rgb,
        brand: Option<&str>,
    ) -> Result<Vec<CatalogColor>, MatchError> {
        let narrow = RgbRange::around(rgb, self.config.initial_radius);
        let candidates = self
            .store
            .range_query(narrow, brand, self.config.row_limit)
            .await?;

        if candidates.len() >= self.config.min_candidates {
            return Ok(candidates);
        }

        tracing::debug!(
            found = candidates.len(),
            min = self.config.min_candidates,
            radius = self.config.widened_radius,
            "Sparse catalog region, widening search radius"
        );

        let wide = RgbRange::around(rgb, self.config.widened_radius);
        self.store
            .range_query(wide, brand, self.config.row_limit)
            .await
    }
}
