use crate::error::MatchError;
use crate::models::CatalogColor;
use async_trait::async_trait;
use chroma_delta::Rgb;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Inclusive RGB cube used for candidate range queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbRange {
    pub r_min: u8,
    pub r_max: u8,
    pub g_min: u8,
    pub g_max: u8,
    pub b_min: u8,
    pub b_max: u8,
}

impl RgbRange {
    /// Cube of half-width `radius` around `center`, clamped to the channel
    /// range at the edges
    pub fn around(center: Rgb, radius: u8) -> Self {
        Self {
            r_min: center.r.saturating_sub(radius),
            r_max: center.r.saturating_add(radius),
            g_min: center.g.saturating_sub(radius),
            g_max: center.g.saturating_add(radius),
            b_min: center.b.saturating_sub(radius),
            b_max: center.b.saturating_add(radius),
        }
    }

    pub fn contains(&self, r: u8, g: u8, b: u8) -> bool {
        (self.r_min..=self.r_max).contains(&r)
            && (self.g_min..=self.g_max).contains(&g)
            && (self.b_min..=self.b_max).contains(&b)
    }
}

/// Trait for catalog color storage.
///
/// Implementations must return rows in a stable order for identical
/// queries: ranking breaks rounded-distance ties by row order.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Rows whose RGB channels all fall inside `range`, optionally filtered
    /// to one brand slug (exact match), capped at `limit` rows
    async fn range_query(
        &self,
        range: RgbRange,
        brand: Option<&str>,
        limit: usize,
    ) -> Result<Vec<CatalogColor>, MatchError>;
}

/// In-memory catalog storage, insertion-ordered
pub struct InMemoryCatalog {
    colors: Arc<RwLock<Vec<CatalogColor>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            colors: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn from_records(records: Vec<CatalogColor>) -> Self {
        Self {
            colors: Arc::new(RwLock::new(records)),
        }
    }

    pub async fn insert(&self, color: CatalogColor) {
        let mut colors = self.colors.write().await;
        colors.push(color);
    }

    pub async fn len(&self) -> usize {
        self.colors.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.colors.read().await.is_empty()
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn range_query(
        &self,
        range: RgbRange,
        brand: Option<&str>,
        limit: usize,
    ) -> Result<Vec<CatalogColor>, MatchError> {
        let colors = self.colors.read().await;
        Ok(colors
            .iter()
            .filter(|c| range.contains(c.r, c.g, c.b))
            .filter(|c| brand.map_or(true, |slug| c.brand.slug == slug))
            .take(limit)
            .cloned()
            .collect())
    }
}
