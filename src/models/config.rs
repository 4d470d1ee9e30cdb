use serde::Deserialize;
use std::path::Path;

/// Matching configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone)]
pub struct MatchConfig {
    /// Candidate retrieval tuning
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Ranking tuning
    #[serde(default)]
    pub ranking: RankingConfig,
}

/// How candidates are pulled from the catalog before ranking
#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalConfig {
    /// Per-channel half-width of the first RGB range query
    #[serde(default = "default_initial_radius")]
    pub initial_radius: u8,

    /// Per-channel half-width of the single widened re-query
    #[serde(default = "default_widened_radius")]
    pub widened_radius: u8,

    /// Widen the search when the first query returns fewer rows than this
    #[serde(default = "default_min_candidates")]
    pub min_candidates: usize,

    /// Hard cap on rows returned by one store query
    #[serde(default = "default_row_limit")]
    pub row_limit: usize,
}

fn default_initial_radius() -> u8 {
    40
}

fn default_widened_radius() -> u8 {
    80
}

fn default_min_candidates() -> usize {
    10
}

fn default_row_limit() -> usize {
    500
}

/// How ranked candidates are cut down to a result list
#[derive(Debug, Deserialize, Clone)]
pub struct RankingConfig {
    /// Number of matches returned per input color
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    10
}

impl MatchConfig {
    /// Load configuration from a YAML file, falling back to defaults
    pub fn load_from_path(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        initial_radius = config.retrieval.initial_radius,
                        top_k = config.ranking.top_k,
                        "Loaded match configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            retrieval: RetrievalConfig::default(),
            ranking: RankingConfig::default(),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            initial_radius: default_initial_radius(),
            widened_radius: default_widened_radius(),
            min_candidates: default_min_candidates(),
            row_limit: default_row_limit(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}
