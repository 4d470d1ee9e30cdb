pub mod catalog;
pub mod config;

pub use catalog::{Brand, CatalogColor, ColorMatch, PaletteMatch};
pub use config::{MatchConfig, RankingConfig, RetrievalConfig};
