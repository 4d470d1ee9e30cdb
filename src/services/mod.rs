pub mod backfill;
pub mod catalog;
pub mod matcher;
pub mod retriever;
pub mod undertone;

pub use backfill::{backfill_derived, BackfillStats};
pub use catalog::{CatalogStore, InMemoryCatalog, RgbRange};
pub use matcher::{rank_candidates, ColorMatcher};
pub use retriever::CandidateRetriever;
pub use undertone::undertone_for_hex;
