//! # Player Search Engine
//!
//! Bilingual (Arabic/English) fuzzy player search:
//! - Arabic and Latin text normalization (tashkeel, alef/yaa/taa folding, accents)
//! - Query term extraction with conjunction and stop-word stripping
//! - Edit-distance fuzzy matching
//! - Weighted multi-field ranking (names, aliases, team, keywords)
//!
//! The engine is a pure function of (query, roster): it owns no state and
//! performs no I/O beyond the optional catalog helpers.
//!
//! ## Example Usage
//!
//! ```rust
//! use player_search_engine::{Candidate, SearchConfig, SearchEngine};
//!
//! fn main() -> player_search_engine::Result<()> {
//!     let engine = SearchEngine::new(SearchConfig::default())?;
//!
//!     let roster = vec![
//!         Candidate::new("1", "مهند", "Mohannad"),
//!         Candidate::new("2", "ناصر", "Nasser"),
//!     ];
//!
//!     let response = engine.search("show me photos of mohanad", &roster);
//!     let best = response.best().expect("a match");
//!     assert_eq!(best.candidate.id, "1");
//!     println!("Found: {} - {}", best.candidate.display_name(), best.score);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod text;

// Re-export primary types
pub use catalog::{export_catalog, load_catalog, parse_catalog};
pub use config::{FieldWeights, SearchConfig};
pub use self::core::{Candidate, Keywords, SearchField, SearchResponse};
pub use engine::{catalog_stats, filter_by_keyword, sort_candidates, CatalogStats, SearchEngine, SortOrder};
pub use error::{Result, SearchEngineError};
pub use ranking::{fuzzy_match, RankedCandidate, Ranker, WeightedRanker};
pub use text::{extract_search_terms, normalize};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
