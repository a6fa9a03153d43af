pub mod similarity;
pub mod weighted;

use serde::{Deserialize, Serialize};

use crate::core::Candidate;

pub use similarity::{fuzzy_match, levenshtein, similarity, DEFAULT_THRESHOLD};
pub use weighted::WeightedRanker;

/// Trait for ranking/fuzzy matching implementations
pub trait Ranker: Send + Sync {
    /// Rank candidates against query, return matches sorted by score (highest first).
    ///
    /// Ties keep the input order, so callers can pre-sort (e.g. newest first).
    fn rank(&self, query: &str, candidates: &[Candidate]) -> Vec<RankedCandidate>;

    /// Get ranker name for logging
    fn name(&self) -> &str;
}

/// Candidate with relevance score (0 = no match)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate: Candidate,
    pub score: u32,
}

impl RankedCandidate {
    pub fn new(candidate: Candidate, score: u32) -> Self {
        Self { candidate, score }
    }
}
