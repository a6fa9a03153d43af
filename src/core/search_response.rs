use serde::{Deserialize, Serialize};

use crate::ranking::RankedCandidate;

/// Search response with ranked players and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Raw query as typed by the user
    pub query: String,

    /// Terms extracted from the query (empty for a blank query)
    #[serde(default)]
    pub terms: Vec<String>,

    /// Matches, best first
    #[serde(default)]
    pub results: Vec<RankedCandidate>,

    /// Number of candidates considered
    pub total_candidates: usize,

    /// Search latency in milliseconds
    pub latency_ms: f64,

    /// Ranking method used
    pub ranking_method: String,
}

impl SearchResponse {
    /// Whether anything matched
    pub fn has_matches(&self) -> bool {
        !self.results.is_empty()
    }

    /// Best match, if any
    pub fn best(&self) -> Option<&RankedCandidate> {
        self.results.first()
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        match self.best() {
            Some(best) => format!(
                "'{}' -> {} of {} (best: {} [{}]) via {} in {:.2}ms",
                self.query,
                self.results.len(),
                self.total_candidates,
                best.candidate.display_name(),
                best.score,
                self.ranking_method,
                self.latency_ms
            ),
            None => format!(
                "'{}' -> no matches of {} via {} in {:.2}ms",
                self.query, self.total_candidates, self.ranking_method, self.latency_ms
            ),
        }
    }
}
