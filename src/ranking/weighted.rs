use crate::config::SearchConfig;
use crate::core::Candidate;
use crate::ranking::similarity::fuzzy_match_keys;
use crate::ranking::{RankedCandidate, Ranker};
use crate::text::{extract_search_terms_with, match_key};

/// Weighted multi-field ranker.
///
/// Every (term, field) pair that fuzzily matches adds the field's weight, so
/// a player matching more of the query (or more of their keywords) ranks
/// higher. A candidate matching every term naturally outranks one matching
/// a single term.
pub struct WeightedRanker {
    config: SearchConfig,
}

impl WeightedRanker {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Score one candidate against already extracted terms.
    pub fn score_candidate(&self, terms: &[String], candidate: &Candidate) -> u32 {
        let term_keys: Vec<String> = terms.iter().map(|t| match_key(t)).collect();
        self.score_with_keys(&term_keys, candidate)
    }

    fn score_with_keys(&self, term_keys: &[String], candidate: &Candidate) -> u32 {
        let weights = &self.config.weights;
        let mut score: u32 = 0;

        for (field, text) in candidate.searchable_fields() {
            let field_key = match_key(text);
            let weight = weights.weight(field);

            for term_key in term_keys {
                if fuzzy_match_keys(term_key, &field_key, self.config.threshold) {
                    score = score.saturating_add(weight);
                }
            }
        }

        score
    }

    /// Rank candidates against extracted terms: drop zero scores, then
    /// stable-sort by descending score.
    pub fn rank_terms(&self, terms: &[String], candidates: &[Candidate]) -> Vec<RankedCandidate> {
        if terms.is_empty() {
            return Vec::new();
        }

        let term_keys: Vec<String> = terms.iter().map(|t| match_key(t)).collect();

        let mut ranked: Vec<RankedCandidate> = candidates
            .iter()
            .filter_map(|candidate| {
                let score = self.score_with_keys(&term_keys, candidate);
                if score > 0 {
                    tracing::trace!("{} scored {}", candidate.display_name(), score);
                    Some(RankedCandidate::new(candidate.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        // `sort_by` is stable: equal scores keep the caller's order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        ranked
    }
}

impl Default for WeightedRanker {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Ranker for WeightedRanker {
    fn rank(&self, query: &str, candidates: &[Candidate]) -> Vec<RankedCandidate> {
        // Blank query: everything, unscored, in the caller's order
        if query.trim().is_empty() {
            return candidates
                .iter()
                .cloned()
                .map(|c| RankedCandidate::new(c, 0))
                .collect();
        }

        let terms = extract_search_terms_with(query, self.config.min_term_chars);
        self.rank_terms(&terms, candidates)
    }

    fn name(&self) -> &str {
        "weighted-fuzzy"
    }
}
