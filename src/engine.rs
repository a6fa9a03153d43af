use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use crate::config::SearchConfig;
use crate::core::{Candidate, SearchResponse};
use crate::error::Result;
use crate::ranking::{RankedCandidate, Ranker, WeightedRanker};
use crate::text::{extract_search_terms_with, normalize};

/// Window for [`CatalogStats::recently_added`]
const RECENT_WINDOW_DAYS: i64 = 7;

/// Main player search orchestrator.
///
/// Holds no candidate data: the caller loads the full roster and passes it
/// in on every call, so one engine can be shared freely across threads.
pub struct SearchEngine {
    config: SearchConfig,
    ranker: Arc<dyn Ranker>,
}

/// Display ordering for a candidate list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    NameAsc,
    NameDesc,
    DateAsc,
    #[default]
    DateDesc,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "name-asc" => Ok(SortOrder::NameAsc),
            "name-desc" => Ok(SortOrder::NameDesc),
            "date-asc" => Ok(SortOrder::DateAsc),
            "date-desc" => Ok(SortOrder::DateDesc),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}

/// Roster summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_players: usize,
    /// Distinct keywords across the roster
    pub total_keywords: usize,
    /// Players added within the last 7 days
    pub recently_added: usize,
}

impl SearchEngine {
    /// Create an engine with the weighted fuzzy ranker.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!("Search engine configured: {}", config);

        let ranker = Arc::new(WeightedRanker::new(config.clone()));
        Ok(Self { config, ranker })
    }

    /// Replace the ranker (the config still drives term extraction and truncation).
    pub fn with_ranker(mut self, ranker: Arc<dyn Ranker>) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search the roster and report terms, scores and latency.
    pub fn search(&self, query: &str, candidates: &[Candidate]) -> SearchResponse {
        let start = Instant::now();

        let blank = query.trim().is_empty();
        let terms = if blank {
            Vec::new()
        } else {
            extract_search_terms_with(query, self.config.min_term_chars)
        };
        tracing::debug!("Query: {:?}", query);
        tracing::debug!("Extracted terms: {:?}", terms);

        // A blank query is a passthrough of the whole roster
        let mut results = self.ranker.rank(query, candidates);
        if let Some(max) = self.config.max_results.filter(|_| !blank) {
            results.truncate(max);
        }

        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!(
            "Found {} matches among {} candidates in {:.2}ms",
            results.len(),
            candidates.len(),
            latency_ms
        );

        SearchResponse {
            query: query.to_string(),
            terms,
            results,
            total_candidates: candidates.len(),
            latency_ms,
            ranking_method: self.ranker.name().to_string(),
        }
    }

    /// Ranked candidates without scores. A blank query returns the input unchanged.
    pub fn rank_candidates(&self, query: &str, candidates: &[Candidate]) -> Vec<Candidate> {
        self.search(query, candidates)
            .results
            .into_iter()
            .map(|RankedCandidate { candidate, .. }| candidate)
            .collect()
    }
}

/// Keep candidates having a keyword that contains `keyword` (normalized).
/// A blank keyword keeps everything.
pub fn filter_by_keyword(candidates: &[Candidate], keyword: &str) -> Vec<Candidate> {
    let needle = normalize(keyword);
    if needle.is_empty() {
        return candidates.to_vec();
    }

    candidates
        .iter()
        .filter(|c| c.keywords.iter().any(|kw| normalize(kw).contains(&needle)))
        .cloned()
        .collect()
}

/// Sort a copy of the roster. Names compare in normalized form (Arabic name,
/// falling back to the English one); undated players sort oldest.
pub fn sort_candidates(candidates: &[Candidate], order: SortOrder) -> Vec<Candidate> {
    let mut sorted = candidates.to_vec();

    let name_key = |c: &Candidate| {
        if c.name_arabic.trim().is_empty() {
            normalize(&c.name_english)
        } else {
            normalize(&c.name_arabic)
        }
    };

    match order {
        SortOrder::NameAsc => sorted.sort_by_cached_key(name_key),
        SortOrder::NameDesc => sorted.sort_by_cached_key(|c| Reverse(name_key(c))),
        SortOrder::DateAsc => sorted.sort_by(|a, b| compare_dates(a.created_at, b.created_at)),
        SortOrder::DateDesc => sorted.sort_by(|a, b| compare_dates(b.created_at, a.created_at)),
    }

    sorted
}

fn compare_dates(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    // None < Some, matching empty-string dates sorting first
    a.cmp(&b)
}

/// Summarize the roster relative to `now`.
pub fn catalog_stats(candidates: &[Candidate], now: DateTime<Utc>) -> CatalogStats {
    let keywords: HashSet<&str> = candidates
        .iter()
        .flat_map(|c| c.keywords.iter().map(String::as_str))
        .collect();

    let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
    let recently_added = candidates
        .iter()
        .filter(|c| c.created_at.is_some_and(|at| at > cutoff))
        .count();

    CatalogStats {
        total_players: candidates.len(),
        total_keywords: keywords.len(),
        recently_added,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap()
    }

    fn roster() -> Vec<Candidate> {
        vec![
            Candidate::new("p1", "مهند", "Mohannad")
                .with_keywords(vec!["مهاجم", "team falcons"])
                .with_created_at(at(20)),
            Candidate::new("p2", "فارس", "Fares")
                .with_keywords(vec!["mid", "playmaker"])
                .with_created_at(at(2)),
            Candidate::new("p3", "أحمد", "Ahmed").with_keywords(vec!["Falcons"]),
        ]
    }

    fn ids(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_engine_creation() {
        assert!(SearchEngine::new(SearchConfig::default()).is_ok());

        let bad = SearchConfig {
            threshold: -0.1,
            ..SearchConfig::default()
        };
        assert!(SearchEngine::new(bad).is_err());
    }

    #[test]
    fn test_search_response_metadata() {
        let engine = SearchEngine::new(SearchConfig::default()).unwrap();
        let response = engine.search("صور مهند", &roster());

        assert_eq!(response.terms, vec!["مهند"]);
        assert_eq!(response.total_candidates, 3);
        assert_eq!(response.ranking_method, "weighted-fuzzy");
        assert_eq!(response.best().map(|r| r.candidate.id.as_str()), Some("p1"));
    }

    #[test]
    fn test_blank_query_passthrough() {
        let engine = SearchEngine::new(SearchConfig::default()).unwrap();
        let players = roster();

        assert_eq!(engine.rank_candidates("", &players), players);
        assert!(engine.search("  ", &players).terms.is_empty());
    }

    #[test]
    fn test_max_results_truncates() {
        let config = SearchConfig {
            max_results: Some(1),
            ..SearchConfig::default()
        };
        let engine = SearchEngine::new(config).unwrap();

        let response = engine.search("falcons", &roster());
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].candidate.id, "p1");
    }

    #[test]
    fn test_max_results_ignored_for_blank_query() {
        let config = SearchConfig {
            max_results: Some(1),
            ..SearchConfig::default()
        };
        let engine = SearchEngine::new(config).unwrap();
        let players = roster();

        assert_eq!(engine.rank_candidates("", &players), players);
        assert_eq!(engine.search("   ", &players).results.len(), 3);
    }

    struct ReverseRanker;

    impl Ranker for ReverseRanker {
        fn rank(&self, _query: &str, candidates: &[Candidate]) -> Vec<RankedCandidate> {
            candidates
                .iter()
                .rev()
                .cloned()
                .map(|c| RankedCandidate::new(c, 1))
                .collect()
        }

        fn name(&self) -> &str {
            "reverse"
        }
    }

    #[test]
    fn test_custom_ranker() {
        let engine = SearchEngine::new(SearchConfig::default())
            .unwrap()
            .with_ranker(Arc::new(ReverseRanker));

        let response = engine.search("anything", &roster());
        assert_eq!(response.ranking_method, "reverse");
        assert_eq!(response.results[0].candidate.id, "p3");
    }

    #[test]
    fn test_filter_by_keyword() {
        let players = roster();

        assert_eq!(ids(&filter_by_keyword(&players, "falcons")), vec!["p1", "p3"]);
        assert_eq!(ids(&filter_by_keyword(&players, "مُهاجم")), vec!["p1"]);
        assert_eq!(filter_by_keyword(&players, " ").len(), 3);
        assert!(filter_by_keyword(&players, "goalkeeper").is_empty());
    }

    #[test]
    fn test_sort_by_name() {
        let players = roster();

        // normalized: احمد < فارس < مهند
        assert_eq!(ids(&sort_candidates(&players, SortOrder::NameAsc)), vec!["p3", "p2", "p1"]);
        assert_eq!(ids(&sort_candidates(&players, SortOrder::NameDesc)), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_sort_by_name_keeps_ties_in_input_order() {
        let players = vec![
            Candidate::new("a", "ناصر", ""),
            Candidate::new("b", "ناصر", ""),
            Candidate::new("c", "مهند", ""),
        ];

        assert_eq!(ids(&sort_candidates(&players, SortOrder::NameAsc)), vec!["c", "a", "b"]);
        assert_eq!(ids(&sort_candidates(&players, SortOrder::NameDesc)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_by_date() {
        let players = roster();

        assert_eq!(ids(&sort_candidates(&players, SortOrder::DateAsc)), vec!["p3", "p2", "p1"]);
        assert_eq!(ids(&sort_candidates(&players, SortOrder::DateDesc)), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("name-asc".parse::<SortOrder>(), Ok(SortOrder::NameAsc));
        assert_eq!(SortOrder::default(), SortOrder::DateDesc);
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_catalog_stats() {
        let stats = catalog_stats(&roster(), at(22));

        assert_eq!(stats.total_players, 3);
        // "team falcons" and "Falcons" are distinct raw keywords
        assert_eq!(stats.total_keywords, 5);
        assert_eq!(stats.recently_added, 1);
    }
}
