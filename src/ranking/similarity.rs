use rapidfuzz::distance::levenshtein as rf_levenshtein;

use crate::text::match_key;

/// Default similarity threshold for player search
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Similarity reported when one string contains the other
const CONTAINMENT_SIMILARITY: f64 = 0.9;

/// Similarity reported when a word of one string contains a word of the other
const WORD_CONTAINMENT_SIMILARITY: f64 = 0.8;

/// Words shorter than this never take part in word-level matching
const MIN_WORD_CHARS: usize = 2;

#[inline]
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Classic Levenshtein distance (single-char insert/delete/substitute), in characters.
pub fn levenshtein(a: &str, b: &str) -> usize {
    rf_levenshtein::distance(a.chars(), b.chars())
}

/// Length-normalized similarity in [0, 1].
///
/// Identical strings score 1.0, containment 0.9, word-level containment 0.8;
/// otherwise `(max_len - distance) / max_len`. An empty side scores 0.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let (longer, shorter) = if char_len(a) >= char_len(b) { (a, b) } else { (b, a) };

    if shorter.is_empty() {
        return 0.0;
    }
    if longer == shorter {
        return 1.0;
    }
    if longer.contains(shorter) {
        return CONTAINMENT_SIMILARITY;
    }

    let word_overlap = shorter.split_whitespace().any(|sw| {
        longer
            .split_whitespace()
            .any(|lw| lw.contains(sw) || sw.contains(lw))
    });
    if word_overlap {
        return WORD_CONTAINMENT_SIMILARITY;
    }

    let max_len = char_len(longer);
    let distance = levenshtein(longer, shorter);
    (max_len - distance) as f64 / max_len as f64
}

/// Fuzzy match between a query term and a field, both raw.
///
/// ```
/// use player_search_engine::ranking::fuzzy_match;
///
/// assert!(fuzzy_match("مُهَنَّد", "مهند", 0.7));
/// assert!(fuzzy_match("mohanad", "Mohannad", 0.7));
/// assert!(!fuzzy_match("xyzabc", "Mohannad", 0.7));
/// ```
pub fn fuzzy_match(term: &str, field: &str, threshold: f64) -> bool {
    fuzzy_match_keys(&match_key(term), &match_key(field), threshold)
}

/// Fuzzy match on precomputed [`match_key`]s, evaluated cheapest first:
/// whole-key containment, word containment, then edit-distance similarity.
pub(crate) fn fuzzy_match_keys(term_key: &str, field_key: &str, threshold: f64) -> bool {
    // Everything contains "", so empty keys are excluded up front
    if term_key.is_empty() || field_key.is_empty() {
        return false;
    }

    if field_key.contains(term_key) {
        return true;
    }

    let field_words: Vec<&str> = field_key
        .split_whitespace()
        .filter(|w| char_len(w) >= MIN_WORD_CHARS)
        .collect();

    for term_word in term_key
        .split_whitespace()
        .filter(|w| char_len(w) >= MIN_WORD_CHARS)
    {
        for field_word in &field_words {
            if field_word.contains(term_word) || term_word.contains(field_word) {
                return true;
            }
            if similarity(term_word, field_word) >= threshold {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_counts_chars() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("مهند", "مهنا"), 1);
    }

    #[test]
    fn test_similarity_shortcuts() {
        assert_eq!(similarity("nasser", "nasser"), 1.0);
        assert_eq!(similarity("alnasser", "nasser"), 0.9);
        assert_eq!(similarity("al nasser", "nasser fc"), 0.8);
        assert_eq!(similarity("", "nasser"), 0.0);
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn test_similarity_edit_distance() {
        // one insertion over eight characters
        assert!((similarity("mohanad", "mohannad") - 0.875).abs() < 1e-9);
        assert!((similarity("mohammed", "mohannad") - 0.625).abs() < 1e-9);
    }

    #[test]
    fn test_self_match() {
        for s in ["مهند", "Mohannad", "team falcons", "#9", "Ça"] {
            assert!(fuzzy_match(s, s, 1.0), "{:?} should match itself", s);
        }
    }

    #[test]
    fn test_diacritics_and_case_insensitive() {
        assert!(fuzzy_match("مُهَنَّد", "مهند", 1.0));
        assert!(fuzzy_match("MOHANNAD", "mohannad", 1.0));
        assert!(fuzzy_match("jose", "José", 1.0));
    }

    #[test]
    fn test_substring_match() {
        assert!(fuzzy_match("nasser", "Al-Nasser FC", 1.0));
        assert!(fuzzy_match("alnasser", "nasser", 1.0));
    }

    #[test]
    fn test_typo_within_threshold() {
        assert!(fuzzy_match("Muhanad", "Mohannad", 0.7));
        assert!(!fuzzy_match("Mohammed", "Mohannad", 0.7));
        assert!(fuzzy_match("Mohammed", "Mohannad", 0.6));
    }

    #[test]
    fn test_threshold_monotonic() {
        let pairs = [
            ("Muhanad", "Mohannad"),
            ("Mohammed", "Mohannad"),
            ("faris", "Fares"),
            ("xyzabc", "Mohannad"),
        ];
        let thresholds = [1.0, 0.9, 0.8, 0.7, 0.6, 0.5, 0.3, 0.0];

        for (term, field) in pairs {
            let mut matched = false;
            for t in thresholds {
                let now = fuzzy_match(term, field, t);
                assert!(!matched || now, "{} / {} lost match at {}", term, field, t);
                matched = now;
            }
        }
    }

    #[test]
    fn test_empty_never_matches() {
        assert!(!fuzzy_match("", "مهند", 0.0));
        assert!(!fuzzy_match("مهند", "", 0.0));
        assert!(!fuzzy_match("ـــ", "مهند", 0.0));
        assert!(!fuzzy_match("   ", "   ", 0.0));
    }

    #[test]
    fn test_short_words_skipped() {
        // single-character words are ignored in word-level matching
        assert!(!fuzzy_match("x y", "ax by", 0.9));
    }
}
