//! Query tokenizer: turns a free-text request such as "ابي صور مهند" or
//! "show me photos of mohannad" into the name terms worth matching.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::text::normalize::{normalize_arabic, normalize_latin_strict};

/// Tokens shorter than this (in characters) are noise
pub const MIN_TERM_CHARS: usize = 2;

/// Search-intent verbs, gallery nouns and function words in both languages.
const STOP_WORDS: &[&str] = &[
    // Arabic: gallery nouns
    "صور", "صوره", "صورة", "البوم", "ألبوم", "الالبوم",
    // Arabic: intent verbs
    "اريد", "ابي", "ابغى", "ابغا", "عندك", "فيه", "موجود", "اعطني", "ورني", "شوف", "ابحث", "بحث",
    // Arabic: function words
    "عن", "من", "في", "على", "الى", "إلى", "مع", "او", "لكن", "هل", "ما", "لا", "نعم", "اي",
    "كل", "بعض", "هذا", "ذلك", "هنا", "هناك", "ال", "لل", "بال", "كال", "فال",
    // English: gallery nouns
    "photos", "photo", "album", "pictures", "picture", "images", "image",
    // English: intent verbs
    "show", "find", "search", "get", "give", "want", "need", "have",
    // English: function words
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "from",
    "by", "is", "are", "was", "were", "be", "been", "me", "my", "i", "you", "he", "she", "it",
    "we", "they",
];

static STOP_WORD_SET: OnceLock<HashSet<String>> = OnceLock::new();
static STANDALONE_CONJUNCTION: OnceLock<Regex> = OnceLock::new();
static ATTACHED_CONJUNCTION: OnceLock<Regex> = OnceLock::new();
static TERM_SEPARATORS: OnceLock<Regex> = OnceLock::new();

/// Stop words stored in normalized form so "ألبوم" and "البوم" both hit.
fn stop_words() -> &'static HashSet<String> {
    STOP_WORD_SET.get_or_init(|| STOP_WORDS.iter().map(|w| normalize_arabic(w)).collect())
}

/// و ل ك ب ف standing alone between spaces
fn standalone_conjunction() -> &'static Regex {
    STANDALONE_CONJUNCTION
        .get_or_init(|| Regex::new(r"(^|\s)[ولكبف](\s|$)").expect("static regex"))
}

/// و ل ك ب ف glued to the start of the next word
fn attached_conjunction() -> &'static Regex {
    ATTACHED_CONJUNCTION.get_or_init(|| {
        Regex::new(r"(^|\s)[ولكبف]([\x{0600}-\x{06FF}a-zA-Z])").expect("static regex")
    })
}

/// Whitespace plus Arabic/Latin punctuation and brackets
fn term_separators() -> &'static Regex {
    TERM_SEPARATORS
        .get_or_init(|| Regex::new(r"[\s,،.؛;:!؟?()\[\]{}]+").expect("static regex"))
}

/// Removes Arabic conjunction particles, standalone or prefixed to a word.
///
/// This is a purely lexical heuristic: a name that genuinely starts with one
/// of these letters loses it too ("فارس" -> "ارس"). Matching stays
/// substring-based, so the shortened term still finds the full name.
pub fn remove_conjunctions(text: &str) -> String {
    let without_standalone = standalone_conjunction().replace_all(text, " ");
    let without_attached = attached_conjunction().replace_all(&without_standalone, "${1}${2}");
    without_attached.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when the token is a stop word in either its Arabic or Latin normal form.
pub fn is_stop_word(token: &str) -> bool {
    let words = stop_words();
    words.contains(&normalize_arabic(token)) || words.contains(&normalize_latin_strict(token))
}

/// Extracts search terms with the default minimum term length.
pub fn extract_search_terms(query: &str) -> Vec<String> {
    extract_search_terms_with(query, MIN_TERM_CHARS)
}

/// Splits a query into search terms, in query order, duplicates kept.
///
/// Terms are returned raw (not normalized). When every token is filtered
/// out the whole cleaned query comes back as a single term, so a non-empty
/// query never yields an empty list.
pub fn extract_search_terms_with(query: &str, min_chars: usize) -> Vec<String> {
    let cleaned = remove_conjunctions(query);

    let terms: Vec<String> = term_separators()
        .split(&cleaned)
        .filter(|word| !word.is_empty())
        .filter(|word| !is_stop_word(word))
        .filter(|word| word.trim().chars().count() >= min_chars)
        .map(String::from)
        .collect();

    if terms.is_empty() {
        tracing::trace!("No terms survived filtering, falling back to {:?}", cleaned);
        return vec![cleaned];
    }

    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_request() {
        assert_eq!(extract_search_terms("show me photos of mohannad"), vec!["mohannad"]);
    }

    #[test]
    fn test_arabic_request() {
        assert_eq!(extract_search_terms("ابي صور مهند"), vec!["مهند"]);
        assert_eq!(extract_search_terms("ألبوم مهند"), vec!["مهند"]);
        assert_eq!(extract_search_terms("ابحث عن ناصر"), vec!["ناصر"]);
    }

    #[test]
    fn test_standalone_conjunction_removed() {
        assert_eq!(remove_conjunctions("مهند و ناصر"), "مهند ناصر");
    }

    #[test]
    fn test_attached_conjunction_removed() {
        assert_eq!(remove_conjunctions("مهند وناصر"), "مهند ناصر");
        assert_eq!(remove_conjunctions("وmohannad"), "mohannad");
    }

    #[test]
    fn test_conjunction_heuristic_strips_leading_letter_of_names() {
        // Names starting with a conjunction letter lose it
        assert_eq!(extract_search_terms("فارس و ناصر"), vec!["ارس", "ناصر"]);
        assert_eq!(remove_conjunctions("بدر"), "در");
    }

    #[test]
    fn test_split_on_punctuation() {
        assert_eq!(extract_search_terms("مهند، ناصر؟"), vec!["مهند", "ناصر"]);
        assert_eq!(extract_search_terms("nasser;(mohannad)"), vec!["nasser", "mohannad"]);
    }

    #[test]
    fn test_short_tokens_dropped() {
        assert_eq!(extract_search_terms("x mohannad"), vec!["mohannad"]);
    }

    #[test]
    fn test_duplicates_and_order_kept() {
        assert_eq!(
            extract_search_terms("nasser mohannad nasser"),
            vec!["nasser", "mohannad", "nasser"]
        );
    }

    #[test]
    fn test_mixed_script() {
        assert_eq!(extract_search_terms("مهند mohannad"), vec!["مهند", "mohannad"]);
    }

    #[test]
    fn test_stop_word_normal_forms() {
        assert!(is_stop_word("إلى"));
        assert!(is_stop_word("ألبوم"));
        assert!(is_stop_word("Photos"));
        assert!(!is_stop_word("مهند"));
    }

    #[test]
    fn test_fallback_to_cleaned_query() {
        assert_eq!(extract_search_terms("show photos"), vec!["show photos"]);
        // "له" loses its prefix letter and "صور" is a stop word
        assert_eq!(extract_search_terms("صور له"), vec!["صور ه"]);
        assert_eq!(extract_search_terms(" و "), vec![""]);
    }

    #[test]
    fn test_never_empty_for_non_empty_query() {
        for query in ["the", "و", "?!", "a b c", "مهند", "  x  "] {
            assert!(!extract_search_terms(query).is_empty(), "{:?}", query);
        }
    }

    #[test]
    fn test_custom_min_chars() {
        assert_eq!(extract_search_terms_with("al mohannad", 3), vec!["mohannad"]);
    }
}
