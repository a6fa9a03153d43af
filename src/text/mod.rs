//! Text processing for bilingual (Arabic/Latin) queries: normalization and
//! search term extraction.

pub mod normalize;
pub mod tokenizer;

pub use normalize::{
    match_key, normalize, normalize_arabic, normalize_latin, normalize_latin_strict,
};
pub use tokenizer::{
    extract_search_terms, extract_search_terms_with, is_stop_word, remove_conjunctions,
    MIN_TERM_CHARS,
};
