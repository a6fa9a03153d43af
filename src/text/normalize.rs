//! Script-aware canonicalization so that superficially different spellings
//! compare equal.
//!
//! Arabic folding:
//! - tashkeel (U+064B–U+065F) and superscript alef (U+0670) are dropped
//! - alef variants (إ أ آ ٱ) become bare alef
//! - taa marbuta becomes haa, alef maksura becomes yaa
//! - hamza carriers (ؤ ئ ء) are deleted outright
//! - tatweel is dropped
//!
//! Latin folding lowercases, decomposes (NFKD) and drops combining accents.
//! Every function here is idempotent and maps empty input to an empty string.

use unicode_normalization::UnicodeNormalization;

#[inline]
fn is_arabic_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}')
}

#[inline]
fn is_latin_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

/// Folds one Arabic character; `None` means the character is removed.
#[inline]
fn fold_arabic(c: char) -> Option<char> {
    match c {
        c if is_arabic_diacritic(c) => None,
        'إ' | 'أ' | 'آ' | 'ٱ' => Some('ا'),
        'ة' => Some('ه'),
        'ى' => Some('ي'),
        // Deleted rather than substituted; "مسؤول" folds to "مسول".
        'ؤ' | 'ئ' | 'ء' => None,
        'ـ' => None,
        other => Some(other),
    }
}

#[inline]
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Arabic-oriented normalization. Latin letters are only lowercased.
pub fn normalize_arabic(text: &str) -> String {
    let folded: String = text.chars().filter_map(fold_arabic).collect();
    collapse_whitespace(&folded.to_lowercase())
}

/// Latin-oriented normalization: lowercase with accents stripped ("José" -> "jose").
pub fn normalize_latin(text: &str) -> String {
    let folded: String = text
        .nfkd()
        .filter(|c| !is_latin_combining_mark(*c))
        .collect();
    collapse_whitespace(&folded.to_lowercase())
}

/// Like [`normalize_latin`] but every character outside `[a-z0-9]` becomes a
/// word break, so Arabic text yields an empty string.
pub fn normalize_latin_strict(text: &str) -> String {
    let latin: String = normalize_latin(text)
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();
    collapse_whitespace(&latin)
}

/// Single canonical form covering both scripts.
///
/// Hamza carriers are folded before decomposition; NFKD would otherwise
/// split "ؤ" into waw plus a hamza mark and keep the waw.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .chars()
        .filter_map(fold_arabic)
        .nfkd()
        .filter(|c| !is_latin_combining_mark(*c))
        .filter_map(fold_arabic)
        .collect();
    collapse_whitespace(&folded.to_lowercase())
}

/// Comparison key used by the scorer: the Arabic form followed by the strict
/// Latin form, each present at most once.
pub fn match_key(text: &str) -> String {
    let arabic = normalize_arabic(text);
    let latin = normalize_latin_strict(text);

    if latin.is_empty() || latin == arabic {
        arabic
    } else if arabic.is_empty() {
        latin
    } else {
        format!("{} {}", arabic, latin)
    }
}
