//! Search term normalization.
//!
//! Normalization is used on both sides of every text comparison the search engine makes:
//! query text, filter values, and catalog fields all pass through [`normalize_search_term`]
//! before being compared.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::aliases::{canonical_month, canonical_subject, is_noise_word};

/// Matches whole words.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word regex"));

/// Normalizes a search term for comparison.
///
/// Lowercases and trims the term, drops noise words (`paper`, `past`, `exam`, ...), and
/// rewrites whole-word subject and month aliases to their canonical names. The result is
/// trimmed again. Inner whitespace is left as is.
///
/// Normalization is idempotent: canonical names are never alias keys themselves.
///
/// ```
/// use pastpapers_query::normalize_search_term;
///
/// assert_eq!(normalize_search_term("  Phy Past Papers Jan "), "physics   january");
/// ```
pub fn normalize_search_term(term: &str) -> String {
    let lowered = term.to_lowercase();
    let rewritten = WORD.replace_all(lowered.trim(), |caps: &Captures<'_>| {
        let word = &caps[0];
        if is_noise_word(word) {
            return String::new();
        }
        canonical_subject(word)
            .or_else(|| canonical_month(word))
            .map_or_else(|| word.to_string(), str::to_string)
    });
    rewritten.trim().to_string()
}
