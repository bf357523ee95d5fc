//! Free-text query parser.
//!
//! Extracts structured filters from loosely-typed queries such as `phy u1 jan 24`.
//! This is not a grammar: the lowercased input is split on whitespace and a fixed sequence
//! of extraction passes runs over the list of unconsumed tokens. Each pass returns the value
//! it found (if any) and the tokens that remain, so a token is never claimed twice.
//!
//! # Pass order
//!
//! 1. Year: a 2-digit token (`24` -> 2024) or a 4-digit token within the accepted range
//! 2. Subject: a subject alias or canonical subject name
//! 3. Unit: an alias from the detected subject's unit table
//! 4. Session: a month abbreviation or full month name
//! 5. Unit fallback: a unit alias appearing anywhere in the remaining text
//! 6. Combined token: a single leftover token like `p1jan21`, scanned for unit, month
//!    and year substrings
//!
//! Whatever is left becomes the residual text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::trace;

use crate::aliases::{
    MONTH_ALIASES, UNIT_ALIASES, canonical_month, canonical_subject, canonical_unit, unit_table,
};

/// Earliest year recognised in a query.
pub const MIN_YEAR: u16 = 2000;

/// Default latest year recognised in a query.
pub const DEFAULT_MAX_YEAR: u16 = 2025;

/// A run of two to four digits inside a combined token.
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2,4}").expect("valid digit regex"));

/// Structured filters extracted from a free-text query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    /// Canonical lowercase subject name (e.g. `physics`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Canonical unit display name, scoped to the subject (e.g. `Unit 1`, `Pure 2`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Four-digit year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Canonical lowercase month name (e.g. `january`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    /// The input with all recognised tokens removed, joined by single spaces.
    pub text: String,
}

impl ParsedQuery {
    /// Returns true if any structured filter was extracted.
    pub fn has_filters(&self) -> bool {
        self.subject.is_some() || self.unit.is_some() || self.year.is_some() || self.session.is_some()
    }
}

/// Query parser with a configurable upper bound for recognised years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParser {
    /// Latest four-digit year accepted as a year filter.
    max_year: u16,
}

impl Default for QueryParser {
    fn default() -> Self {
        Self {
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

impl QueryParser {
    /// Creates a parser using [`DEFAULT_MAX_YEAR`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the latest year the parser recognises.
    pub fn with_max_year(mut self, max_year: u16) -> Self {
        self.max_year = max_year.max(MIN_YEAR);
        self
    }

    /// Returns the latest year the parser recognises.
    pub fn max_year(&self) -> u16 {
        self.max_year
    }

    /// Parses a free-text query. Never fails; unrecognised input ends up in `text`.
    pub fn parse(&self, input: &str) -> ParsedQuery {
        let tokens: Vec<String> = input
            .to_lowercase()
            .split_whitespace()
            .map(String::from)
            .collect();

        let (year, tokens) = take_first(tokens, |t| self.token_year(t));
        let (subject, tokens) = take_first(tokens, canonical_subject);
        let (mut unit, tokens) = match subject {
            Some(subject) => take_first(tokens, |t| canonical_unit(subject, t)),
            None => (None, tokens),
        };
        let (session, mut tokens) = take_first(tokens, canonical_month);

        if unit.is_none()
            && let Some(subject) = subject
        {
            (unit, tokens) = unit_fallback(subject, tokens);
        }

        let mut parsed = ParsedQuery {
            subject: subject.map(String::from),
            unit: unit.map(String::from),
            year,
            session: session.map(String::from),
            text: String::new(),
        };

        if !parsed.has_filters()
            && let [token] = tokens.as_slice()
            && self.split_combined_token(token, &mut parsed)
        {
            tokens.clear();
        }

        parsed.text = tokens.join(" ");
        trace!(input, ?parsed, "parsed search query");
        parsed
    }

    /// Interprets a whole token as a year.
    fn token_year(&self, token: &str) -> Option<u16> {
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.digits_to_year(token)
    }

    /// Converts a 2-digit or 4-digit string to a year within the accepted range.
    fn digits_to_year(&self, digits: &str) -> Option<u16> {
        let value: u16 = digits.parse().ok()?;
        let year = match digits.len() {
            2 => MIN_YEAR + value,
            4 => value,
            _ => return None,
        };
        (MIN_YEAR..=self.max_year).contains(&year).then_some(year)
    }

    /// Splits a token like `p1jan21` into unit, session and year.
    ///
    /// Unit and month scans keep the last match across all tables, overwriting earlier
    /// ones. Returns true if anything was extracted.
    fn split_combined_token(&self, token: &str, parsed: &mut ParsedQuery) -> bool {
        for (subject, table) in UNIT_ALIASES {
            for (alias, unit) in *table {
                if token.contains(alias) {
                    parsed.subject = Some((*subject).to_string());
                    parsed.unit = Some((*unit).to_string());
                }
            }
        }

        for (alias, month) in MONTH_ALIASES {
            if token.contains(alias) {
                parsed.session = Some((*month).to_string());
            }
        }

        parsed.year = DIGIT_RUN
            .find(token)
            .and_then(|m| self.digits_to_year(m.as_str()));

        parsed.has_filters()
    }
}

/// Parses a free-text query with the default parser.
///
/// ```
/// use pastpapers_query::parse_search_query;
///
/// let parsed = parse_search_query("phy u1 jan 24");
/// assert_eq!(parsed.subject.as_deref(), Some("physics"));
/// assert_eq!(parsed.unit.as_deref(), Some("Unit 1"));
/// assert_eq!(parsed.session.as_deref(), Some("january"));
/// assert_eq!(parsed.year, Some(2024));
/// assert_eq!(parsed.text, "");
/// ```
pub fn parse_search_query(input: &str) -> ParsedQuery {
    QueryParser::default().parse(input)
}

/// Removes and returns the first token for which `extract` yields a value.
fn take_first<T>(
    mut tokens: Vec<String>,
    extract: impl Fn(&str) -> Option<T>,
) -> (Option<T>, Vec<String>) {
    let found = tokens
        .iter()
        .enumerate()
        .find_map(|(index, token)| extract(token).map(|value| (index, value)));

    match found {
        Some((index, value)) => {
            tokens.remove(index);
            (Some(value), tokens)
        }
        None => (None, tokens),
    }
}

/// Looks for any of the subject's unit aliases inside the remaining text.
///
/// The first alias in table order that occurs as a substring wins. Tokens containing the
/// alias, or forming part of a multi-word alias, are removed.
fn unit_fallback(subject: &str, mut tokens: Vec<String>) -> (Option<&'static str>, Vec<String>) {
    let Some(table) = unit_table(subject) else {
        return (None, tokens);
    };

    let joined = tokens.join(" ");
    let Some((alias, unit)) = table.iter().find(|(alias, _)| joined.contains(alias)) else {
        return (None, tokens);
    };

    let alias_words: Vec<&str> = alias.split(' ').collect();
    tokens.retain(|t| !t.contains(alias) && !alias_words.contains(&t.as_str()));
    (Some(*unit), tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::SUBJECT_ALIASES;

    fn parsed(
        subject: Option<&str>,
        unit: Option<&str>,
        year: Option<u16>,
        session: Option<&str>,
        text: &str,
    ) -> ParsedQuery {
        ParsedQuery {
            subject: subject.map(String::from),
            unit: unit.map(String::from),
            year,
            session: session.map(String::from),
            text: text.to_string(),
        }
    }

    #[test]
    fn empty_query() {
        assert_eq!(parse_search_query(""), ParsedQuery::default());
        assert_eq!(parse_search_query("   "), ParsedQuery::default());
    }

    #[test]
    fn full_shorthand_query() {
        assert_eq!(
            parse_search_query("phy u1 jan 24"),
            parsed(Some("physics"), Some("Unit 1"), Some(2024), Some("january"), "")
        );
    }

    #[test]
    fn token_order_does_not_matter() {
        assert_eq!(
            parse_search_query("24 jan u1 phy"),
            parse_search_query("phy u1 jan 24")
        );
    }

    #[test]
    fn every_subject_alias_round_trips() {
        for (alias, subject) in SUBJECT_ALIASES {
            assert_eq!(
                parse_search_query(alias).subject.as_deref(),
                Some(*subject),
                "alias {alias}"
            );
        }
    }

    #[test]
    fn canonical_subject_names_are_accepted() {
        assert_eq!(
            parse_search_query("Economics").subject.as_deref(),
            Some("economics")
        );
    }

    #[test]
    fn two_digit_year() {
        assert_eq!(parse_search_query("24").year, Some(2024));
        assert_eq!(parse_search_query("00").year, Some(2000));
    }

    #[test]
    fn four_digit_year_range() {
        assert_eq!(parse_search_query("2019").year, Some(2019));
        assert_eq!(parse_search_query("1999").year, None);
        assert_eq!(parse_search_query("2026").year, None);
    }

    #[test]
    fn out_of_range_year_stays_in_text() {
        assert_eq!(parse_search_query("1999").text, "1999");
    }

    #[test]
    fn single_digits_are_not_years() {
        let query = parse_search_query("chem 3");
        assert_eq!(query.year, None);
        assert_eq!(query.text, "3");
    }

    #[test]
    fn first_year_wins() {
        let query = parse_search_query("2021 2022");
        assert_eq!(query.year, Some(2021));
        assert_eq!(query.text, "2022");
    }

    #[test]
    fn max_year_is_configurable() {
        let parser = QueryParser::new().with_max_year(2030);
        assert_eq!(parser.parse("2026").year, Some(2026));
        assert_eq!(parser.parse("28").year, Some(2028));
        assert_eq!(parser.parse("31").year, None);
    }

    #[test]
    fn two_digit_years_respect_max_year() {
        assert_eq!(parse_search_query("30").year, None);
    }

    #[test]
    fn unit_requires_subject() {
        let query = parse_search_query("u1 jan");
        assert_eq!(query.unit, None);
        assert_eq!(query.text, "u1");
    }

    #[test]
    fn units_are_subject_scoped() {
        assert_eq!(
            parse_search_query("maths p1").unit.as_deref(),
            Some("Pure 1")
        );
        assert_eq!(
            parse_search_query("physics p1").unit.as_deref(),
            Some("Unit 1")
        );
    }

    #[test]
    fn unit_outside_subject_table_is_text() {
        let query = parse_search_query("acc u5");
        assert_eq!(query.subject.as_deref(), Some("accounting"));
        assert_eq!(query.unit, None);
        assert_eq!(query.text, "u5");
    }

    #[test]
    fn unit_fallback_matches_multi_word_alias() {
        assert_eq!(
            parse_search_query("physics unit 2 forces"),
            parsed(Some("physics"), Some("Unit 2"), None, None, "forces")
        );
    }

    #[test]
    fn unit_fallback_prefers_further_pure() {
        assert_eq!(
            parse_search_query("maths further pure 1"),
            parsed(Some("mathematics"), Some("Further Pure 1"), None, None, "")
        );
    }

    #[test]
    fn unit_fallback_matches_inside_a_token() {
        let query = parse_search_query("bio xu3");
        assert_eq!(query.unit.as_deref(), Some("Unit 3"));
        assert_eq!(query.text, "");
    }

    #[test]
    fn months() {
        assert_eq!(
            parse_search_query("oct").session.as_deref(),
            Some("october")
        );
        assert_eq!(parse_search_query("June").session.as_deref(), Some("june"));
        assert_eq!(parse_search_query("jun").session.as_deref(), Some("june"));
        assert_eq!(parse_search_query("may").session.as_deref(), Some("may"));
    }

    #[test]
    fn combined_token() {
        assert_eq!(
            parse_search_query("p1jan21"),
            parsed(Some("physics"), Some("Unit 1"), Some(2021), Some("january"), "")
        );
    }

    #[test]
    fn combined_token_with_four_digit_year() {
        assert_eq!(
            parse_search_query("m2oct2019"),
            parsed(
                Some("mathematics"),
                Some("Mechanics 2"),
                Some(2019),
                Some("october"),
                ""
            )
        );
    }

    #[test]
    fn combined_token_without_digits() {
        assert_eq!(
            parse_search_query("phyjan"),
            parsed(None, None, None, Some("january"), "")
        );
    }

    #[test]
    fn combined_token_keeps_last_month() {
        assert_eq!(
            parse_search_query("janoct"),
            parsed(None, None, None, Some("october"), "")
        );
    }

    #[test]
    fn combined_token_only_when_nothing_else_matched() {
        let query = parse_search_query("chem p1jan21");
        assert_eq!(query.subject.as_deref(), Some("chemistry"));
        assert_eq!(query.session, None);
        assert_eq!(query.text, "p1jan21");
    }

    #[test]
    fn combined_token_without_matches_is_kept() {
        assert_eq!(parse_search_query("x9").text, "x9");
    }

    #[test]
    fn residual_text_is_collapsed() {
        let query = parse_search_query("  Forces   AND   motion ");
        assert_eq!(query.text, "forces and motion");
        assert!(!query.has_filters());
    }

    #[test]
    fn noise_words_are_left_for_text_matching() {
        assert_eq!(parse_search_query("phy past papers").text, "past papers");
    }

    #[test]
    fn take_first_removes_only_the_match() {
        let tokens = vec!["a".to_string(), "b".to_string(), "b".to_string()];
        let (found, rest) = take_first(tokens, |t| (t == "b").then_some(()));
        assert_eq!(found, Some(()));
        assert_eq!(rest, vec!["a", "b"]);
    }
}
