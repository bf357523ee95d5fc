//! Effective filters and per-paper matching.
//!
//! Explicit filters from the request override whatever the parser extracted from the
//! free text. All comparisons go through [`normalize_search_term`], so `Phy` and
//! `physics` compare equal, as do `Jan` and `January`.

use pastpapers_catalog::{Paper, Subject, Unit};
use pastpapers_query::{ParsedQuery, normalize_search_term, sessions_equivalent};

use crate::{MatchFlags, SearchQuery};

/// The filters a search actually applies, normalized once up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Subject as given, before normalization. Used for suggestions.
    pub subject_text: Option<String>,
    /// Normalized subject filter.
    pub subject: Option<String>,
    /// Units as given.
    pub unit_names: Vec<String>,
    /// Normalized unit filters.
    pub units: Vec<String>,
    /// Year filter.
    pub year: Option<u16>,
    /// Sessions as given.
    pub session_names: Vec<String>,
    /// Normalized session filters.
    pub sessions: Vec<String>,
    /// Normalized residual text. Empty means no text constraint.
    pub text: String,
}

impl Filters {
    /// Combines explicit request filters with the parser's output.
    pub fn merge(query: &SearchQuery, parsed: &ParsedQuery) -> Self {
        let subject_text = query.subject.clone().or_else(|| parsed.subject.clone());
        let unit_names = if query.units.is_empty() {
            parsed.unit.iter().cloned().collect()
        } else {
            query.units.clone()
        };
        let session_names: Vec<String> = if query.sessions.is_empty() {
            parsed.session.iter().cloned().collect()
        } else {
            query.sessions.clone()
        };

        Self {
            subject: subject_text.as_deref().map(normalize_search_term),
            units: unit_names.iter().map(|u| normalize_search_term(u)).collect(),
            subject_text,
            unit_names,
            year: query.year.or(parsed.year),
            sessions: session_names
                .iter()
                .map(|s| normalize_search_term(s))
                .collect(),
            session_names,
            text: normalize_search_term(&parsed.text),
        }
    }

    /// Returns true if several units are requested at once.
    pub fn is_multi_unit(&self) -> bool {
        self.units.len() > 1
    }

    /// Subject gate: unset, or equal to the subject's name after normalization.
    pub fn subject_matches(&self, subject: &Subject) -> bool {
        self.subject
            .as_ref()
            .is_none_or(|wanted| *wanted == normalize_search_term(&subject.name))
    }

    /// Unit gate: no unit filters, or any of them equals the unit's name.
    pub fn unit_matches(&self, unit: &Unit) -> bool {
        if self.units.is_empty() {
            return true;
        }
        let name = normalize_search_term(&unit.name);
        self.units.iter().any(|u| *u == name)
    }

    /// Year gate: unset, or equal to the paper's year.
    pub fn year_matches(&self, paper: &Paper) -> bool {
        self.year.is_none_or(|year| year == paper.year)
    }

    /// Session gate: no session filters, or any of them is equivalent to the paper's session.
    pub fn session_matches(&self, paper: &Paper) -> bool {
        if self.sessions.is_empty() {
            return true;
        }
        let session = normalize_search_term(&paper.session);
        self.sessions
            .iter()
            .any(|wanted| sessions_equivalent(wanted, &session))
    }

    /// Text check: empty, or a substring of any of the paper's searchable fields.
    pub fn text_matches(&self, subject: &Subject, unit: &Unit, paper: &Paper) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let year = paper.year.to_string();
        [
            paper.title.as_str(),
            unit.name.as_str(),
            unit.description.as_deref().unwrap_or_default(),
            subject.name.as_str(),
            paper.session.as_str(),
            year.as_str(),
        ]
        .iter()
        .any(|field| normalize_search_term(field).contains(&self.text))
    }

    /// Evaluates every dimension for a paper whose subject already passed the subject gate.
    pub fn match_flags(&self, subject: &Subject, unit: &Unit, paper: &Paper) -> MatchFlags {
        MatchFlags {
            text: self.text_matches(subject, unit, paper),
            subject: self.subject_matches(subject),
            unit: self.unit_matches(unit),
            year: self.year_matches(paper),
            session: self.session_matches(paper),
        }
    }

    /// Returns true if the paper passes every hard gate.
    pub fn accepts(&self, flags: &MatchFlags) -> bool {
        flags.subject && flags.unit && flags.year && flags.session
    }
}

/// Key identifying the same paper filed under several units.
pub fn duplicate_key(paper: &Paper) -> (String, u16, String) {
    (
        normalize_search_term(&paper.session),
        paper.year,
        normalize_search_term(&paper.title),
    )
}
