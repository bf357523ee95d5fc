//! Suggestions.
//!
//! When a search finds nothing, a second pass over the catalog proposes ways to get results:
//! pick a subject, pick a unit, add a year, or try a year or session that does exist. Scope
//! notes for multi-value filters are offered whether or not anything matched.

use std::{
    cmp::Reverse,
    collections::{BTreeSet, HashSet},
};

use pastpapers_catalog::{Catalog, Subject};
use pastpapers_query::normalize_search_term;

use crate::{SearchSuggestion, SuggestionKind, filter::Filters};

/// Score for a subject suggestion.
const SUBJECT_SCORE: f32 = 0.8;
/// Score for a unit suggestion.
const UNIT_SCORE: f32 = 0.7;
/// Score for the add-a-year refinement.
const REFINEMENT_SCORE: f32 = 0.6;
/// Score for an alternative year.
const YEAR_SCORE: f32 = 0.5;
/// Score for an alternative session.
const SESSION_SCORE: f32 = 0.4;
/// Score for a multi-value scope note.
const INFO_SCORE: f32 = 0.3;

/// Alternative years offered per subject.
const MAX_ALTERNATIVE_YEARS: usize = 3;

/// Builds suggestions for a search that returned no results.
pub fn suggest_alternatives(catalog: &Catalog, filters: &Filters) -> Vec<SearchSuggestion> {
    let mut suggestions = Vec::new();

    for subject in &catalog.subjects {
        match &filters.subject_text {
            None => suggestions.push(SearchSuggestion::new(
                SuggestionKind::Subject,
                format!("Search {} papers", subject.name),
                subject.name.clone(),
                SUBJECT_SCORE,
            )),
            Some(wanted)
                if filters.units.is_empty()
                    && subject.name.to_lowercase().contains(&wanted.to_lowercase()) =>
            {
                for unit in subject.units_in_order() {
                    suggestions.push(SearchSuggestion::new(
                        SuggestionKind::Unit,
                        format!("{} {}", subject.name, unit.name),
                        unit.name.clone(),
                        UNIT_SCORE,
                    ));
                }
            }
            Some(_) => {}
        }

        if filters.year.is_none() {
            suggestions.push(SearchSuggestion::new(
                SuggestionKind::Refinement,
                "Add a year to narrow your search",
                "year",
                REFINEMENT_SCORE,
            ));
        }

        if filters.subject.is_some() && filters.subject_matches(subject) {
            suggestions.extend(alternative_years(subject, filters));
            suggestions.extend(alternative_sessions(subject, filters));
        }
    }

    suggestions
}

/// Years with papers near the requested year, for a subject whose papers all missed.
fn alternative_years(subject: &Subject, filters: &Filters) -> Vec<SearchSuggestion> {
    let Some(wanted) = filters.year else {
        return Vec::new();
    };

    let years: BTreeSet<u16> = subject
        .papers
        .iter()
        .filter(|paper| paper.year != wanted)
        .filter(|paper| {
            subject
                .unit(&paper.unit_id)
                .is_some_and(|unit| filters.unit_matches(unit))
        })
        .filter(|paper| filters.session_matches(paper))
        .map(|paper| paper.year)
        .collect();

    let mut years: Vec<u16> = years.into_iter().collect();
    years.sort_by_key(|year| (year.abs_diff(wanted), Reverse(*year)));
    years
        .into_iter()
        .take(MAX_ALTERNATIVE_YEARS)
        .map(|year| {
            SearchSuggestion::new(
                SuggestionKind::Year,
                format!("{} papers from {year}", subject.name),
                year.to_string(),
                YEAR_SCORE,
            )
        })
        .collect()
}

/// Sessions that have papers, for a subject whose papers missed the session filter.
fn alternative_sessions(subject: &Subject, filters: &Filters) -> Vec<SearchSuggestion> {
    if filters.sessions.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    subject
        .papers
        .iter()
        .filter(|paper| !filters.session_matches(paper))
        .filter(|paper| filters.year_matches(paper))
        .filter(|paper| {
            subject
                .unit(&paper.unit_id)
                .is_some_and(|unit| filters.unit_matches(unit))
        })
        .filter(|paper| seen.insert(normalize_search_term(&paper.session)))
        .map(|paper| {
            SearchSuggestion::new(
                SuggestionKind::Session,
                format!("{} {} papers", subject.name, paper.session),
                paper.session.clone(),
                SESSION_SCORE,
            )
        })
        .collect()
}

/// Describes a multi-unit or multi-session scope, if one is in effect.
pub fn scope_note(filters: &Filters) -> Option<SearchSuggestion> {
    let mut parts = Vec::new();
    if filters.unit_names.len() > 1 {
        parts.push(format!("units {}", filters.unit_names.join(", ")));
    }
    if filters.session_names.len() > 1 {
        parts.push(format!("sessions {}", filters.session_names.join(", ")));
    }
    if parts.is_empty() {
        return None;
    }

    let value = filters
        .unit_names
        .iter()
        .chain(&filters.session_names)
        .cloned()
        .collect::<Vec<_>>()
        .join(",");
    Some(SearchSuggestion::new(
        SuggestionKind::Info,
        format!("Searching across {}", parts.join(" and ")),
        value,
        INFO_SCORE,
    ))
}

/// Sorts by score, drops repeated texts, and truncates.
///
/// The sort is stable, so equally scored suggestions keep the order they were generated in.
pub fn rank(mut suggestions: Vec<SearchSuggestion>, limit: usize) -> Vec<SearchSuggestion> {
    suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
    let mut seen = HashSet::new();
    suggestions.retain(|s| seen.insert(s.text.clone()));
    suggestions.truncate(limit);
    suggestions
}

#[cfg(test)]
mod tests {
    use pastpapers_catalog::{Paper, Unit};
    use pastpapers_query::ParsedQuery;

    use super::*;
    use crate::SearchQuery;

    fn catalog() -> Catalog {
        let units = vec![
            Unit {
                id: "u2".into(),
                name: "Unit 2".into(),
                description: None,
                order: 2,
            },
            Unit {
                id: "u1".into(),
                name: "Unit 1".into(),
                description: None,
                order: 1,
            },
        ];
        let papers = [2019, 2021, 2023, 2024]
            .into_iter()
            .map(|year| Paper {
                id: format!("phy-{year}"),
                unit_id: "u1".into(),
                year,
                session: "June".into(),
                title: format!("Physics Unit 1 {year}"),
                ..Paper::default()
            })
            .collect();
        Catalog::new(vec![
            Subject {
                id: "phy".into(),
                name: "Physics".into(),
                units,
                papers,
            },
            Subject {
                id: "chem".into(),
                name: "Chemistry".into(),
                ..Subject::default()
            },
        ])
    }

    fn filters(query: &SearchQuery) -> Filters {
        Filters::merge(query, &ParsedQuery::default())
    }

    #[test]
    fn no_subject_suggests_every_subject() {
        let suggestions = suggest_alternatives(&catalog(), &filters(&SearchQuery::default()));
        let subjects: Vec<&str> = suggestions
            .iter()
            .filter(|s| s.kind == SuggestionKind::Subject)
            .map(|s| s.value.as_str())
            .collect();
        assert_eq!(subjects, vec!["Physics", "Chemistry"]);
    }

    #[test]
    fn subject_substring_suggests_units_in_order() {
        let query = SearchQuery::default().with_subject("phy").with_year(2010);
        let suggestions = suggest_alternatives(&catalog(), &filters(&query));
        let units: Vec<&str> = suggestions
            .iter()
            .filter(|s| s.kind == SuggestionKind::Unit)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(units, vec!["Physics Unit 1", "Physics Unit 2"]);
    }

    #[test]
    fn nearest_years_first() {
        let query = SearchQuery::default()
            .with_subject("Physics")
            .with_year(2022);
        let suggestions = suggest_alternatives(&catalog(), &filters(&query));
        let years: Vec<&str> = suggestions
            .iter()
            .filter(|s| s.kind == SuggestionKind::Year)
            .map(|s| s.value.as_str())
            .collect();
        assert_eq!(years, vec!["2023", "2021", "2024"]);
    }

    #[test]
    fn sessions_with_papers() {
        let query = SearchQuery::default()
            .with_subject("Physics")
            .with_session("January");
        let suggestions = suggest_alternatives(&catalog(), &filters(&query));
        let sessions: Vec<&SearchSuggestion> = suggestions
            .iter()
            .filter(|s| s.kind == SuggestionKind::Session)
            .collect();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].value, "June");
    }

    #[test]
    fn scope_note_lists_units_and_sessions() {
        let query = SearchQuery::default()
            .with_unit("Unit 1")
            .with_unit("Unit 2");
        let note = scope_note(&filters(&query)).unwrap();
        assert_eq!(note.kind, SuggestionKind::Info);
        assert_eq!(note.text, "Searching across units Unit 1, Unit 2");

        assert!(scope_note(&filters(&SearchQuery::default().with_unit("Unit 1"))).is_none());
    }

    #[test]
    fn rank_dedups_and_truncates() {
        let suggestions = vec![
            SearchSuggestion::new(SuggestionKind::Info, "info", "", 0.3),
            SearchSuggestion::new(SuggestionKind::Subject, "same", "a", 0.8),
            SearchSuggestion::new(SuggestionKind::Subject, "same", "b", 0.8),
            SearchSuggestion::new(SuggestionKind::Unit, "unit", "u", 0.7),
        ];
        let ranked = rank(suggestions, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].value, "a");
        assert_eq!(ranked[1].text, "unit");
    }
}
