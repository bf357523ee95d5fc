//! The search engine.

use std::collections::HashSet;

use pastpapers_catalog::Catalog;
use pastpapers_query::QueryParser;
use tracing::{debug, trace};

use crate::{
    SearchOutcome, SearchParams, SearchQuery, SearchResult,
    filter::{Filters, duplicate_key},
    score::calculate_score,
    suggest,
};

/// Searches a borrowed catalog.
///
/// A search is a single linear scan: the catalog is small, so there is no index. Results
/// borrow from the catalog.
#[derive(Debug, Clone)]
pub struct Searcher<'c> {
    /// The catalog being searched.
    catalog: &'c Catalog,
    /// Limits and scoring parameters.
    params: SearchParams,
    /// Free-text parser.
    parser: QueryParser,
}

impl<'c> Searcher<'c> {
    /// Creates a searcher with default parameters.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_params(catalog, SearchParams::default())
    }

    /// Creates a searcher with explicit parameters.
    pub fn with_params(catalog: &'c Catalog, params: SearchParams) -> Self {
        let parser = QueryParser::new().with_max_year(params.max_year);
        Self {
            catalog,
            params,
            parser,
        }
    }

    /// Returns the search parameters.
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Runs a search.
    pub fn search(&self, query: &SearchQuery) -> SearchOutcome<'c> {
        let parsed = self.parser.parse(&query.text);
        let filters = Filters::merge(query, &parsed);
        debug!(?filters, "searching catalog");

        let mut results = self.collect(&filters);
        let matched = results.len();
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(self.params.result_limit);

        let mut suggestions = if matched == 0 {
            suggest::suggest_alternatives(self.catalog, &filters)
        } else {
            Vec::new()
        };
        suggestions.extend(suggest::scope_note(&filters));
        let suggestions = suggest::rank(suggestions, self.params.suggestion_limit);

        debug!(
            matched,
            returned = results.len(),
            suggestions = suggestions.len(),
            "search complete"
        );
        SearchOutcome {
            parsed,
            results,
            suggestions,
        }
    }

    /// Scans the catalog and scores every paper that passes the filters.
    fn collect(&self, filters: &Filters) -> Vec<SearchResult<'c>> {
        let catalog = self.catalog;
        let mut results = Vec::new();
        let mut seen = HashSet::new();

        for subject in &catalog.subjects {
            if !filters.subject_matches(subject) {
                continue;
            }

            for paper in &subject.papers {
                let Some(unit) = subject.unit(&paper.unit_id) else {
                    trace!(paper = %paper.id, unit = %paper.unit_id, "skipping paper with unknown unit");
                    continue;
                };

                let matches = filters.match_flags(subject, unit, paper);
                if !filters.accepts(&matches) {
                    continue;
                }

                if filters.is_multi_unit() && !seen.insert(duplicate_key(paper)) {
                    trace!(paper = %paper.id, "skipping duplicate paper");
                    continue;
                }

                results.push(SearchResult {
                    paper,
                    unit,
                    subject,
                    matches,
                    score: calculate_score(&matches, paper.year, &self.params),
                });
            }
        }

        results
    }
}

/// Searches a catalog with default parameters.
pub fn search_papers<'c>(query: &SearchQuery, catalog: &'c Catalog) -> SearchOutcome<'c> {
    Searcher::new(catalog).search(query)
}
