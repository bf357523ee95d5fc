//! Parameter types for search execution.

use chrono::{Datelike, Local};
use pastpapers_query::DEFAULT_MAX_YEAR;

/// Default maximum number of results returned.
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Default maximum number of suggestions returned.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Default per-year decay of the recency boost.
pub const DEFAULT_RECENCY_DECAY: f32 = 0.1;

/// Parameters controlling filtering, scoring and truncation.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    /// Maximum results after sorting. Default: 20.
    pub result_limit: usize,
    /// Maximum suggestions after ranking and de-duplication. Default: 5.
    pub suggestion_limit: usize,
    /// Boost lost per year of paper age. A paper from the reference year gets the full
    /// boost of 1.0; with the default decay a ten-year-old paper gets none.
    pub recency_decay: f32,
    /// The year papers are aged against. Defaults to the current calendar year.
    pub reference_year: u16,
    /// Latest year the query parser recognises.
    pub max_year: u16,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            recency_decay: DEFAULT_RECENCY_DECAY,
            reference_year: current_year(),
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

impl SearchParams {
    /// Sets the maximum number of results.
    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    /// Sets the maximum number of suggestions.
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    /// Sets the per-year recency decay.
    pub fn with_recency_decay(mut self, decay: f32) -> Self {
        self.recency_decay = decay;
        self
    }

    /// Sets the year papers are aged against.
    pub fn with_reference_year(mut self, year: u16) -> Self {
        self.reference_year = year;
        self
    }

    /// Sets the latest year recognised in free text.
    pub fn with_max_year(mut self, year: u16) -> Self {
        self.max_year = year;
        self
    }
}

/// Returns the current local calendar year.
fn current_year() -> u16 {
    u16::try_from(Local::now().year()).unwrap_or(DEFAULT_MAX_YEAR)
}
