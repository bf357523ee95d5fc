//! Search over a past-paper catalog.
//!
//! A search takes free text plus optional explicit filters, resolves them into a single set
//! of filters, and scans the catalog:
//!
//! 1. **Gate**: drop papers whose subject, unit, year or session does not match
//! 2. **Score**: weight the matched dimensions and apply a recency boost
//! 3. **Rank**: sort by score (stable, so ties keep catalog order) and truncate
//! 4. **Suggest**: if nothing matched, propose subjects, units, years or sessions to try
//!
//! # Example
//!
//! ```
//! use pastpapers_catalog::{Catalog, Paper, Subject, Unit};
//! use pastpapers_search::{SearchQuery, search_papers};
//!
//! let catalog = Catalog::new(vec![Subject {
//!     id: "phy".into(),
//!     name: "Physics".into(),
//!     units: vec![Unit { id: "u1".into(), name: "Unit 1".into(), description: None, order: 1 }],
//!     papers: vec![Paper {
//!         id: "phy-u1-jan24".into(),
//!         unit_id: "u1".into(),
//!         year: 2024,
//!         session: "January".into(),
//!         title: "Physics Unit 1".into(),
//!         ..Paper::default()
//!     }],
//! }]);
//!
//! let outcome = search_papers(&SearchQuery::new("phy jan 24"), &catalog);
//! assert_eq!(outcome.results.len(), 1);
//! assert_eq!(outcome.results[0].paper.id, "phy-u1-jan24");
//! ```

#![warn(missing_docs)]

mod engine;
mod filter;
mod params;
mod score;
mod suggest;
mod types;

pub use engine::{Searcher, search_papers};
pub use filter::Filters;
pub use params::{
    DEFAULT_RECENCY_DECAY, DEFAULT_RESULT_LIMIT, DEFAULT_SUGGESTION_LIMIT, SearchParams,
};
pub use score::{MatchDimension, base_score, calculate_score, recency_boost};
pub use types::{
    MatchFlags, SearchOutcome, SearchQuery, SearchResult, SearchSuggestion, SuggestionKind,
};
