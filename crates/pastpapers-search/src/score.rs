//! Relevance scoring.
//!
//! A paper's base score is the weighted fraction of query dimensions it matched. The base
//! is then scaled by a recency boost so newer papers rank ahead of older ones:
//!
//! ```text
//! score = base * (1 + boost)
//! boost = clamp(1 - (reference_year - paper_year) * decay, 0, 1)
//! ```

use serde::Serialize;

use crate::{MatchFlags, SearchParams};

/// A dimension a paper is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchDimension {
    /// Residual free text.
    Text,
    /// Subject.
    Subject,
    /// Unit.
    Unit,
    /// Year.
    Year,
    /// Session.
    Session,
}

impl MatchDimension {
    /// Every dimension, in weight order.
    pub const ALL: [Self; 5] = [
        Self::Text,
        Self::Subject,
        Self::Unit,
        Self::Year,
        Self::Session,
    ];

    /// The dimension's contribution to the base score.
    pub fn weight(self) -> f32 {
        match self {
            Self::Text => 0.3,
            Self::Subject => 0.2,
            Self::Unit => 0.2,
            Self::Year => 0.15,
            Self::Session => 0.1,
        }
    }

    /// Whether this dimension matched.
    fn matched(self, flags: &MatchFlags) -> bool {
        match self {
            Self::Text => flags.text,
            Self::Subject => flags.subject,
            Self::Unit => flags.unit,
            Self::Year => flags.year,
            Self::Session => flags.session,
        }
    }
}

/// Sum of all dimension weights.
pub fn total_weight() -> f32 {
    MatchDimension::ALL.iter().map(|d| d.weight()).sum()
}

/// Weighted fraction of matched dimensions, in `[0, 1]`.
pub fn base_score(flags: &MatchFlags) -> f32 {
    let matched: f32 = MatchDimension::ALL
        .iter()
        .filter(|d| d.matched(flags))
        .map(|d| d.weight())
        .sum();
    matched / total_weight()
}

/// Recency boost in `[0, 1]`. Papers from after the reference year get the full boost.
pub fn recency_boost(paper_year: u16, reference_year: u16, decay: f32) -> f32 {
    let age = f32::from(reference_year) - f32::from(paper_year);
    (1.0 - age * decay).clamp(0.0, 1.0)
}

/// Final score for a paper.
pub fn calculate_score(flags: &MatchFlags, paper_year: u16, params: &SearchParams) -> f32 {
    base_score(flags)
        * (1.0 + recency_boost(paper_year, params.reference_year, params.recency_decay))
}
