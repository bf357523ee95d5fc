//! Request and response types for search.

use pastpapers_catalog::{Paper, Subject, Unit};
use pastpapers_query::ParsedQuery;
use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};

/// A search request: free text plus optional explicit filters.
///
/// Explicit filters take precedence over anything the parser extracts from `text`.
/// Unit and session filters are lists; a paper passes if it matches any entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchQuery {
    /// Free-text query, parsed for embedded filters.
    pub text: String,
    /// Explicit subject filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Explicit unit filters.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub units: Vec<String>,
    /// Explicit year filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Explicit session filters.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sessions: Vec<String>,
}

impl SearchQuery {
    /// Creates a query from free text with no explicit filters.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Sets the explicit subject filter.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Adds an explicit unit filter.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.units.push(unit.into());
        self
    }

    /// Sets the explicit year filter.
    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    /// Adds an explicit session filter.
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.sessions.push(session.into());
        self
    }
}

/// Which query dimensions matched a paper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchFlags {
    /// Residual text matched (or was empty).
    pub text: bool,
    /// Subject matched (or was unset).
    pub subject: bool,
    /// A unit filter matched (or none was set).
    pub unit: bool,
    /// Year matched (or was unset).
    pub year: bool,
    /// A session filter matched (or none was set).
    pub session: bool,
}

impl MatchFlags {
    /// Returns true if at least one dimension matched.
    pub fn any(&self) -> bool {
        self.text || self.subject || self.unit || self.year || self.session
    }
}

/// A paper that passed every filter, with its score.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a> {
    /// The matched paper.
    pub paper: &'a Paper,
    /// The paper's resolved unit.
    pub unit: &'a Unit,
    /// The owning subject. Serialized as its id and name only.
    #[serde(serialize_with = "serialize_subject_ref")]
    pub subject: &'a Subject,
    /// Per-dimension match flags.
    pub matches: MatchFlags,
    /// Relevance score, higher is better.
    pub score: f32,
}

/// Serializes a subject reference without its units and papers.
fn serialize_subject_ref<S>(subject: &&Subject, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut state = serializer.serialize_struct("Subject", 2)?;
    state.serialize_field("id", &subject.id)?;
    state.serialize_field("name", &subject.name)?;
    state.end()
}

/// The kind of a search suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Search within a subject.
    Subject,
    /// Search within a unit of the requested subject.
    Unit,
    /// Add a filter to narrow the search.
    Refinement,
    /// Try a different year.
    Year,
    /// Try a different session.
    Session,
    /// Describes the scope of a multi-value filter.
    Info,
}

/// A hint offered alongside (or instead of) results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSuggestion {
    /// Suggestion kind.
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// Display text; suggestions are de-duplicated on this.
    pub text: String,
    /// The filter value a client should apply when the suggestion is chosen.
    pub value: String,
    /// Ranking score, higher is better.
    pub score: f32,
}

impl SearchSuggestion {
    /// Creates a suggestion.
    pub fn new(
        kind: SuggestionKind,
        text: impl Into<String>,
        value: impl Into<String>,
        score: f32,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            value: value.into(),
            score,
        }
    }
}

/// The outcome of a search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome<'a> {
    /// Filters the parser extracted from the free text.
    pub parsed: ParsedQuery,
    /// Results, best first.
    pub results: Vec<SearchResult<'a>>,
    /// Suggestions, best first.
    pub suggestions: Vec<SearchSuggestion>,
}

impl SearchOutcome<'_> {
    /// Returns true if no paper matched.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
