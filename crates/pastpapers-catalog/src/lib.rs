//! Catalog of subjects, units and past papers.
//!
//! The catalog is static data loaded once at startup from one or more JSON files and never
//! mutated by the search core. Subjects keep the order they appear in the source file; the
//! search engine visits them in that order.

#![warn(missing_docs)]

mod error;
mod parse;
mod validate;

pub use error::CatalogError;
pub use parse::{load_catalogs, parse_catalog_file, parse_catalog_str};
use serde::{Deserialize, Serialize};
pub use validate::{CatalogWarning, MAX_PLAUSIBLE_YEAR, MIN_PLAUSIBLE_YEAR};

/// The full set of subjects available for search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalog {
    /// Subjects in catalog order.
    #[serde(default, deserialize_with = "parse::deserialize_subjects")]
    pub subjects: Vec<Subject>,
}

impl Catalog {
    /// Creates a catalog from a list of subjects.
    pub fn new(subjects: Vec<Subject>) -> Self {
        Self { subjects }
    }

    /// Returns true if the catalog has no subjects.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Returns the subject with the given id.
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Returns the total number of papers across all subjects.
    pub fn paper_count(&self) -> usize {
        self.subjects.iter().map(|s| s.papers.len()).sum()
    }

    /// Appends another catalog's subjects after this one's.
    pub fn merge(&mut self, other: Self) {
        self.subjects.extend(other.subjects);
    }

    /// Checks the catalog for inconsistencies and returns any warnings.
    ///
    /// The search engine tolerates every issue reported here (unresolvable papers are
    /// skipped), so these are never errors.
    pub fn validate(&self) -> Vec<CatalogWarning> {
        validate::validate_catalog(self)
    }
}

/// A subject such as Physics, with its units and papers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Subject identifier. Filled from the map key when the catalog uses an id-keyed map.
    #[serde(default)]
    pub id: String,
    /// Display name (e.g. `Physics`).
    pub name: String,
    /// Units, in catalog order.
    #[serde(default)]
    pub units: Vec<Unit>,
    /// Papers belonging to this subject's units.
    #[serde(default)]
    pub papers: Vec<Paper>,
}

impl Subject {
    /// Resolves a unit by id.
    pub fn unit(&self, unit_id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == unit_id)
    }

    /// Returns the units sorted by display order. Ties keep catalog order.
    pub fn units_in_order(&self) -> Vec<&Unit> {
        let mut units: Vec<&Unit> = self.units.iter().collect();
        units.sort_by_key(|u| u.order);
        units
    }

    /// Returns the papers filed under the given unit.
    pub fn papers_for_unit<'a>(&'a self, unit_id: &'a str) -> impl Iterator<Item = &'a Paper> {
        self.papers.iter().filter(move |p| p.unit_id == unit_id)
    }
}

/// A unit (module) within a subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    /// Unit identifier, referenced by [`Paper::unit_id`].
    pub id: String,
    /// Display name (e.g. `Unit 1`, `Pure 2`).
    pub name: String,
    /// Optional short description of the unit's content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display order within the subject.
    #[serde(default)]
    pub order: u32,
}

/// A single past paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Paper identifier.
    pub id: String,
    /// Owning unit id, resolved within the same subject.
    pub unit_id: String,
    /// Year the paper was sat.
    pub year: u16,
    /// Exam session, usually a month name (`January`, `June`, ...).
    pub session: String,
    /// Display title.
    pub title: String,
    /// Link to the question paper.
    #[serde(default)]
    pub question_paper_url: String,
    /// Link to the marking scheme.
    #[serde(default)]
    pub marking_scheme_url: String,
}
