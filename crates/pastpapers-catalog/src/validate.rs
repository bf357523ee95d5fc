//! Catalog validation.
//!
//! Reports non-fatal problems in a loaded catalog.

use std::{collections::HashSet, fmt};

use crate::{Catalog, Subject};

/// Earliest paper year considered plausible.
pub const MIN_PLAUSIBLE_YEAR: u16 = 2000;

/// Latest paper year considered plausible.
pub const MAX_PLAUSIBLE_YEAR: u16 = 2100;

/// A non-fatal warning about the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogWarning {
    /// The catalog has no subjects.
    NoSubjects,
    /// Two subjects share an id.
    DuplicateSubjectId {
        /// The repeated id.
        subject: String,
    },
    /// A subject has no papers.
    SubjectWithoutPapers {
        /// Subject id.
        subject: String,
    },
    /// A paper references a unit that does not exist in its subject.
    UnresolvedUnit {
        /// Subject id.
        subject: String,
        /// Paper id.
        paper: String,
        /// The unit id that could not be resolved.
        unit_id: String,
    },
    /// Two papers in one subject share an id.
    DuplicatePaperId {
        /// Subject id.
        subject: String,
        /// The repeated paper id.
        paper: String,
    },
    /// A paper's year is outside the plausible range.
    ImplausibleYear {
        /// Subject id.
        subject: String,
        /// Paper id.
        paper: String,
        /// The offending year.
        year: u16,
    },
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSubjects => write!(f, "catalog contains no subjects"),
            Self::DuplicateSubjectId { subject } => {
                write!(f, "subject id '{subject}' is used more than once")
            }
            Self::SubjectWithoutPapers { subject } => {
                write!(f, "subject '{subject}' has no papers")
            }
            Self::UnresolvedUnit {
                subject,
                paper,
                unit_id,
            } => write!(
                f,
                "paper '{paper}' in subject '{subject}' references unknown unit '{unit_id}'"
            ),
            Self::DuplicatePaperId { subject, paper } => {
                write!(f, "paper id '{paper}' appears more than once in subject '{subject}'")
            }
            Self::ImplausibleYear {
                subject,
                paper,
                year,
            } => write!(
                f,
                "paper '{paper}' in subject '{subject}' has year {year}, outside \
                 {MIN_PLAUSIBLE_YEAR}-{MAX_PLAUSIBLE_YEAR}"
            ),
        }
    }
}

/// Validates the catalog and returns any warnings, in catalog order.
pub fn validate_catalog(catalog: &Catalog) -> Vec<CatalogWarning> {
    if catalog.subjects.is_empty() {
        return vec![CatalogWarning::NoSubjects];
    }

    let mut warnings = Vec::new();
    let mut subject_ids = HashSet::new();

    for subject in &catalog.subjects {
        if !subject_ids.insert(subject.id.as_str()) {
            warnings.push(CatalogWarning::DuplicateSubjectId {
                subject: subject.id.clone(),
            });
        }
        warnings.extend(validate_subject(subject));
    }

    warnings
}

/// Validates a single subject's papers.
fn validate_subject(subject: &Subject) -> Vec<CatalogWarning> {
    if subject.papers.is_empty() {
        return vec![CatalogWarning::SubjectWithoutPapers {
            subject: subject.id.clone(),
        }];
    }

    let mut warnings = Vec::new();
    let mut paper_ids = HashSet::new();

    for paper in &subject.papers {
        if !paper_ids.insert(paper.id.as_str()) {
            warnings.push(CatalogWarning::DuplicatePaperId {
                subject: subject.id.clone(),
                paper: paper.id.clone(),
            });
        }

        if subject.unit(&paper.unit_id).is_none() {
            warnings.push(CatalogWarning::UnresolvedUnit {
                subject: subject.id.clone(),
                paper: paper.id.clone(),
                unit_id: paper.unit_id.clone(),
            });
        }

        if !(MIN_PLAUSIBLE_YEAR..=MAX_PLAUSIBLE_YEAR).contains(&paper.year) {
            warnings.push(CatalogWarning::ImplausibleYear {
                subject: subject.id.clone(),
                paper: paper.id.clone(),
                year: paper.year,
            });
        }
    }

    warnings
}
