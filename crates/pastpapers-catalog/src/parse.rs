//! Catalog file parsing.
//!
//! Catalogs are JSON documents with camelCase keys. The `subjects` member may be either a
//! list or an object keyed by subject id; object key order is preserved and an empty `id`
//! is filled in from the key.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::{
    Deserializer,
    de::{MapAccess, SeqAccess, Visitor},
};
use tracing::debug;

use crate::{Catalog, CatalogError, Subject};

/// Parses a catalog file from disk.
pub fn parse_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog_str(&contents, path)?;
    debug!(
        path = %path.display(),
        subjects = catalog.subjects.len(),
        papers = catalog.paper_count(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Parses a catalog from a JSON string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_catalog_str(contents: &str, path: &Path) -> Result<Catalog, CatalogError> {
    serde_json::from_str(contents).map_err(|source| CatalogError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads and concatenates several catalog files, in order.
pub fn load_catalogs(paths: &[PathBuf]) -> Result<Catalog, CatalogError> {
    if paths.is_empty() {
        return Err(CatalogError::NoCatalog);
    }

    let mut catalog = Catalog::default();
    for path in paths {
        catalog.merge(parse_catalog_file(path)?);
    }
    Ok(catalog)
}

/// Deserializes `subjects` from either a JSON array or an id-keyed JSON object.
pub fn deserialize_subjects<'de, D>(deserializer: D) -> Result<Vec<Subject>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(SubjectsVisitor)
}

/// Visitor accepting both subject layouts.
struct SubjectsVisitor;

impl<'de> Visitor<'de> for SubjectsVisitor {
    type Value = Vec<Subject>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of subjects or a map from subject id to subject")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut subjects = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(subject) = seq.next_element::<Subject>()? {
            subjects.push(subject);
        }
        Ok(subjects)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut subjects = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, mut subject)) = map.next_entry::<String, Subject>()? {
            if subject.id.is_empty() {
                subject.id = key;
            }
            subjects.push(subject);
        }
        Ok(subjects)
    }
}
