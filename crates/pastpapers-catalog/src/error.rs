//! Error types for catalog loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read a catalog file.
    #[error("failed to read catalog file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse catalog JSON.
    #[error("failed to parse catalog file {path}: {source}")]
    ParseJson {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// No catalog files were given.
    #[error("no catalog configured")]
    NoCatalog,
}
