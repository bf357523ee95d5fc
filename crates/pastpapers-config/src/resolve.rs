//! Path resolution for catalog paths.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a catalog path.
///
/// Handles three cases:
/// - Tilde paths (`~/papers.json`) - expanded to home directory
/// - Relative paths (`papers.json`, `../shared/papers.json`) - joined to `config_dir`
/// - Absolute paths - returned as-is
///
/// The path is not required to exist; [`crate::Config::validate`] reports missing files.
pub fn resolve_catalog_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    Ok(if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(expanded)
    })
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}
