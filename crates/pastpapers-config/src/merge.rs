//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence
//! rules and resolving catalog paths.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    CatalogSettings, Config, ConfigError, QuerySettings, SearchSettings,
    parse::{RawConfig, RawQuerySettings, RawSearchSettings},
    resolve::resolve_catalog_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins
/// - Catalog paths: the first file that sets `catalog.path` wins completely, and its paths
///   are resolved relative to that file's directory
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let catalog = merge_catalog(configs)?;
    let search = merge_search_settings(configs);
    let query = merge_query_settings(configs);
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(PathBuf::from);

    Ok(Config {
        catalog,
        search,
        query,
        config_root,
    })
}

/// Picks the highest-precedence catalog definition and resolves its paths.
fn merge_catalog(configs: &[ParsedConfig]) -> Result<CatalogSettings, ConfigError> {
    let defining = configs.iter().find_map(|parsed| {
        parsed
            .config
            .catalog
            .as_ref()
            .and_then(|c| c.path.as_ref())
            .map(|paths| (parsed, paths))
    });

    let Some((parsed, paths)) = defining else {
        return Ok(CatalogSettings::default());
    };

    let config_dir = parsed.path.parent().unwrap_or_else(|| Path::new("."));
    let paths = paths
        .iter()
        .map(|p| resolve_catalog_path(p, config_dir))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(source = %parsed.path.display(), ?paths, "resolved catalog paths");

    Ok(CatalogSettings {
        paths,
        source: Some(parsed.path.clone()),
    })
}

/// Merges search settings.
fn merge_search_settings(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref search) = parsed.config.search {
            apply_raw_search(&mut result, search);
        }
    }

    result
}

/// Applies raw search settings to result.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.result_limit {
        result.result_limit = v;
    }
    if let Some(v) = raw.suggestion_limit {
        result.suggestion_limit = v;
    }
    if let Some(v) = raw.recency_decay {
        result.recency_decay = v;
    }
    if let Some(v) = raw.reference_year {
        result.reference_year = Some(v);
    }
}

/// Merges query parser settings.
fn merge_query_settings(configs: &[ParsedConfig]) -> QuerySettings {
    let mut result = QuerySettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref query) = parsed.config.query {
            apply_raw_query(&mut result, query);
        }
    }

    result
}

/// Applies raw query settings to result.
fn apply_raw_query(result: &mut QuerySettings, raw: &RawQuerySettings) {
    if let Some(v) = raw.max_year {
        result.max_year = v;
    }
}
