//! Configuration system for pastpapers.
//!
//! pastpapers uses TOML configuration files named `.pastpapers.toml`. Configuration is
//! resolved by walking up the directory tree from the current working directory, collecting
//! any `.pastpapers.toml` files found, then loading `~/.pastpapers.toml` as the global config
//! with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawCatalogSettings, RawConfig, RawQuerySettings, RawSearchSettings, parse_config_file,
    parse_config_str,
};
use pastpapers_query::DEFAULT_MAX_YEAR;
use pastpapers_search::{DEFAULT_RESULT_LIMIT, DEFAULT_SUGGESTION_LIMIT};
pub use resolve::resolve_catalog_path;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default recency decay per year, kept as `f64` so it round-trips through TOML exactly.
const DEFAULT_RECENCY_DECAY: f64 = 0.1;

/// Top-level merged configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Catalog location.
    pub catalog: CatalogSettings,
    /// Search settings.
    pub search: SearchSettings,
    /// Query parser settings.
    pub query: QuerySettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.pastpapers.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A missing catalog definition
    /// - Catalog paths that don't exist or aren't files
    /// - Out-of-range search and query settings
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.pastpapers.toml` file, with catalog paths
    /// shown fully resolved.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            catalog: SerializableCatalogSettings {
                path: self
                    .catalog
                    .paths
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect(),
            },
            search: self.search.clone(),
            query: self.query.clone(),
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Where the catalog is loaded from.
#[derive(Debug, Clone, Default)]
pub struct CatalogSettings {
    /// Resolved catalog file paths, loaded and concatenated in order.
    pub paths: Vec<PathBuf>,
    /// The config file that defined the paths.
    pub source: Option<PathBuf>,
}

/// Search settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum results per search.
    pub result_limit: usize,
    /// Maximum suggestions per search.
    pub suggestion_limit: usize,
    /// Recency boost lost per year of paper age.
    pub recency_decay: f64,
    /// Year papers are aged against. `None` means the current year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_year: Option<u16>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            recency_decay: DEFAULT_RECENCY_DECAY,
            reference_year: None,
        }
    }
}

/// Query parser settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct QuerySettings {
    /// Latest four-digit year recognised in free text.
    pub max_year: u16,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Catalog settings.
    catalog: SerializableCatalogSettings,
    /// Search settings.
    search: SearchSettings,
    /// Query parser settings.
    query: QuerySettings,
}

/// Catalog settings as written in a config file.
#[derive(Serialize)]
struct SerializableCatalogSettings {
    /// Resolved catalog paths.
    path: Vec<String>,
}
