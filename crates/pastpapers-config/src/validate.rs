//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, path::PathBuf};

use crate::Config;

/// Earliest year the query parser accepts; `max_year` below this is meaningless.
const MIN_QUERY_YEAR: u16 = 2000;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// No catalog path is configured.
    NoCatalogConfigured,
    /// A catalog path does not exist.
    CatalogPathMissing {
        /// Path that doesn't exist.
        path: PathBuf,
    },
    /// A catalog path exists but is not a file.
    CatalogPathNotFile {
        /// Path that is not a file.
        path: PathBuf,
    },
    /// The recency decay is negative or not a number.
    InvalidRecencyDecay {
        /// The configured value.
        value: f64,
    },
    /// A limit is zero, so searches can never return anything for it.
    ZeroLimit {
        /// Name of the setting.
        setting: &'static str,
    },
    /// `query.max_year` is before the earliest recognised year.
    MaxYearTooEarly {
        /// The configured value.
        value: u16,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCatalogConfigured => write!(f, "no catalog path is configured"),
            Self::CatalogPathMissing { path } => {
                write!(f, "catalog path does not exist: {}", path.display())
            }
            Self::CatalogPathNotFile { path } => {
                write!(f, "catalog path is not a file: {}", path.display())
            }
            Self::InvalidRecencyDecay { value } => {
                write!(f, "search.recency_decay must be a non-negative number, got {value}")
            }
            Self::ZeroLimit { setting } => write!(f, "{setting} is 0"),
            Self::MaxYearTooEarly { value } => {
                write!(
                    f,
                    "query.max_year {value} is before {MIN_QUERY_YEAR}; no year will be recognised"
                )
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.catalog.paths.is_empty() {
        warnings.push(ConfigWarning::NoCatalogConfigured);
    }
    for path in &config.catalog.paths {
        if !path.exists() {
            warnings.push(ConfigWarning::CatalogPathMissing { path: path.clone() });
        } else if !path.is_file() {
            warnings.push(ConfigWarning::CatalogPathNotFile { path: path.clone() });
        }
    }

    let decay = config.search.recency_decay;
    if decay.is_nan() || decay < 0.0 {
        warnings.push(ConfigWarning::InvalidRecencyDecay { value: decay });
    }
    if config.search.result_limit == 0 {
        warnings.push(ConfigWarning::ZeroLimit {
            setting: "search.result_limit",
        });
    }
    if config.search.suggestion_limit == 0 {
        warnings.push(ConfigWarning::ZeroLimit {
            setting: "search.suggestion_limit",
        });
    }
    if config.query.max_year < MIN_QUERY_YEAR {
        warnings.push(ConfigWarning::MaxYearTooEarly {
            value: config.query.max_year,
        });
    }

    warnings
}
