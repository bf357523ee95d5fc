//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use pastpapers_catalog::{Catalog, load_catalogs};
use pastpapers_config::Config;
use pastpapers_search::SearchParams;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Cached catalog loaded for this invocation.
    catalog: Option<Catalog>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            catalog: None,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for commands like `init` that should work even when an existing config file is
    /// invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            catalog: None,
        })
    }

    /// Returns the catalog files to load: command-line overrides if given, otherwise the
    /// configured paths.
    pub fn catalog_paths(&self, overrides: &[PathBuf]) -> Vec<PathBuf> {
        if overrides.is_empty() {
            return self.config.catalog.paths.clone();
        }
        overrides.iter().map(|p| self.cwd.join(p)).collect()
    }

    /// Returns the catalog, loading it on first use.
    pub fn catalog(&mut self, overrides: &[PathBuf]) -> Result<&Catalog, ExitCode> {
        let catalog = match self.catalog.take() {
            Some(catalog) => catalog,
            None => self.load_catalog(overrides)?,
        };
        Ok(self.catalog.insert(catalog))
    }

    /// Loads the catalog files, exiting with an init hint if none are configured.
    fn load_catalog(&self, overrides: &[PathBuf]) -> Result<Catalog, ExitCode> {
        let paths = self.catalog_paths(overrides);
        if paths.is_empty() {
            eprintln!("error: no catalog configured");
            eprintln!(
                "Run 'pastpapers init' to create a configuration file, then set [catalog] path."
            );
            return Err(ExitCode::FAILURE);
        }

        load_catalogs(&paths).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }

    /// Builds search parameters from the configuration.
    pub fn search_params(&self) -> SearchParams {
        let search = &self.config.search;
        let mut params = SearchParams::default()
            .with_result_limit(search.result_limit)
            .with_suggestion_limit(search.suggestion_limit)
            .with_recency_decay(search.recency_decay as f32)
            .with_max_year(self.config.query.max_year);
        if let Some(year) = search.reference_year {
            params = params.with_reference_year(year);
        }
        params
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
