//! Implementation of `pastpapers check`.

use std::process::ExitCode;

use pastpapers_catalog::CatalogWarning;
use pastpapers_config::{ConfigWarning, discover_config_files};

use crate::cli::{
    args::CheckCommand,
    context::CommandContext,
    output::{dim, subheader, success, warning},
};

/// Shows configuration files and catalog paths, then validates both.
pub fn run(ctx: &mut CommandContext, cmd: &CheckCommand) -> ExitCode {
    let overrides = &cmd.catalog.catalogs;

    let config_files = discover_config_files(&ctx.cwd);
    println!("{}", subheader("Config files:"));
    if config_files.is_empty() {
        println!("   {}", dim("(none found)"));
    }
    for path in &config_files {
        println!("   {}", path.display());
    }
    println!();

    let paths = ctx.catalog_paths(overrides);
    println!("{}", subheader("Catalog:"));
    if paths.is_empty() {
        println!("   {}", dim("(none configured)"));
    }
    for path in &paths {
        if path.is_file() {
            println!("   {}", path.display());
        } else {
            println!("   {} {}", path.display(), warning("[missing]"));
        }
    }
    println!();

    let config_warnings: Vec<ConfigWarning> = ctx
        .config
        .validate()
        .into_iter()
        .filter(|w| overrides.is_empty() || !is_catalog_path_warning(w))
        .collect();

    let mut catalog_warnings = Vec::new();
    if !paths.is_empty() && paths.iter().all(|p| p.is_file()) {
        let catalog = match ctx.catalog(overrides) {
            Ok(catalog) => catalog,
            Err(code) => return code,
        };
        println!(
            "   {}",
            dim(&format!(
                "{} subjects, {} papers",
                catalog.subjects.len(),
                catalog.paper_count()
            ))
        );
        println!();
        catalog_warnings = catalog.validate();
    }

    let total = config_warnings.len() + catalog_warnings.len();
    if total == 0 {
        println!("{}", success("No issues found."));
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({total}):")));
    for w in &config_warnings {
        println!("   {}", warning(&w.to_string()));
    }
    for w in &catalog_warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&config_warnings, &catalog_warnings);

    ExitCode::FAILURE
}

/// Returns true for warnings about configured catalog paths.
fn is_catalog_path_warning(w: &ConfigWarning) -> bool {
    matches!(
        w,
        ConfigWarning::NoCatalogConfigured
            | ConfigWarning::CatalogPathMissing { .. }
            | ConfigWarning::CatalogPathNotFile { .. }
    )
}

/// Prints hints for resolving common warnings.
fn print_hints(config_warnings: &[ConfigWarning], catalog_warnings: &[CatalogWarning]) {
    if config_warnings
        .iter()
        .any(|w| matches!(w, ConfigWarning::NoCatalogConfigured))
    {
        println!(
            "{}",
            dim("Hint: set [catalog] path in .pastpapers.toml, or pass --catalog")
        );
    }
    if catalog_warnings
        .iter()
        .any(|w| matches!(w, CatalogWarning::UnresolvedUnit { .. }))
    {
        println!(
            "{}",
            dim("Hint: papers with unknown units are skipped by search")
        );
    }
}
