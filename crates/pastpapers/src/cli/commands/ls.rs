//! Implementation of `pastpapers ls`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use pastpapers_catalog::{Catalog, Paper, Subject};
use pastpapers_query::normalize_search_term;

use crate::cli::{
    args::LsCommand,
    context::CommandContext,
    output::{dim, subheader},
};

/// Lists the catalog's subjects, or the units of one subject.
pub fn run(ctx: &mut CommandContext, cmd: &LsCommand) -> ExitCode {
    let catalog = match ctx.catalog(&cmd.catalog.catalogs) {
        Ok(catalog) => catalog,
        Err(code) => return code,
    };

    match &cmd.subject {
        Some(name) => match find_subject(catalog, name) {
            Some(subject) => {
                list_units(subject);
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("error: no subject matching '{name}'");
                ExitCode::FAILURE
            }
        },
        None => {
            list_subjects(catalog);
            ExitCode::SUCCESS
        }
    }
}

/// Finds a subject by id, or by name after alias normalization (`phy` finds `Physics`).
fn find_subject<'a>(catalog: &'a Catalog, name: &str) -> Option<&'a Subject> {
    catalog.subject(name).or_else(|| {
        let wanted = normalize_search_term(name);
        catalog
            .subjects
            .iter()
            .find(|s| normalize_search_term(&s.name) == wanted)
    })
}

/// Formats the year span of a set of papers, e.g. `2019-2024`.
fn year_span<'a>(papers: impl Iterator<Item = &'a Paper>) -> String {
    let (min, max) = papers.fold((None, None), |(min, max): (Option<u16>, Option<u16>), p| {
        (
            Some(min.map_or(p.year, |m| m.min(p.year))),
            Some(max.map_or(p.year, |m| m.max(p.year))),
        )
    });
    match (min, max) {
        (Some(min), Some(max)) if min == max => min.to_string(),
        (Some(min), Some(max)) => format!("{min}-{max}"),
        _ => "-".to_string(),
    }
}

/// Prints a table of all subjects.
fn list_subjects(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("{}", dim("No subjects in catalog."));
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Id", "Subject", "Units", "Papers", "Years"]);
    for subject in &catalog.subjects {
        table.add_row(vec![
            Cell::new(&subject.id),
            Cell::new(&subject.name),
            Cell::new(subject.units.len().to_string()),
            Cell::new(subject.papers.len().to_string()),
            Cell::new(year_span(subject.papers.iter())),
        ]);
    }
    println!("{table}");
    println!(
        "{}",
        dim(&format!(
            "{} subjects, {} papers",
            catalog.subjects.len(),
            catalog.paper_count()
        ))
    );
}

/// Prints a table of one subject's units in display order.
fn list_units(subject: &Subject) {
    println!("{}", subheader(&subject.name));
    if subject.units.is_empty() {
        println!("{}", dim("No units."));
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Id", "Unit", "Description", "Papers", "Years"]);
    for unit in subject.units_in_order() {
        table.add_row(vec![
            Cell::new(&unit.id),
            Cell::new(&unit.name),
            Cell::new(unit.description.as_deref().unwrap_or("")),
            Cell::new(subject.papers_for_unit(&unit.id).count().to_string()),
            Cell::new(year_span(subject.papers_for_unit(&unit.id))),
        ]);
    }
    println!("{table}");
}
