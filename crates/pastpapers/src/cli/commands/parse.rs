//! Implementation of `pastpapers parse`.

use std::process::ExitCode;

use pastpapers_query::{ParsedQuery, QueryParser};

use crate::cli::{
    args::ParseCommand,
    context::CommandContext,
    output::{dim, print_json, subheader},
};

/// Parses a query and prints the extracted filters.
pub fn run(ctx: &CommandContext, cmd: &ParseCommand) -> ExitCode {
    let max_year = cmd.max_year.unwrap_or(ctx.config.query.max_year);
    let parser = QueryParser::new().with_max_year(max_year);
    let parsed = parser.parse(&cmd.query.join(" "));

    if cmd.json {
        return print_json(&parsed);
    }

    print!("{}", format_parsed(&parsed));
    ExitCode::SUCCESS
}

/// Formats parsed fields one per line, dimming unset ones.
fn format_parsed(parsed: &ParsedQuery) -> String {
    let year = parsed.year.map(|y| y.to_string());
    let text = (!parsed.text.is_empty()).then(|| parsed.text.clone());
    let fields = [
        ("subject", parsed.subject.clone()),
        ("unit", parsed.unit.clone()),
        ("year", year),
        ("session", parsed.session.clone()),
        ("text", text),
    ];

    let mut out = String::new();
    for (name, value) in fields {
        let label = subheader(&format!("{name:<8}"));
        match value {
            Some(value) => out.push_str(&format!("{label} {value}\n")),
            None => out.push_str(&format!("{label} {}\n", dim("-"))),
        }
    }
    out
}
