//! Rendering and JSON serialization for CLI output.

mod style;

use std::process::ExitCode;

use pastpapers_search::{SearchOutcome, SearchQuery, SearchResult, SearchSuggestion};
use serde::Serialize;
pub use style::{Highlighter, dim, header, indent_content, subheader, success, warning};

/// JSON output for `pastpapers search`.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The request as the engine received it.
    query: &'a SearchQuery,
    /// Parsed filters, results and suggestions.
    #[serde(flatten)]
    outcome: &'a SearchOutcome<'a>,
    /// Number of results returned.
    total_matches: usize,
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Outputs a search outcome as text or JSON.
pub fn output_search_outcome(
    query: &SearchQuery,
    outcome: &SearchOutcome<'_>,
    json: bool,
) -> ExitCode {
    if json {
        return print_json(&JsonSearchOutput {
            query,
            outcome,
            total_matches: outcome.results.len(),
        });
    }

    if outcome.is_empty() {
        println!("{}", dim("No papers found."));
    } else {
        for (rank, result) in outcome.results.iter().enumerate() {
            print!("{}", format_result(rank + 1, result));
        }
    }

    if !outcome.suggestions.is_empty() {
        println!();
        println!("{}", subheader("Suggestions:"));
        for suggestion in &outcome.suggestions {
            println!("{}", format_suggestion(suggestion));
        }
    }

    ExitCode::SUCCESS
}

/// Formats one ranked result with its links.
fn format_result(rank: usize, result: &SearchResult<'_>) -> String {
    let paper = result.paper;
    let mut out = format!(
        "{} {} {}\n",
        dim(&format!("{rank:>2}.")),
        header(&format!(
            "{} {} {} {}",
            result.subject.name, result.unit.name, paper.session, paper.year
        )),
        dim(&format!("({:.2})", result.score))
    );
    out.push_str(&format!("    {}\n", paper.title));
    if !paper.question_paper_url.is_empty() {
        out.push_str(&format!("    {} {}\n", dim("QP:"), paper.question_paper_url));
    }
    if !paper.marking_scheme_url.is_empty() {
        out.push_str(&format!("    {} {}\n", dim("MS:"), paper.marking_scheme_url));
    }
    out
}

/// Formats a suggestion line.
fn format_suggestion(suggestion: &SearchSuggestion) -> String {
    let kind = serde_json::to_value(suggestion.kind)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();
    format!("   {} {}", suggestion.text, dim(&format!("[{kind}]")))
}
