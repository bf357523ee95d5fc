//! Implementation of `pastpapers search`.

use std::process::ExitCode;

use pastpapers_search::{SearchQuery, Searcher};
use tracing::debug;

use crate::cli::{args::SearchCommand, context::CommandContext, output::output_search_outcome};

/// Searches the catalog and prints ranked papers and suggestions.
pub fn run(ctx: &mut CommandContext, cmd: &SearchCommand) -> ExitCode {
    let mut params = ctx.search_params();
    if let Some(limit) = cmd.limit {
        params = params.with_result_limit(limit);
    }

    let query = build_query(cmd);
    let catalog = match ctx.catalog(&cmd.catalog.catalogs) {
        Ok(catalog) => catalog,
        Err(code) => return code,
    };

    let searcher = Searcher::with_params(catalog, params);
    let outcome = searcher.search(&query);
    debug!(
        results = outcome.results.len(),
        suggestions = outcome.suggestions.len(),
        "search finished"
    );

    output_search_outcome(&query, &outcome, cmd.json)
}

/// Combines positional words and explicit filters into a search request.
fn build_query(cmd: &SearchCommand) -> SearchQuery {
    SearchQuery {
        text: cmd.query.join(" "),
        subject: cmd.subject.clone(),
        units: cmd.units.clone(),
        year: cmd.year,
        sessions: cmd.sessions.clone(),
    }
}
