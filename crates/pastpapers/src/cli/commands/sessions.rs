//! Implementation of `pastpapers sessions`.

use std::process::ExitCode;

use pastpapers_query::{get_equivalent_sessions, normalize_search_term};

use crate::cli::args::SessionsCommand;

/// Prints the sessions interchangeable with the given one, one per line.
pub fn run(cmd: &SessionsCommand) -> ExitCode {
    let session = normalize_search_term(&cmd.session);
    if session.is_empty() {
        eprintln!("error: no session given");
        return ExitCode::FAILURE;
    }

    for equivalent in get_equivalent_sessions(&session) {
        println!("{equivalent}");
    }
    ExitCode::SUCCESS
}
