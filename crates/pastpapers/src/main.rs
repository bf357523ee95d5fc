//! Command-line interface for searching past exam papers.

mod cli;

use std::{io, process::ExitCode};

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::cli::{CommandContext, args::Commands, commands};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "PASTPAPERS_LOG";

fn main() -> ExitCode {
    let cli = cli::args::parse_cli();
    init_tracing(cli.verbose);

    let ctx = match cli.command {
        Commands::Init(_) | Commands::Sessions(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let mut ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &mut ctx)
}

/// Installs the stderr log subscriber.
///
/// `PASTPAPERS_LOG` takes an `EnvFilter` directive list; without it only warnings are shown,
/// or debug events when `-v` is given.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
