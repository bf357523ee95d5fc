//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod init;
pub mod ls;
pub mod parse;
pub mod search;
pub mod sessions;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &mut CommandContext) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Parse(cmd) => parse::run(ctx, &cmd),
        Commands::Sessions(cmd) => sessions::run(&cmd),
        Commands::Ls(cmd) => ls::run(ctx, &cmd),
        Commands::Check(cmd) => check::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
