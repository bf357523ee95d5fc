//! Implementation of `pastpapers config`.

use std::process::ExitCode;

use crate::cli::{context::CommandContext, output::Highlighter};

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let highlighter = Highlighter::new();
    print!("{}", highlighter.highlight_toml(&ctx.config.settings_to_toml()));
    ExitCode::SUCCESS
}
