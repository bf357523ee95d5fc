//! Clap argument definitions for the `pastpapers` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "pastpapers")]
#[command(about = "Find past exam papers with loose, typo-friendly queries")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log verbosity (-v for debug, -vv for trace). PASTPAPERS_LOG overrides this.
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Shared flag for choosing catalog files on the command line.
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Catalog JSON file to load instead of the configured ones (can be repeated)
    #[arg(short = 'c', long = "catalog")]
    pub catalogs: Vec<PathBuf>,
}

/// Arguments for `pastpapers search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Free-text query, e.g. "phy u1 jan 24"
    pub query: Vec<String>,

    /// Only search this subject
    #[arg(short = 's', long)]
    pub subject: Option<String>,

    /// Only search these units (can be specified multiple times)
    #[arg(short = 'u', long = "unit")]
    pub units: Vec<String>,

    /// Only search this year
    #[arg(short = 'y', long)]
    pub year: Option<u16>,

    /// Only search these sessions (can be specified multiple times)
    #[arg(long = "session")]
    pub sessions: Vec<String>,

    /// Maximum results to return [default: from config, 20]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    /// Catalog selection.
    pub catalog: CatalogArgs,
}

/// Arguments for `pastpapers parse`.
#[derive(Args, Debug, Clone)]
pub struct ParseCommand {
    /// Free-text query to parse
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Latest year to recognise [default: from config, 2025]
    #[arg(long)]
    pub max_year: Option<u16>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `pastpapers sessions`.
#[derive(Args, Debug, Clone)]
pub struct SessionsCommand {
    /// Session name or abbreviation, e.g. "jun"
    pub session: String,
}

/// Arguments for `pastpapers ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// List the units of this subject instead of all subjects
    #[arg(short = 's', long)]
    pub subject: Option<String>,

    #[command(flatten)]
    /// Catalog selection.
    pub catalog: CatalogArgs,
}

/// Arguments for `pastpapers check`.
#[derive(Args, Debug, Clone)]
pub struct CheckCommand {
    #[command(flatten)]
    /// Catalog selection.
    pub catalog: CatalogArgs,
}

/// Arguments for `pastpapers init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.pastpapers.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `pastpapers` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog
    #[command(after_help = "\
QUERY SYNTAX:
  Queries are split on whitespace and scanned for, in order:
  24, 2024          Year (two digits mean 20xx)
  phy, chem, maths  Subject shorthand
  u1, p2, fp1, m1   Unit shorthand for the detected subject
  jan, jun, oct     Exam session (May and June are interchangeable)
  p1jan21           A single token combining unit, session and year
  Anything left over is matched against titles, unit names and descriptions.

EXAMPLES:
  pastpapers search phy u1 jan 24
  pastpapers search p1jan21
  pastpapers search maths --unit 'Pure 1' --unit 'Pure 2'
  pastpapers search --subject Chemistry --session May --year 2023")]
    Search(SearchCommand),

    /// Show how a query is parsed into filters
    Parse(ParseCommand),

    /// Show which sessions are interchangeable with a session
    Sessions(SessionsCommand),

    /// List subjects, or the units of one subject
    Ls(LsCommand),

    /// Validate configuration and catalog
    Check(CheckCommand),

    /// Initialize pastpapers configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}

/// Parses CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
