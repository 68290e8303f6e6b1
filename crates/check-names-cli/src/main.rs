//! check-names CLI tool.
//!
//! Usage:
//! ```bash
//! check-names [OPTIONS] <DUMP>... [--dict=<PATH>]
//! check-names check [OPTIONS] <DUMP>...
//! check-names list-rules
//! check-names init
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;
mod provider;

/// Naming-convention and spelling linter for C++ declarations
#[derive(Parser)]
#[command(name = "check-names")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    check: CheckArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Check declaration dumps (the default when no subcommand is given)
    Check(CheckArgs),

    /// List built-in rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Arguments of the check command.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Declaration dumps (`.json` / `.jsonl`) or directories containing them
    pub paths: Vec<PathBuf>,

    /// Dictionary file of whitespace-separated words
    #[arg(long, value_name = "PATH")]
    pub dict: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Exclude patterns matched against declaration files (can be specified multiple times)
    #[arg(short, long)]
    pub exclude: Vec<String>,
}

/// Output format for reports.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Per-file report blocks.
    #[default]
    Text,
    /// JSON array of file reports.
    Json,
    /// One-line-per-finding compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir()?;
    let source = config_resolver::resolve(&cwd, cli.config.as_deref());

    match cli.command {
        Some(Commands::Check(args)) => commands::check::run(args, &source),
        None => commands::check::run(cli.check, &source),
        Some(Commands::ListRules) => {
            commands::list_rules::run();
            Ok(())
        }
        Some(Commands::Init { force }) => commands::init::run(force),
    }
}
