//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Validate catalogs (plural forms, empty entries, placeholders, ...)
//! - `stats`: Translation progress per catalog
//! - `lookup`: Resolve one string the way the application would at runtime
//! - `clean`: Remove obsolete and vanished messages
//! - `init`: Write a default `.tscatrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::rules::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Clean(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project directory (default: current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Catalog root relative to the project directory (overrides config file).
    /// Can be specified multiple times.
    #[arg(long = "root")]
    pub roots: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all rules not disabled in the config file)
    #[arg(value_enum)]
    pub rules: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Source text to translate
    pub source: String,

    /// Context (class) name the message belongs to
    #[arg(long)]
    pub context: String,

    /// Disambiguating comment
    #[arg(long)]
    pub comment: Option<String>,

    /// Quantity for plural messages; replaces %n
    #[arg(short = 'n', long = "count", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Locale to resolve for (default: LANGUAGE, LC_ALL, LC_MESSAGES, LANG)
    #[arg(long)]
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite catalogs (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check translation catalogs for problems
    Check(CheckCommand),
    /// Show translation progress per catalog
    Stats(StatsCommand),
    /// Resolve a string against the best matching catalog
    Lookup(LookupCommand),
    /// Remove obsolete and vanished messages from catalogs
    Clean(CleanCommand),
    /// Initialize a new .tscatrc.json configuration file
    Init,
}
