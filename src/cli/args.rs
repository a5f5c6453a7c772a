//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract` (default): harvest translation keys into the store
//! - `init`: write a default configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Options for the default `extract` command
    #[command(flatten)]
    pub extract: ExtractArgs,
}

impl Arguments {
    /// The command to run; `extract` when none was given.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Extract(self.extract))
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ExtractArgs {
    /// Frontend directory to scan (overrides config file)
    #[arg(long, env = "LOCALE_HARVEST_FRONTEND_ROOT")]
    pub frontend_root: Option<PathBuf>,

    /// Translation store path, relative to the frontend root (overrides config file)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Report new keys without writing the store
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add keys for new translation calls to the translation store
    Extract(ExtractArgs),
    /// Initialize a new .harvestrc.json configuration file
    Init,
}
