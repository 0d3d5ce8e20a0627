//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all freqdict
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `convert`: Convert the configured frequency lists to JSON dictionaries
//! - `init`: Initialize freqdict configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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
            Some(Command::Convert(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Base directory the configured filenames are resolved against
    /// (overrides config file)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ConvertCommand {
    #[command(flatten)]
    pub args: ConvertArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert the configured word-frequency lists to JSON dictionary files
    Convert(ConvertCommand),
    /// Initialize a new .freqdictrc.json configuration file
    Init,
}
