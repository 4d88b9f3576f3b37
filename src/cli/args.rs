//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `lookup`: Look up the translation for one key
//! - `interactive`: Read keys from stdin until `exit`
//! - `tables`: List loaded resource tables in priority order
//! - `init`: Initialize a configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::bundled::BundledLanguage;

pub const DIR_ENV_VAR: &str = "RESX_LOOKUP_DIR";

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

    /// Get the verbose flag from the command's source args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Lookup(cmd)) => cmd.source.verbose,
            Some(Command::Interactive(cmd)) => cmd.source.verbose,
            Some(Command::Tables(cmd)) => cmd.source.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Where to load resource tables from, shared by all lookup commands.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Directory containing resource files (overrides config file)
    #[arg(short, long, env = DIR_ENV_VAR)]
    pub dir: Option<PathBuf>,

    /// Use the tables bundled with the binary instead of a directory
    #[arg(short, long, value_enum)]
    pub bundled: Option<BundledLanguage>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Text to translate (matched exactly, case-sensitive)
    pub key: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct InteractiveCommand {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Args)]
pub struct TablesCommand {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up the translation for a single key
    Lookup(LookupCommand),
    /// Read keys from stdin and print their translations until `exit`
    Interactive(InteractiveCommand),
    /// List loaded resource tables in lookup priority order
    Tables(TablesCommand),
    /// Initialize a new .resxlookuprc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
