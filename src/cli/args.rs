//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: write a default `.tolkrc.json`
//! - `extract`: rescan the source tree and refresh the extracted keys
//! - `status`: every key of a language with its status, grouped by namespace
//! - `keys`: extracted keys with their reference-language value
//! - `languages`: languages present in the translation store
//! - `get` / `add` / `edit` / `remove`: single translation editing
//! - `import` / `export`: `<language>.json` files
//! - `serve`: start the MCP server over stdio

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tolk", author, version, about, long_about = None)]
pub struct Arguments {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<(CommonArgs, Command)> {
        match self.command {
            Some(command) => Some((self.common, command)),
            None => {
                Self::command().print_help().ok();
                None
            }
        }
    }

    pub fn verbose(&self) -> bool {
        self.common.verbose
    }
}

/// Arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// SQLite database file (overrides config file)
    #[arg(long, global = true, env = "TOLK_DATABASE")]
    pub database: Option<PathBuf>,

    /// Source code root directory (overrides config file)
    #[arg(long, global = true)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Language code, e.g. `en` or `hu`
    pub language: String,

    /// Only show one namespace
    #[arg(long)]
    pub namespace: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct KeyCommand {
    pub language: String,

    /// `namespace:key`, or a bare key in the `general` namespace
    pub key: String,
}

#[derive(Debug, Args)]
pub struct ValueCommand {
    pub language: String,

    /// `namespace:key`, or a bare key in the `general` namespace
    pub key: String,

    pub value: String,
}

#[derive(Debug, Args)]
pub struct DirCommand {
    /// Directory holding `<language>.json` files
    pub dir: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .tolkrc.json configuration file
    Init,
    /// Scan source files and replace the extracted keys
    Extract,
    /// Show every key of a language with its status
    Status(StatusCommand),
    /// List extracted keys with their reference-language value
    Keys(KeysCommand),
    /// List languages present in the translation store
    Languages,
    /// Print one translation
    Get(KeyCommand),
    /// Add a translation that does not exist yet
    Add(ValueCommand),
    /// Change an existing translation
    Edit(ValueCommand),
    /// Delete a translation
    Remove(KeyCommand),
    /// Load `<language>.json` files into the translation store
    Import(DirCommand),
    /// Write one `<language>.json` file per stored language
    Export(DirCommand),
    /// Start MCP server for AI coding agents
    Serve,
}
