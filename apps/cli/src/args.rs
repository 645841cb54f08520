//! # CLI Argument Definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "fmdash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect and manage the dashboard configuration")]
pub struct Cli {
    /// Configuration file (TOML/JSON/YAML); `./fmdash.*` is used when present otherwise
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the remote configuration (defaults when the service is unavailable)
    Show,
    /// Print the built-in default configuration
    Defaults,
    /// List the visible cards of a section
    Visible { section: String },
    /// Tell whether a single card is visible
    Check { section: String, item: String },
    /// Show or hide a single card on the remote service (fails when it cannot be read first)
    Set {
        section: String,
        item: String,
        #[arg(long, action = ArgAction::Set)]
        visible: bool,
    },
    /// Reset the remote configuration to its defaults
    Reset,
    /// Export the remote configuration as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check a backup and optionally push it to the remote service
    Import {
        file: PathBuf,
        /// Save the backup remotely after it validates
        #[arg(long)]
        push: bool,
    },
    /// Check a configuration file without contacting the service
    Validate { file: PathBuf },
}
