//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - inspect: run an inspection over a scenario file
//! - check: validate a scenario file without inspecting

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Zoo Inspector - checks enclosures and animals, logs status lines
#[derive(Parser, Debug)]
#[command(name = "zoo-inspector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Output format for inspection results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect the zoo described by a scenario file
    Inspect {
        /// Scenario file (YAML)
        scenario: PathBuf,

        /// Output format, overrides the config file
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Validate a scenario file
    Check {
        /// Scenario file (YAML)
        scenario: PathBuf,
    },
}
