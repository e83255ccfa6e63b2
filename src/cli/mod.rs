//! CLI module for zoo-inspector - command-line interface and subcommands.
//!
//! Runs inspections over scenario files with the in-memory collaborators.

pub mod commands;

pub use commands::Cli;
