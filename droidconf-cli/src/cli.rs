//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ResolveCommand, SourcesCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving declarative Android build configurations.
#[derive(Parser)]
#[command(name = "droidconf")]
#[command(version, about = "Resolve declarative Android build configurations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the user data directory location
    #[arg(long, value_name = "PATH", global = true, env = "DROIDCONF_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve and print a project's build configuration
    Resolve(ResolveCommand),

    /// Validate a single source file
    Validate(ValidateCommand),

    /// List the configuration sources in effect
    Sources(SourcesCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
