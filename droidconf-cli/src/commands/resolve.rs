//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which layers the
//! configuration sources for a project, resolves them against the framework
//! defaults and prints the resulting build configuration.

use crate::error::CliError;
use crate::utils::{require_file, resolve_path, FormatArg, FrameworkArgs, GlobalOptions};
use clap::Args;
use droidconf::output::OutputFormat;
use droidconf::{ConfigResolver, SigningProfiles};
use std::path::PathBuf;

/// Resolve a project's build configuration.
#[derive(Args)]
pub struct ResolveCommand {
    /// Project directory to discover sources from (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Resolve a single source file instead of discovering project files
    #[arg(long, value_name = "FILE", conflicts_with = "path")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub framework: FrameworkArgs,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "human",
        env = "DROIDCONF_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: FormatArg,

    /// Ignore DROIDCONF_* environment overrides
    #[arg(long)]
    pub no_env: bool,

    /// Skip checking signing references against declared profiles
    #[arg(long)]
    pub skip_signing_check: bool,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut builder = global.source_builder();
        if let Some(file) = &self.file {
            require_file(file)?;
            builder = builder.with_file(file);
        } else {
            builder = builder.with_working_dir(&resolve_path(self.path)?);
        }
        if self.no_env {
            builder = builder.skip_env();
        }

        let source = builder.build()?;
        let resolver = ConfigResolver::new(self.framework.load()?);

        let config = if self.skip_signing_check {
            resolver.resolve(&source)?
        } else {
            let store = SigningProfiles::from_source(&source);
            resolver.resolve_and_verify(&source, &store)?
        };

        let format = OutputFormat::from(self.format);
        let output = format.create_formatter().format(&config)?;
        println!("{output}");

        Ok(())
    }
}
