//! Sources command implementation.
//!
//! Lists the configuration layers that `resolve` would read for a
//! directory, lowest precedence first, followed by any environment
//! overrides currently set.

use crate::error::CliError;
use crate::utils::{resolve_path, GlobalOptions};
use clap::Args;
use droidconf::config::environment::ALL_VARIABLES;
use droidconf::config::loader::{LOCAL_PRECEDENCE, PROJECT_PRECEDENCE, USER_PRECEDENCE};
use droidconf::config::SourceLoader;
use std::env;
use std::path::PathBuf;

/// List the configuration sources for a project.
#[derive(Args)]
pub struct SourcesCommand {
    /// Project directory to discover sources from (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,
}

fn layer_label(precedence: u8) -> &'static str {
    match precedence {
        USER_PRECEDENCE => "user",
        PROJECT_PRECEDENCE => "project",
        LOCAL_PRECEDENCE => "local",
        _ => "other",
    }
}

impl SourcesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let working_dir = resolve_path(self.path)?;
        let layers = SourceLoader::load_all(&working_dir, global.data_dir.as_deref())?;

        if layers.is_empty() {
            println!("No source files found.");
        } else {
            for layer in &layers {
                println!(
                    "{}\t{}\t{}",
                    layer.precedence,
                    layer_label(layer.precedence),
                    layer.path.display()
                );
            }
        }

        let overrides: Vec<(&str, String)> = ALL_VARIABLES
            .iter()
            .filter_map(|&name| env::var(name).ok().map(|value| (name, value)))
            .collect();

        if !overrides.is_empty() {
            println!();
            println!("Environment overrides:");
            for (name, value) in overrides {
                println!("  {name}={value}");
            }
        }

        Ok(())
    }
}
