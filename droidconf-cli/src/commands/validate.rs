//! Command to validate a droidconf source file.

use crate::error::CliError;
use crate::utils::{require_file, FrameworkArgs, GlobalOptions};
use clap::Args;
use droidconf::config::SourceLoader;
use droidconf::{ConfigResolver, SigningProfiles};
use std::path::PathBuf;

/// Validate a single droidconf source file.
///
/// The file is checked on its own: no other layers and no environment
/// overrides are applied.
#[derive(Args)]
pub struct ValidateCommand {
    /// Source file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,

    #[command(flatten)]
    pub framework: FrameworkArgs,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        require_file(&self.config_path)?;

        let source = match SourceLoader::load_file(&self.config_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        let resolver = ConfigResolver::new(self.framework.load()?);
        let store = SigningProfiles::from_source(&source);

        match resolver.resolve_and_verify(&source, &store) {
            Ok(_) => {
                println!("Configuration is valid");
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
