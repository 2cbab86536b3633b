//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Installed binary name.
const BIN_NAME: &str = "droidconf";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);

        match self.shell {
            Shell::Bash => {
                eprintln!("# Install with:");
                eprintln!(
                    "#   droidconf completions bash > ~/.local/share/bash-completion/completions/droidconf"
                );
            }
            Shell::Zsh => {
                eprintln!("# Install with:");
                eprintln!("#   droidconf completions zsh > ~/.zsh/completions/_droidconf");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
            }
            Shell::Fish => {
                eprintln!("# Install with:");
                eprintln!(
                    "#   droidconf completions fish > ~/.config/fish/completions/droidconf.fish"
                );
            }
            Shell::PowerShell => {
                eprintln!("# Load with:");
                eprintln!("#   droidconf completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }

        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
