//! Build script for droidconf-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here by hand.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("droidconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve declarative Android build configurations")
        .long_about(
            "Command-line tool that layers droidconf.yaml sources, resolves framework \
             references and validates the resulting Android build configuration",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the user data directory location")
                .value_name("PATH")
                .global(true)
                .env("DROIDCONF_DATA_DIR"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve and print a project's build configuration")
                .long_about(
                    "Layer the user, project and local sources, apply environment overrides, \
                     resolve framework references and print the build configuration",
                ),
            Command::new("validate")
                .about("Validate a single source file")
                .long_about("Parse and resolve one source file and report the first violation"),
            Command::new("sources")
                .about("List the configuration sources in effect")
                .long_about("Show the source files discovered for a directory and any overrides"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("droidconf.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
