//! Utility functions for CLI operations.
//!
//! This module provides the pieces shared by several commands: global
//! options, path resolution, SDK default loading and the output format
//! argument.

use crate::error::CliError;
use clap::{Args, ValueEnum};
use droidconf::config::SourceBuilder;
use droidconf::output;
use droidconf::SdkDefaults;
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user data directory location.
    pub data_dir: Option<PathBuf>,
}

impl GlobalOptions {
    /// A source builder reading the user file from the configured data directory.
    pub fn source_builder(&self) -> SourceBuilder {
        match &self.data_dir {
            Some(dir) => SourceBuilder::new().with_data_dir(dir),
            None => SourceBuilder::new(),
        }
    }
}

/// Resolve a path, using CWD if not specified.
///
/// Relative paths are joined onto the current directory. Paths are not
/// canonicalized.
pub fn resolve_path(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    let cwd = env::current_dir()?;
    Ok(match path {
        Some(p) if p.is_absolute() => p,
        Some(p) => cwd.join(p),
        None => cwd,
    })
}

/// Fail with `InvalidArguments` unless `path` is an existing file.
pub fn require_file(path: &Path) -> Result<(), CliError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::InvalidArguments(format!(
            "File not found: {}",
            path.display()
        )))
    }
}

/// Values standing in for the framework's `flutter.*` properties.
///
/// A defaults file is read first; individual flags override it.
#[derive(Args, Debug, Default)]
pub struct FrameworkArgs {
    /// YAML file with framework SDK defaults
    #[arg(long, value_name = "FILE", env = "DROIDCONF_SDK_DEFAULTS")]
    pub sdk_defaults: Option<PathBuf>,

    /// Value for flutter.minSdkVersion
    #[arg(long, value_name = "LEVEL")]
    pub framework_min_sdk: Option<u32>,

    /// Value for flutter.targetSdkVersion
    #[arg(long, value_name = "LEVEL")]
    pub framework_target_sdk: Option<u32>,

    /// Value for flutter.compileSdkVersion
    #[arg(long, value_name = "LEVEL")]
    pub framework_compile_sdk: Option<u32>,

    /// Value for flutter.ndkVersion
    #[arg(long, value_name = "VERSION")]
    pub framework_ndk_version: Option<String>,

    /// Value for flutter.versionCode
    #[arg(long, value_name = "CODE")]
    pub framework_version_code: Option<u32>,

    /// Value for flutter.versionName
    #[arg(long, value_name = "NAME")]
    pub framework_version_name: Option<String>,
}

impl FrameworkArgs {
    /// Build the SDK defaults from the file (if any) and the flags.
    pub fn load(&self) -> Result<SdkDefaults, CliError> {
        let base = match &self.sdk_defaults {
            Some(path) => {
                require_file(path)?;
                SdkDefaults::load_file(path)?
            }
            None => SdkDefaults::default(),
        };

        Ok(base.overlay(SdkDefaults {
            min_sdk: self.framework_min_sdk,
            target_sdk: self.framework_target_sdk,
            compile_sdk: self.framework_compile_sdk,
            ndk_version: self.framework_ndk_version.clone(),
            version_code: self.framework_version_code,
            version_name: self.framework_version_name.clone(),
        }))
    }
}

/// Output format for resolved configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
    /// Sorted `key=value` lines.
    Properties,
    /// Human-readable summary.
    Human,
}

impl From<FormatArg> for output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => output::OutputFormat::Json,
            FormatArg::Yaml => output::OutputFormat::Yaml,
            FormatArg::Properties => output::OutputFormat::Properties,
            FormatArg::Human => output::OutputFormat::Human,
        }
    }
}
