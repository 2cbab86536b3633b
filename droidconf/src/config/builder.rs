//! Builder assembling a merged source tree.

use crate::config::environment::EnvironmentOverrides;
use crate::config::loader::{SourceLayer, SourceLoader, PROJECT_PRECEDENCE};
use crate::config::merger::SourceMerger;
use crate::config::schema::BuildSource;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Builds a [`BuildSource`] from files, environment and programmatic layers.
///
/// # Examples
///
/// ```
/// use droidconf::config::{BuildSource, SourceBuilder};
///
/// let source = SourceBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_source(BuildSource {
///         application_id: Some("com.example.app".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(source.application_id.as_deref(), Some("com.example.app"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SourceBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<BuildSource>,
}

impl SourceBuilder {
    /// Create a builder that discovers files from the current directory and
    /// applies environment overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover project files starting from `dir`.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Read the user-level `config.yaml` from `dir` instead of `~/.droidconf`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = Some(dir.to_path_buf());
        self
    }

    /// Use exactly this file as the project source, skipping discovery.
    ///
    /// The user-level source is still layered beneath it.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.file = Some(path.to_path_buf());
        self
    }

    /// Do not read any file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not apply `DROIDCONF_*` overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layer `source` on top of everything else.
    #[must_use]
    pub fn with_source(mut self, source: BuildSource) -> Self {
        self.overrides.push(source);
        self
    }

    /// Load, merge and override.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, or an
    /// environment override is malformed.
    pub fn build(self) -> Result<BuildSource> {
        let mut source = if self.skip_files {
            BuildSource::default()
        } else {
            SourceMerger::merge(self.layers()?)
        };

        if !self.skip_env {
            EnvironmentOverrides::apply_overrides(&mut source)?;
        }

        for layer in &self.overrides {
            SourceMerger::merge_into(&mut source, layer);
        }

        Ok(source)
    }

    fn layers(&self) -> Result<Vec<SourceLayer>> {
        if let Some(file) = &self.file {
            let mut layers: Vec<SourceLayer> =
                SourceLoader::load_user_source(self.data_dir.as_deref())?
                    .into_iter()
                    .collect();
            layers.push(SourceLayer {
                path: file.clone(),
                precedence: PROJECT_PRECEDENCE,
                source: SourceLoader::load_file(file)?,
            });
            return Ok(layers);
        }

        let working_dir = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        SourceLoader::load_all(&working_dir, self.data_dir.as_deref())
    }
}
