//! Source file discovery and loading.
//!
//! This module finds `droidconf.yaml` files for a project and the user-level
//! `config.yaml`, and parses them into [`BuildSource`] layers tagged with
//! their precedence.

use crate::config::schema::BuildSource;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project source file name.
pub const PROJECT_FILE: &str = "droidconf.yaml";

/// Private, uncommitted project source file name.
pub const LOCAL_FILE: &str = "droidconf.local.yaml";

/// User-level source file name inside the data directory.
pub const USER_FILE: &str = "config.yaml";

/// Name of the default data directory under the home directory.
pub const DATA_DIR_NAME: &str = ".droidconf";

/// Precedence of the user-level source.
pub const USER_PRECEDENCE: u8 = 1;

/// Precedence of `droidconf.yaml`.
pub const PROJECT_PRECEDENCE: u8 = 2;

/// Precedence of `droidconf.local.yaml`.
pub const LOCAL_PRECEDENCE: u8 = 3;

/// A parsed source file with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use droidconf::config::SourceLayer;
/// use std::path::PathBuf;
///
/// let layer = SourceLayer {
///     path: PathBuf::from("droidconf.yaml"),
///     precedence: 2,
///     source: Default::default(),
/// };
/// assert_eq!(layer.precedence, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayer {
    /// Path the layer was read from.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed source tree.
    pub source: BuildSource,
}

/// Returns the default data directory (`~/.droidconf`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: PathBuf::from("~"),
        reason: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(DATA_DIR_NAME))
}

/// Loads source files from disk.
///
/// # Examples
///
/// ```no_run
/// use droidconf::config::SourceLoader;
/// use std::path::Path;
///
/// let layers = SourceLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} source files", layers.len());
/// ```
pub struct SourceLoader;

impl SourceLoader {
    /// Discover and load every source file.
    ///
    /// Searches for:
    /// 1. User `config.yaml` in `data_dir` or `~/.droidconf` (precedence 1)
    /// 2. `droidconf.yaml` walking up from `working_dir` (precedence 2)
    /// 3. `droidconf.local.yaml` next to it (precedence 3)
    ///
    /// # Errors
    ///
    /// Returns an error if any file exists but cannot be read or parsed.
    pub fn load_all(working_dir: &Path, data_dir: Option<&Path>) -> Result<Vec<SourceLayer>> {
        let mut layers = Vec::new();

        if let Some(user) = Self::load_user_source(data_dir)? {
            layers.push(user);
        }

        layers.extend(Self::discover_project_sources(working_dir)?);

        // Lowest precedence first
        layers.sort_by_key(|l| l.precedence);

        log::debug!("loaded {} source layers", layers.len());
        Ok(layers)
    }

    /// Load the user-level source, if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_source(data_dir: Option<&Path>) -> Result<Option<SourceLayer>> {
        let path = match data_dir {
            Some(dir) => dir.join(USER_FILE),
            None => default_data_dir()?.join(USER_FILE),
        };

        if !path.exists() {
            return Ok(None);
        }

        let source = Self::load_file(&path)?;
        Ok(Some(SourceLayer {
            path,
            precedence: USER_PRECEDENCE,
            source,
        }))
    }

    /// Discover project sources by walking up from `start_dir`.
    ///
    /// Stops at the first directory containing either file.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read or parsed.
    pub fn discover_project_sources(start_dir: &Path) -> Result<Vec<SourceLayer>> {
        let mut layers = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [
                (PROJECT_FILE, PROJECT_PRECEDENCE),
                (LOCAL_FILE, LOCAL_PRECEDENCE),
            ] {
                let path = current.join(name);
                if path.exists() {
                    log::debug!("found source {}", path.display());
                    let source = Self::load_file(&path)?;
                    layers.push(SourceLayer {
                        path,
                        precedence,
                        source,
                    });
                }
            }

            if !layers.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(layers)
    }

    /// Load and parse a YAML source file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be read, or
    /// [`Error::InvalidSource`] if the YAML does not describe a source tree.
    pub fn load_file(path: &Path) -> Result<BuildSource> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read source file: {e}"),
        })?;

        Self::parse(&contents).map_err(|e| Error::InvalidSource {
            path: path.to_path_buf(),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Parse a source tree from YAML text.
    ///
    /// An empty document yields an empty source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Yaml`] if the text is not a valid source tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use droidconf::config::SourceLoader;
    ///
    /// let source = SourceLoader::load_str("applicationId: com.example.app\n").unwrap();
    /// assert_eq!(source.application_id.as_deref(), Some("com.example.app"));
    /// ```
    pub fn load_str(text: &str) -> Result<BuildSource> {
        Ok(Self::parse(text)?)
    }

    fn parse(text: &str) -> std::result::Result<BuildSource, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(BuildSource::default());
        }
        serde_yaml::from_str(text)
    }
}
