//! Dependency coordinates carried through to the build executor.
//!
//! Coordinates are never fetched or deduplicated here; the build tool owns
//! dependency resolution.

use std::fmt;

use serde::Serialize;

/// Gradle configuration used when a dependency does not name one.
pub const DEFAULT_CONFIGURATION: &str = "implementation";

/// Gradle configuration for the core library desugaring artifact.
pub const DESUGARING_CONFIGURATION: &str = "coreLibraryDesugaring";

/// A declared dependency: a `(name, version)` pair plus its configuration.
///
/// # Examples
///
/// ```
/// use droidconf::Dependency;
///
/// let dep = Dependency::parse("implementation", "androidx.core:core-ktx:1.12.0").unwrap();
/// assert_eq!(dep.name(), "androidx.core:core-ktx");
/// assert_eq!(dep.version(), "1.12.0");
/// assert_eq!(dep.coordinate(), "androidx.core:core-ktx:1.12.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Dependency {
    configuration: String,
    name: String,
    version: String,
}

impl Dependency {
    /// Build a dependency from its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if any part is blank.
    pub fn new(
        configuration: &str,
        name: &str,
        version: &str,
    ) -> Result<Self, InvalidCoordinateError> {
        let coordinate = format!("{name}:{version}");
        for (part, value) in [
            ("configuration", configuration),
            ("name", name),
            ("version", version),
        ] {
            if value.trim().is_empty() {
                return Err(InvalidCoordinateError {
                    coordinate,
                    reason: format!("{part} cannot be empty"),
                });
            }
        }

        Ok(Self {
            configuration: configuration.trim().to_string(),
            name: name.trim().to_string(),
            version: version.trim().to_string(),
        })
    }

    /// Parse a `group:artifact:version` (or `artifact:version`) coordinate.
    ///
    /// The version is whatever follows the last `:`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no `:` or either side is blank.
    pub fn parse(configuration: &str, coordinate: &str) -> Result<Self, InvalidCoordinateError> {
        let (name, version) =
            coordinate
                .trim()
                .rsplit_once(':')
                .ok_or_else(|| InvalidCoordinateError {
                    coordinate: coordinate.to_string(),
                    reason: "expected 'name:version'".into(),
                })?;

        Self::new(configuration, name, version).map_err(|e| InvalidCoordinateError {
            coordinate: coordinate.to_string(),
            reason: e.reason,
        })
    }

    /// The Gradle configuration (`implementation`, `coreLibraryDesugaring`...).
    #[must_use]
    pub fn configuration(&self) -> &str {
        &self.configuration
    }

    /// Everything before the version, e.g. `com.android.tools:desugar_jdk_libs`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The version string.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// `name:version`.
    #[must_use]
    pub fn coordinate(&self) -> String {
        format!("{}:{}", self.name, self.version)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.configuration, self.name, self.version)
    }
}

/// Error type for malformed dependency coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCoordinateError {
    /// The rejected coordinate.
    pub coordinate: String,
    /// The reason it was rejected.
    pub reason: String,
}

impl fmt::Display for InvalidCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid dependency coordinate '{}': {}",
            self.coordinate, self.reason
        )
    }
}

impl std::error::Error for InvalidCoordinateError {}
