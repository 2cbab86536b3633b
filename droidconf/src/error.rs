//! Error types for the droidconf library.
//!
//! Every resolution failure names the field that failed and the constraint
//! it violated, so the invoking build tool can report it verbatim.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a droidconf error.
///
/// # Examples
///
/// ```
/// use droidconf::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(34)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the droidconf library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required key is absent (or blank) in the source.
    #[error("missing required field '{field}'")]
    MissingField {
        /// The field that is missing.
        field: String,
    },

    /// A numeric value or ordering constraint was violated.
    #[error("invalid range for '{field}': {message}")]
    InvalidRange {
        /// The field that is out of range.
        field: String,
        /// The violated constraint.
        message: String,
    },

    /// Two options contradict each other.
    #[error("inconsistent option '{field}': {message}")]
    InconsistentOption {
        /// The field holding the inconsistent option.
        field: String,
        /// The violated constraint.
        message: String,
    },

    /// A signing reference does not name a known signing profile.
    #[error("unresolved signing profile '{profile}' (known profiles: {})", known_list(known))]
    UnresolvedSigningProfile {
        /// The signing profile that could not be resolved.
        profile: String,
        /// The profiles the store does know about.
        known: Vec<String>,
    },

    /// A value has the wrong shape (not an integer, not an identifier...).
    #[error("invalid value for '{field}': {message}")]
    InvalidValue {
        /// The field holding the invalid value.
        field: String,
        /// A description of what was expected.
        message: String,
    },

    /// A framework reference could not be satisfied by the injected defaults.
    #[error("unresolved framework reference '{reference}' for '{field}'")]
    UnresolvedReference {
        /// The field that holds the reference.
        field: String,
        /// The reference text, e.g. `flutter.minSdkVersion`.
        reference: String,
    },

    /// A configuration source exists but could not be parsed.
    #[error("invalid configuration source {}: {message}", path.display())]
    InvalidSource {
        /// The file that failed to parse.
        path: PathBuf,
        /// The parser message.
        message: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization failed.
    #[error("configuration error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization failed.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

fn known_list(known: &[String]) -> String {
    if known.is_empty() {
        "none".to_string()
    } else {
        known.join(", ")
    }
}

impl Error {
    /// The field a resolution error refers to, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use droidconf::Error;
    ///
    /// let err = Error::MissingField { field: "applicationId".into() };
    /// assert_eq!(err.field(), Some("applicationId"));
    /// ```
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field }
            | Self::InvalidRange { field, .. }
            | Self::InconsistentOption { field, .. }
            | Self::InvalidValue { field, .. }
            | Self::UnresolvedReference { field, .. } => Some(field),
            Self::UnresolvedSigningProfile { .. } => Some("signingConfigRef"),
            _ => None,
        }
    }

    /// Check if the error is a deterministic configuration error.
    ///
    /// Re-running without changing the configuration reproduces these.
    #[must_use]
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::InvalidRange { .. }
                | Self::InconsistentOption { .. }
                | Self::UnresolvedSigningProfile { .. }
                | Self::InvalidValue { .. }
                | Self::UnresolvedReference { .. }
        )
    }
}
