//! Configuration validation.
//!
//! Field-level rules shared by the resolver: identifiers, SDK ordering,
//! version bounds, Java levels and the desugaring/signing options.

use crate::dependency::{Dependency, DESUGARING_CONFIGURATION};
use crate::error::{Error, Result};
use crate::java::JavaCompatibility;
use crate::sdk::SdkLevel;

/// Largest version code the Play Store accepts.
pub const MAX_VERSION_CODE: u32 = 2_100_000_000;

/// Validates resolved configuration values.
///
/// # Examples
///
/// ```
/// use droidconf::config::ConfigValidator;
///
/// ConfigValidator::validate_identifier("applicationId", "com.example.app").unwrap();
/// assert!(ConfigValidator::validate_identifier("applicationId", "example").is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Require a non-blank string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if the value is absent or only
    /// whitespace.
    pub fn require_text<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(Error::MissingField {
                field: field.into(),
            }),
        }
    }

    /// Validate a reverse-domain identifier (`applicationId`, `namespace`).
    ///
    /// At least two dot-separated segments; each segment starts with an
    /// ASCII letter and contains only ASCII alphanumerics and `_`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] describing the first broken rule.
    pub fn validate_identifier(field: &str, value: &str) -> Result<()> {
        let segments: Vec<&str> = value.split('.').collect();

        if segments.len() < 2 {
            return Err(Error::InvalidValue {
                field: field.into(),
                message: format!("'{value}' must have at least two segments (e.g. com.example)"),
            });
        }

        for segment in segments {
            let Some(first) = segment.chars().next() else {
                return Err(Error::InvalidValue {
                    field: field.into(),
                    message: format!("'{value}' contains an empty segment"),
                });
            };

            if !first.is_ascii_alphabetic() {
                return Err(Error::InvalidValue {
                    field: field.into(),
                    message: format!("segment '{segment}' must start with a letter"),
                });
            }

            if !segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(Error::InvalidValue {
                    field: field.into(),
                    message: format!(
                        "segment '{segment}' may only contain letters, digits and underscores"
                    ),
                });
            }
        }

        Ok(())
    }

    /// Validate `minSdk <= targetSdk <= compileSdk`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] naming the lower field of the broken
    /// pair.
    pub fn validate_sdk_order(min: SdkLevel, target: SdkLevel, compile: SdkLevel) -> Result<()> {
        if min > target {
            return Err(Error::InvalidRange {
                field: "minSdk".into(),
                message: format!("minSdk ({min}) must be <= targetSdk ({target})"),
            });
        }

        if target > compile {
            return Err(Error::InvalidRange {
                field: "targetSdk".into(),
                message: format!("targetSdk ({target}) must be <= compileSdk ({compile})"),
            });
        }

        Ok(())
    }

    /// Validate a version code is in `1..=MAX_VERSION_CODE`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if it is not.
    pub fn validate_version_code(code: u32) -> Result<()> {
        if code == 0 || code > MAX_VERSION_CODE {
            return Err(Error::InvalidRange {
                field: "versionCode".into(),
                message: format!("{code} is outside 1..={MAX_VERSION_CODE}"),
            });
        }
        Ok(())
    }

    /// Validate Java levels agree.
    ///
    /// Source compatibility may not exceed target compatibility, and the
    /// Kotlin JVM target must equal the target compatibility.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InconsistentOption`] on disagreement.
    pub fn validate_java(java: &JavaCompatibility) -> Result<()> {
        if java.source_compatibility > java.target_compatibility {
            return Err(Error::InconsistentOption {
                field: "java.sourceCompatibility".into(),
                message: format!(
                    "sourceCompatibility ({}) must be <= targetCompatibility ({})",
                    java.source_compatibility, java.target_compatibility
                ),
            });
        }

        if java.jvm_target != java.target_compatibility {
            return Err(Error::InconsistentOption {
                field: "java.jvmTarget".into(),
                message: format!(
                    "jvmTarget ({}) must equal targetCompatibility ({})",
                    java.jvm_target, java.target_compatibility
                ),
            });
        }

        Ok(())
    }

    /// Validate the desugaring option pair.
    ///
    /// Returns the parsed desugaring library when desugaring is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InconsistentOption`] when desugaring is enabled
    /// without a dependency, or [`Error::InvalidValue`] when the dependency
    /// is not a `name:version` coordinate.
    pub fn validate_desugaring(
        enabled: bool,
        dependency: Option<&str>,
    ) -> Result<Option<Dependency>> {
        let dependency = dependency.map(str::trim).filter(|d| !d.is_empty());

        match (enabled, dependency) {
            (true, None) => Err(Error::InconsistentOption {
                field: "desugaringDependency".into(),
                message: "must be set when desugaringEnabled is true".into(),
            }),
            (true, Some(coordinate)) => Dependency::parse(DESUGARING_CONFIGURATION, coordinate)
                .map(Some)
                .map_err(|e| Error::InvalidValue {
                    field: "desugaringDependency".into(),
                    message: e.to_string(),
                }),
            (false, _) => Ok(None),
        }
    }
}
