//! Environment variable handling for source overrides.
//!
//! `DROIDCONF_*` variables override values from source files, so CI jobs can
//! bump a version code or point at a different signing profile without
//! editing the project.

use crate::config::schema::{BuildSource, SettingValue};
use crate::error::{Error, Result};
use std::env;

/// Environment variable overriding `applicationId`.
pub const ENV_APPLICATION_ID: &str = "DROIDCONF_APPLICATION_ID";
/// Environment variable overriding `namespace`.
pub const ENV_NAMESPACE: &str = "DROIDCONF_NAMESPACE";
/// Environment variable overriding `minSdk`.
pub const ENV_MIN_SDK: &str = "DROIDCONF_MIN_SDK";
/// Environment variable overriding `targetSdk`.
pub const ENV_TARGET_SDK: &str = "DROIDCONF_TARGET_SDK";
/// Environment variable overriding `compileSdk`.
pub const ENV_COMPILE_SDK: &str = "DROIDCONF_COMPILE_SDK";
/// Environment variable overriding `versionCode`.
pub const ENV_VERSION_CODE: &str = "DROIDCONF_VERSION_CODE";
/// Environment variable overriding `versionName`.
pub const ENV_VERSION_NAME: &str = "DROIDCONF_VERSION_NAME";
/// Environment variable overriding `signingConfigRef`.
pub const ENV_SIGNING_CONFIG: &str = "DROIDCONF_SIGNING_CONFIG";
/// Environment variable overriding `desugaringEnabled`.
pub const ENV_DESUGARING_ENABLED: &str = "DROIDCONF_DESUGARING_ENABLED";
/// Environment variable overriding `desugaringDependency`.
pub const ENV_DESUGARING_DEPENDENCY: &str = "DROIDCONF_DESUGARING_DEPENDENCY";

/// Every variable [`EnvironmentOverrides`] reads.
pub const ALL_VARIABLES: [&str; 10] = [
    ENV_APPLICATION_ID,
    ENV_NAMESPACE,
    ENV_MIN_SDK,
    ENV_TARGET_SDK,
    ENV_COMPILE_SDK,
    ENV_VERSION_CODE,
    ENV_VERSION_NAME,
    ENV_SIGNING_CONFIG,
    ENV_DESUGARING_ENABLED,
    ENV_DESUGARING_DEPENDENCY,
];

/// Applies environment variable overrides to a source tree.
///
/// # Examples
///
/// ```no_run
/// use droidconf::config::{BuildSource, EnvironmentOverrides};
///
/// let mut source = BuildSource::default();
/// EnvironmentOverrides::apply_overrides(&mut source).unwrap();
/// ```
pub struct EnvironmentOverrides;

impl EnvironmentOverrides {
    /// Apply every set `DROIDCONF_*` variable to `source`.
    ///
    /// Numeric overrides are stored as text and parsed by the resolver like
    /// any other source value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if `DROIDCONF_DESUGARING_ENABLED` is
    /// not a recognized boolean.
    pub fn apply_overrides(source: &mut BuildSource) -> Result<()> {
        if let Ok(id) = env::var(ENV_APPLICATION_ID) {
            source.application_id = Some(id);
        }

        if let Ok(namespace) = env::var(ENV_NAMESPACE) {
            source.namespace = Some(namespace);
        }

        for (variable, slot) in [
            (ENV_MIN_SDK, &mut source.min_sdk),
            (ENV_TARGET_SDK, &mut source.target_sdk),
            (ENV_COMPILE_SDK, &mut source.compile_sdk),
            (ENV_VERSION_CODE, &mut source.version_code),
            (ENV_VERSION_NAME, &mut source.version_name),
        ] {
            if let Ok(value) = env::var(variable) {
                log::debug!("{variable} overrides source value");
                *slot = Some(SettingValue::Text(value));
            }
        }

        if let Ok(profile) = env::var(ENV_SIGNING_CONFIG) {
            source.signing_config_ref = Some(profile);
        }

        if let Ok(val) = env::var(ENV_DESUGARING_ENABLED) {
            source.desugaring_enabled = Some(Self::parse_bool(ENV_DESUGARING_ENABLED, &val)?);
        }

        if let Ok(dependency) = env::var(ENV_DESUGARING_DEPENDENCY) {
            source.desugaring_dependency = Some(dependency);
        }

        Ok(())
    }

    /// Parse a boolean from environment variable text.
    pub(crate) fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::InvalidValue {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
