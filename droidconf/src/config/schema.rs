//! Source tree schema.
//!
//! This is the structured, declarative input to the resolver: the parsed
//! key/value tree before any validation. Every field is optional so that
//! several files can be layered; the resolver decides what is required.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::dependency::{Dependency, InvalidCoordinateError, DEFAULT_CONFIGURATION};

/// A scalar setting as written in the source.
///
/// Numeric settings may be written as YAML integers, as strings holding a
/// number, or as framework references like `flutter.minSdkVersion`.
///
/// # Examples
///
/// ```
/// use droidconf::config::SettingValue;
///
/// let value: SettingValue = serde_yaml::from_str("34").unwrap();
/// assert_eq!(value, SettingValue::Integer(34));
///
/// let value: SettingValue = serde_yaml::from_str("flutter.minSdkVersion").unwrap();
/// assert_eq!(value.to_string(), "flutter.minSdkVersion");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SettingValue {
    /// A YAML integer.
    Integer(i64),
    /// A YAML float such as `1.8`, kept as its shortest decimal rendering.
    Decimal(String),
    /// Any string.
    Text(String),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(s) | Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl Serialize for SettingValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Decimal(s) => match s.parse::<f64>() {
                Ok(n) => serializer.serialize_f64(n),
                Err(_) => serializer.serialize_str(s),
            },
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for SettingValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SettingVisitor;

        impl de::Visitor<'_> for SettingVisitor {
            type Value = SettingValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "an integer, a number or a string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<SettingValue, E> {
                Ok(SettingValue::Integer(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<SettingValue, E> {
                i64::try_from(v).map(SettingValue::Integer).map_err(E::custom)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<SettingValue, E> {
                Ok(SettingValue::Decimal(v.to_string()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<SettingValue, E> {
                Ok(SettingValue::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<SettingValue, E> {
                Ok(SettingValue::Text(v))
            }
        }

        deserializer.deserialize_any(SettingVisitor)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for SettingValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Complete source structure.
///
/// # Examples
///
/// ```
/// use droidconf::config::{BuildSource, SettingValue};
///
/// let source = BuildSource {
///     application_id: Some("com.example.app".to_string()),
///     min_sdk: Some(SettingValue::Integer(21)),
///     ..Default::default()
/// };
/// assert_eq!(source.application_id.as_deref(), Some("com.example.app"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildSource {
    /// Reverse-domain application identifier.
    pub application_id: Option<String>,

    /// Code namespace; defaults to the application identifier.
    pub namespace: Option<String>,

    /// Minimum supported SDK level.
    pub min_sdk: Option<SettingValue>,

    /// SDK level the app is tested against.
    pub target_sdk: Option<SettingValue>,

    /// SDK level the app is compiled against.
    pub compile_sdk: Option<SettingValue>,

    /// NDK version string.
    pub ndk_version: Option<SettingValue>,

    /// Positive integer version code.
    pub version_code: Option<SettingValue>,

    /// User-visible version name.
    pub version_name: Option<SettingValue>,

    /// Shorthand setting source, target and JVM target at once.
    pub java_compatibility_level: Option<SettingValue>,

    /// Per-level Java overrides.
    pub java: Option<JavaOptions>,

    /// Enable core library desugaring.
    pub desugaring_enabled: Option<bool>,

    /// Coordinate of the desugaring library.
    pub desugaring_dependency: Option<String>,

    /// Signing profile used by default.
    pub signing_config_ref: Option<String>,

    /// Signing profiles declared by this source.
    pub signing_configs: Option<BTreeMap<String, SigningConfigSource>>,

    /// Build types, keyed by name.
    pub build_types: Option<BTreeMap<String, BuildTypeSource>>,

    /// Declared dependencies, in order.
    pub dependencies: Option<Vec<DependencySpec>>,
}

/// Java compatibility overrides.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JavaOptions {
    /// `sourceCompatibility`
    pub source_compatibility: Option<SettingValue>,

    /// `targetCompatibility`
    pub target_compatibility: Option<SettingValue>,

    /// Kotlin `jvmTarget`
    pub jvm_target: Option<SettingValue>,
}

/// A signing profile declared in the source.
///
/// Only the reference data is kept; credentials stay with platform tooling.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SigningConfigSource {
    /// Keystore location.
    pub store_file: Option<PathBuf>,

    /// Key alias inside the keystore.
    pub key_alias: Option<String>,
}

/// A build type declared in the source.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildTypeSource {
    /// Signing profile for this build type.
    pub signing_config: Option<String>,

    /// Enable code shrinking.
    pub minify_enabled: Option<bool>,

    /// Mark the artifact debuggable.
    pub debuggable: Option<bool>,
}

/// A dependency entry, either a bare coordinate or a detailed map.
///
/// # Examples
///
/// ```
/// use droidconf::config::DependencySpec;
///
/// let spec: DependencySpec = serde_yaml::from_str("\"okio:3.6.0\"").unwrap();
/// assert_eq!(spec, DependencySpec::Coordinate("okio:3.6.0".to_string()));
///
/// let spec: DependencySpec =
///     serde_yaml::from_str("{ configuration: api, name: okio, version: 3.6.0 }").unwrap();
/// assert!(matches!(spec, DependencySpec::Detailed { .. }));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DependencySpec {
    /// `name:version` with the default configuration.
    Coordinate(String),
    /// Explicit parts.
    Detailed {
        /// Gradle configuration; defaults to `implementation`.
        configuration: Option<String>,
        /// Dependency name.
        name: String,
        /// Dependency version.
        version: String,
    },
}

impl DependencySpec {
    /// Convert to a validated [`Dependency`].
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate is malformed or a part is blank.
    pub fn to_dependency(&self) -> Result<Dependency, InvalidCoordinateError> {
        match self {
            Self::Coordinate(coordinate) => Dependency::parse(DEFAULT_CONFIGURATION, coordinate),
            Self::Detailed {
                configuration,
                name,
                version,
            } => Dependency::new(
                configuration.as_deref().unwrap_or(DEFAULT_CONFIGURATION),
                name,
                version,
            ),
        }
    }
}
