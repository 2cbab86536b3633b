//! SDK levels and framework-supplied defaults.
//!
//! The application framework publishes values such as its minimum SDK level
//! at build time. Instead of looking those up from ambient state, callers
//! build an [`SdkDefaults`] and hand it to the resolver, which substitutes
//! it wherever the source says `flutter.<property>`.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Namespace prefix of framework references in a source tree.
pub const FRAMEWORK_NAMESPACE: &str = "flutter";

/// A valid platform API level (1 and up).
///
/// # Examples
///
/// ```
/// use droidconf::SdkLevel;
///
/// let level = SdkLevel::try_from(34).unwrap();
/// assert_eq!(level.value(), 34);
///
/// assert!(SdkLevel::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SdkLevel(u32);

impl SdkLevel {
    /// The lowest API level the platform ever shipped.
    pub const MIN: u32 = 1;

    /// Returns the underlying API level.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for SdkLevel {
    type Error = InvalidSdkLevelError;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        if value < Self::MIN {
            Err(InvalidSdkLevelError {
                value,
                reason: format!("SDK level must be >= {}", Self::MIN),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Display for SdkLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid SDK levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSdkLevelError {
    /// The rejected level.
    pub value: u32,
    /// The reason the level is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidSdkLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid SDK level {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidSdkLevelError {}

/// A property the framework publishes for the native build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameworkProperty {
    /// `flutter.minSdkVersion`
    MinSdkVersion,
    /// `flutter.targetSdkVersion`
    TargetSdkVersion,
    /// `flutter.compileSdkVersion`
    CompileSdkVersion,
    /// `flutter.ndkVersion`
    NdkVersion,
    /// `flutter.versionCode`
    VersionCode,
    /// `flutter.versionName`
    VersionName,
}

impl FrameworkProperty {
    /// Parse a reference such as `flutter.minSdkVersion`.
    ///
    /// Returns `None` when the text is not in the framework namespace at all.
    /// A namespaced but unknown property is returned as `Some(Err(..))` so
    /// callers can report it instead of treating it as a literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use droidconf::sdk::FrameworkProperty;
    ///
    /// assert_eq!(
    ///     FrameworkProperty::parse_reference("flutter.targetSdkVersion"),
    ///     Some(Ok(FrameworkProperty::TargetSdkVersion))
    /// );
    /// assert_eq!(FrameworkProperty::parse_reference("34"), None);
    /// assert!(matches!(FrameworkProperty::parse_reference("flutter.bogus"), Some(Err(_))));
    /// ```
    #[must_use]
    pub fn parse_reference(text: &str) -> Option<std::result::Result<Self, String>> {
        let name = text
            .trim()
            .strip_prefix(FRAMEWORK_NAMESPACE)?
            .strip_prefix('.')?;

        Some(match name {
            "minSdkVersion" => Ok(Self::MinSdkVersion),
            "targetSdkVersion" => Ok(Self::TargetSdkVersion),
            "compileSdkVersion" => Ok(Self::CompileSdkVersion),
            "ndkVersion" => Ok(Self::NdkVersion),
            "versionCode" => Ok(Self::VersionCode),
            "versionName" => Ok(Self::VersionName),
            other => Err(format!("unknown framework property '{other}'")),
        })
    }
}

impl fmt::Display for FrameworkProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MinSdkVersion => "minSdkVersion",
            Self::TargetSdkVersion => "targetSdkVersion",
            Self::CompileSdkVersion => "compileSdkVersion",
            Self::NdkVersion => "ndkVersion",
            Self::VersionCode => "versionCode",
            Self::VersionName => "versionName",
        };
        write!(f, "{FRAMEWORK_NAMESPACE}.{name}")
    }
}

/// Concrete values for framework references, injected into the resolver.
///
/// # Examples
///
/// ```
/// use droidconf::sdk::{FrameworkProperty, SdkDefaults};
///
/// let defaults = SdkDefaults {
///     min_sdk: Some(21),
///     target_sdk: Some(34),
///     compile_sdk: Some(34),
///     ..Default::default()
/// };
/// assert_eq!(defaults.lookup_integer(FrameworkProperty::MinSdkVersion), Some(21));
/// assert_eq!(defaults.lookup_text(FrameworkProperty::NdkVersion), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SdkDefaults {
    /// Value of `flutter.minSdkVersion`.
    pub min_sdk: Option<u32>,
    /// Value of `flutter.targetSdkVersion`.
    pub target_sdk: Option<u32>,
    /// Value of `flutter.compileSdkVersion`.
    pub compile_sdk: Option<u32>,
    /// Value of `flutter.ndkVersion`.
    pub ndk_version: Option<String>,
    /// Value of `flutter.versionCode`.
    pub version_code: Option<u32>,
    /// Value of `flutter.versionName`.
    pub version_name: Option<String>,
}

impl SdkDefaults {
    /// Look up an integer-valued property.
    ///
    /// Text properties (`ndkVersion`, `versionName`) never resolve here.
    #[must_use]
    pub fn lookup_integer(&self, property: FrameworkProperty) -> Option<u32> {
        match property {
            FrameworkProperty::MinSdkVersion => self.min_sdk,
            FrameworkProperty::TargetSdkVersion => self.target_sdk,
            FrameworkProperty::CompileSdkVersion => self.compile_sdk,
            FrameworkProperty::VersionCode => self.version_code,
            FrameworkProperty::NdkVersion | FrameworkProperty::VersionName => None,
        }
    }

    /// Look up any property as text.
    #[must_use]
    pub fn lookup_text(&self, property: FrameworkProperty) -> Option<String> {
        match property {
            FrameworkProperty::NdkVersion => self.ndk_version.clone(),
            FrameworkProperty::VersionName => self.version_name.clone(),
            other => self.lookup_integer(other).map(|n| n.to_string()),
        }
    }

    /// Overlay `other` on top of `self`; values set in `other` win.
    #[must_use]
    pub fn overlay(self, other: SdkDefaults) -> SdkDefaults {
        SdkDefaults {
            min_sdk: other.min_sdk.or(self.min_sdk),
            target_sdk: other.target_sdk.or(self.target_sdk),
            compile_sdk: other.compile_sdk.or(self.compile_sdk),
            ndk_version: other.ndk_version.or(self.ndk_version),
            version_code: other.version_code.or(self.version_code),
            version_name: other.version_name.or(self.version_name),
        }
    }

    /// Load defaults from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML
    /// for this structure.
    pub fn load_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read SDK defaults: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::InvalidSource {
            path: path.to_path_buf(),
            message: format!("Invalid YAML: {e}"),
        })
    }
}
