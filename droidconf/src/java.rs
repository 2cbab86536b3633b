//! Java language compatibility levels.

use std::fmt;

use serde::{Serialize, Serializer};

/// A Java compatibility level accepted by the Android toolchain.
///
/// # Examples
///
/// ```
/// use droidconf::JavaVersion;
///
/// assert_eq!(JavaVersion::parse("VERSION_11").unwrap(), JavaVersion::Java11);
/// assert_eq!(JavaVersion::parse("1.8").unwrap(), JavaVersion::Java8);
/// assert!(JavaVersion::Java8 < JavaVersion::Java17);
/// assert_eq!(JavaVersion::Java17.to_string(), "17");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JavaVersion {
    /// Java 8 (`1.8`).
    Java8,
    /// Java 11.
    Java11,
    /// Java 17.
    Java17,
    /// Java 21.
    Java21,
}

impl JavaVersion {
    /// Level used when the source does not set one.
    pub const DEFAULT: Self = Self::Java11;

    /// The feature release number (8, 11, 17, 21).
    #[must_use]
    pub const fn feature(self) -> u32 {
        match self {
            Self::Java8 => 8,
            Self::Java11 => 11,
            Self::Java17 => 17,
            Self::Java21 => 21,
        }
    }

    /// The matching `JavaVersion.VERSION_*` constant name.
    #[must_use]
    pub const fn gradle_constant(self) -> &'static str {
        match self {
            Self::Java8 => "VERSION_1_8",
            Self::Java11 => "VERSION_11",
            Self::Java17 => "VERSION_17",
            Self::Java21 => "VERSION_21",
        }
    }

    /// Parses a compatibility level.
    ///
    /// Accepts `8`, `1.8`, `11`, `17`, `21`, the Gradle constant names
    /// (`VERSION_1_8`, `VERSION_11`, ...) and the same names prefixed with
    /// `JavaVersion.`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a supported level.
    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        let bare = trimmed.strip_prefix("JavaVersion.").unwrap_or(trimmed);
        let normalized = match bare.strip_prefix("VERSION_") {
            Some(rest) => rest.replace('_', "."),
            None => bare.to_string(),
        };

        match normalized.as_str() {
            "8" | "1.8" => Ok(Self::Java8),
            "11" => Ok(Self::Java11),
            "17" => Ok(Self::Java17),
            "21" => Ok(Self::Java21),
            _ => Err(format!(
                "unsupported Java compatibility level '{s}' (expected 1.8, 11, 17 or 21)"
            )),
        }
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Java8 => write!(f, "1.8"),
            other => write!(f, "{}", other.feature()),
        }
    }
}

impl Serialize for JavaVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Source, target and Kotlin JVM target levels of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaCompatibility {
    /// `sourceCompatibility`
    pub source_compatibility: JavaVersion,
    /// `targetCompatibility`
    pub target_compatibility: JavaVersion,
    /// `kotlinOptions.jvmTarget`
    pub jvm_target: JavaVersion,
}

impl JavaCompatibility {
    /// All three levels set to `level`.
    #[must_use]
    pub const fn uniform(level: JavaVersion) -> Self {
        Self {
            source_compatibility: level,
            target_compatibility: level,
            jvm_target: level,
        }
    }
}

impl Default for JavaCompatibility {
    fn default() -> Self {
        Self::uniform(JavaVersion::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(JavaVersion::parse("8").unwrap(), JavaVersion::Java8);
        assert_eq!(JavaVersion::parse("11").unwrap(), JavaVersion::Java11);
        assert_eq!(JavaVersion::parse(" 17 ").unwrap(), JavaVersion::Java17);
        assert_eq!(JavaVersion::parse("21").unwrap(), JavaVersion::Java21);
    }

    #[test]
    fn test_parse_gradle_constants() {
        assert_eq!(
            JavaVersion::parse("VERSION_1_8").unwrap(),
            JavaVersion::Java8
        );
        assert_eq!(
            JavaVersion::parse("JavaVersion.VERSION_11").unwrap(),
            JavaVersion::Java11
        );
    }

    #[test]
    fn test_parse_rejects_unsupported() {
        assert!(JavaVersion::parse("9").is_err());
        assert!(JavaVersion::parse("VERSION_12").is_err());
        assert!(JavaVersion::parse("").is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for level in [
            JavaVersion::Java8,
            JavaVersion::Java11,
            JavaVersion::Java17,
            JavaVersion::Java21,
        ] {
            assert_eq!(JavaVersion::parse(&level.to_string()).unwrap(), level);
            assert_eq!(JavaVersion::parse(level.gradle_constant()).unwrap(), level);
        }
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&JavaCompatibility::uniform(JavaVersion::Java8)).unwrap();
        assert_eq!(
            json,
            r#"{"sourceCompatibility":"1.8","targetCompatibility":"1.8","jvmTarget":"1.8"}"#
        );
    }

    #[test]
    fn test_default_is_java_11() {
        let compat = JavaCompatibility::default();
        assert_eq!(compat.target_compatibility, JavaVersion::Java11);
    }
}
