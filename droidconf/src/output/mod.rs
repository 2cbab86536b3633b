//! Output formatting for resolved build configurations.
//!
//! The build executor usually wants JSON or a `gradle.properties`-style
//! listing; people want the human summary.

mod formatters;

use std::fmt;
use std::str::FromStr;

use crate::{BuildConfig, Error, Result};

pub use formatters::{HumanFormatter, JsonFormatter, PropertiesFormatter, YamlFormatter};

/// Trait for rendering a [`BuildConfig`].
pub trait OutputFormatter {
    /// Render `config` as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, config: &BuildConfig) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use droidconf::output::OutputFormat;
///
/// let format = OutputFormat::parse("properties").unwrap();
/// assert_eq!(format, OutputFormat::Properties);
/// assert_eq!(format.to_string(), "properties");
/// assert!(OutputFormat::parse("xml").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
    /// Sorted `key=value` lines.
    Properties,
    /// Human-readable summary.
    #[default]
    Human,
}

impl OutputFormat {
    /// Every format, in the order they are listed in help text.
    pub const ALL: [Self; 4] = [Self::Json, Self::Yaml, Self::Properties, Self::Human];

    /// Parse a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] for an unknown name.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "properties" | "props" => Ok(Self::Properties),
            "human" | "text" => Ok(Self::Human),
            other => Err(Error::InvalidValue {
                field: "format".into(),
                message: format!("unknown output format '{other}' (expected json, yaml, properties or human)"),
            }),
        }
    }

    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
            Self::Properties => Box::new(PropertiesFormatter),
            Self::Human => Box::new(HumanFormatter),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Properties => write!(f, "properties"),
            Self::Human => write!(f, "human"),
        }
    }
}
