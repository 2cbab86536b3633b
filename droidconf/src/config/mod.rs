//! Source tree handling for droidconf.
//!
//! This module turns declarative YAML into a single [`BuildSource`] ready
//! for resolution:
//! - YAML source files (user `config.yaml` and project `droidconf.yaml`)
//! - Environment variable overrides
//! - Programmatic layers via [`SourceBuilder`]
//! - Field validation shared with the resolver
//!
//! # Source Precedence
//!
//! Layers are merged with the following precedence (highest to lowest):
//!
//! 1. Programmatic layers (via `SourceBuilder::with_source`)
//! 2. Environment variables (`DROIDCONF_*`)
//! 3. Private project source (`droidconf.local.yaml`)
//! 4. Project source (`droidconf.yaml`)
//! 5. User source (`~/.droidconf/config.yaml`)
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use droidconf::config::SourceBuilder;
//! use std::path::Path;
//!
//! let source = SourceBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project/android"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! Resolving a programmatic source:
//!
//! ```
//! use droidconf::config::{BuildSource, SettingValue, SourceBuilder};
//! use droidconf::{ConfigResolver, SdkDefaults};
//!
//! let source = SourceBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_source(BuildSource {
//!         application_id: Some("com.example.app".to_string()),
//!         min_sdk: Some(SettingValue::Integer(21)),
//!         target_sdk: Some(SettingValue::Integer(34)),
//!         compile_sdk: Some(SettingValue::Integer(34)),
//!         version_code: Some(SettingValue::Integer(1)),
//!         version_name: Some("1.0".into()),
//!         signing_config_ref: Some("debug".to_string()),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! let config = ConfigResolver::new(SdkDefaults::default()).resolve(&source).unwrap();
//! assert_eq!(config.namespace(), "com.example.app");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::SourceBuilder;
pub use environment::EnvironmentOverrides;
pub use loader::{default_data_dir, SourceLayer, SourceLoader};
pub use merger::SourceMerger;
pub use schema::{
    BuildSource, BuildTypeSource, DependencySpec, JavaOptions, SettingValue, SigningConfigSource,
};
pub use validator::ConfigValidator;
