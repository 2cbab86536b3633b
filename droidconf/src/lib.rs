#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # droidconf
//!
//! Declarative build configuration for mobile application packaging.
//!
//! A project describes its Android build in YAML: application identity,
//! SDK levels, Java compatibility, desugaring, signing and dependencies.
//! droidconf layers those files, validates every cross-field invariant and
//! hands the build tool an immutable, normalized [`BuildConfig`].
//!
//! ## Core Types
//!
//! - [`ConfigResolver`]: turns a [`config::BuildSource`] into a [`BuildConfig`]
//! - [`SdkDefaults`]: framework-supplied values for `flutter.*` references
//! - [`SdkLevel`], [`JavaVersion`], [`Dependency`]: validated value types
//! - [`signing::SigningProfileStore`]: where signing references are checked
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use droidconf::config::SourceLoader;
//! use droidconf::{ConfigResolver, JavaVersion, SdkDefaults};
//!
//! let source = SourceLoader::load_str(
//!     r#"
//! applicationId: com.example.meditation_app
//! minSdk: flutter.minSdkVersion
//! targetSdk: 34
//! compileSdk: 34
//! versionCode: 1
//! versionName: "1.0"
//! desugaringEnabled: true
//! desugaringDependency: "com.android.tools:desugar_jdk_libs:2.0.4"
//! buildTypes:
//!   release:
//!     signingConfig: debug
//! "#,
//! )
//! .unwrap();
//!
//! let defaults = SdkDefaults { min_sdk: Some(21), ..Default::default() };
//! let config = ConfigResolver::new(defaults).resolve(&source).unwrap();
//!
//! assert_eq!(config.min_sdk().value(), 21);
//! assert_eq!(config.java_compatibility_level(), JavaVersion::Java11);
//! assert_eq!(config.signing_config_ref(), "debug");
//! ```

pub mod build_config;
pub mod config;
pub mod dependency;
pub mod error;
pub mod java;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod sdk;
pub mod signing;

// Re-export key types at crate root for convenience
pub use build_config::{BuildConfig, BuildType};
pub use dependency::Dependency;
pub use error::{Error, Result};
pub use java::{JavaCompatibility, JavaVersion};
pub use logging::{init_logger, LogLevel, Logger};
pub use resolver::ConfigResolver;
pub use sdk::{SdkDefaults, SdkLevel};
pub use signing::{SigningProfileStore, SigningProfiles};
