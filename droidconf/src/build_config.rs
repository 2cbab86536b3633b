//! The resolved, immutable build configuration.

use serde::Serialize;

use crate::dependency::{Dependency, DESUGARING_CONFIGURATION};
use crate::error::{Error, Result};
use crate::java::{JavaCompatibility, JavaVersion};
use crate::sdk::SdkLevel;
use crate::signing::SigningProfileStore;

/// Normalized build configuration handed to the build executor.
///
/// Only [`ConfigResolver`](crate::ConfigResolver) constructs this type, and
/// it has no setters: once resolved it is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub(crate) application_id: String,
    pub(crate) namespace: String,
    pub(crate) min_sdk: SdkLevel,
    pub(crate) target_sdk: SdkLevel,
    pub(crate) compile_sdk: SdkLevel,
    pub(crate) ndk_version: Option<String>,
    pub(crate) version_code: u32,
    pub(crate) version_name: String,
    pub(crate) java_compatibility_level: JavaVersion,
    pub(crate) java: JavaCompatibility,
    pub(crate) desugaring_enabled: bool,
    pub(crate) desugaring_dependency: Option<String>,
    #[serde(skip)]
    pub(crate) desugaring_library: Option<Dependency>,
    pub(crate) signing_config_ref: String,
    pub(crate) build_types: Vec<BuildType>,
    pub(crate) dependencies: Vec<Dependency>,
}

/// A resolved build type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildType {
    pub(crate) name: String,
    pub(crate) signing_config_ref: String,
    pub(crate) minify_enabled: bool,
    pub(crate) debuggable: bool,
}

impl BuildType {
    /// Build type name (`release`, `debug`, ...).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Signing profile, inherited from the top level when not set.
    #[must_use]
    pub fn signing_config_ref(&self) -> &str {
        &self.signing_config_ref
    }

    /// Whether code shrinking is on.
    #[must_use]
    pub fn minify_enabled(&self) -> bool {
        self.minify_enabled
    }

    /// Whether the artifact is debuggable.
    #[must_use]
    pub fn debuggable(&self) -> bool {
        self.debuggable
    }
}

impl BuildConfig {
    /// Reverse-domain application identifier.
    #[must_use]
    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    /// Code namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Minimum SDK level.
    #[must_use]
    pub fn min_sdk(&self) -> SdkLevel {
        self.min_sdk
    }

    /// Target SDK level.
    #[must_use]
    pub fn target_sdk(&self) -> SdkLevel {
        self.target_sdk
    }

    /// Compile SDK level.
    #[must_use]
    pub fn compile_sdk(&self) -> SdkLevel {
        self.compile_sdk
    }

    /// NDK version, if set.
    #[must_use]
    pub fn ndk_version(&self) -> Option<&str> {
        self.ndk_version.as_deref()
    }

    /// Version code.
    #[must_use]
    pub fn version_code(&self) -> u32 {
        self.version_code
    }

    /// Version name.
    #[must_use]
    pub fn version_name(&self) -> &str {
        &self.version_name
    }

    /// Java compatibility level (the target compatibility).
    #[must_use]
    pub fn java_compatibility_level(&self) -> JavaVersion {
        self.java_compatibility_level
    }

    /// Source, target and JVM target levels.
    #[must_use]
    pub fn java(&self) -> JavaCompatibility {
        self.java
    }

    /// Whether core library desugaring is on.
    #[must_use]
    pub fn desugaring_enabled(&self) -> bool {
        self.desugaring_enabled
    }

    /// Desugaring library coordinate as written in the source.
    #[must_use]
    pub fn desugaring_dependency(&self) -> Option<&str> {
        self.desugaring_dependency.as_deref()
    }

    /// Default signing profile reference.
    #[must_use]
    pub fn signing_config_ref(&self) -> &str {
        &self.signing_config_ref
    }

    /// Declared build types, ordered by name.
    #[must_use]
    pub fn build_types(&self) -> &[BuildType] {
        &self.build_types
    }

    /// Look up a build type.
    #[must_use]
    pub fn build_type(&self, name: &str) -> Option<&BuildType> {
        self.build_types.iter().find(|bt| bt.name == name)
    }

    /// Declared dependencies, in source order, duplicates preserved.
    #[must_use]
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Declared dependencies followed by the desugaring library.
    ///
    /// The desugaring library only appears when desugaring is enabled and is
    /// listed under the `coreLibraryDesugaring` configuration.
    #[must_use]
    pub fn all_dependencies(&self) -> Vec<Dependency> {
        let mut all = self.dependencies.clone();
        if self.desugaring_enabled {
            if let Some(library) = &self.desugaring_library {
                debug_assert_eq!(library.configuration(), DESUGARING_CONFIGURATION);
                all.push(library.clone());
            }
        }
        all
    }

    /// Check every signing reference against `store`.
    ///
    /// The top-level reference is checked first, then each build type in
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedSigningProfile`] for the first reference
    /// the store does not know.
    pub fn verify_signing(&self, store: &dyn SigningProfileStore) -> Result<()> {
        let references = std::iter::once(self.signing_config_ref.as_str()).chain(
            self.build_types
                .iter()
                .map(|bt| bt.signing_config_ref.as_str()),
        );

        for profile in references {
            if !store.contains(profile) {
                return Err(Error::UnresolvedSigningProfile {
                    profile: profile.to_string(),
                    known: store.names(),
                });
            }
        }

        log::debug!(
            "signing references for {} resolved against store",
            self.application_id
        );
        Ok(())
    }
}
