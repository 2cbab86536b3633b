//! Signing profile references.
//!
//! A build only names the signing profile it wants; the profile itself lives
//! in an external store. This module provides the store abstraction the
//! resolved configuration is checked against at consumption time.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::BuildSource;

/// Name of the profile the platform tooling always provides.
pub const DEBUG_PROFILE: &str = "debug";

/// A named signing profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningProfile {
    /// Profile name, as referenced by `signingConfigRef`.
    pub name: String,
    /// Keystore location, when declared.
    pub store_file: Option<PathBuf>,
    /// Key alias, when declared.
    pub key_alias: Option<String>,
}

impl SigningProfile {
    /// A profile with only a name.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            store_file: None,
            key_alias: None,
        }
    }
}

/// Trait for looking up signing profiles by name.
///
/// This seam lets the resolved configuration be checked against whatever
/// store the build tool keeps its credentials in.
///
/// # Examples
///
/// ```
/// use droidconf::signing::{SigningProfileStore, SigningProfiles};
///
/// let store = SigningProfiles::with_debug();
/// assert!(store.contains("debug"));
/// assert!(!store.contains("release"));
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait SigningProfileStore {
    /// Returns `true` if a profile with this name exists.
    fn contains(&self, name: &str) -> bool;

    /// All known profile names, for error reporting.
    fn names(&self) -> Vec<String>;
}

/// In-memory signing profile store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigningProfiles {
    profiles: BTreeMap<String, SigningProfile>,
}

impl SigningProfiles {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding only the platform `debug` profile.
    #[must_use]
    pub fn with_debug() -> Self {
        let mut store = Self::new();
        store.insert(SigningProfile::named(DEBUG_PROFILE));
        store
    }

    /// The `debug` profile plus every profile declared in `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use droidconf::config::{BuildSource, SigningConfigSource};
    /// use droidconf::signing::{SigningProfileStore, SigningProfiles};
    /// use std::collections::BTreeMap;
    ///
    /// let mut declared = BTreeMap::new();
    /// declared.insert("upload".to_string(), SigningConfigSource::default());
    /// let source = BuildSource {
    ///     signing_configs: Some(declared),
    ///     ..Default::default()
    /// };
    ///
    /// let store = SigningProfiles::from_source(&source);
    /// assert_eq!(store.names(), vec!["debug".to_string(), "upload".to_string()]);
    /// ```
    #[must_use]
    pub fn from_source(source: &BuildSource) -> Self {
        let mut store = Self::with_debug();
        if let Some(declared) = &source.signing_configs {
            for (name, config) in declared {
                store.insert(SigningProfile {
                    name: name.clone(),
                    store_file: config.store_file.clone(),
                    key_alias: config.key_alias.clone(),
                });
            }
        }
        store
    }

    /// Add or replace a profile.
    pub fn insert(&mut self, profile: SigningProfile) {
        self.profiles.insert(profile.name.clone(), profile);
    }

    /// Look up a profile.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SigningProfile> {
        self.profiles.get(name)
    }
}

impl SigningProfileStore for SigningProfiles {
    fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }
}
