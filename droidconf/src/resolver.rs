//! Resolution of a source tree into a [`BuildConfig`].
//!
//! Resolution is a single pass over an already-parsed [`BuildSource`]:
//! required keys are checked first, then values are parsed (substituting
//! framework references from the injected [`SdkDefaults`]), then the
//! cross-field invariants are enforced. Nothing is read from the
//! environment or the filesystem here.

use crate::build_config::{BuildConfig, BuildType};
use crate::config::schema::{BuildSource, SettingValue};
use crate::config::validator::ConfigValidator;
use crate::dependency::Dependency;
use crate::error::{Error, Result};
use crate::java::{JavaCompatibility, JavaVersion};
use crate::sdk::{FrameworkProperty, SdkDefaults, SdkLevel};
use crate::signing::SigningProfileStore;

#[cfg(test)]
mod proptests;

/// Build type whose signing profile stands in for a missing top-level one.
const RELEASE_BUILD_TYPE: &str = "release";

/// Build type that is debuggable unless told otherwise.
const DEBUG_BUILD_TYPE: &str = "debug";

/// Resolves source trees into validated build configurations.
///
/// # Examples
///
/// ```
/// use droidconf::config::BuildSource;
/// use droidconf::{ConfigResolver, SdkDefaults};
///
/// let source: BuildSource = serde_yaml::from_str(
///     r#"
/// applicationId: com.example.app
/// minSdk: 21
/// targetSdk: 34
/// compileSdk: 34
/// versionCode: 1
/// versionName: "1.0"
/// signingConfigRef: debug
/// "#,
/// )
/// .unwrap();
///
/// let config = ConfigResolver::new(SdkDefaults::default()).resolve(&source).unwrap();
/// assert_eq!(config.min_sdk().value(), 21);
/// assert_eq!(config.signing_config_ref(), "debug");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    defaults: SdkDefaults,
}

impl ConfigResolver {
    /// Create a resolver that substitutes framework references from
    /// `defaults`.
    #[must_use]
    pub fn new(defaults: SdkDefaults) -> Self {
        Self { defaults }
    }

    /// The injected framework defaults.
    #[must_use]
    pub fn defaults(&self) -> &SdkDefaults {
        &self.defaults
    }

    /// Resolve and validate `source`.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingField`] when a required key is absent or blank
    /// - [`Error::InvalidRange`] when the SDK ordering or a numeric bound is
    ///   violated
    /// - [`Error::InconsistentOption`] when options contradict each other
    /// - [`Error::InvalidValue`] / [`Error::UnresolvedReference`] when a value
    ///   cannot be parsed or substituted
    pub fn resolve(&self, source: &BuildSource) -> Result<BuildConfig> {
        let application_id = required("applicationId", source.application_id.as_ref())?;
        let min_sdk = required("minSdk", source.min_sdk.as_ref())?;
        let target_sdk = required("targetSdk", source.target_sdk.as_ref())?;
        let compile_sdk = required("compileSdk", source.compile_sdk.as_ref())?;
        let version_code = required("versionCode", source.version_code.as_ref())?;
        let version_name = required("versionName", source.version_name.as_ref())?;

        let application_id =
            ConfigValidator::require_text("applicationId", Some(application_id))?.to_string();
        ConfigValidator::validate_identifier("applicationId", &application_id)?;
        log::debug!("resolving build configuration for {application_id}");

        let namespace = match source.namespace.as_deref() {
            Some(ns) => {
                let ns = ConfigValidator::require_text("namespace", Some(ns))?;
                ConfigValidator::validate_identifier("namespace", ns)?;
                ns.to_string()
            }
            None => application_id.clone(),
        };

        let min_sdk = self.sdk_level("minSdk", min_sdk)?;
        let target_sdk = self.sdk_level("targetSdk", target_sdk)?;
        let compile_sdk = self.sdk_level("compileSdk", compile_sdk)?;
        ConfigValidator::validate_sdk_order(min_sdk, target_sdk, compile_sdk)?;

        let version_code = self.unsigned("versionCode", version_code)?;
        ConfigValidator::validate_version_code(version_code)?;

        let version_name = self.text("versionName", version_name)?;
        let version_name =
            ConfigValidator::require_text("versionName", Some(&version_name))?.to_string();

        let ndk_version = source
            .ndk_version
            .as_ref()
            .map(|v| self.text("ndkVersion", v))
            .transpose()?
            .filter(|v| !v.is_empty());

        let java = Self::java(source)?;
        ConfigValidator::validate_java(&java)?;

        let desugaring_enabled = source.desugaring_enabled.unwrap_or(false);
        let desugaring_library = ConfigValidator::validate_desugaring(
            desugaring_enabled,
            source.desugaring_dependency.as_deref(),
        )?;

        let signing_config_ref = Self::signing_config_ref(source)?;
        let build_types = Self::build_types(source, &signing_config_ref)?;
        let dependencies = Self::dependencies(source)?;

        log::debug!(
            "resolved {application_id}: sdk {min_sdk}..={compile_sdk} (target {target_sdk}), \
             java {}, {} dependencies, {} build types",
            java.target_compatibility,
            dependencies.len(),
            build_types.len()
        );

        Ok(BuildConfig {
            application_id,
            namespace,
            min_sdk,
            target_sdk,
            compile_sdk,
            ndk_version,
            version_code,
            version_name,
            java_compatibility_level: java.target_compatibility,
            java,
            desugaring_enabled,
            desugaring_dependency: source
                .desugaring_dependency
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            desugaring_library,
            signing_config_ref,
            build_types,
            dependencies,
        })
    }

    /// Resolve `source` and check its signing references against `store`.
    ///
    /// # Errors
    ///
    /// Any error from [`resolve`](Self::resolve), or
    /// [`Error::UnresolvedSigningProfile`].
    pub fn resolve_and_verify(
        &self,
        source: &BuildSource,
        store: &dyn SigningProfileStore,
    ) -> Result<BuildConfig> {
        let config = self.resolve(source)?;
        config.verify_signing(store)?;
        Ok(config)
    }

    /// Parse an integer setting, substituting framework references.
    fn integer(&self, field: &str, value: &SettingValue) -> Result<i64> {
        match value {
            SettingValue::Integer(n) => Ok(*n),
            SettingValue::Decimal(n) => Err(Error::InvalidValue {
                field: field.into(),
                message: format!("expected an integer, found {n}"),
            }),
            SettingValue::Text(text) => match FrameworkProperty::parse_reference(text) {
                Some(Ok(property)) => self
                    .defaults
                    .lookup_integer(property)
                    .map(i64::from)
                    .ok_or_else(|| Error::UnresolvedReference {
                        field: field.into(),
                        reference: text.trim().to_string(),
                    }),
                Some(Err(message)) => Err(Error::InvalidValue {
                    field: field.into(),
                    message,
                }),
                None => {
                    let trimmed = text.trim();
                    if trimmed.is_empty() {
                        return Err(Error::MissingField {
                            field: field.into(),
                        });
                    }
                    trimmed.parse().map_err(|_| Error::InvalidValue {
                        field: field.into(),
                        message: format!("expected an integer, found '{text}'"),
                    })
                }
            },
        }
    }

    fn unsigned(&self, field: &str, value: &SettingValue) -> Result<u32> {
        let n = self.integer(field, value)?;
        u32::try_from(n).map_err(|_| Error::InvalidRange {
            field: field.into(),
            message: format!("{n} is not a positive integer"),
        })
    }

    fn sdk_level(&self, field: &str, value: &SettingValue) -> Result<SdkLevel> {
        let n = self.unsigned(field, value)?;
        SdkLevel::try_from(n).map_err(|e| Error::InvalidRange {
            field: field.into(),
            message: e.to_string(),
        })
    }

    /// Render a text setting, substituting framework references.
    fn text(&self, field: &str, value: &SettingValue) -> Result<String> {
        match value {
            SettingValue::Text(text) => match FrameworkProperty::parse_reference(text) {
                Some(Ok(property)) => {
                    self.defaults
                        .lookup_text(property)
                        .ok_or_else(|| Error::UnresolvedReference {
                            field: field.into(),
                            reference: text.trim().to_string(),
                        })
                }
                Some(Err(message)) => Err(Error::InvalidValue {
                    field: field.into(),
                    message,
                }),
                None => Ok(text.trim().to_string()),
            },
            SettingValue::Integer(n) => Ok(n.to_string()),
            SettingValue::Decimal(n) => Err(Error::InvalidValue {
                field: field.into(),
                message: format!("unquoted number {n} must be written as a quoted string"),
            }),
        }
    }

    fn java(source: &BuildSource) -> Result<JavaCompatibility> {
        let level = source
            .java_compatibility_level
            .as_ref()
            .map(|v| java_level("javaCompatibilityLevel", v))
            .transpose()?
            .unwrap_or(JavaVersion::DEFAULT);

        let Some(options) = &source.java else {
            return Ok(JavaCompatibility::uniform(level));
        };

        let pick = |field: &str, value: Option<&SettingValue>| -> Result<JavaVersion> {
            value.map_or(Ok(level), |v| java_level(field, v))
        };

        Ok(JavaCompatibility {
            source_compatibility: pick(
                "java.sourceCompatibility",
                options.source_compatibility.as_ref(),
            )?,
            target_compatibility: pick(
                "java.targetCompatibility",
                options.target_compatibility.as_ref(),
            )?,
            jvm_target: pick("java.jvmTarget", options.jvm_target.as_ref())?,
        })
    }

    /// The top-level signing reference, falling back to the release build
    /// type's.
    fn signing_config_ref(source: &BuildSource) -> Result<String> {
        let fallback = || {
            source
                .build_types
                .as_ref()
                .and_then(|types| types.get(RELEASE_BUILD_TYPE))
                .and_then(|release| release.signing_config.as_deref())
        };

        let reference = source.signing_config_ref.as_deref().or_else(fallback);
        ConfigValidator::require_text("signingConfigRef", reference).map(str::to_string)
    }

    fn build_types(source: &BuildSource, default_signing: &str) -> Result<Vec<BuildType>> {
        let Some(types) = &source.build_types else {
            return Ok(Vec::new());
        };

        types
            .iter()
            .map(|(name, bt)| {
                let signing_config_ref = match bt.signing_config.as_deref() {
                    Some(reference) => ConfigValidator::require_text(
                        &format!("buildTypes.{name}.signingConfig"),
                        Some(reference),
                    )?
                    .to_string(),
                    None => default_signing.to_string(),
                };

                Ok(BuildType {
                    name: name.clone(),
                    signing_config_ref,
                    minify_enabled: bt.minify_enabled.unwrap_or(false),
                    debuggable: bt.debuggable.unwrap_or(name == DEBUG_BUILD_TYPE),
                })
            })
            .collect()
    }

    fn dependencies(source: &BuildSource) -> Result<Vec<Dependency>> {
        let Some(specs) = &source.dependencies else {
            return Ok(Vec::new());
        };

        specs
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                spec.to_dependency().map_err(|e| Error::InvalidValue {
                    field: format!("dependencies[{i}]"),
                    message: e.to_string(),
                })
            })
            .collect()
    }
}

fn required<'a, T>(field: &str, value: Option<&'a T>) -> Result<&'a T> {
    value.ok_or_else(|| Error::MissingField {
        field: field.into(),
    })
}

fn java_level(field: &str, value: &SettingValue) -> Result<JavaVersion> {
    JavaVersion::parse(&value.to_string()).map_err(|message| Error::InvalidValue {
        field: field.into(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{BuildTypeSource, DependencySpec, JavaOptions};
    use crate::signing::SigningProfiles;
    use std::collections::BTreeMap;

    fn valid_source() -> BuildSource {
        BuildSource {
            application_id: Some("com.example.app".to_string()),
            min_sdk: Some(SettingValue::Integer(21)),
            target_sdk: Some(SettingValue::Integer(34)),
            compile_sdk: Some(SettingValue::Integer(34)),
            version_code: Some(SettingValue::Integer(1)),
            version_name: Some("1.0".into()),
            desugaring_enabled: Some(true),
            desugaring_dependency: Some("desugar_jdk_libs:2.0.4".to_string()),
            signing_config_ref: Some("debug".to_string()),
            ..Default::default()
        }
    }

    fn framework_defaults() -> SdkDefaults {
        SdkDefaults {
            min_sdk: Some(21),
            target_sdk: Some(34),
            compile_sdk: Some(35),
            ndk_version: Some("26.1.10909125".to_string()),
            version_code: Some(12),
            version_name: Some("1.4.2".to_string()),
        }
    }

    fn resolve(source: &BuildSource) -> Result<BuildConfig> {
        ConfigResolver::default().resolve(source)
    }

    #[test]
    fn test_end_to_end_example() {
        let config = resolve(&valid_source()).unwrap();

        assert_eq!(config.application_id(), "com.example.app");
        assert_eq!(config.namespace(), "com.example.app");
        assert_eq!(config.min_sdk().value(), 21);
        assert_eq!(config.target_sdk().value(), 34);
        assert_eq!(config.compile_sdk().value(), 34);
        assert_eq!(config.version_code(), 1);
        assert_eq!(config.version_name(), "1.0");
        assert!(config.desugaring_enabled());
        assert_eq!(config.desugaring_dependency(), Some("desugar_jdk_libs:2.0.4"));
        assert_eq!(config.signing_config_ref(), "debug");
        assert_eq!(config.java_compatibility_level(), JavaVersion::Java11);
        assert!(config.dependencies().is_empty());
        assert!(config.build_types().is_empty());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let source = valid_source();
        let first = resolve(&source).unwrap();
        let second = resolve(&source).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_application_id() {
        let source = BuildSource {
            application_id: None,
            ..valid_source()
        };
        let err = resolve(&source).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field } if field == "applicationId"));
    }

    #[test]
    fn test_blank_application_id_is_missing() {
        let source = BuildSource {
            application_id: Some("  ".to_string()),
            ..valid_source()
        };
        assert!(matches!(resolve(&source), Err(Error::MissingField { .. })));
    }

    #[test]
    fn test_missing_field_reported_before_range_errors() {
        let source = BuildSource {
            min_sdk: Some(SettingValue::Integer(40)),
            version_name: None,
            ..valid_source()
        };
        let err = resolve(&source).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field } if field == "versionName"));
    }

    #[test]
    fn test_each_required_field() {
        let cases: Vec<(&str, BuildSource)> = vec![
            ("minSdk", BuildSource { min_sdk: None, ..valid_source() }),
            ("targetSdk", BuildSource { target_sdk: None, ..valid_source() }),
            ("compileSdk", BuildSource { compile_sdk: None, ..valid_source() }),
            ("versionCode", BuildSource { version_code: None, ..valid_source() }),
            ("versionName", BuildSource { version_name: None, ..valid_source() }),
            (
                "signingConfigRef",
                BuildSource {
                    signing_config_ref: None,
                    ..valid_source()
                },
            ),
        ];

        for (expected, source) in cases {
            let err = resolve(&source).unwrap_err();
            assert_eq!(err.field(), Some(expected), "wrong field for {err}");
            assert!(matches!(err, Error::MissingField { .. }));
        }
    }

    #[test]
    fn test_min_above_target_is_invalid_range() {
        let source = BuildSource {
            min_sdk: Some(SettingValue::Integer(35)),
            ..valid_source()
        };
        let err = resolve(&source).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { ref field, .. } if field == "minSdk"));
    }

    #[test]
    fn test_target_above_compile_is_invalid_range() {
        let source = BuildSource {
            target_sdk: Some(SettingValue::Integer(35)),
            ..valid_source()
        };
        let err = resolve(&source).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { ref field, .. } if field == "targetSdk"));
    }

    #[test]
    fn test_zero_and_negative_sdk_levels() {
        let zero = BuildSource {
            min_sdk: Some(SettingValue::Integer(0)),
            ..valid_source()
        };
        assert!(matches!(resolve(&zero), Err(Error::InvalidRange { .. })));

        let negative = BuildSource {
            min_sdk: Some(SettingValue::Integer(-3)),
            ..valid_source()
        };
        assert!(matches!(resolve(&negative), Err(Error::InvalidRange { .. })));
    }

    #[test]
    fn test_numeric_strings_are_parsed() {
        let source = BuildSource {
            min_sdk: Some("21".into()),
            version_code: Some(" 7 ".into()),
            ..valid_source()
        };
        let config = resolve(&source).unwrap();
        assert_eq!(config.min_sdk().value(), 21);
        assert_eq!(config.version_code(), 7);
    }

    #[test]
    fn test_non_numeric_sdk_is_invalid_value() {
        let source = BuildSource {
            compile_sdk: Some("thirty-four".into()),
            ..valid_source()
        };
        let err = resolve(&source).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref field, .. } if field == "compileSdk"));
    }

    #[test]
    fn test_decimal_version_code_is_invalid_value() {
        let source: BuildSource = serde_yaml::from_str(
            "applicationId: com.example.app\nminSdk: 21\ntargetSdk: 34\ncompileSdk: 34\n\
             versionCode: 1.5\nversionName: \"1.0\"\nsigningConfigRef: debug\n",
        )
        .unwrap();
        assert!(matches!(
            resolve(&source),
            Err(Error::InvalidValue { ref field, .. }) if field == "versionCode"
        ));
    }

    #[test]
    fn test_unquoted_decimal_version_name_is_rejected() {
        let yaml = "applicationId: com.example.app\nminSdk: 21\ntargetSdk: 34\ncompileSdk: 34\n\
                    versionCode: 1\nsigningConfigRef: debug\n";

        let source: BuildSource =
            serde_yaml::from_str(&format!("{yaml}versionName: 1.10\n")).unwrap();
        let err = resolve(&source).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref field, .. } if field == "versionName"));
        assert!(err.to_string().contains("quoted string"));

        let source: BuildSource =
            serde_yaml::from_str(&format!("{yaml}versionName: \"1.10\"\n")).unwrap();
        assert_eq!(resolve(&source).unwrap().version_name(), "1.10");

        let source: BuildSource =
            serde_yaml::from_str(&format!("{yaml}versionName: 2\n")).unwrap();
        assert_eq!(resolve(&source).unwrap().version_name(), "2");
    }

    #[test]
    fn test_unquoted_decimal_ndk_version_is_rejected() {
        let source = BuildSource {
            ndk_version: Some(SettingValue::Decimal("27.1".to_string())),
            ..valid_source()
        };
        assert!(matches!(
            resolve(&source),
            Err(Error::InvalidValue { ref field, .. }) if field == "ndkVersion"
        ));
    }

    #[test]
    fn test_version_code_zero() {
        let source = BuildSource {
            version_code: Some(SettingValue::Integer(0)),
            ..valid_source()
        };
        assert!(matches!(
            resolve(&source),
            Err(Error::InvalidRange { ref field, .. }) if field == "versionCode"
        ));
    }

    #[test]
    fn test_framework_references_are_substituted() {
        let source = BuildSource {
            min_sdk: Some("flutter.minSdkVersion".into()),
            target_sdk: Some("flutter.targetSdkVersion".into()),
            compile_sdk: Some("flutter.compileSdkVersion".into()),
            ndk_version: Some("flutter.ndkVersion".into()),
            version_code: Some("flutter.versionCode".into()),
            version_name: Some("flutter.versionName".into()),
            ..valid_source()
        };

        let config = ConfigResolver::new(framework_defaults())
            .resolve(&source)
            .unwrap();
        assert_eq!(config.min_sdk().value(), 21);
        assert_eq!(config.target_sdk().value(), 34);
        assert_eq!(config.compile_sdk().value(), 35);
        assert_eq!(config.ndk_version(), Some("26.1.10909125"));
        assert_eq!(config.version_code(), 12);
        assert_eq!(config.version_name(), "1.4.2");
    }

    #[test]
    fn test_unresolved_framework_reference() {
        let source = BuildSource {
            min_sdk: Some("flutter.minSdkVersion".into()),
            ..valid_source()
        };
        let err = resolve(&source).unwrap_err();
        match err {
            Error::UnresolvedReference { field, reference } => {
                assert_eq!(field, "minSdk");
                assert_eq!(reference, "flutter.minSdkVersion");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_framework_property() {
        let source = BuildSource {
            target_sdk: Some("flutter.maxSdkVersion".into()),
            ..valid_source()
        };
        assert!(matches!(
            ConfigResolver::new(framework_defaults()).resolve(&source),
            Err(Error::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_text_reference_in_integer_field() {
        let source = BuildSource {
            version_code: Some("flutter.versionName".into()),
            ..valid_source()
        };
        assert!(matches!(
            ConfigResolver::new(framework_defaults()).resolve(&source),
            Err(Error::UnresolvedReference { .. })
        ));
    }

    #[test]
    fn test_invalid_application_id() {
        let source = BuildSource {
            application_id: Some("meditation_app".to_string()),
            ..valid_source()
        };
        assert!(matches!(
            resolve(&source),
            Err(Error::InvalidValue { ref field, .. }) if field == "applicationId"
        ));
    }

    #[test]
    fn test_explicit_namespace() {
        let source = BuildSource {
            namespace: Some("com.example.app.core".to_string()),
            ..valid_source()
        };
        assert_eq!(resolve(&source).unwrap().namespace(), "com.example.app.core");

        let bad = BuildSource {
            namespace: Some("core".to_string()),
            ..valid_source()
        };
        assert!(matches!(
            resolve(&bad),
            Err(Error::InvalidValue { ref field, .. }) if field == "namespace"
        ));
    }

    #[test]
    fn test_desugaring_without_dependency() {
        let source = BuildSource {
            desugaring_dependency: Some(String::new()),
            ..valid_source()
        };
        let err = resolve(&source).unwrap_err();
        assert!(matches!(err, Error::InconsistentOption { .. }));

        let source = BuildSource {
            desugaring_dependency: None,
            ..valid_source()
        };
        assert!(matches!(
            resolve(&source),
            Err(Error::InconsistentOption { .. })
        ));
    }

    #[test]
    fn test_desugaring_disabled_keeps_dependency_text() {
        let source = BuildSource {
            desugaring_enabled: Some(false),
            ..valid_source()
        };
        let config = resolve(&source).unwrap();
        assert!(!config.desugaring_enabled());
        assert_eq!(config.desugaring_dependency(), Some("desugar_jdk_libs:2.0.4"));
        assert!(config.all_dependencies().is_empty());
    }

    #[test]
    fn test_desugaring_dependency_is_trimmed() {
        let source = BuildSource {
            desugaring_dependency: Some("  desugar_jdk_libs:2.0.4 ".to_string()),
            ..valid_source()
        };
        let config = resolve(&source).unwrap();
        assert_eq!(config.desugaring_dependency(), Some("desugar_jdk_libs:2.0.4"));

        let source = BuildSource {
            desugaring_enabled: Some(false),
            desugaring_dependency: Some("   ".to_string()),
            ..valid_source()
        };
        assert_eq!(resolve(&source).unwrap().desugaring_dependency(), None);
    }

    #[test]
    fn test_java_level_shorthand() {
        let source = BuildSource {
            java_compatibility_level: Some("VERSION_17".into()),
            ..valid_source()
        };
        let config = resolve(&source).unwrap();
        assert_eq!(config.java_compatibility_level(), JavaVersion::Java17);
        assert_eq!(config.java(), JavaCompatibility::uniform(JavaVersion::Java17));
    }

    #[test]
    fn test_java_overrides() {
        let source = BuildSource {
            java_compatibility_level: Some(SettingValue::Integer(17)),
            java: Some(JavaOptions {
                source_compatibility: Some("1.8".into()),
                ..Default::default()
            }),
            ..valid_source()
        };
        let java = resolve(&source).unwrap().java();
        assert_eq!(java.source_compatibility, JavaVersion::Java8);
        assert_eq!(java.target_compatibility, JavaVersion::Java17);
    }

    #[test]
    fn test_java_jvm_target_mismatch() {
        let source = BuildSource {
            java: Some(JavaOptions {
                jvm_target: Some(SettingValue::Integer(17)),
                ..Default::default()
            }),
            ..valid_source()
        };
        assert!(matches!(
            resolve(&source),
            Err(Error::InconsistentOption { ref field, .. }) if field == "java.jvmTarget"
        ));
    }

    #[test]
    fn test_java_unsupported_level() {
        let source = BuildSource {
            java_compatibility_level: Some(SettingValue::Integer(9)),
            ..valid_source()
        };
        assert!(matches!(
            resolve(&source),
            Err(Error::InvalidValue { ref field, .. }) if field == "javaCompatibilityLevel"
        ));
    }

    #[test]
    fn test_signing_falls_back_to_release_build_type() {
        let mut build_types = BTreeMap::new();
        build_types.insert(
            "release".to_string(),
            BuildTypeSource {
                signing_config: Some("debug".to_string()),
                ..Default::default()
            },
        );
        let source = BuildSource {
            signing_config_ref: None,
            build_types: Some(build_types),
            ..valid_source()
        };

        let config = resolve(&source).unwrap();
        assert_eq!(config.signing_config_ref(), "debug");
        assert_eq!(config.build_types().len(), 1);
        assert!(!config.build_types()[0].debuggable());
    }

    #[test]
    fn test_build_types_inherit_signing() {
        let mut build_types = BTreeMap::new();
        build_types.insert("debug".to_string(), BuildTypeSource::default());
        build_types.insert(
            "release".to_string(),
            BuildTypeSource {
                signing_config: Some("upload".to_string()),
                minify_enabled: Some(true),
                debuggable: None,
            },
        );
        let source = BuildSource {
            build_types: Some(build_types),
            ..valid_source()
        };

        let config = resolve(&source).unwrap();
        let debug = config.build_type("debug").unwrap();
        assert_eq!(debug.signing_config_ref(), "debug");
        assert!(debug.debuggable());

        let release = config.build_type("release").unwrap();
        assert_eq!(release.signing_config_ref(), "upload");
        assert!(release.minify_enabled());
        // Top-level reference wins over the release fallback.
        assert_eq!(config.signing_config_ref(), "debug");
    }

    #[test]
    fn test_blank_build_type_signing() {
        let mut build_types = BTreeMap::new();
        build_types.insert(
            "staging".to_string(),
            BuildTypeSource {
                signing_config: Some(" ".to_string()),
                ..Default::default()
            },
        );
        let source = BuildSource {
            build_types: Some(build_types),
            ..valid_source()
        };
        let err = resolve(&source).unwrap_err();
        assert_eq!(err.field(), Some("buildTypes.staging.signingConfig"));
    }

    #[test]
    fn test_dependencies_keep_order_and_duplicates() {
        let source = BuildSource {
            dependencies: Some(vec![
                DependencySpec::Coordinate("okio:3.6.0".to_string()),
                DependencySpec::Detailed {
                    configuration: Some("api".to_string()),
                    name: "androidx.window:window".to_string(),
                    version: "1.0.0".to_string(),
                },
                DependencySpec::Coordinate("okio:3.6.0".to_string()),
            ]),
            ..valid_source()
        };

        let config = resolve(&source).unwrap();
        let coordinates: Vec<String> = config
            .dependencies()
            .iter()
            .map(Dependency::coordinate)
            .collect();
        assert_eq!(
            coordinates,
            vec!["okio:3.6.0", "androidx.window:window:1.0.0", "okio:3.6.0"]
        );
        assert_eq!(config.all_dependencies().len(), 4);
    }

    #[test]
    fn test_bad_dependency_reports_index() {
        let source = BuildSource {
            dependencies: Some(vec![
                DependencySpec::Coordinate("okio:3.6.0".to_string()),
                DependencySpec::Coordinate("no-version".to_string()),
            ]),
            ..valid_source()
        };
        let err = resolve(&source).unwrap_err();
        assert_eq!(err.field(), Some("dependencies[1]"));
    }

    #[test]
    fn test_resolve_and_verify_unknown_profile() {
        let source = BuildSource {
            signing_config_ref: Some("release".to_string()),
            ..valid_source()
        };
        let store = SigningProfiles::with_debug();
        let err = ConfigResolver::default()
            .resolve_and_verify(&source, &store)
            .unwrap_err();
        assert!(matches!(err, Error::UnresolvedSigningProfile { ref profile, .. } if profile == "release"));
    }

    #[test]
    fn test_resolve_and_verify_known_profile() {
        let store = SigningProfiles::with_debug();
        assert!(ConfigResolver::default()
            .resolve_and_verify(&valid_source(), &store)
            .is_ok());
    }
}
