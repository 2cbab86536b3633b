//! Output formatter implementations.

use std::collections::BTreeMap;

use crate::{BuildConfig, Result};

use super::OutputFormatter;

/// Formatter for pretty-printed JSON.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, config: &BuildConfig) -> Result<String> {
        Ok(serde_json::to_string_pretty(config)?)
    }
}

/// Formatter for YAML.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, config: &BuildConfig) -> Result<String> {
        let yaml = serde_yaml::to_string(config)?;
        Ok(yaml.trim_end().to_string())
    }
}

/// Formatter for `gradle.properties`-style `key=value` lines.
///
/// Settings are sorted by key; `dependencies.N` lines follow in declaration
/// order.
pub struct PropertiesFormatter;

impl PropertiesFormatter {
    fn properties(config: &BuildConfig) -> BTreeMap<String, String> {
        let mut props = BTreeMap::new();
        let mut put = |key: String, value: String| {
            props.insert(key, value);
        };

        put("applicationId".into(), config.application_id().to_string());
        put("namespace".into(), config.namespace().to_string());
        put("minSdk".into(), config.min_sdk().to_string());
        put("targetSdk".into(), config.target_sdk().to_string());
        put("compileSdk".into(), config.compile_sdk().to_string());
        if let Some(ndk) = config.ndk_version() {
            put("ndkVersion".into(), ndk.to_string());
        }
        put("versionCode".into(), config.version_code().to_string());
        put("versionName".into(), config.version_name().to_string());

        let java = config.java();
        put(
            "javaCompatibilityLevel".into(),
            config.java_compatibility_level().to_string(),
        );
        put(
            "java.sourceCompatibility".into(),
            java.source_compatibility.to_string(),
        );
        put(
            "java.targetCompatibility".into(),
            java.target_compatibility.to_string(),
        );
        put("java.jvmTarget".into(), java.jvm_target.to_string());

        put(
            "desugaringEnabled".into(),
            config.desugaring_enabled().to_string(),
        );
        if let Some(dependency) = config.desugaring_dependency() {
            put("desugaringDependency".into(), dependency.to_string());
        }

        put(
            "signingConfigRef".into(),
            config.signing_config_ref().to_string(),
        );

        for bt in config.build_types() {
            let prefix = format!("buildTypes.{}", bt.name());
            put(
                format!("{prefix}.signingConfigRef"),
                bt.signing_config_ref().to_string(),
            );
            put(
                format!("{prefix}.minifyEnabled"),
                bt.minify_enabled().to_string(),
            );
            put(format!("{prefix}.debuggable"), bt.debuggable().to_string());
        }

        props
    }
}

impl OutputFormatter for PropertiesFormatter {
    fn format(&self, config: &BuildConfig) -> Result<String> {
        let scalars = Self::properties(config)
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"));
        let dependencies = config
            .dependencies()
            .iter()
            .enumerate()
            .map(|(i, dependency)| format!("dependencies.{i}={dependency}"));

        let lines: Vec<String> = scalars.chain(dependencies).collect();
        Ok(lines.join("\n"))
    }
}

/// Formatter for a human-readable summary.
pub struct HumanFormatter;

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

impl OutputFormatter for HumanFormatter {
    fn format(&self, config: &BuildConfig) -> Result<String> {
        let java = config.java();
        let mut lines = vec![
            format!(
                "Application: {} (namespace {})",
                config.application_id(),
                config.namespace()
            ),
            format!(
                "Version:     {} ({})",
                config.version_name(),
                config.version_code()
            ),
            format!(
                "SDK:         min {}, target {}, compile {}",
                config.min_sdk(),
                config.target_sdk(),
                config.compile_sdk()
            ),
        ];

        if let Some(ndk) = config.ndk_version() {
            lines.push(format!("NDK:         {ndk}"));
        }

        lines.push(format!(
            "Java:        source {}, target {}, jvmTarget {}",
            java.source_compatibility, java.target_compatibility, java.jvm_target
        ));

        lines.push(match (config.desugaring_enabled(), config.desugaring_dependency()) {
            (true, Some(dependency)) => format!("Desugaring:  enabled ({dependency})"),
            _ => "Desugaring:  disabled".to_string(),
        });

        lines.push(format!("Signing:     {}", config.signing_config_ref()));

        if !config.build_types().is_empty() {
            lines.push("Build types:".to_string());
            for bt in config.build_types() {
                lines.push(format!(
                    "  {}: signing {}, minify {}, debuggable {}",
                    bt.name(),
                    bt.signing_config_ref(),
                    on_off(bt.minify_enabled()),
                    on_off(bt.debuggable())
                ));
            }
        }

        let dependencies = config.all_dependencies();
        if dependencies.is_empty() {
            lines.push("Dependencies: none".to_string());
        } else {
            lines.push("Dependencies:".to_string());
            for dependency in &dependencies {
                lines.push(format!("  {dependency}"));
            }
        }

        Ok(lines.join("\n"))
    }
}
