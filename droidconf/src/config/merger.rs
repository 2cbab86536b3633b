//! Source merging and precedence handling.
//!
//! Scalars from higher-precedence layers replace lower ones; dependencies
//! accumulate; keyed sections merge entry by entry.

use crate::config::loader::SourceLayer;
use crate::config::schema::{BuildSource, JavaOptions};

/// Merges source layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use droidconf::config::{BuildSource, SourceMerger};
///
/// let low = BuildSource { version_name: Some("1.0".into()), ..Default::default() };
/// let high = BuildSource { version_name: Some("1.1".into()), ..Default::default() };
///
/// let mut result = low;
/// SourceMerger::merge_into(&mut result, &high);
/// assert_eq!(result.version_name, Some("1.1".into()));
/// ```
pub struct SourceMerger;

impl SourceMerger {
    /// Merge layers into a single source tree.
    ///
    /// Layers should be ordered from lowest to highest precedence.
    #[must_use]
    pub fn merge(layers: Vec<SourceLayer>) -> BuildSource {
        let mut result = BuildSource::default();

        for layer in layers {
            log::debug!(
                "merging {} (precedence {})",
                layer.path.display(),
                layer.precedence
            );
            Self::merge_into(&mut result, &layer.source);
        }

        result
    }

    /// Merge `source` into `target` (`source` wins).
    ///
    /// # Merging Rules
    ///
    /// - Scalar fields: source overwrites if set
    /// - `java`: field-by-field merge
    /// - `dependencies`: accumulated, lower layers first
    /// - `signingConfigs`, `buildTypes`: merged per key, source entry replaces
    pub fn merge_into(target: &mut BuildSource, source: &BuildSource) {
        overwrite(&mut target.application_id, &source.application_id);
        overwrite(&mut target.namespace, &source.namespace);
        overwrite(&mut target.min_sdk, &source.min_sdk);
        overwrite(&mut target.target_sdk, &source.target_sdk);
        overwrite(&mut target.compile_sdk, &source.compile_sdk);
        overwrite(&mut target.ndk_version, &source.ndk_version);
        overwrite(&mut target.version_code, &source.version_code);
        overwrite(&mut target.version_name, &source.version_name);
        overwrite(
            &mut target.java_compatibility_level,
            &source.java_compatibility_level,
        );
        overwrite(&mut target.desugaring_enabled, &source.desugaring_enabled);
        overwrite(
            &mut target.desugaring_dependency,
            &source.desugaring_dependency,
        );
        overwrite(&mut target.signing_config_ref, &source.signing_config_ref);

        if let Some(ref source_java) = source.java {
            target.java = Some(match &target.java {
                Some(target_java) => Self::merge_java(target_java, source_java),
                None => source_java.clone(),
            });
        }

        if let Some(ref source_deps) = source.dependencies {
            match &mut target.dependencies {
                Some(target_deps) => target_deps.extend(source_deps.iter().cloned()),
                None => target.dependencies.clone_from(&source.dependencies),
            }
        }

        if let Some(ref source_signing) = source.signing_configs {
            target
                .signing_configs
                .get_or_insert_with(Default::default)
                .extend(source_signing.clone());
        }

        if let Some(ref source_types) = source.build_types {
            target
                .build_types
                .get_or_insert_with(Default::default)
                .extend(source_types.clone());
        }
    }

    fn merge_java(target: &JavaOptions, source: &JavaOptions) -> JavaOptions {
        JavaOptions {
            source_compatibility: source
                .source_compatibility
                .clone()
                .or_else(|| target.source_compatibility.clone()),
            target_compatibility: source
                .target_compatibility
                .clone()
                .or_else(|| target.target_compatibility.clone()),
            jvm_target: source
                .jvm_target
                .clone()
                .or_else(|| target.jvm_target.clone()),
        }
    }
}

fn overwrite<T: Clone>(target: &mut Option<T>, source: &Option<T>) {
    if source.is_some() {
        target.clone_from(source);
    }
}
