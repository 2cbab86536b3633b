//! Property-based tests for source merging.

use super::loader::SourceLayer;
use super::merger::SourceMerger;
use super::schema::{BuildSource, DependencySpec, SettingValue};
use proptest::prelude::*;
use std::path::PathBuf;

fn setting_strategy() -> impl Strategy<Value = SettingValue> {
    prop_oneof![
        (1i64..=40).prop_map(SettingValue::Integer),
        "[0-9]{1,2}".prop_map(SettingValue::Text),
        Just(SettingValue::Text("flutter.minSdkVersion".to_string())),
    ]
}

fn dependency_strategy() -> impl Strategy<Value = DependencySpec> {
    ("[a-z]{1,8}", "[a-z]{1,8}", "[0-9]\\.[0-9]")
        .prop_map(|(group, name, version)| DependencySpec::Coordinate(format!("{group}:{name}:{version}")))
}

fn source_strategy() -> impl Strategy<Value = BuildSource> {
    (
        prop::option::of("com\\.[a-z]{1,8}"),
        prop::option::of(setting_strategy()),
        prop::option::of(setting_strategy()),
        prop::option::of(any::<bool>()),
        prop::option::of(prop::collection::vec(dependency_strategy(), 0..4)),
    )
        .prop_map(
            |(application_id, min_sdk, version_code, desugaring_enabled, dependencies)| {
                BuildSource {
                    application_id,
                    min_sdk,
                    version_code,
                    desugaring_enabled,
                    dependencies,
                    ..Default::default()
                }
            },
        )
}

fn layers(sources: Vec<BuildSource>) -> Vec<SourceLayer> {
    sources
        .into_iter()
        .enumerate()
        .map(|(i, source)| SourceLayer {
            path: PathBuf::from(format!("layer-{i}.yaml")),
            precedence: u8::try_from(i + 1).unwrap_or(u8::MAX),
            source,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 1000,
        .. ProptestConfig::default()
    })]

    // A set value in the higher layer always wins; otherwise the lower survives
    #[test]
    fn merge_higher_precedence_wins(low in source_strategy(), high in source_strategy()) {
        let merged = SourceMerger::merge(layers(vec![low.clone(), high.clone()]));

        prop_assert_eq!(
            merged.application_id,
            high.application_id.or(low.application_id)
        );
        prop_assert_eq!(merged.min_sdk, high.min_sdk.or(low.min_sdk));
        prop_assert_eq!(merged.version_code, high.version_code.or(low.version_code));
        prop_assert_eq!(
            merged.desugaring_enabled,
            high.desugaring_enabled.or(low.desugaring_enabled)
        );
    }

    // Dependencies from every layer are kept, lower layers first
    #[test]
    fn merge_accumulates_dependencies(sources in prop::collection::vec(source_strategy(), 0..5)) {
        let expected: Vec<DependencySpec> = sources
            .iter()
            .filter_map(|s| s.dependencies.clone())
            .flatten()
            .collect();

        let any_declared = sources.iter().any(|s| s.dependencies.is_some());
        let merged = SourceMerger::merge(layers(sources));

        if any_declared {
            prop_assert_eq!(merged.dependencies.unwrap_or_default(), expected);
        } else {
            prop_assert!(merged.dependencies.is_none());
        }
    }

    // Merging with an empty layer changes nothing
    #[test]
    fn merge_empty_is_identity(source in source_strategy()) {
        let mut target = source.clone();
        SourceMerger::merge_into(&mut target, &BuildSource::default());
        prop_assert_eq!(&target, &source);

        let merged = SourceMerger::merge(layers(vec![BuildSource::default(), source.clone()]));
        prop_assert_eq!(merged, source);
    }
}
