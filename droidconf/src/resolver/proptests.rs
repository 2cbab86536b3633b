//! Property-based tests for `ConfigResolver`.

use super::ConfigResolver;
use crate::config::schema::BuildSource;
use crate::config::validator::MAX_VERSION_CODE;
use crate::error::Error;
use crate::sdk::SdkDefaults;
use proptest::prelude::*;

const MAX_LEVEL: u32 = 40;

fn source(min: u32, target: u32, compile: u32, version_code: u32) -> BuildSource {
    BuildSource {
        application_id: Some("com.example.app".to_string()),
        min_sdk: Some(min.into()),
        target_sdk: Some(target.into()),
        compile_sdk: Some(compile.into()),
        version_code: Some(version_code.into()),
        version_name: Some("1.0".into()),
        signing_config_ref: Some("debug".to_string()),
        ..Default::default()
    }
}

/// Strategy producing ordered `(min, target, compile)` triples.
fn ordered_levels() -> impl Strategy<Value = (u32, u32, u32)> {
    (1..=MAX_LEVEL, 1..=MAX_LEVEL, 1..=MAX_LEVEL).prop_map(|(a, b, c)| {
        let mut levels = [a, b, c];
        levels.sort_unstable();
        (levels[0], levels[1], levels[2])
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 1000,
        .. ProptestConfig::default()
    })]

    // Valid ordered levels come back unchanged
    #[test]
    fn ordered_levels_resolve_unchanged(
        (min, target, compile) in ordered_levels(),
        version_code in 1..=MAX_VERSION_CODE,
    ) {
        let config = ConfigResolver::default()
            .resolve(&source(min, target, compile, version_code))
            .unwrap();
        prop_assert_eq!(config.min_sdk().value(), min);
        prop_assert_eq!(config.target_sdk().value(), target);
        prop_assert_eq!(config.compile_sdk().value(), compile);
        prop_assert_eq!(config.version_code(), version_code);
    }

    // min > target is always rejected as a range error on minSdk
    #[test]
    fn min_above_target_rejected(target in 1..MAX_LEVEL, gap in 1u32..=10) {
        let min = target + gap;
        let err = ConfigResolver::default()
            .resolve(&source(min, target, min, 1))
            .unwrap_err();
        let rejected = matches!(err, Error::InvalidRange { ref field, .. } if field == "minSdk");
        prop_assert!(rejected, "unexpected error: {}", err);
    }

    // target > compile is always rejected as a range error on targetSdk
    #[test]
    fn target_above_compile_rejected(compile in 1..MAX_LEVEL, gap in 1u32..=10) {
        let target = compile + gap;
        let err = ConfigResolver::default()
            .resolve(&source(1, target, compile, 1))
            .unwrap_err();
        let rejected = matches!(err, Error::InvalidRange { ref field, .. } if field == "targetSdk");
        prop_assert!(rejected, "unexpected error: {}", err);
    }

    // Resolution is deterministic
    #[test]
    fn resolve_is_idempotent(
        (min, target, compile) in ordered_levels(),
        version_code in 1..=1000u32,
    ) {
        let resolver = ConfigResolver::new(SdkDefaults::default());
        let input = source(min, target, compile, version_code);
        let first = resolver.resolve(&input).unwrap();
        let second = resolver.resolve(&input).unwrap();
        prop_assert_eq!(first, second);
    }

    // References resolve to exactly the injected defaults
    #[test]
    fn framework_references_match_defaults((min, target, compile) in ordered_levels()) {
        let defaults = SdkDefaults {
            min_sdk: Some(min),
            target_sdk: Some(target),
            compile_sdk: Some(compile),
            ..Default::default()
        };
        let input = BuildSource {
            min_sdk: Some("flutter.minSdkVersion".into()),
            target_sdk: Some("flutter.targetSdkVersion".into()),
            compile_sdk: Some("flutter.compileSdkVersion".into()),
            ..source(1, 1, 1, 1)
        };
        let config = ConfigResolver::new(defaults).resolve(&input).unwrap();
        prop_assert_eq!(config.min_sdk().value(), min);
        prop_assert_eq!(config.target_sdk().value(), target);
        prop_assert_eq!(config.compile_sdk().value(), compile);
    }

    // Version codes above the store limit are rejected
    #[test]
    fn version_code_above_limit_rejected(excess in 1..=1_000_000u32) {
        let err = ConfigResolver::default()
            .resolve(&source(21, 34, 34, MAX_VERSION_CODE + excess))
            .unwrap_err();
        let rejected = matches!(err, Error::InvalidRange { ref field, .. } if field == "versionCode");
        prop_assert!(rejected, "unexpected error: {}", err);
    }
}
