//! Deep merge and shallow merge over configuration-shaped mappings

use super::test_utils::mapping;
use nestkit::merge::deep_merge_iter;
use nestkit::{deep_merge, merge, Mapping, Value};
use serde_json::json;

#[test]
fn test_simple_cases() {
    let cases = vec![
        (
            vec![Mapping::new(), mapping(json!({"a": 1}))],
            mapping(json!({"a": 1})),
            "one key into empty",
        ),
        (
            vec![Mapping::new(), mapping(json!({"b": 1})), mapping(json!({"a": 1}))],
            mapping(json!({"a": 1, "b": 1})),
            "three merges",
        ),
    ];

    for (args, expected, description) in cases {
        let refs: Vec<&Mapping> = args.iter().collect();
        let actual = deep_merge(&refs);
        assert_eq!(
            actual, expected,
            "failed on {} (actual {:?}, expected {:?})",
            description, actual, expected
        );
    }
}

#[test]
fn test_profile_overrides() {
    let project = mapping(json!({
        "models": {
            "materialized": "view",
            "staging": {"schema": "stg", "tags": ["daily"]},
        },
        "vars": {"start": "2020-01-01"},
    }));
    let profile = mapping(json!({
        "models": {
            "staging": {"tags": ["hourly"], "enabled": true},
        },
    }));
    let cli = mapping(json!({"vars": {"start": "2024-06-01", "end": "2024-07-01"}}));

    let merged = deep_merge(&[&project, &profile, &cli]);
    assert_eq!(
        merged,
        mapping(json!({
            "models": {
                "materialized": "view",
                "staging": {"schema": "stg", "tags": ["hourly"], "enabled": true},
            },
            "vars": {"start": "2024-06-01", "end": "2024-07-01"},
        }))
    );
}

#[test]
fn test_iterator_form_matches_slice_form() {
    let layers = vec![
        mapping(json!({"a": {"x": 1}})),
        mapping(json!({"a": {"y": 2}, "b": null})),
        mapping(json!({"b": 3})),
    ];
    let refs: Vec<&Mapping> = layers.iter().collect();
    assert_eq!(deep_merge_iter(layers.iter()), deep_merge(&refs));
}

#[test]
fn test_null_overrides_mapping() {
    let merged = deep_merge(&[
        &mapping(json!({"a": {"x": 1}})),
        &mapping(json!({"a": null})),
    ]);
    assert_eq!(merged.get("a"), Some(&Value::Null));
}

#[test]
fn test_shallow_merge_replaces_nested_tables() {
    let merged = merge(&[
        &mapping(json!({"a": {"x": 1}, "b": 1})),
        &mapping(json!({"a": {"y": 2}})),
    ]);
    assert_eq!(merged, mapping(json!({"a": {"y": 2}, "b": 1})));
}
