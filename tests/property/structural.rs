//! Property-based tests for merge and map structure guarantees

use super::strategies::{nested_mapping, nested_value};
use nestkit::merge::deep_merge_item;
use nestkit::{deep_map, deep_merge, ConfigError, KeyPath, Mapping, Opaque, Value};
use proptest::prelude::*;

/// Reference pairwise merge: later key wins, recurse when both sides are mappings
fn pairwise(left: &Mapping, right: &Mapping) -> Mapping {
    let mut out = left.clone();
    for (key, value) in right.iter() {
        let merged = match (out.get(key), value) {
            (Some(Value::Mapping(a)), Value::Mapping(b)) => Value::Mapping(pairwise(a, b)),
            _ => value.clone(),
        };
        out.insert(key, merged);
    }
    out
}

/// Idempotent on its own outputs: strings become their length, everything
/// else is left alone
fn lengths(value: &Value, _: &KeyPath) -> Value {
    match value {
        Value::String(s) => Value::Integer(s.len() as i64),
        other => other.clone(),
    }
}

/// Put an opaque value somewhere inside `value`, steered by `choice`
fn plant_opaque(value: Value, choice: usize) -> Value {
    match value {
        Value::Sequence(mut items) if !items.is_empty() => {
            let i = choice % items.len();
            let item = std::mem::take(&mut items[i]);
            items[i] = plant_opaque(item, choice / 2);
            Value::Sequence(items)
        }
        Value::Mapping(mapping) if !mapping.is_empty() => {
            let i = choice % mapping.len();
            mapping
                .into_iter()
                .enumerate()
                .map(|(j, (k, v))| if i == j { (k, plant_opaque(v, choice / 2)) } else { (k, v) })
                .collect::<Mapping>()
                .into()
        }
        _ => Value::Opaque(Opaque::new("object")),
    }
}

proptest! {
    #[test]
    fn deep_merge_is_left_fold_of_pairwise(layers in prop::collection::vec(nested_mapping(), 0..4)) {
        let refs: Vec<&Mapping> = layers.iter().collect();
        let folded = layers.iter().fold(Mapping::new(), |acc, m| pairwise(&acc, m));
        prop_assert_eq!(deep_merge(&refs), folded);
    }

    #[test]
    fn empty_mapping_is_identity(m in nested_mapping()) {
        prop_assert_eq!(deep_merge(&[&Mapping::new(), &m]), m.clone());
        prop_assert_eq!(deep_merge(&[&m, &Mapping::new()]), m);
    }

    #[test]
    fn deep_merge_item_matches_two_way_merge(m in nested_mapping(), n in nested_mapping()) {
        let mut acc = m.clone();
        for (key, value) in n.iter() {
            deep_merge_item(&mut acc, key, value);
        }
        prop_assert_eq!(acc, deep_merge(&[&m, &n]));
    }

    #[test]
    fn identity_deep_map_reproduces_input(value in nested_value()) {
        let mapped = deep_map(|v, _| v.clone(), &value).unwrap();
        prop_assert_eq!(mapped, value);
    }

    #[test]
    fn idempotent_transform_is_stable(value in nested_value()) {
        let once = deep_map(lengths, &value).unwrap();
        let twice = deep_map(lengths, &once).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn opaque_anywhere_is_rejected(value in nested_value(), choice in any::<usize>()) {
        let planted = plant_opaque(value, choice);
        let result = deep_map(|v, _| v.clone(), &planted);
        let is_unsupported = matches!(result, Err(ConfigError::UnsupportedValue { .. }));
        prop_assert!(is_unsupported);
    }
}

/// Paths handed to the transform always resolve back to the leaf they describe
#[test]
fn test_paths_resolve_to_leaves() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&nested_value(), |value| {
            let mut paths = Vec::new();
            deep_map(
                |leaf, path| {
                    paths.push((path.clone(), leaf.clone()));
                    leaf.clone()
                },
                &value,
            )
            .unwrap();

            for (path, leaf) in paths {
                let mut cursor = &value;
                for segment in path.segments() {
                    cursor = match (cursor, segment.as_key(), segment.as_index()) {
                        (Value::Mapping(m), Some(key), _) => m.get(key).unwrap(),
                        (Value::Sequence(items), _, Some(index)) => &items[index],
                        _ => panic!("path {} does not resolve", path),
                    };
                }
                assert_eq!(cursor, &leaf);
            }
            Ok(())
        })
        .unwrap();
}
