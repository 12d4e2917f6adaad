//! Mapping Merges
//!
//! Right-biased combination of mappings. [`deep_merge`] recurses wherever both
//! sides hold a mapping under the same key; [`merge`] replaces top-level keys
//! wholesale. Sequences and scalars are always replaced, never concatenated.
//! Neither function mutates its inputs.

use crate::value::{Mapping, Value};

/// Deep-merge mappings left to right; later sources win.
///
/// ```
/// use nestkit::merge::deep_merge;
/// use nestkit::value::{Mapping, Value};
///
/// let base: Mapping = [("b", 1)].into_iter().collect();
/// let over: Mapping = [("a", 1)].into_iter().collect();
/// let merged = deep_merge(&[&Mapping::new(), &base, &over]);
/// assert_eq!(merged.get("a"), Some(&Value::Integer(1)));
/// assert_eq!(merged.get("b"), Some(&Value::Integer(1)));
/// ```
pub fn deep_merge(sources: &[&Mapping]) -> Mapping {
    deep_merge_iter(sources.iter().copied())
}

/// [`deep_merge`] over any iterator of borrowed mappings
pub fn deep_merge_iter<'a, I>(sources: I) -> Mapping
where
    I: IntoIterator<Item = &'a Mapping>,
{
    let mut merged = Mapping::new();
    for source in sources {
        for (key, value) in source.iter() {
            deep_merge_item(&mut merged, key, value);
        }
    }
    merged
}

/// Merge one incoming entry into an owned accumulator
///
/// When `destination` already holds a mapping at `key` and `value` is a
/// mapping, the two are merged recursively; otherwise `value` replaces
/// whatever was there. A replaced key keeps its position.
pub fn deep_merge_item(destination: &mut Mapping, key: &str, value: &Value) {
    if let (Some(Value::Mapping(existing)), Value::Mapping(incoming)) =
        (destination.get_mut(key), value)
    {
        for (inner_key, inner_value) in incoming.iter() {
            deep_merge_item(existing, inner_key, inner_value);
        }
        return;
    }
    destination.insert(key, value.clone());
}

/// Shallow merge: later sources replace earlier top-level keys wholesale.
pub fn merge(sources: &[&Mapping]) -> Mapping {
    let mut merged = Mapping::new();
    for source in sources {
        merged.extend(source.iter().map(|(key, value)| (key, value.clone())));
    }
    merged
}
