//! Generators for nested values

use nestkit::{Mapping, Value};
use proptest::prelude::*;

pub fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        (-1e12f64..1e12f64).prop_map(Value::Float),
        "[a-z0-9]{0,8}".prop_map(Value::String),
    ]
}

pub fn key() -> impl Strategy<Value = String> {
    "[a-e]{1,2}"
}

pub fn mapping_of<S>(inner: S) -> impl Strategy<Value = Mapping>
where
    S: Strategy<Value = Value>,
{
    prop::collection::vec((key(), inner), 0..5)
        .prop_map(|entries| entries.into_iter().collect::<Mapping>())
}

/// Mappings, sequences and scalars nested a few levels deep
pub fn nested_value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Sequence),
            mapping_of(inner).prop_map(Value::Mapping),
        ]
    })
}

pub fn nested_mapping() -> impl Strategy<Value = Mapping> {
    mapping_of(nested_value())
}
