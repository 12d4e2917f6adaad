//! Deep Map
//!
//! Key-path aware transformation of every leaf in a nested value. Mappings and
//! sequences are rebuilt with the same shape (keys pass through unchanged);
//! each scalar is handed to the transform together with the [`KeyPath`] that
//! leads to it. Reaching opaque data aborts the whole traversal.

use crate::error::ConfigError;
use crate::path::KeyPath;
use crate::value::{Mapping, Node, Value};
use tracing::debug;

/// Apply `transform` to every scalar leaf of `value`.
///
/// The transform receives the leaf and its key path, and its return value
/// takes the leaf's place. The input is not modified.
///
/// Fails with [`ConfigError::UnsupportedValue`] on the first opaque node.
///
/// ```
/// use nestkit::map::deep_map;
/// use nestkit::value::Value;
///
/// let input = Value::Sequence(vec![Value::from(1), Value::from("2")]);
/// let output = deep_map(|leaf, path| {
///     if path.to_string() == "[1]" { Value::from(2) } else { leaf.clone() }
/// }, &input).unwrap();
/// assert_eq!(output, Value::Sequence(vec![Value::from(1), Value::from(2)]));
/// ```
pub fn deep_map<F>(mut transform: F, value: &Value) -> Result<Value, ConfigError>
where
    F: FnMut(&Value, &KeyPath) -> Value,
{
    try_deep_map(
        |leaf, path| Ok::<_, ConfigError>(transform(leaf, path)),
        value,
    )
}

/// [`deep_map`] with a fallible transform
///
/// The first error, from the transform or from an opaque node, stops the
/// traversal and is returned.
pub fn try_deep_map<F, E>(mut transform: F, value: &Value) -> Result<Value, E>
where
    F: FnMut(&Value, &KeyPath) -> Result<Value, E>,
    E: From<ConfigError>,
{
    map_node(&mut transform, value, &KeyPath::root())
}

fn map_node<F, E>(transform: &mut F, value: &Value, path: &KeyPath) -> Result<Value, E>
where
    F: FnMut(&Value, &KeyPath) -> Result<Value, E>,
    E: From<ConfigError>,
{
    match value.node() {
        Node::Mapping(mapping) => {
            let mut mapped = Mapping::with_capacity(mapping.len());
            for (key, item) in mapping.iter() {
                let item = map_node(transform, item, &path.child(key))?;
                mapped.insert(key, item);
            }
            Ok(Value::Mapping(mapped))
        }
        Node::Sequence(items) => {
            let mut mapped = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                mapped.push(map_node(transform, item, &path.child(index))?);
            }
            Ok(Value::Sequence(mapped))
        }
        Node::Scalar(leaf) => transform(leaf, path),
        Node::Unsupported(opaque) => {
            debug!(
                path = %path,
                type_name = opaque.type_name(),
                "Unsupported value during deep map"
            );
            Err(ConfigError::UnsupportedValue {
                type_name: opaque.type_name().to_string(),
                path: path.clone(),
            }
            .into())
        }
    }
}
