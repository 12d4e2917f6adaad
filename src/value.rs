//! Nested Values
//!
//! Dynamically-shaped data built from mappings, sequences and scalars. This is
//! the common currency of [`crate::merge`] and [`crate::map`]: configuration
//! layers, rendered documents and decoded payloads are all carried as a
//! [`Value`] tree.
//!
//! Traversals never match on [`Value`] directly. They take the closed
//! [`Node`] view from [`Value::node`], which folds the scalar variants into a
//! single leaf case and surfaces [`Opaque`] data as its own branch.

mod convert;
mod mapping;

pub use mapping::Mapping;

use std::fmt;

/// A node in a nested data structure
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
    /// Data outside the supported shapes, kept only for diagnostics
    Opaque(Opaque),
}

/// A runtime object that is neither a container nor a scalar
///
/// Produced when decoding data the value model has no shape for (raw bytes,
/// host object handles). Opaque values can be stored and compared, but
/// traversals reject them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Opaque {
    type_name: String,
}

impl Opaque {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    /// Name of the underlying runtime type
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<opaque {}>", self.type_name)
    }
}

/// Shape of a value as seen by a traversal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Mapping(&'a Mapping),
    Sequence(&'a [Value]),
    /// String, number, boolean or null
    Scalar(&'a Value),
    Unsupported(&'a Opaque),
}

impl Value {
    /// Classify this value for traversal
    pub fn node(&self) -> Node<'_> {
        match self {
            Value::Mapping(mapping) => Node::Mapping(mapping),
            Value::Sequence(items) => Node::Sequence(items),
            Value::Opaque(opaque) => Node::Unsupported(opaque),
            Value::Null
            | Value::Bool(_)
            | Value::Integer(_)
            | Value::Float(_)
            | Value::String(_) => Node::Scalar(self),
        }
    }

    /// Human-readable name of the variant, used in error messages
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
            Value::Opaque(opaque) => opaque.type_name(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.node(), Node::Scalar(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of integers and floats
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn into_mapping(self) -> Option<Mapping> {
        match self {
            Value::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Look up a key when this value is a mapping
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|mapping| mapping.get(key))
    }
}
