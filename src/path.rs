//! Key paths into nested values
//!
//! A [`KeyPath`] records the route from the root of a structure to one of its
//! nodes: mapping keys and sequence indices, in order. Paths are extended by
//! building a new path per descent, so a callee never observes a sibling's
//! segments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a key path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Key of a mapping entry
    Key(String),
    /// Position in a sequence
    Index(usize),
}

impl PathSegment {
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(key) => Some(key.as_str()),
            PathSegment::Index(_) => None,
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Key(_) => None,
            PathSegment::Index(index) => Some(*index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl PartialEq<str> for PathSegment {
    fn eq(&self, other: &str) -> bool {
        self.as_key() == Some(other)
    }
}

impl PartialEq<&str> for PathSegment {
    fn eq(&self, other: &&str) -> bool {
        self.as_key() == Some(*other)
    }
}

impl PartialEq<usize> for PathSegment {
    fn eq(&self, other: &usize) -> bool {
        self.as_index() == Some(*other)
    }
}

/// Ordered route from the root of a structure to a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPath(Vec<PathSegment>);

impl KeyPath {
    /// The empty path, addressing the root itself
    pub fn root() -> Self {
        KeyPath(Vec::new())
    }

    /// A new path with `segment` appended; `self` is left untouched.
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend(self.0.iter().cloned());
        segments.push(segment.into());
        KeyPath(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.0.last()
    }

    /// Exact match against a list of keys and indices
    ///
    /// ```
    /// use nestkit::path::{KeyPath, PathSegment};
    /// let path = KeyPath::root().child("foo").child("baz").child(1usize);
    /// assert!(path.matches(&["foo".into(), "baz".into(), PathSegment::Index(1)]));
    /// ```
    pub fn matches(&self, segments: &[PathSegment]) -> bool {
        self.0.as_slice() == segments
    }
}

impl From<Vec<PathSegment>> for KeyPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        KeyPath(segments)
    }
}

impl FromIterator<PathSegment> for KeyPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        KeyPath(iter.into_iter().collect())
    }
}

impl PartialEq<[PathSegment]> for KeyPath {
    fn eq(&self, other: &[PathSegment]) -> bool {
        self.matches(other)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "<root>");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{}", key)?,
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}
