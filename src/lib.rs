//! Nestkit: Nested Value Utilities
//!
//! Pure helpers over dynamically-shaped data: right-biased deep merge of
//! mappings, key-path aware deep map over mappings and sequences, and
//! human-scaled byte formatting.

pub mod error;
pub mod format;
pub mod layers;
pub mod logging;
pub mod map;
pub mod merge;
pub mod path;
pub mod value;

pub use error::ConfigError;
pub use format::{format_bytes, format_rows_number};
pub use map::{deep_map, try_deep_map};
pub use merge::{deep_merge, merge};
pub use path::{KeyPath, PathSegment};
pub use value::{Mapping, Node, Opaque, Value};
