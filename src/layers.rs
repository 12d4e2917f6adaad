//! Layered Configuration
//!
//! Configuration documents stacked in override order on a `config`
//! [`ConfigBuilder`]. Defaults sit at the bottom, then each added layer in
//! turn. A later layer overrides only the keys it sets and recurses into
//! nested tables, the same rule as [`deep_merge`](crate::merge::deep_merge).
//! Layers are parsed from strings, so reading files and choosing which ones
//! exist is left to the caller.

use crate::error::ConfigError;
use crate::path::KeyPath;
use crate::value::{Mapping, Value};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, Source, ValueKind};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

/// Ordered stack of configuration layers
#[derive(Debug, Clone)]
pub struct Layers {
    builder: ConfigBuilder<DefaultState>,
    names: Vec<String>,
}

impl Default for Layers {
    fn default() -> Self {
        Self {
            builder: Config::builder(),
            names: Vec::new(),
        }
    }
}

impl Layers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bottom layer, applied before every added layer
    pub fn with_defaults(mut self, defaults: Mapping) -> Result<Self, ConfigError> {
        for (key, value) in defaults.iter() {
            let value = to_config_value(value, "defaults", &KeyPath::root().child(key))?;
            self.builder = self.builder.set_default(key, value)?;
        }
        Ok(self)
    }

    pub fn add_mapping(
        mut self,
        name: impl Into<String>,
        values: Mapping,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        trace!(layer = %name, keys = values.len(), "Adding configuration layer");
        let table = to_config_table(&values, &name, &KeyPath::root())?;
        self.builder = self.builder.add_source(MappingSource { table });
        self.names.push(name);
        Ok(self)
    }

    /// Parse a TOML document and add it as a layer
    pub fn add_toml_str(self, name: impl Into<String>, source: &str) -> Result<Self, ConfigError> {
        self.add_file_str(name.into(), source, FileFormat::Toml, "TOML")
    }

    /// Parse a JSON document and add it as a layer
    pub fn add_json_str(self, name: impl Into<String>, source: &str) -> Result<Self, ConfigError> {
        self.add_file_str(name.into(), source, FileFormat::Json, "JSON")
    }

    fn add_file_str(
        mut self,
        name: String,
        source: &str,
        format: FileFormat,
        format_name: &'static str,
    ) -> Result<Self, ConfigError> {
        let file = File::from_str(source, format);
        let keys = file
            .collect()
            .map_err(|e| ConfigError::Parse {
                format: format_name,
                message: format!("{}: {}", name, e),
            })?
            .len();
        trace!(layer = %name, keys, "Adding configuration layer");
        self.builder = self.builder.add_source(file);
        self.names.push(name);
        Ok(self)
    }

    /// Add a layer from `PREFIX<sep>SECTION<sep>KEY=value` variables
    ///
    /// Variables without the prefix are ignored. Path segments are lowercased.
    /// Values that read as booleans or numbers are parsed, the rest stay
    /// strings, e.g. with prefix `NESTKIT` and separator `__`,
    /// `NESTKIT__LOGGING__LEVEL=debug` sets `logging.level`.
    pub fn add_env<I, K, V>(mut self, prefix: &str, separator: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: config::Map<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        let name = format!("env:{}", prefix);
        trace!(layer = %name, vars = vars.len(), "Adding configuration layer");
        self.builder = self.builder.add_source(
            Environment::with_prefix(prefix)
                .separator(separator)
                .try_parsing(true)
                .source(Some(vars)),
        );
        self.names.push(name);
        self
    }

    /// Names of the added layers, in override order
    pub fn layer_names(&self) -> &[String] {
        &self.names
    }

    fn build(&self) -> Result<Config, ConfigError> {
        let config = self.builder.build_cloned()?;
        debug!(layers = self.names.len(), "Merged configuration layers");
        Ok(config)
    }

    /// Defaults and all layers, merged in order
    ///
    /// Nested tables keep every key; key order is not part of the result.
    pub fn merged(&self) -> Result<Mapping, ConfigError> {
        self.deserialize()
    }

    /// Deserialize the merged configuration into `T`
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        self.build()?
            .try_deserialize()
            .map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    /// Deserialize one top-level table of the merged configuration
    ///
    /// A missing table deserializes from an empty mapping, so types with serde
    /// defaults come back filled with their defaults.
    pub fn section<T: DeserializeOwned>(&self, name: &str) -> Result<T, ConfigError> {
        let value = match self.build()?.get::<config::Value>(name) {
            Ok(value) => value,
            Err(config::ConfigError::NotFound(_)) => {
                config::Value::new(None, ValueKind::Table(config::Map::new()))
            }
            Err(e) => return Err(e.into()),
        };
        match &value.kind {
            ValueKind::Table(_) => value
                .try_deserialize()
                .map_err(|e| ConfigError::Deserialize(e.to_string())),
            other => Err(ConfigError::NotAMapping {
                source_name: name.to_string(),
                found: kind_name(other).to_string(),
            }),
        }
    }
}

/// A prepared mapping added as one layer
#[derive(Debug, Clone)]
struct MappingSource {
    table: config::Map<String, config::Value>,
}

impl Source for MappingSource {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<config::Map<String, config::Value>, config::ConfigError> {
        Ok(self.table.clone())
    }
}

fn to_config_table(
    mapping: &Mapping,
    origin: &str,
    path: &KeyPath,
) -> Result<config::Map<String, config::Value>, ConfigError> {
    mapping
        .iter()
        .map(|(key, value)| {
            let value = to_config_value(value, origin, &path.child(key))?;
            Ok((key.to_string(), value))
        })
        .collect()
}

fn to_config_value(
    value: &Value,
    origin: &str,
    path: &KeyPath,
) -> Result<config::Value, ConfigError> {
    let kind = match value {
        Value::Null => ValueKind::Nil,
        Value::Bool(b) => ValueKind::Boolean(*b),
        Value::Integer(i) => ValueKind::I64(*i),
        Value::Float(f) => ValueKind::Float(*f),
        Value::String(s) => ValueKind::String(s.clone()),
        Value::Sequence(items) => ValueKind::Array(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| to_config_value(item, origin, &path.child(index)))
                .collect::<Result<_, _>>()?,
        ),
        Value::Mapping(mapping) => ValueKind::Table(to_config_table(mapping, origin, path)?),
        Value::Opaque(opaque) => {
            return Err(ConfigError::Build(format!(
                "layer '{}' holds unsupported {} at {}",
                origin,
                opaque.type_name(),
                path
            )))
        }
    };
    Ok(config::Value::new(Some(&origin.to_string()), kind))
}

fn kind_name(kind: &ValueKind) -> &'static str {
    match kind {
        ValueKind::Nil => "null",
        ValueKind::Boolean(_) => "boolean",
        ValueKind::I64(_) | ValueKind::I128(_) | ValueKind::U64(_) | ValueKind::U128(_) => {
            "integer"
        }
        ValueKind::Float(_) => "float",
        ValueKind::String(_) => "string",
        ValueKind::Table(_) => "mapping",
        ValueKind::Array(_) => "sequence",
    }
}
