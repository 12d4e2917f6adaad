//! Layered configuration resolved through deep merge

use super::test_utils::mapping;
use nestkit::layers::Layers;
use nestkit::logging::LoggingConfig;
use nestkit::Value;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, PartialEq)]
struct AppConfig {
    name: String,
    #[serde(default)]
    threads: Option<u32>,
    #[serde(default)]
    logging: LoggingConfig,
}

const GLOBAL_TOML: &str = r#"
name = "global"

[logging]
level = "warn"
format = "json"

[logging.modules]
"nestkit::map" = "debug"
"#;

const WORKSPACE_JSON: &str = r#"{
    "name": "workspace",
    "logging": {"modules": {"nestkit::merge": "trace"}}
}"#;

#[test]
fn test_defaults_files_and_env_stack_in_order() {
    let layers = Layers::new()
        .with_defaults(mapping(json!({"name": "default", "logging": {"level": "info"}})))
        .unwrap()
        .add_toml_str("global", GLOBAL_TOML)
        .unwrap()
        .add_json_str("workspace", WORKSPACE_JSON)
        .unwrap()
        .add_env(
            "NESTKIT",
            "__",
            vec![("NESTKIT__LOGGING__OUTPUT".to_string(), "stdout".to_string())],
        );

    let config: AppConfig = layers.deserialize().unwrap();
    assert_eq!(config.name, "workspace");
    assert_eq!(config.threads, None);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.output, "stdout");
    assert_eq!(config.logging.modules.len(), 2);
    assert_eq!(config.logging.modules["nestkit::map"], "debug");
    assert_eq!(config.logging.modules["nestkit::merge"], "trace");
}

#[test]
fn test_logging_section_from_layers() {
    let layers = Layers::new().add_toml_str("global", GLOBAL_TOML).unwrap();
    let logging = LoggingConfig::from_layers(&layers).unwrap();
    assert_eq!(logging.level, "warn");
    assert!(logging.color);
}

#[test]
fn test_merged_tree_is_inspectable() {
    let layers = Layers::new()
        .add_toml_str("global", GLOBAL_TOML)
        .unwrap()
        .add_json_str("workspace", WORKSPACE_JSON)
        .unwrap();
    let merged = Value::Mapping(layers.merged().unwrap());
    let modules = merged
        .get("logging")
        .and_then(|logging| logging.get("modules"))
        .and_then(Value::as_mapping)
        .unwrap();
    assert_eq!(
        *modules,
        mapping(json!({"nestkit::map": "debug", "nestkit::merge": "trace"}))
    );
    assert_eq!(merged.get("name"), Some(&Value::from("workspace")));
}

#[test]
fn test_env_numbers_parse_into_typed_fields() {
    let layers = Layers::new().add_env(
        "APP",
        "__",
        vec![("APP__NAME", "x"), ("APP__THREADS", "4")],
    );
    let config: AppConfig = layers.deserialize().unwrap();
    assert_eq!(config.name, "x");
    assert_eq!(config.threads, Some(4));
    assert_eq!(config.logging, LoggingConfig::default());
}
