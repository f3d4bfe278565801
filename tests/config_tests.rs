// Configuration loading tests
// Author: kelexine (https://github.com/kelexine)

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use vision_node::config::{AppConfig, ConfigSources};
use vision_node::error::NodeError;

fn write_toml(path: &Path, contents: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

/// Sources with an empty home and an empty environment.
fn isolated(home: &Path) -> ConfigSources {
    ConfigSources {
        home_dir: Some(home.to_path_buf()),
        explicit_file: None,
        env: env(&[]),
    }
}

#[test]
fn test_isolated_load_yields_defaults() {
    let home = tempfile::tempdir().unwrap();

    let config = AppConfig::load_from(isolated(home.path())).unwrap();

    assert_eq!(config.openai.model, "gpt-4-turbo");
    assert!(config.openai.timeout_seconds.is_none());
    assert_eq!(config.node.display_name, "Paul OpenIA");
}

#[test]
fn test_home_config_file_is_read() {
    let home = tempfile::tempdir().unwrap();
    write_toml(
        &home.path().join(".vision-node").join("config.toml"),
        r#"
[openai]
model = "gpt-4o-mini"

[logging]
format = "json"
"#,
    );

    let config = AppConfig::load_from(isolated(home.path())).unwrap();

    assert_eq!(config.openai.model, "gpt-4o-mini");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_explicit_file_overrides_home_and_defaults() {
    let home = tempfile::tempdir().unwrap();
    write_toml(
        &home.path().join(".vision-node").join("config.toml"),
        r#"
[openai]
model = "gpt-4o-mini"

[node]
category = "Home Nodes"
"#,
    );
    let explicit: PathBuf = home.path().join("override.toml");
    write_toml(
        &explicit,
        r#"
[openai]
model = "gpt-4o"
timeout_seconds = 30

[node]
display_name = "Image Question"
"#,
    );

    let config = AppConfig::load_from(ConfigSources {
        explicit_file: Some(explicit),
        ..isolated(home.path())
    })
    .unwrap();

    assert_eq!(config.openai.model, "gpt-4o");
    assert_eq!(config.openai.timeout_seconds, Some(30));
    assert_eq!(config.node.display_name, "Image Question");
    // Home layer still applies where the explicit file is silent
    assert_eq!(config.node.category, "Home Nodes");
    assert_eq!(config.openai.api_base_url, "https://api.openai.com/v1");
}

#[test]
fn test_env_overrides_explicit_file() {
    let home = tempfile::tempdir().unwrap();
    let explicit = home.path().join("override.toml");
    write_toml(
        &explicit,
        r#"
[openai]
model = "gpt-4o-mini"
timeout_seconds = 30

[node]
display_name = "File Name"
"#,
    );

    let config = AppConfig::load_from(ConfigSources {
        home_dir: Some(home.path().to_path_buf()),
        explicit_file: Some(explicit),
        env: env(&[
            ("VISION_NODE_OPENAI__MODEL", "gpt-4o"),
            ("VISION_NODE_OPENAI__TIMEOUT_SECONDS", "42"),
            ("VISION_NODE_NODE__DISPLAY_NAME", "Env Name"),
            ("OTHER_APP_OPENAI__MODEL", "ignored"),
        ]),
    })
    .unwrap();

    assert_eq!(config.openai.model, "gpt-4o");
    assert_eq!(config.openai.timeout_seconds, Some(42));
    assert_eq!(config.node.display_name, "Env Name");
}

#[test]
fn test_missing_explicit_file_is_error() {
    let home = tempfile::tempdir().unwrap();

    let result = AppConfig::load_from(ConfigSources {
        explicit_file: Some(home.path().join("absent.toml")),
        ..isolated(home.path())
    });

    assert!(matches!(result, Err(NodeError::Configuration(_))));
}
