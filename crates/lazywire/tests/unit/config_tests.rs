//! Unit tests for configuration loading
//!
//! Verifies the Figment layering: defaults, then TOML file, then prefixed
//! environment variables. Env tests use per-test prefixes so they stay safe
//! under the parallel test runner.

use std::io::Write;

use lazywire::{AppConfig, ConfigLoader};

#[test]
fn test_defaults_load_without_any_sources() {
    let loader = ConfigLoader::new().with_config_path("/nonexistent/lazywire.toml");
    let config = loader.load().unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_toml_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[context]
name = "from_toml"
max_results = 99

[providers.tools]
provider = "null"
"#
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap();

    assert_eq!(config.context.name, "from_toml");
    assert_eq!(config.context.max_results, 99);
    assert_eq!(config.providers.tools.provider, "null");
    // Untouched sections keep their defaults
    assert_eq!(config.providers.store.provider, "memory");
}

#[test]
fn test_env_overrides_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[context]\nname = \"from_toml\"").unwrap();

    // Unique prefix keeps this test independent of the global environment
    std::env::set_var("LWTEST_ENV__CONTEXT__NAME", "from_env");

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("LWTEST_ENV")
        .load()
        .unwrap();

    std::env::remove_var("LWTEST_ENV__CONTEXT__NAME");

    assert_eq!(config.context.name, "from_env");
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[logging]\nlevel = \"verbose\"").unwrap();

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect_err("invalid level must not load");
    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_empty_context_name_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[context]\nname = \"\"\nmax_results = 1").unwrap();

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect_err("empty name must not load");
    assert!(err.to_string().contains("context.name"));
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lazywire.toml");

    let mut config = AppConfig::default();
    config.context.name = "saved".to_string();
    config.providers.store.capacity = Some(7);

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();

    let reloaded = loader.load().unwrap();
    assert_eq!(reloaded, config);
}
