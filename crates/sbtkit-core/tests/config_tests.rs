//! Layered configuration resolution.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use sbtkit_core::{ConfigResolver, Error, SbtConfig};
use sbtkit_test_utils::TestWorkspace;
use tempfile::TempDir;

fn write(dir: &std::path::Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_workspace_overrides_global() {
    let global = TempDir::new().unwrap();
    write(
        global.path(),
        "config.toml",
        "plugin_version = \"1.5.0\"\njava_home = \"/opt/jdk11\"\n",
    );
    let ws = TestWorkspace::new().with_file(".sbtkit/config.toml", "plugin_version = \"1.5.11\"\n");

    let config = ConfigResolver::new(ws.root())
        .with_global_config_dir(global.path())
        .resolve()
        .unwrap();

    assert_eq!(config.plugin_version, "1.5.11");
    assert_eq!(config.java_home, Some(PathBuf::from("/opt/jdk11")));
}

#[test]
fn test_explicit_file_is_last_layer() {
    let global = TempDir::new().unwrap();
    let extra = TempDir::new().unwrap();
    let explicit = write(
        extra.path(),
        "sbtkit.json",
        r#"{ "plugins_installed": true, "jvm_options": ["-Xss4m"] }"#,
    );
    let ws = TestWorkspace::new().with_file(".sbtkit/config.toml", "plugins_installed = false\n");

    let config = ConfigResolver::new(ws.root())
        .with_global_config_dir(global.path())
        .with_config_file(&explicit)
        .resolve()
        .unwrap();

    assert!(config.plugins_installed);
    assert_eq!(config.jvm_options, vec!["-Xss4m"]);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let global = TempDir::new().unwrap();
    let ws = TestWorkspace::new();

    let result = ConfigResolver::new(ws.root())
        .with_global_config_dir(global.path())
        .with_config_file(ws.path("nope.toml"))
        .resolve();

    assert!(matches!(result, Err(Error::Fs(_))));
}

#[test]
fn test_empty_plugin_version_is_rejected() {
    let global = TempDir::new().unwrap();
    let ws = TestWorkspace::new().with_file(".sbtkit/config.toml", "plugin_version = \"  \"\n");

    let result = ConfigResolver::new(ws.root())
        .with_global_config_dir(global.path())
        .resolve();

    assert!(matches!(result, Err(Error::InvalidConfig { .. })));
}

#[test]
fn test_unknown_field_is_a_parse_error() {
    let global = TempDir::new().unwrap();
    let ws = TestWorkspace::new().with_file(".sbtkit/config.toml", "plugin_verison = \"1.0\"\n");

    let result = ConfigResolver::new(ws.root())
        .with_global_config_dir(global.path())
        .resolve();

    assert!(matches!(result, Err(Error::Fs(_))));
}

#[test]
fn test_yaml_explicit_file() {
    let global = TempDir::new().unwrap();
    let extra = TempDir::new().unwrap();
    let explicit = write(extra.path(), "sbtkit.yaml", "sbt_version: \"1.4.9\"\n");
    let ws = TestWorkspace::new();

    let config = ConfigResolver::new(ws.root())
        .with_global_config_dir(global.path())
        .with_config_file(explicit)
        .resolve()
        .unwrap();

    assert_eq!(config, SbtConfig::default().with_sbt_version("1.4.9"));
}
