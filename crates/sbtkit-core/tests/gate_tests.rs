//! BSP and minimum-version gates against real workspaces.

use rstest::rstest;
use sbtkit_core::{SbtBuildTool, SbtConfig, check_minimum, supports_capability};
use sbtkit_plugins::BRIDGE_FILENAME;
use sbtkit_test_utils::TestWorkspace;
use sbtkit_version::VersionStatus;

#[rstest]
#[case("1.4.1", true)]
#[case("1.4.0", false)]
#[case("1.10.0", true)]
#[case("2.0.0", true)]
#[case("1.4.1-RC1", true)]
#[case("1.4.0-RC2", false)]
#[case("0.13.18", false)]
fn test_bsp_threshold(#[case] version: &str, #[case] expected: bool) {
    let ws = TestWorkspace::new().with_sbt_version(version);

    assert_eq!(supports_capability(ws.root(), &SbtConfig::default()), expected);
}

#[test]
fn test_no_version_file_is_unsupported() {
    let ws = TestWorkspace::new();

    assert!(!supports_capability(ws.root(), &SbtConfig::default()));
    ws.assert_file_not_exists(&format!("project/{BRIDGE_FILENAME}"));
}

#[test]
fn test_properties_without_version_key_is_unsupported() {
    let ws = TestWorkspace::new().with_file("project/build.properties", "# empty\n");

    assert!(!supports_capability(ws.root(), &SbtConfig::default()));
}

#[test]
fn test_malformed_version_is_unsupported() {
    let ws = TestWorkspace::new().with_sbt_version("one.four");

    assert!(!supports_capability(ws.root(), &SbtConfig::default()));
}

#[test]
fn test_supported_version_writes_bridge() {
    let ws = TestWorkspace::new().with_sbt_version("1.9.9");

    assert!(supports_capability(ws.root(), &SbtConfig::default()));

    ws.assert_file_contains(&format!("project/{BRIDGE_FILENAME}"), "MetalsBspBridge");
}

#[test]
fn test_unsupported_version_writes_nothing() {
    let ws = TestWorkspace::new().with_sbt_version("1.3.13");

    assert!(!supports_capability(ws.root(), &SbtConfig::default()));
    ws.assert_file_not_exists(&format!("project/{BRIDGE_FILENAME}"));
}

#[test]
fn test_configured_version_overrides_file() {
    let ws = TestWorkspace::new().with_sbt_version("1.3.13");
    let config = SbtConfig::default().with_sbt_version("1.5.0");

    assert!(supports_capability(ws.root(), &config));
}

#[test]
fn test_existing_bridge_is_kept() {
    let ws = TestWorkspace::new()
        .with_sbt_version("1.9.9")
        .with_file(&format!("project/{BRIDGE_FILENAME}"), "custom");

    assert!(supports_capability(ws.root(), &SbtConfig::default()));

    assert_eq!(ws.read(&format!("project/{BRIDGE_FILENAME}")), "custom");
}

#[rstest]
#[case("0.13.16", VersionStatus::Unsupported)]
#[case("0.13.17", VersionStatus::Supported)]
#[case("1.3.13", VersionStatus::Supported)]
#[case("1.4.1", VersionStatus::SupportsBsp)]
fn test_check_minimum(#[case] version: &str, #[case] expected: VersionStatus) {
    let ws = TestWorkspace::new().with_sbt_version(version);

    assert_eq!(check_minimum(ws.root(), &SbtConfig::default()), Some(expected));
}

#[test]
fn test_check_minimum_without_version() {
    let ws = TestWorkspace::new();

    assert_eq!(check_minimum(ws.root(), &SbtConfig::default()), None);
}

// ============================================================================
// Facade
// ============================================================================

#[test]
fn test_detect() {
    assert!(SbtBuildTool::detect(TestWorkspace::new().with_file("build.sbt", "").root()));
    assert!(SbtBuildTool::detect(TestWorkspace::new().with_sbt_version("1.9.9").root()));
    assert!(!SbtBuildTool::detect(TestWorkspace::new().root()));
}

#[test]
fn test_status_is_read_only() {
    let ws = TestWorkspace::new()
        .with_sbt_version("1.9.9")
        .with_file("project/plugins.sbt", "");
    let tool = SbtBuildTool::new(ws.root(), SbtConfig::default());

    let status = tool.status().unwrap();

    assert!(status.detected);
    assert_eq!(status.version.as_deref(), Some("1.9.9"));
    assert_eq!(status.status, Some(VersionStatus::SupportsBsp));
    assert!(status.supports_bsp);
    assert_eq!(status.meta_directories.len(), 3);
    assert!(status.provisioned.is_empty());
    ws.assert_file_not_exists(&format!("project/{BRIDGE_FILENAME}"));
    ws.assert_file_not_exists("project/metals.sbt");
}

#[test]
fn test_status_serializes() {
    let ws = TestWorkspace::new().with_sbt_version("1.2.8");
    let status = SbtBuildTool::new(ws.root(), SbtConfig::default())
        .status()
        .unwrap();

    let json = serde_json::to_value(&status).unwrap();

    assert_eq!(json["version"], "1.2.8");
    assert_eq!(json["status"], "supported");
    assert_eq!(json["supports_bsp"], false);
}

#[test]
fn test_configured_version_on_missing_workspace_writes_nothing() {
    let ws = TestWorkspace::new();
    let missing = ws.path("typo-workspace");
    let config = SbtConfig::default().with_sbt_version("1.9.9");

    assert!(supports_capability(&missing, &config));
    assert!(!missing.exists());
}
