//! Version-based feature gates.

use std::path::Path;

use sbtkit_plugins::ensure_bridge_written;
use sbtkit_version::{FIRST_VERSION_WITH_BSP, ToolVersion, VersionStatus, VersionStore};

use crate::config::SbtConfig;

/// Resolve the workspace's sbt version, treating unreadable files like
/// missing ones. Gates degrade; they never fail.
fn detect_version(workspace: &Path, config: &SbtConfig) -> Option<ToolVersion> {
    match VersionStore::new(workspace).resolve(config.sbt_version.as_deref()) {
        Ok(version) => version,
        Err(e) => {
            tracing::warn!(
                workspace = %workspace.display(),
                error = %e,
                "could not determine sbt version"
            );
            None
        }
    }
}

/// Whether the workspace's sbt can serve BSP.
///
/// When it can, the BSP bridge source is written into `project/` if it is
/// not already there. A failed write is logged; the answer stays `true`.
pub fn supports_capability(workspace: impl AsRef<Path>, config: &SbtConfig) -> bool {
    let workspace = workspace.as_ref();
    let Some(version) = detect_version(workspace, config) else {
        tracing::warn!(
            workspace = %workspace.display(),
            "no sbt version found, BSP support disabled"
        );
        return false;
    };

    if VersionStatus::classify(&version).supports_bsp() {
        match ensure_bridge_written(workspace) {
            Ok(outcome) if outcome.wrote() => {
                tracing::debug!(workspace = %workspace.display(), "wrote BSP bridge");
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "failed to write BSP bridge"),
        }
        true
    } else {
        tracing::warn!(
            version = %version,
            required = FIRST_VERSION_WITH_BSP,
            "sbt version does not support BSP"
        );
        false
    }
}

/// Classify the workspace's sbt version, or `None` when it has none.
///
/// Versions below the plugin minimum are reported with a warning.
pub fn check_minimum(workspace: impl AsRef<Path>, config: &SbtConfig) -> Option<VersionStatus> {
    let version = detect_version(workspace.as_ref(), config)?;
    let status = VersionStatus::classify(&version);
    if status == VersionStatus::Unsupported {
        tracing::warn!(version = %version, "sbt version is too old for the bloop plugin");
    }
    Some(status)
}
