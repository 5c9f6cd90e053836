//! Idempotent provisioning of the generated plugin descriptors.
//!
//! Provisioning is split into computing the desired files
//! ([`desired_plugin_files`], pure) and reconciling the filesystem with them
//! ([`reconcile`]). A file is only written when its bytes differ from what
//! is already on disk, so calling [`ensure_plugins_written`] on every build
//! import causes no disk churn and no spurious file-watcher events.

use std::path::{Path, PathBuf};

use sbtkit_fs::{NormalizedPath, SbtPath, WriteOutcome, io};
use sbtkit_version::is_snapshot_version;

use crate::error::Result;
use crate::paths::require_workspace;
use crate::walker::meta_directories;

/// The sbt-bloop release written into generated descriptors by default.
pub const DEFAULT_PLUGIN_VERSION: &str = "1.5.11";

const SNAPSHOT_RESOLVER: &str = r#"resolvers += Resolver.sonatypeRepo("snapshots")"#;

/// A file sbtkit wants to exist with exactly this content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: NormalizedPath,
    pub content: Vec<u8>,
}

/// What a provisioning pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    /// Files created or updated.
    pub written: Vec<PathBuf>,
    /// Files already up to date.
    pub unchanged: Vec<PathBuf>,
}

impl ProvisionReport {
    /// True when nothing on disk was touched.
    pub fn is_noop(&self) -> bool {
        self.written.is_empty()
    }
}

/// Render the plugin descriptor for `plugin_version`.
///
/// Snapshot versions (containing `+`) are only published to the snapshots
/// repository, so they also get a resolver line.
pub fn plugin_descriptor(plugin_version: &str) -> String {
    let mut out = String::from(
        "// DO NOT EDIT! This file is auto-generated.\n\
         // This file enables sbt-bloop to create bloop config files.\n\
         \n",
    );
    out.push_str(&format!(
        "addSbtPlugin(\"ch.epfl.scala\" % \"sbt-bloop\" % \"{plugin_version}\")\n"
    ));
    if is_snapshot_version(plugin_version) {
        out.push_str(SNAPSHOT_RESOLVER);
        out.push('\n');
    }
    out
}

/// Compute the plugin files every meta directory of `workspace` should hold.
pub fn desired_plugin_files(
    workspace: impl AsRef<Path>,
    plugin_version: &str,
) -> Vec<GeneratedFile> {
    let content = plugin_descriptor(plugin_version).into_bytes();
    meta_directories(workspace)
        .into_iter()
        .map(|dir| GeneratedFile {
            path: dir.join(SbtPath::PluginFile),
            content: content.clone(),
        })
        .collect()
}

/// Bring the filesystem in line with `files`.
///
/// Stops at the first write failure; a half-provisioned workspace is
/// reported as an error rather than skipped.
pub fn reconcile(files: &[GeneratedFile]) -> Result<ProvisionReport> {
    let mut report = ProvisionReport::default();
    for file in files {
        match io::write_if_changed(&file.path, &file.content)? {
            WriteOutcome::Unchanged => report.unchanged.push(file.path.to_native()),
            WriteOutcome::Created | WriteOutcome::Updated => {
                report.written.push(file.path.to_native())
            }
        }
    }
    Ok(report)
}

/// Make sure every meta directory of `workspace` carries an up-to-date
/// plugin descriptor.
///
/// `already_installed` means the user manages the plugin themselves; the
/// call is then a no-op. Otherwise `workspace` must already exist; meta
/// directories below it are created as needed.
pub fn ensure_plugins_written(
    workspace: impl AsRef<Path>,
    plugin_version: &str,
    already_installed: bool,
) -> Result<ProvisionReport> {
    if already_installed {
        tracing::debug!("plugin provisioning disabled, skipping");
        return Ok(ProvisionReport::default());
    }

    let workspace = workspace.as_ref();
    require_workspace(workspace)?;

    let files = desired_plugin_files(workspace, plugin_version);
    let report = reconcile(&files)?;
    if !report.is_noop() {
        tracing::info!(
            written = report.written.len(),
            version = plugin_version,
            "provisioned sbt-bloop plugin"
        );
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn descriptor_for_release() {
        assert_eq!(
            plugin_descriptor("1.5.11"),
            "// DO NOT EDIT! This file is auto-generated.\n\
             // This file enables sbt-bloop to create bloop config files.\n\
             \n\
             addSbtPlugin(\"ch.epfl.scala\" % \"sbt-bloop\" % \"1.5.11\")\n"
        );
    }

    #[test]
    fn descriptor_for_snapshot_adds_resolver() {
        let content = plugin_descriptor("1.5.11+7-1a2b3c4d-SNAPSHOT");
        assert!(content.contains("% \"1.5.11+7-1a2b3c4d-SNAPSHOT\")"));
        assert!(content.ends_with("resolvers += Resolver.sonatypeRepo(\"snapshots\")\n"));
    }

    #[test]
    fn descriptor_is_deterministic() {
        assert_eq!(plugin_descriptor("2.0.0"), plugin_descriptor("2.0.0"));
    }

    #[test]
    fn report_noop() {
        let mut report = ProvisionReport::default();
        assert!(report.is_noop());
        report.written.push(PathBuf::from("/ws/project/metals.sbt"));
        assert!(!report.is_noop());
    }
}
