//! The BSP bridge source copied into `project/` for BSP-capable builds.

use std::path::Path;

use sbtkit_fs::{NormalizedPath, SbtPath, WriteOutcome, io};

use crate::error::Result;
use crate::paths::require_workspace;

pub const BRIDGE_FILENAME: &str = "MetalsBspBridge.scala";

/// Bundled bridge source, copied verbatim.
pub const BRIDGE_CONTENT: &[u8] = include_bytes!("../resources/MetalsBspBridge.scala");

pub fn bridge_path(workspace: impl AsRef<Path>) -> NormalizedPath {
    NormalizedPath::new(workspace)
        .join(SbtPath::ProjectDir)
        .join(BRIDGE_FILENAME)
}

/// Write the bridge file unless one already exists.
///
/// `workspace` must already exist; `project/` is created when missing.
///
/// TODO: compare content so an updated bundled bridge replaces stale copies.
pub fn ensure_bridge_written(workspace: impl AsRef<Path>) -> Result<WriteOutcome> {
    let workspace = workspace.as_ref();
    require_workspace(workspace)?;
    let path = bridge_path(workspace);
    let outcome = io::write_if_absent(&path, BRIDGE_CONTENT)?;
    if outcome.wrote() {
        tracing::info!(path = %path, "wrote BSP bridge");
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_lives_in_project_dir() {
        assert_eq!(
            bridge_path("/ws").as_str(),
            "/ws/project/MetalsBspBridge.scala"
        );
    }

    #[test]
    fn bundled_content_is_marked_generated() {
        let text = std::str::from_utf8(BRIDGE_CONTENT).unwrap();
        assert!(text.starts_with("// DO NOT EDIT!"));
        assert!(text.contains("object MetalsBspBridge"));
    }
}
