//! Path helpers for sbt's per-user global directory.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// sbt's global base directory under the user's home.
pub const SBT_GLOBAL_DIR: &str = ".sbt";

/// Resolve the home directory, preferring an explicit override.
pub fn home_dir(override_dir: Option<&Path>) -> Option<PathBuf> {
    match override_dir {
        Some(dir) => Some(dir.to_path_buf()),
        None => dirs::home_dir(),
    }
}

/// Fail unless `workspace` is an existing directory.
pub fn require_workspace(workspace: &Path) -> Result<()> {
    if workspace.is_dir() {
        Ok(())
    } else {
        Err(Error::WorkspaceNotFound {
            path: workspace.to_path_buf(),
        })
    }
}

/// sbt groups global settings by binary line: `0.13` for 0.13.x releases,
/// `1.0` for everything since.
pub fn version_bucket(version: &str) -> &'static str {
    if version.trim().starts_with("0.13") {
        "0.13"
    } else {
        "1.0"
    }
}

/// `<home>/.sbt/<bucket>/plugins`
pub fn global_plugins_dir(home: &Path, version: &str) -> PathBuf {
    home.join(SBT_GLOBAL_DIR)
        .join(version_bucket(version))
        .join("plugins")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_bucket() {
        assert_eq!(version_bucket("0.13.18"), "0.13");
        assert_eq!(version_bucket("1.4.1"), "1.0");
        assert_eq!(version_bucket("1.9.9"), "1.0");
    }

    #[test]
    fn test_global_plugins_dir() {
        let dir = global_plugins_dir(Path::new("/home/dev"), "0.13.17");
        assert_eq!(dir, PathBuf::from("/home/dev/.sbt/0.13/plugins"));
    }

    #[test]
    fn test_home_dir_override_wins() {
        let home = home_dir(Some(Path::new("/tmp/fake-home")));
        assert_eq!(home, Some(PathBuf::from("/tmp/fake-home")));
    }
}
