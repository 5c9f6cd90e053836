//! Cleanup of the global plugin file older integrations installed.
//!
//! Earlier releases enabled sbt-bloop through a per-user global plugin at
//! `~/.sbt/<bucket>/plugins/metals.sbt`. It now conflicts with the
//! per-workspace descriptors and has to go.

use std::path::{Path, PathBuf};

use sbtkit_fs::{NormalizedPath, SbtPath, io};

use crate::error::{Error, Result};
use crate::paths;

#[derive(Debug, Clone)]
pub struct LegacyCleaner {
    home: PathBuf,
}

impl LegacyCleaner {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Cleaner for the current user, or for `home_override` when given.
    pub fn for_current_user(home_override: Option<&Path>) -> Result<Self> {
        paths::home_dir(home_override)
            .map(Self::new)
            .ok_or(Error::HomeDirNotFound)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Location of the legacy global plugin for `version`'s sbt line.
    pub fn legacy_plugin_path(&self, version: &str) -> NormalizedPath {
        NormalizedPath::new(paths::global_plugins_dir(&self.home, version))
            .join(SbtPath::PluginFile)
    }

    /// Delete the legacy global plugin if present.
    ///
    /// Absence counts as success; other failures are logged and ignored.
    /// Returns whether a file was removed.
    pub fn remove_legacy_global_plugin(&self, version: &str) -> bool {
        let path = self.legacy_plugin_path(version);
        let removed = io::remove_file_best_effort(&path, "legacy global sbt plugin");
        if removed {
            tracing::info!(path = %path, "removed legacy global plugin");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn legacy_path_per_bucket() {
        let cleaner = LegacyCleaner::new("/home/dev");
        assert_eq!(
            cleaner.legacy_plugin_path("1.4.1").as_str(),
            "/home/dev/.sbt/1.0/plugins/metals.sbt"
        );
        assert_eq!(
            cleaner.legacy_plugin_path("0.13.17").as_str(),
            "/home/dev/.sbt/0.13/plugins/metals.sbt"
        );
    }

    #[test]
    fn removes_existing_file() {
        let home = TempDir::new().unwrap();
        let plugins = home.path().join(".sbt/1.0/plugins");
        std::fs::create_dir_all(&plugins).unwrap();
        std::fs::write(plugins.join("metals.sbt"), "legacy").unwrap();

        let cleaner = LegacyCleaner::new(home.path());

        assert!(cleaner.remove_legacy_global_plugin("1.9.9"));
        assert!(!plugins.join("metals.sbt").exists());
    }

    #[test]
    fn absent_file_is_fine() {
        let home = TempDir::new().unwrap();
        let cleaner = LegacyCleaner::new(home.path());

        assert!(!cleaner.remove_legacy_global_plugin("1.9.9"));
        assert!(!cleaner.remove_legacy_global_plugin("0.13.18"));
    }

    #[test]
    fn other_bucket_is_left_alone() {
        let home = TempDir::new().unwrap();
        let old = home.path().join(".sbt/0.13/plugins");
        std::fs::create_dir_all(&old).unwrap();
        std::fs::write(old.join("metals.sbt"), "legacy").unwrap();

        let cleaner = LegacyCleaner::new(home.path());
        cleaner.remove_legacy_global_plugin("1.4.1");

        assert!(old.join("metals.sbt").exists());
    }
}
