//! [`TestWorkspace`] builder for sbt workspace scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary sbt workspace plus a separate fake home directory.
///
/// # Example
///
/// ```rust,no_run
/// use sbtkit_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::new()
///     .with_sbt_version("1.4.1")
///     .with_file("build.sbt", "scalaVersion := \"2.13.12\"\n");
/// ws.assert_file_exists("project/build.properties");
/// ```
pub struct TestWorkspace {
    root: TempDir,
    home: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty workspace and an empty home directory.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("TestWorkspace: failed to create workspace dir"),
            home: TempDir::new().expect("TestWorkspace: failed to create home dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `project/build.properties` pinning `version`.
    pub fn with_sbt_version(self, version: &str) -> Self {
        self.with_file(
            "project/build.properties",
            &format!("sbt.version={version}\n"),
        )
    }

    /// Write a file relative to the workspace root, creating parents.
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        write_file(&self.path(relative), content);
        self
    }

    /// Create an empty directory relative to the workspace root.
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.path(relative))
            .unwrap_or_else(|e| panic!("TestWorkspace: failed to create {relative}: {e}"));
        self
    }

    /// Write a file relative to the fake home directory.
    pub fn with_home_file(self, relative: &str, content: &str) -> Self {
        write_file(&self.home().join(relative), content);
        self
    }

    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("TestWorkspace: failed to read {}: {e}", path.display()))
    }

    /// Assert that `relative` exists under the workspace root.
    pub fn assert_file_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `relative` does **not** exist under the workspace root.
    pub fn assert_file_not_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `relative` contains `content`.
    pub fn assert_file_contains(&self, relative: &str, content: &str) {
        let file_content = self.read(relative);
        assert!(
            file_content.contains(content),
            "File {relative} does not contain expected content.\nExpected: {content}\nActual: {file_content}"
        );
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap_or_else(|e| {
            panic!("TestWorkspace: failed to create {}: {e}", parent.display())
        });
    }
    fs::write(path, content)
        .unwrap_or_else(|e| panic!("TestWorkspace: failed to write {}: {e}", path.display()));
}
