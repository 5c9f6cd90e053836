//! Well-known workspace-relative paths.

use std::path::Path;

/// Files and directories sbtkit reads or writes inside an sbt workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SbtPath {
    /// The `project` build-metadata directory
    ProjectDir,
    /// `project/build.properties`, holding `sbt.version`
    BuildProperties,
    /// The root `build.sbt`
    BuildSbt,
    /// `.jvmopts`, one JVM option per line
    JvmOpts,
    /// `.sbtopts`, one sbt option per line
    SbtOpts,
    /// The generated plugin descriptor placed in each meta directory
    PluginFile,
    /// `.sbtkit/config.toml`, the workspace configuration file
    WorkspaceConfig,
}

impl SbtPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectDir => "project",
            Self::BuildProperties => "project/build.properties",
            Self::BuildSbt => "build.sbt",
            Self::JvmOpts => ".jvmopts",
            Self::SbtOpts => ".sbtopts",
            Self::PluginFile => "metals.sbt",
            Self::WorkspaceConfig => ".sbtkit/config.toml",
        }
    }
}

impl AsRef<Path> for SbtPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for SbtPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for SbtPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
