//! The sbt build tool as a whole: detection, version, commands.

use std::path::{Path, PathBuf};

use sbtkit_fs::{NormalizedPath, SbtPath};
use sbtkit_plugins::meta_directories;
use sbtkit_version::{ToolVersion, VersionStatus, VersionStore};
use serde::Serialize;

use crate::command::CommandBuilder;
use crate::config::SbtConfig;
use crate::error::Result;
use crate::gate;

/// Read-only summary of a workspace's sbt setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildToolStatus {
    pub workspace: PathBuf,
    pub detected: bool,
    pub version: Option<String>,
    pub status: Option<VersionStatus>,
    pub supports_bsp: bool,
    pub meta_directories: Vec<PathBuf>,
    /// Meta directories that already hold a plugin descriptor.
    pub provisioned: Vec<PathBuf>,
}

pub struct SbtBuildTool {
    workspace: NormalizedPath,
    config: SbtConfig,
}

impl SbtBuildTool {
    pub fn new(workspace: impl AsRef<Path>, config: SbtConfig) -> Self {
        Self {
            workspace: NormalizedPath::new(workspace),
            config,
        }
    }

    /// Whether `workspace` looks like an sbt build.
    pub fn detect(workspace: impl AsRef<Path>) -> bool {
        let workspace = NormalizedPath::new(workspace);
        workspace.join(SbtPath::BuildSbt).is_file()
            || workspace.join(SbtPath::BuildProperties).is_file()
    }

    pub fn workspace(&self) -> &NormalizedPath {
        &self.workspace
    }

    pub fn config(&self) -> &SbtConfig {
        &self.config
    }

    /// The configured version, else the one in `project/build.properties`.
    pub fn version(&self) -> Result<Option<ToolVersion>> {
        let store = VersionStore::new(self.workspace.to_native());
        Ok(store.resolve(self.config.sbt_version.as_deref())?)
    }

    /// See [`gate::supports_capability`]. Writes the BSP bridge when true.
    pub fn supports_bsp(&self) -> bool {
        gate::supports_capability(self.workspace.to_native(), &self.config)
    }

    pub fn check_minimum(&self) -> Option<VersionStatus> {
        gate::check_minimum(self.workspace.to_native(), &self.config)
    }

    fn commands(&self) -> CommandBuilder<'_> {
        CommandBuilder::new(self.workspace.to_native(), &self.config)
    }

    /// `bloopInstall` arguments; provisions the workspace as a side effect.
    pub fn install_args(&self) -> Result<Vec<String>> {
        let version = self.version()?;
        self.commands().build_install_args(version.as_ref())
    }

    pub fn bsp_args(&self) -> Result<Vec<String>> {
        let version = self.version()?;
        self.commands().build_bsp_args(version.as_ref())
    }

    /// Summarize the workspace without writing anything.
    pub fn status(&self) -> Result<BuildToolStatus> {
        let version = self.version()?;
        let status = version.as_ref().map(VersionStatus::classify);
        let dirs = meta_directories(self.workspace.to_native());

        let provisioned = dirs
            .iter()
            .filter(|d| d.join(SbtPath::PluginFile).is_file())
            .map(NormalizedPath::to_native)
            .collect();

        Ok(BuildToolStatus {
            workspace: self.workspace.to_native(),
            detected: Self::detect(self.workspace.to_native()),
            version: version.as_ref().map(|v| v.as_str().to_string()),
            status,
            supports_bsp: status.is_some_and(|s| s.supports_bsp()),
            meta_directories: dirs.iter().map(NormalizedPath::to_native).collect(),
            provisioned,
        })
    }
}
