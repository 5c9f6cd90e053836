//! Reading the sbt version pinned by a workspace.

use std::path::Path;

use sbtkit_fs::{NormalizedPath, SbtPath, io};

use crate::error::{Error, Result};
use crate::properties;
use crate::version::ToolVersion;

/// The key sbt reads from `project/build.properties`.
pub const VERSION_KEY: &str = "sbt.version";

/// Reads the version pinned in `<workspace>/project/build.properties`.
///
/// The file is read on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct VersionStore {
    workspace: NormalizedPath,
}

impl VersionStore {
    pub fn new(workspace: impl AsRef<Path>) -> Self {
        Self {
            workspace: NormalizedPath::new(workspace),
        }
    }

    pub fn properties_path(&self) -> NormalizedPath {
        self.workspace.join(SbtPath::BuildProperties)
    }

    /// Load the workspace's pinned version.
    ///
    /// A missing file or a file without the version key yields `Ok(None)`.
    /// Unreadable or malformed content is an error.
    pub fn load_version(&self) -> Result<Option<ToolVersion>> {
        let path = self.properties_path();
        let Some(text) = io::read_text_opt(&path)? else {
            tracing::debug!(path = %path, "no build.properties found");
            return Ok(None);
        };

        let props = properties::parse(&text).map_err(|e| Error::PropertiesParse {
            path: path.to_native(),
            line: e.line,
            message: e.message,
        })?;

        match props.get(VERSION_KEY) {
            Some(raw) => ToolVersion::parse(raw).map(Some),
            None => {
                tracing::debug!(path = %path, "build.properties has no {VERSION_KEY} entry");
                Ok(None)
            }
        }
    }

    /// An explicitly configured version wins over the properties file.
    pub fn resolve(&self, explicit: Option<&str>) -> Result<Option<ToolVersion>> {
        match explicit.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => ToolVersion::parse(raw).map(Some),
            None => self.load_version(),
        }
    }
}
