//! Version thresholds that gate sbt features.

use serde::Serialize;

use crate::version::ToolVersion;

/// Oldest sbt release the bloop plugin can be installed into.
pub const MINIMUM_SUPPORTED_VERSION: &str = "0.13.17";

/// First sbt release able to act as a BSP server.
pub const FIRST_VERSION_WITH_BSP: &str = "1.4.1";

/// Version pinned on the command line when a workspace does not pin one.
pub const RECOMMENDED_VERSION: &str = "1.9.9";

pub fn minimum_supported_version() -> ToolVersion {
    ToolVersion::new(0, 13, 17)
}

pub fn first_version_with_bsp() -> ToolVersion {
    ToolVersion::new(1, 4, 1)
}

/// How well a given sbt version is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionStatus {
    /// Older than [`MINIMUM_SUPPORTED_VERSION`].
    Unsupported,
    /// Supported, but without BSP.
    Supported,
    /// At or above [`FIRST_VERSION_WITH_BSP`].
    SupportsBsp,
}

impl VersionStatus {
    pub fn classify(version: &ToolVersion) -> Self {
        if *version >= first_version_with_bsp() {
            Self::SupportsBsp
        } else if *version >= minimum_supported_version() {
            Self::Supported
        } else {
            Self::Unsupported
        }
    }

    pub fn supports_bsp(&self) -> bool {
        matches!(self, Self::SupportsBsp)
    }
}

impl std::fmt::Display for VersionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported => f.write_str("unsupported"),
            Self::Supported => f.write_str("supported"),
            Self::SupportsBsp => f.write_str("supported (bsp)"),
        }
    }
}
