//! sbt version detection for sbtkit.
//!
//! - [`ToolVersion`]: parsing and feature-gate ordering of sbt versions
//! - [`VersionStore`]: reads `sbt.version` from `project/build.properties`
//! - [`thresholds`]: the versions that gate plugin and BSP support

pub mod error;
pub mod properties;
pub mod store;
pub mod thresholds;
pub mod version;

pub use error::{Error, Result};
pub use properties::Properties;
pub use store::{VERSION_KEY, VersionStore};
pub use thresholds::{
    FIRST_VERSION_WITH_BSP, MINIMUM_SUPPORTED_VERSION, RECOMMENDED_VERSION, VersionStatus,
};
pub use version::{ToolVersion, is_snapshot_version};
