//! Plugin provisioning for sbt workspaces.
//!
//! - [`walker`]: discovery of the recursive `project/` meta directories
//! - [`materializer`]: idempotent `metals.sbt` descriptors in each of them
//! - [`bridge`]: the BSP bridge source for BSP-capable builds
//! - [`legacy`]: removal of the old global plugin under `~/.sbt`

pub mod bridge;
pub mod error;
pub mod legacy;
pub mod materializer;
pub mod paths;
pub mod walker;

pub use bridge::{BRIDGE_FILENAME, ensure_bridge_written};
pub use error::{Error, Result};
pub use legacy::LegacyCleaner;
pub use materializer::{
    DEFAULT_PLUGIN_VERSION, GeneratedFile, ProvisionReport, desired_plugin_files,
    ensure_plugins_written, plugin_descriptor, reconcile,
};
pub use walker::{has_build_sources, meta_directories};
