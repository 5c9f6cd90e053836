//! sbt integration core.
//!
//! Ties version detection and plugin provisioning together:
//! - [`config`]: [`SbtConfig`] and its layered [`ConfigResolver`]
//! - [`gate`]: version checks for BSP and plugin support
//! - [`command`]: the `bloopInstall` and `bspConfig` command lines
//! - [`tool`]: [`SbtBuildTool`], everything above for one workspace

pub mod command;
pub mod config;
pub mod error;
pub mod gate;
pub mod options;
pub mod tool;

pub use command::{BSP_SUBCOMMAND, CommandBuilder, DIAGNOSTIC_FLAGS, INSTALL_SUBCOMMAND};
pub use config::{ConfigLayer, ConfigResolver, SbtConfig};
pub use error::{Error, Result};
pub use gate::{check_minimum, supports_capability};
pub use options::option_file_args;
pub use tool::{BuildToolStatus, SbtBuildTool};
