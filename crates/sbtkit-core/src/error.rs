//! Error types for sbtkit-core

use std::path::PathBuf;

/// Result type for sbtkit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sbtkit-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value is present but unusable
    #[error("Invalid configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// Filesystem error from sbtkit-fs
    #[error(transparent)]
    Fs(#[from] sbtkit_fs::Error),

    /// Version error from sbtkit-version
    #[error(transparent)]
    Version(#[from] sbtkit_version::Error),

    /// Provisioning error from sbtkit-plugins
    #[error(transparent)]
    Plugins(#[from] sbtkit_plugins::Error),
}
