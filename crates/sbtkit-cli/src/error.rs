//! Error types for sbtkit-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from sbtkit-core
    #[error(transparent)]
    Core(#[from] sbtkit_core::Error),

    /// Error from sbtkit-fs
    #[error(transparent)]
    Fs(#[from] sbtkit_fs::Error),

    /// Error from sbtkit-version
    #[error(transparent)]
    Version(#[from] sbtkit_version::Error),

    /// Error from sbtkit-plugins
    #[error(transparent)]
    Plugins(#[from] sbtkit_plugins::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
