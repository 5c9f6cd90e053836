//! Error types for sbtkit-plugins

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] sbtkit_fs::Error),

    #[error("Could not determine the user's home directory")]
    HomeDirNotFound,

    /// Provisioning only writes into an existing workspace directory.
    #[error("Workspace {path} does not exist or is not a directory")]
    WorkspaceNotFound { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_error_is_wrapped() {
        let err: Error = sbtkit_fs::Error::io(
            "/ws/project/metals.sbt",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        )
        .into();
        assert!(err.to_string().contains("metals.sbt"));
    }
}
