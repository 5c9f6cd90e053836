use std::path::PathBuf;

/// Errors that can occur while reading or interpreting sbt versions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] sbtkit_fs::Error),

    /// The numeric core of a version could not be parsed.
    #[error("invalid version '{version}': {source}")]
    InvalidVersion {
        version: String,
        source: semver::Error,
    },

    /// The string has no numeric core at all.
    #[error("invalid version '{version}': expected a numeric version such as 1.4.1")]
    MalformedVersion { version: String },

    #[error("failed to parse {path} at line {line}: {message}")]
    PropertiesParse {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
