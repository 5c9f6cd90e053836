//! sbt version strings and their ordering.
//!
//! A version is a numeric core (`major.minor.patch`, missing components
//! default to 0) followed by an optional suffix holding everything after
//! the core: pre-release tags (`-RC1`, `-M2`) and build metadata
//! (`+12-3f4a5b6c`, used by nightly and snapshot builds).
//!
//! Ordering compares the numeric cores first. On equal cores the bare
//! version sorts before any suffixed one, and suffixes compare lexically:
//!
//! ```
//! use sbtkit_version::ToolVersion;
//!
//! let bare: ToolVersion = "1.4.1".parse().unwrap();
//! let rc: ToolVersion = "1.4.1-RC1".parse().unwrap();
//! let newer: ToolVersion = "1.10.0".parse().unwrap();
//! assert!(bare < rc);
//! assert!(rc < newer);
//! ```
//!
//! This deliberately differs from semver precedence, where `1.4.1-RC1`
//! precedes `1.4.1`: a pre-release of a release that introduced a feature
//! is expected to carry that feature.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A parsed sbt version.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolVersion {
    raw: String,
    core: semver::Version,
    suffix: String,
}

impl ToolVersion {
    /// Build a bare `major.minor.patch` version.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            raw: format!("{major}.{minor}.{patch}"),
            core: semver::Version::new(major, minor, patch),
            suffix: String::new(),
        }
    }

    /// Parse a version string such as `1.4`, `1.4.1` or `1.4.1-RC1`.
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        let core_len = raw
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(raw.len());
        let (core_str, suffix) = raw.split_at(core_len);
        let core_str = core_str.trim_end_matches('.');

        if core_str.is_empty() {
            return Err(Error::MalformedVersion {
                version: raw.to_string(),
            });
        }

        let normalized = match core_str.split('.').count() {
            1 => format!("{core_str}.0.0"),
            2 => format!("{core_str}.0"),
            _ => core_str.to_string(),
        };
        let core = semver::Version::parse(&normalized).map_err(|source| Error::InvalidVersion {
            version: raw.to_string(),
            source,
        })?;

        Ok(Self {
            raw: raw.to_string(),
            core,
            suffix: suffix.to_string(),
        })
    }

    /// The version exactly as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn major(&self) -> u64 {
        self.core.major
    }

    pub fn minor(&self) -> u64 {
        self.core.minor
    }

    pub fn patch(&self) -> u64 {
        self.core.patch
    }

    /// Everything after the numeric core, including its leading separator.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Snapshot builds carry build metadata after a `+`.
    pub fn is_snapshot(&self) -> bool {
        is_snapshot_version(&self.raw)
    }
}

/// Whether a version string denotes a snapshot build.
pub fn is_snapshot_version(version: &str) -> bool {
    version.contains('+')
}

impl Ord for ToolVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.core
            .cmp(&other.core)
            .then_with(|| self.suffix.cmp(&other.suffix))
    }
}

impl PartialOrd for ToolVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// `1.4` and `1.4.0` are the same version.
impl PartialEq for ToolVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ToolVersion {}

impl Hash for ToolVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.core.hash(state);
        self.suffix.hash(state);
    }
}

impl FromStr for ToolVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ToolVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ToolVersion> for String {
    fn from(version: ToolVersion) -> Self {
        version.raw
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
