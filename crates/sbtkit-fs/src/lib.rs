//! Filesystem primitives for sbtkit
//!
//! Provides normalized path handling, atomic and idempotent writes, and
//! format-agnostic configuration loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::SbtPath;
pub use error::{Error, Result};
pub use io::WriteOutcome;
pub use path::NormalizedPath;
