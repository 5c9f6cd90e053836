//! Shared test utilities for the sbtkit workspace.
//!
//! A dev-dependency only; never published.
//!
//! - [`workspace`]: [`TestWorkspace`](workspace::TestWorkspace) builder for
//!   sbt project layouts and a fake home directory

pub mod workspace;

pub use workspace::TestWorkspace;
