//! Command implementations for sbtkit-cli

pub mod args;
pub mod provision;
pub mod status;

pub use args::{run_bsp_args, run_install_args};
pub use provision::{run_clean_legacy, run_provision};
pub use status::{run_status, run_supports_bsp, run_version};
