//! provision and clean-legacy commands

use colored::Colorize;
use sbtkit_plugins::{LegacyCleaner, ensure_plugins_written};
use sbtkit_version::RECOMMENDED_VERSION;

use crate::context::Context;
use crate::error::Result;

/// Write plugin descriptors into every meta directory
pub fn run_provision(ctx: &Context) -> Result<()> {
    if ctx.config.plugins_installed {
        println!(
            "{} plugins_installed is set, nothing to do",
            "skip".yellow().bold()
        );
        return Ok(());
    }

    let report = ensure_plugins_written(&ctx.workspace, &ctx.config.plugin_version, false)?;

    for path in &report.written {
        println!("{} {}", "wrote".green().bold(), path.display());
    }
    for path in &report.unchanged {
        println!("{} {}", "unchanged".dimmed(), path.display());
    }
    Ok(())
}

/// Remove the legacy global plugin for the workspace's sbt line
pub fn run_clean_legacy(ctx: &Context) -> Result<()> {
    let version = ctx.tool().version()?;
    let version = version
        .as_ref()
        .map(|v| v.as_str())
        .unwrap_or(RECOMMENDED_VERSION);

    let cleaner = LegacyCleaner::for_current_user(ctx.config.home_dir.as_deref())?;
    let path = cleaner.legacy_plugin_path(version);

    if cleaner.remove_legacy_global_plugin(version) {
        println!("{} {}", "removed".green().bold(), path);
    } else {
        println!("{} {}", "absent".dimmed(), path);
    }
    Ok(())
}
