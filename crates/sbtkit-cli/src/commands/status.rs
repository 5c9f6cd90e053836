//! Status, version and BSP support reporting

use colored::Colorize;
use sbtkit_version::VersionStatus;

use crate::context::Context;
use crate::error::Result;

/// Run the status command
pub fn run_status(ctx: &Context, json: bool) -> Result<()> {
    let tool = ctx.tool();
    let status = tool.status()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "sbt Workspace Status".bold());
    println!();

    println!("{}:      {}", "Path".dimmed(), status.workspace.display());
    if !status.detected {
        println!(
            "{}:  {}",
            "Detected".dimmed(),
            "no build.sbt or project/build.properties".yellow()
        );
    }

    let version = status.version.as_deref().unwrap_or("unknown");
    let classification = match status.status {
        Some(VersionStatus::SupportsBsp) => "supported, BSP".green(),
        Some(VersionStatus::Supported) => "supported".green(),
        Some(VersionStatus::Unsupported) => "too old".red(),
        None => "not pinned".yellow(),
    };
    println!("{}:   {} ({})", "Version".dimmed(), version.cyan(), classification);
    println!();

    println!("{}:", "Meta Directories".bold());
    for dir in &status.meta_directories {
        let marker = if status.provisioned.contains(dir) {
            "provisioned".green()
        } else {
            "missing metals.sbt".yellow()
        };
        println!("  {} {} ({})", "+".green(), dir.display(), marker);
    }

    Ok(())
}

/// Print the detected version, or "unknown"
pub fn run_version(ctx: &Context) -> Result<()> {
    match ctx.tool().version()? {
        Some(version) => println!("{version}"),
        None => println!("unknown"),
    }
    Ok(())
}

/// Print `true` or `false`; both exit successfully
pub fn run_supports_bsp(ctx: &Context) -> Result<()> {
    println!("{}", ctx.tool().supports_bsp());
    Ok(())
}
